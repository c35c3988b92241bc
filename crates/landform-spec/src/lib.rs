//! Landform Parameter Library
//!
//! Types, enumerations, and validation for landscape generation parameters.
//! A parameter struct is an immutable, serializable description of one
//! generation request; the `landform-terrain` crate consumes it.
//!
//! # Example
//!
//! ```
//! use landform_spec::{LandscapeParams, NoiseType, Basis, validate_params};
//!
//! let params = LandscapeParams {
//!     noise_type: NoiseType::RidgedMultiFractal,
//!     basis: Basis::VoronoiF1,
//!     seed: 42,
//!     ..Default::default()
//! };
//!
//! assert!(validate_params(&params).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`enums`]: compact sum types with name-or-index (de)serialization
//! - [`params`]: the `LandscapeParams` struct
//! - [`validation`]: parameter validation
//! - [`error`]: error, warning, and validation result types

pub mod enums;
pub mod error;
pub mod params;
pub mod validation;

pub use enums::{
    Basis, Falloff, HardNoise, MarbleBias, MarbleSharp, MarbleShape, MeshKind, NoiseType,
    ParamEnum, SlopeMode, StrataType,
};
pub use error::{
    ParamError, ParamWarning, ValidationResult, MAX_DEPTH, MIN_SIZE, MIN_SUBDIVISION,
};
pub use params::LandscapeParams;
pub use validation::validate_params;
