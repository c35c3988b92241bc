//! Landform Terrain Engine
//!
//! Deterministic landscape generation: a scalar height field composed from
//! primitive noise bases and fractal kernels, post-processed (invert/scale,
//! edge falloff, stratification, clamp) and tessellated into a grid or a
//! displaced UV sphere. Same parameters always produce the same mesh,
//! across runs and across processes.
//!
//! # Entry points
//!
//! - [`evaluate`]: composer output for one point
//! - [`generate`]: full tessellation into vertex/face arrays
//! - [`slope_weights`]: per-vertex weights from an existing mesh
//!
//! # Example
//!
//! ```
//! use landform_spec::{LandscapeParams, NoiseType};
//! use landform_terrain::generate;
//!
//! let params = LandscapeParams {
//!     noise_type: NoiseType::RidgedMultiFractal,
//!     sub_x: 16,
//!     sub_y: 16,
//!     seed: 42,
//!     ..Default::default()
//! };
//!
//! let mesh = generate(&params).unwrap();
//! assert_eq!(mesh.terrain.vertices.len(), 16 * 16);
//! ```
//!
//! # Concurrency
//!
//! All kernels are pure and stateless; the tessellator samples lattice rows
//! in parallel and writes into preallocated row-major slots, so output
//! ordering is independent of scheduling.

mod composer;
mod error;
mod mesh;
mod noise;
mod post;
mod rng;
mod slope;

pub use error::{TerrainError, TerrainResult};
pub use mesh::{generate, water_plane, Face, LandscapeMesh, MeshBuffers};
pub use noise::basis_value;
pub use rng::DeterministicRng;
pub use slope::{slope_weights, SlopeWeights};

use glam::DVec3;
use landform_spec::LandscapeParams;

use composer::Sampler;

/// Evaluates the composer at a single world-space point: kernel value,
/// height transform, falloff (grid only), stratification, and clamp.
pub fn evaluate(params: &LandscapeParams, point: [f64; 3]) -> TerrainResult<f64> {
    if let Err(errors) = landform_spec::validate_params(params).into_result() {
        if let Some(first) = errors.into_iter().next() {
            return Err(TerrainError::from(first));
        }
    }
    for (component, value) in [("x", point[0]), ("y", point[1]), ("z", point[2])] {
        if !value.is_finite() {
            return Err(TerrainError::NonFinitePoint { component });
        }
    }

    Ok(Sampler::new(params).height(DVec3::from(point)))
}
