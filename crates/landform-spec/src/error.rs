//! Error and warning types for parameter validation.

use thiserror::Error;

/// Minimum subdivision along either grid axis.
pub const MIN_SUBDIVISION: u32 = 4;

/// Smallest accepted mesh or noise size.
pub const MIN_SIZE: f64 = 1e-6;

/// Maximum octave depth accepted by the fractal kernels.
pub const MAX_DEPTH: u32 = 16;

/// A parameter error. Reported synchronously; generation produces no
/// partial result when any of these is present.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// Subdivision below the supported minimum.
    #[error("subdivision {axis} is {value}, must be at least {MIN_SUBDIVISION}")]
    SubdivisionTooSmall { axis: &'static str, value: u32 },

    /// Mesh or noise size at or below epsilon.
    #[error("size {field} is {value}, must be greater than {MIN_SIZE}")]
    SizeTooSmall { field: &'static str, value: f64 },

    /// NaN or infinity in a float field.
    #[error("field {field} is not finite")]
    NonFinite { field: &'static str },

    /// Clamp range with minimum above maximum.
    #[error("minimum {minimum} exceeds maximum {maximum}")]
    InvertedClampRange { minimum: f64, maximum: f64 },

    /// Strata count must be positive.
    #[error("strata count {0} must be greater than zero")]
    StrataNotPositive(f64),

    /// Octave depth beyond the supported maximum.
    #[error("octave depth {0} exceeds the supported maximum of {MAX_DEPTH}")]
    DepthTooDeep(u32),
}

/// A non-fatal validation warning. Generation continues; the engine
/// substitutes a safe fallback where the warned condition is hit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamWarning {
    /// `strata / height` is near zero; stratified heights fall back to
    /// the configured minimum.
    #[error("strata ratio {0} is near zero; stratified heights fall back to minimum")]
    StrataRatioNearZero(f64),

    /// Radial falloff with a degenerate mesh size produces thin faces.
    #[error("falloff with degenerate size {0} may produce a non-manifold mesh")]
    DegenerateFalloff(f64),
}

/// Outcome of validating a parameter struct: collected errors plus
/// warnings, so a host can report everything at once.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Errors; non-empty means the parameters are rejected.
    pub errors: Vec<ParamError>,
    /// Non-fatal warnings.
    pub warnings: Vec<ParamWarning>,
}

impl ValidationResult {
    /// Records an error.
    pub fn add_error(&mut self, error: ParamError) {
        self.errors.push(error);
    }

    /// Records a warning.
    pub fn add_warning(&mut self, warning: ParamWarning) {
        self.warnings.push(warning);
    }

    /// True when no errors were recorded.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts to a `Result`, keeping warnings on success.
    pub fn into_result(self) -> Result<Vec<ParamWarning>, Vec<ParamError>> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}
