//! Error types for the terrain engine.

use landform_spec::ParamError;
use thiserror::Error;

/// Result type for terrain operations.
pub type TerrainResult<T> = Result<T, TerrainError>;

/// Errors that can occur during landscape generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    /// A parameter failed validation.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// A sample point contained NaN or infinity.
    #[error("sample point component {component} is not finite")]
    NonFinitePoint { component: &'static str },

    /// Slope weight inputs must pair one normal with every position.
    #[error("slope weight input length mismatch: {positions} positions vs {normals} normals")]
    SlopeLengthMismatch { positions: usize, normals: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_error_passes_through() {
        let err: TerrainError = ParamError::DepthTooDeep(20).into();
        assert_eq!(
            err.to_string(),
            "octave depth 20 exceeds the supported maximum of 16"
        );
    }

    #[test]
    fn test_slope_mismatch_display() {
        let err = TerrainError::SlopeLengthMismatch {
            positions: 4,
            normals: 3,
        };
        assert_eq!(
            err.to_string(),
            "slope weight input length mismatch: 4 positions vs 3 normals"
        );
    }
}
