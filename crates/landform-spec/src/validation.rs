//! Parameter validation.

use crate::enums::{Falloff, MeshKind, StrataType};
use crate::error::{ParamError, ParamWarning, ValidationResult, MAX_DEPTH, MIN_SIZE, MIN_SUBDIVISION};
use crate::params::LandscapeParams;

/// Near-zero threshold for ratio warnings.
const RATIO_EPSILON: f64 = 1e-6;

/// Validates a parameter struct, collecting every error and warning.
pub fn validate_params(params: &LandscapeParams) -> ValidationResult {
    let mut result = ValidationResult::default();

    if params.sub_x < MIN_SUBDIVISION {
        result.add_error(ParamError::SubdivisionTooSmall {
            axis: "sub_x",
            value: params.sub_x,
        });
    }
    if params.sub_y < MIN_SUBDIVISION {
        result.add_error(ParamError::SubdivisionTooSmall {
            axis: "sub_y",
            value: params.sub_y,
        });
    }

    check_size(&mut result, "size_x", params.size_x);
    check_size(&mut result, "size_y", params.size_y);
    check_size(&mut result, "size", params.size);
    check_size(&mut result, "noise_size", params.noise_size);
    check_size(&mut result, "noise_size_x", params.noise_size_xyz[0]);
    check_size(&mut result, "noise_size_y", params.noise_size_xyz[1]);
    check_size(&mut result, "noise_size_z", params.noise_size_xyz[2]);

    for (field, value) in float_fields(params) {
        if !value.is_finite() {
            result.add_error(ParamError::NonFinite { field });
        }
    }

    if params.minimum > params.maximum {
        result.add_error(ParamError::InvertedClampRange {
            minimum: params.minimum,
            maximum: params.maximum,
        });
    }

    if params.depth > MAX_DEPTH {
        result.add_error(ParamError::DepthTooDeep(params.depth));
    }

    if params.strata_type != StrataType::None {
        if !(params.strata > 0.0) {
            result.add_error(ParamError::StrataNotPositive(params.strata));
        } else if params.height.is_finite() {
            let ratio = if params.height.abs() < RATIO_EPSILON {
                0.0
            } else {
                params.strata / params.height
            };
            if ratio.abs() < RATIO_EPSILON {
                result.add_warning(ParamWarning::StrataRatioNearZero(ratio));
            }
        }
    }

    if params.kind == MeshKind::Grid && params.falloff != Falloff::None {
        let extent = params.size_x.min(params.size_y);
        if extent.is_finite() && extent < MIN_SIZE * 10.0 {
            result.add_warning(ParamWarning::DegenerateFalloff(extent));
        }
    }

    result
}

fn check_size(result: &mut ValidationResult, field: &'static str, value: f64) {
    if !value.is_finite() {
        // Reported by the non-finite scan.
        return;
    }
    if value <= MIN_SIZE {
        result.add_error(ParamError::SizeTooSmall { field, value });
    }
}

fn float_fields(params: &LandscapeParams) -> Vec<(&'static str, f64)> {
    vec![
        ("size_x", params.size_x),
        ("size_y", params.size_y),
        ("size", params.size),
        ("translate", params.translate.iter().copied().sum()),
        ("offset", params.offset.iter().copied().sum()),
        ("noise_size", params.noise_size),
        (
            "noise_size_xyz",
            params.noise_size_xyz.iter().copied().sum(),
        ),
        ("dimension", params.dimension),
        ("lacunarity", params.lacunarity),
        ("fractal_offset", params.fractal_offset),
        ("gain", params.gain),
        ("distortion", params.distortion),
        ("amplitude", params.amplitude),
        ("frequency", params.frequency),
        ("height", params.height),
        ("height_offset", params.height_offset),
        ("maximum", params.maximum),
        ("minimum", params.minimum),
        ("edge_level", params.edge_level),
        ("falloff_x", params.falloff_x),
        ("falloff_y", params.falloff_y),
        ("strata", params.strata),
        ("water_level", params.water_level),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        let result = validate_params(&LandscapeParams::default());
        assert!(result.is_ok(), "errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_rejects_small_subdivision() {
        let params = LandscapeParams {
            sub_x: 2,
            ..Default::default()
        };
        let result = validate_params(&params);
        assert_eq!(
            result.errors,
            vec![ParamError::SubdivisionTooSmall {
                axis: "sub_x",
                value: 2
            }]
        );
    }

    #[test]
    fn test_rejects_non_finite_and_tiny_size() {
        let params = LandscapeParams {
            size_x: 0.0,
            lacunarity: f64::NAN,
            height: f64::INFINITY,
            ..Default::default()
        };
        let result = validate_params(&params);
        assert!(result
            .errors
            .contains(&ParamError::SizeTooSmall {
                field: "size_x",
                value: 0.0
            }));
        assert!(result
            .errors
            .contains(&ParamError::NonFinite { field: "lacunarity" }));
        assert!(result
            .errors
            .contains(&ParamError::NonFinite { field: "height" }));
    }

    #[test]
    fn test_rejects_inverted_clamp_and_deep_octaves() {
        let params = LandscapeParams {
            minimum: 2.0,
            maximum: -2.0,
            depth: 17,
            ..Default::default()
        };
        let result = validate_params(&params);
        assert!(result.errors.contains(&ParamError::InvertedClampRange {
            minimum: 2.0,
            maximum: -2.0
        }));
        assert!(result.errors.contains(&ParamError::DepthTooDeep(17)));
    }

    #[test]
    fn test_strata_checks() {
        let bad = LandscapeParams {
            strata_type: StrataType::Quantize,
            strata: 0.0,
            ..Default::default()
        };
        assert!(!validate_params(&bad).is_ok());

        let warned = LandscapeParams {
            strata_type: StrataType::Quantize,
            strata: 1e-8,
            height: 1.0,
            ..Default::default()
        };
        let result = validate_params(&warned);
        assert!(result.is_ok());
        assert_eq!(result.warnings.len(), 1);
    }
}
