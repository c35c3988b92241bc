//! Height post-processing: scale/invert, edge falloff, stratification,
//! clamping.

use std::f64::consts::PI;

use landform_spec::{Falloff, LandscapeParams, StrataType};

/// Threshold below which the strata ratio counts as a division by zero.
const RATIO_EPSILON: f64 = 1e-6;

/// Scales the raw scalar by height, optionally inverting it first, and adds
/// the height offset. With all other parameters equal, the inverted and
/// non-inverted results sum to `height + 2 * height_offset`.
pub(crate) fn apply_height(params: &LandscapeParams, value: f64) -> f64 {
    if params.height_invert {
        (1.0 - value) * params.height + params.height_offset
    } else {
        value * params.height + params.height_offset
    }
}

/// Attenuates the height toward `edge_level` near the grid boundary.
/// Outside the falloff radius the height is forced to `edge_level` exactly,
/// so boundary vertices always sit at sea level.
pub(crate) fn apply_falloff(params: &LandscapeParams, value: f64, x: f64, y: f64) -> f64 {
    let ratio_x = x.abs() * 2.0 / params.size_x;
    let ratio_y = y.abs() * 2.0 / params.size_y;

    let dist = match params.falloff {
        Falloff::None => return value,
        Falloff::Y => ratio_y.powf(params.falloff_y).sqrt(),
        Falloff::X => ratio_x.powf(params.falloff_x).sqrt(),
        Falloff::Xy => (ratio_x.powf(params.falloff_x) + ratio_y.powf(params.falloff_y)).sqrt(),
    };

    let mut v = value - params.edge_level;
    if dist < 1.0 {
        let d = dist * dist * (3.0 - 2.0 * dist);
        v -= v * d;
    } else {
        v = 0.0;
    }
    v + params.edge_level
}

/// Applies the configured terracing function. A near-zero `strata / height`
/// ratio falls back to the configured minimum instead of dividing.
pub(crate) fn apply_strata(params: &LandscapeParams, value: f64) -> f64 {
    if params.strata_type == StrataType::None {
        return value;
    }

    if params.height.abs() < RATIO_EPSILON {
        return params.minimum;
    }
    let ratio = params.strata / params.height;
    if ratio.abs() < RATIO_EPSILON {
        return params.minimum;
    }

    match params.strata_type {
        StrataType::None => value,
        StrataType::Smooth => {
            let s = ratio * 2.0;
            value + (value * s * PI).sin() * (0.1 / s * PI)
        }
        StrataType::SharpSub => value - ((value * ratio * PI).sin() * (0.1 / ratio * PI)).abs(),
        StrataType::SharpAdd => value + ((value * ratio * PI).sin() * (0.1 / ratio * PI)).abs(),
        StrataType::Quantize => (value * ratio).floor() / ratio,
        StrataType::QuantizeMix => {
            let quantized = (value * ratio).floor() / ratio;
            quantized * 0.5 + value * 0.5
        }
    }
}

/// Final clamp into [minimum, maximum].
pub(crate) fn clamp_height(params: &LandscapeParams, value: f64) -> f64 {
    value.min(params.maximum).max(params.minimum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> LandscapeParams {
        LandscapeParams::default()
    }

    #[test]
    fn test_height_inversion_law() {
        let normal = LandscapeParams {
            height: 0.8,
            height_offset: 0.3,
            ..params()
        };
        let inverted = LandscapeParams {
            height_invert: true,
            ..normal.clone()
        };
        for v in [-0.7, 0.0, 0.31, 1.0] {
            let sum = apply_height(&normal, v) + apply_height(&inverted, v);
            let expected = normal.height + 2.0 * normal.height_offset;
            assert!((sum - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_falloff_none_is_identity() {
        let p = params();
        assert_eq!(apply_falloff(&p, 0.7, 1.0, 1.0), 0.7);
    }

    #[test]
    fn test_falloff_forces_edge_level_at_boundary() {
        let p = LandscapeParams {
            falloff: Falloff::Xy,
            edge_level: 0.25,
            ..params()
        };
        // Boundary: |x| = size_x / 2.
        let v = apply_falloff(&p, 0.9, p.size_x / 2.0, 0.0);
        assert!((v - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_falloff_keeps_center_untouched() {
        let p = LandscapeParams {
            falloff: Falloff::Xy,
            edge_level: 0.0,
            ..params()
        };
        let v = apply_falloff(&p, 0.9, 0.0, 0.0);
        assert!((v - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_quantize_snaps_to_layers() {
        let p = LandscapeParams {
            strata_type: StrataType::Quantize,
            strata: 4.0,
            height: 1.0,
            ..params()
        };
        for v in [-0.93, -0.2, 0.0, 0.41, 0.99] {
            let q = apply_strata(&p, v);
            let scaled = q * 4.0;
            assert!((scaled - scaled.round()).abs() < 1e-9, "{v} -> {q}");
        }
    }

    #[test]
    fn test_quantize_mix_blends_half() {
        let p = LandscapeParams {
            strata_type: StrataType::QuantizeMix,
            strata: 4.0,
            height: 1.0,
            ..params()
        };
        let quantize_only = LandscapeParams {
            strata_type: StrataType::Quantize,
            ..p.clone()
        };
        let v = 0.37;
        let expected = apply_strata(&quantize_only, v) * 0.5 + v * 0.5;
        assert!((apply_strata(&p, v) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_near_zero_ratio_falls_back_to_minimum() {
        let p = LandscapeParams {
            strata_type: StrataType::Smooth,
            strata: 1e-8,
            height: 1.0,
            minimum: -0.5,
            ..params()
        };
        assert_eq!(apply_strata(&p, 0.7), -0.5);

        let zero_height = LandscapeParams {
            strata: 4.0,
            height: 0.0,
            ..p
        };
        assert_eq!(apply_strata(&zero_height, 0.7), -0.5);
    }

    #[test]
    fn test_clamp_bounds() {
        let p = LandscapeParams {
            minimum: -0.25,
            maximum: 0.75,
            ..params()
        };
        assert_eq!(clamp_height(&p, 3.0), 0.75);
        assert_eq!(clamp_height(&p, -3.0), -0.25);
        assert_eq!(clamp_height(&p, 0.5), 0.5);
    }
}
