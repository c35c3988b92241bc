//! Slope-to-weight: per-vertex weights derived from normals.

use glam::DVec3;
use landform_spec::SlopeMode;

use crate::error::{TerrainError, TerrainResult};

/// Per-vertex slope weights with an optional threshold selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SlopeWeights {
    /// One weight per vertex, in [-1, 1].
    pub weights: Vec<f64>,
    /// Vertices whose weight exceeds the threshold, when one was given.
    pub selected: Option<Vec<bool>>,
}

/// Computes a scalar weight per vertex from its position and normal.
///
/// Planar mode uses the z component of the normal; spherical mode compares
/// the normal against the radial direction. Weights are clamped to [-1, 1]
/// so degenerate normals cannot escape the documented range. Pure function;
/// the inputs are never mutated.
pub fn slope_weights(
    positions: &[[f64; 3]],
    normals: &[[f64; 3]],
    mode: SlopeMode,
    threshold: Option<f64>,
) -> TerrainResult<SlopeWeights> {
    if positions.len() != normals.len() {
        return Err(TerrainError::SlopeLengthMismatch {
            positions: positions.len(),
            normals: normals.len(),
        });
    }

    let weights: Vec<f64> = positions
        .iter()
        .zip(normals.iter())
        .map(|(p, n)| {
            let raw = match mode {
                SlopeMode::Planar => n[2],
                SlopeMode::Spherical => {
                    let p = DVec3::from(*p).normalize_or_zero();
                    let n = DVec3::from(*n).normalize_or_zero();
                    p.dot(n) * 2.0 - 1.0
                }
            };
            raw.clamp(-1.0, 1.0)
        })
        .collect();

    let selected = threshold.map(|t| weights.iter().map(|&w| w > t).collect());

    Ok(SlopeWeights { weights, selected })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_weight_is_normal_z() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
        let normals = [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0]];
        let result = slope_weights(&positions, &normals, SlopeMode::Planar, None).unwrap();
        assert_eq!(result.weights, vec![1.0, 0.0]);
        assert!(result.selected.is_none());
    }

    #[test]
    fn test_spherical_weight_peaks_on_radial_normals() {
        let positions = [[0.0, 0.0, 2.0], [2.0, 0.0, 0.0]];
        // First normal radial, second tangential.
        let normals = [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0]];
        let result = slope_weights(&positions, &normals, SlopeMode::Spherical, None).unwrap();
        assert!((result.weights[0] - 1.0).abs() < 1e-12);
        assert!((result.weights[1] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weights_stay_in_range() {
        let positions = [[1.0, 1.0, 1.0], [0.0, 0.0, 0.0], [-3.0, 2.0, 0.5]];
        let normals = [[0.0, 0.0, 5.0], [0.0, 0.0, 0.0], [-1.0, -1.0, -1.0]];
        for mode in [SlopeMode::Planar, SlopeMode::Spherical] {
            let result = slope_weights(&positions, &normals, mode, None).unwrap();
            for w in result.weights {
                assert!((-1.0..=1.0).contains(&w));
            }
        }
    }

    #[test]
    fn test_threshold_selects_above() {
        let positions = [[0.0, 0.0, 0.0]; 3];
        let normals = [[0.0, 0.0, 0.9], [0.0, 0.0, 0.5], [0.0, 0.0, -0.2]];
        let result =
            slope_weights(&positions, &normals, SlopeMode::Planar, Some(0.5)).unwrap();
        assert_eq!(result.selected, Some(vec![true, false, false]));
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let positions = [[0.0, 0.0, 0.0]; 2];
        let normals = [[0.0, 0.0, 1.0]];
        let err = slope_weights(&positions, &normals, SlopeMode::Planar, None).unwrap_err();
        assert_eq!(
            err,
            TerrainError::SlopeLengthMismatch {
                positions: 2,
                normals: 1
            }
        );
    }
}
