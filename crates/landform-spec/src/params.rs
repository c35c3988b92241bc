//! The landscape parameter model.

use serde::{Deserialize, Serialize};

use crate::enums::{
    Basis, Falloff, HardNoise, MarbleBias, MarbleSharp, MarbleShape, MeshKind, NoiseType,
    StrataType,
};

/// Parameters for one landscape generation.
///
/// The struct is constructed once and never mutated during generation;
/// identical parameters always produce identical output. Field defaults
/// match a small, flat-ish multifractal grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandscapeParams {
    // -- geometry -----------------------------------------------------------
    /// Output topology: planar grid or displaced UV sphere.
    pub kind: MeshKind,
    /// Grid columns (vertices along x). Minimum 4.
    pub sub_x: u32,
    /// Grid rows (vertices along y). Minimum 4.
    pub sub_y: u32,
    /// Mesh extent along x.
    pub size_x: f64,
    /// Mesh extent along y.
    pub size_y: f64,
    /// Sphere diameter; also divides the radial displacement.
    pub size: f64,
    /// Emit two triangles per quad instead of one quad.
    pub triangulate: bool,
    /// Translate the finished mesh by `translate`.
    pub at_cursor: bool,
    /// Host-supplied origin applied after tessellation when `at_cursor`.
    pub translate: [f64; 3],

    // -- sampling -----------------------------------------------------------
    /// 0 means no randomization; any nonzero seed deterministically
    /// perturbs the sampling origin.
    pub seed: u32,
    /// User offset of the sampling origin.
    pub offset: [f64; 3],
    /// Global noise scale.
    pub noise_size: f64,
    /// Per-axis noise scale, multiplied with `noise_size`.
    pub noise_size_xyz: [f64; 3],

    // -- noise type ---------------------------------------------------------
    /// Composer kernel.
    pub noise_type: NoiseType,
    /// Primitive basis used by most kernels.
    pub basis: Basis,
    /// Secondary basis used by the distorted-domain kernels.
    pub vl_basis: Basis,

    // -- noise shape --------------------------------------------------------
    /// Octave count for fractal kernels (0..=16).
    pub depth: u32,
    /// Fractal dimension H (0.01..2).
    pub dimension: f64,
    /// Octave frequency gap (0.01..6).
    pub lacunarity: f64,
    /// Fractal offset consumed by the hetero/ridged/hybrid kernels (0.01..6).
    pub fractal_offset: f64,
    /// Fractal gain consumed by the ridged/hybrid kernels (0.01..6).
    pub gain: f64,
    /// Distortion strength for the displaced kernels.
    pub distortion: f64,
    /// Turbulence amplitude scale per octave.
    pub amplitude: f64,
    /// Turbulence frequency scale per octave.
    pub frequency: f64,
    /// Soft or hard (billowy) turbulence octaves.
    pub hard_noise: HardNoise,
    /// Periodic fold for marble noise.
    pub marble_bias: MarbleBias,
    /// Sharpness filter for marble noise.
    pub marble_sharp: MarbleSharp,
    /// Shape function for marble noise.
    pub marble_shape: MarbleShape,

    // -- height -------------------------------------------------------------
    /// Height scale applied to the raw scalar.
    pub height: f64,
    /// Invert the raw scalar before scaling.
    pub height_invert: bool,
    /// Constant added after scaling.
    pub height_offset: f64,
    /// Upper clamp for the final height.
    pub maximum: f64,
    /// Lower clamp for the final height.
    pub minimum: f64,

    // -- edges (grid only) --------------------------------------------------
    /// Boundary attenuation mode.
    pub falloff: Falloff,
    /// Height the boundary is attenuated toward ("sea level").
    pub edge_level: f64,
    /// Falloff exponent along x.
    pub falloff_x: f64,
    /// Falloff exponent along y.
    pub falloff_y: f64,

    // -- strata -------------------------------------------------------------
    /// Terracing mode.
    pub strata_type: StrataType,
    /// Layer count / frequency (> 0).
    pub strata: f64,

    // -- water --------------------------------------------------------------
    /// Also emit a flat water plane mesh.
    pub water_plane: bool,
    /// Height of the water plane.
    pub water_level: f64,
}

impl Default for LandscapeParams {
    fn default() -> Self {
        Self {
            kind: MeshKind::Grid,
            sub_x: 64,
            sub_y: 64,
            size_x: 2.0,
            size_y: 2.0,
            size: 2.0,
            triangulate: false,
            at_cursor: false,
            translate: [0.0; 3],
            seed: 0,
            offset: [0.0; 3],
            noise_size: 1.0,
            noise_size_xyz: [1.0; 3],
            noise_type: NoiseType::MultiFractal,
            basis: Basis::BlenderOriginal,
            vl_basis: Basis::BlenderOriginal,
            depth: 8,
            dimension: 1.0,
            lacunarity: 2.0,
            fractal_offset: 1.0,
            gain: 1.0,
            distortion: 1.0,
            amplitude: 0.5,
            frequency: 2.0,
            hard_noise: HardNoise::Soft,
            marble_bias: MarbleBias::Sin,
            marble_sharp: MarbleSharp::Soft,
            marble_shape: MarbleShape::Default,
            height: 0.5,
            height_invert: false,
            height_offset: 0.0,
            maximum: 1.0,
            minimum: -1.0,
            falloff: Falloff::None,
            edge_level: 0.0,
            falloff_x: 4.0,
            falloff_y: 4.0,
            strata_type: StrataType::None,
            strata: 5.0,
            water_plane: false,
            water_level: 0.0,
        }
    }
}

impl LandscapeParams {
    /// Effective per-axis noise scale divisor.
    pub fn noise_scale(&self) -> [f64; 3] {
        [
            self.noise_size * self.noise_size_xyz[0],
            self.noise_size * self.noise_size_xyz[1],
            self.noise_size * self.noise_size_xyz[2],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_round_trip() {
        let params = LandscapeParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: LandscapeParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let json = r#"{
            "kind": "sphere",
            "noise_type": 1,
            "basis": "voronoi_f1",
            "seed": 7
        }"#;
        let params: LandscapeParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.kind, MeshKind::Sphere);
        assert_eq!(params.noise_type, NoiseType::RidgedMultiFractal);
        assert_eq!(params.basis, Basis::VoronoiF1);
        assert_eq!(params.seed, 7);
        assert_eq!(params.sub_x, 64);
        assert_eq!(params.lacunarity, 2.0);
    }

    #[test]
    fn test_noise_scale_combines_axes() {
        let params = LandscapeParams {
            noise_size: 2.0,
            noise_size_xyz: [1.0, 0.5, 4.0],
            ..Default::default()
        };
        assert_eq!(params.noise_scale(), [2.0, 1.0, 8.0]);
    }
}
