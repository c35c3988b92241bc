//! The noise composer: domain transform, kernel dispatch, and height
//! post-processing for a single sample point.

use std::f64::consts::PI;

use glam::DVec3;
use landform_spec::{
    LandscapeParams, MarbleBias, MarbleSharp, MarbleShape, MeshKind, NoiseType,
};

use crate::noise::{
    basis_value, fractal, hetero_terrain, hybrid_multi_fractal, multi_fractal,
    ridged_multi_fractal, turbulence, turbulence_vector, variable_lacunarity,
};
use crate::post;
use crate::rng::DeterministicRng;

/// Scale applied to the randomized origin before halving.
const SEED_ORIGIN_SCALE: f64 = 10_000.0;

/// Resolved per-generation sampling state. Construction is cheap; the
/// struct is immutable and safe to share across sampling threads.
pub(crate) struct Sampler<'a> {
    params: &'a LandscapeParams,
    origin: DVec3,
    inv_scale: DVec3,
}

impl<'a> Sampler<'a> {
    pub(crate) fn new(params: &'a LandscapeParams) -> Self {
        let user_offset = DVec3::from(params.offset);
        let origin = if params.seed == 0 {
            user_offset
        } else {
            // A nonzero seed perturbs the origin by half of a scaled
            // pseudo-random unit vector, on top of the user offset.
            let mut rng = DeterministicRng::new(params.seed);
            user_offset + rng.unit_vector() * SEED_ORIGIN_SCALE * 0.5
        };

        let scale = DVec3::from(params.noise_scale());
        Self {
            params,
            origin,
            inv_scale: scale.recip(),
        }
    }

    /// Final height at a world-space point: kernel value, height transform,
    /// grid falloff, stratification, clamp.
    pub(crate) fn height(&self, point: DVec3) -> f64 {
        let n = point * self.inv_scale + self.origin;
        let mut value = self.kernel_value(n);

        value = post::apply_height(self.params, value);
        if self.params.kind == MeshKind::Grid {
            value = post::apply_falloff(self.params, value, point.x, point.y);
        }
        value = post::apply_strata(self.params, value);
        post::clamp_height(self.params, value)
    }

    /// Raw composer output before any post-processing.
    fn kernel_value(&self, n: DVec3) -> f64 {
        let p = self.params;
        let basis = p.basis;
        let hard = p.hard_noise.is_hard();

        match p.noise_type {
            NoiseType::MultiFractal => {
                0.5 * multi_fractal(n, p.dimension, p.lacunarity, p.depth, basis)
            }
            NoiseType::RidgedMultiFractal => {
                0.5 * ridged_multi_fractal(
                    n,
                    p.dimension,
                    p.lacunarity,
                    p.depth,
                    p.fractal_offset,
                    p.gain,
                    basis,
                )
            }
            NoiseType::HybridMultiFractal => {
                0.5 * hybrid_multi_fractal(
                    n,
                    p.dimension,
                    p.lacunarity,
                    p.depth,
                    p.fractal_offset,
                    p.gain,
                    basis,
                )
            }
            NoiseType::HeteroTerrain => {
                0.25 * hetero_terrain(n, p.dimension, p.lacunarity, p.depth, p.fractal_offset, basis)
            }
            NoiseType::Fractal => fractal(n, p.dimension, p.lacunarity, p.depth, basis),
            NoiseType::TurbulenceVector => {
                turbulence_vector(n, p.depth, hard, basis, p.amplitude, p.frequency).x
            }
            NoiseType::VariableLacunarity => {
                variable_lacunarity(n, p.distortion, basis, p.vl_basis)
            }
            NoiseType::MarbleNoise => self.marble(n),
            NoiseType::ShatteredHterrain => self.shattered_hterrain(n),
            NoiseType::StrataHterrain => self.strata_hterrain(n),
            NoiseType::AntTurbulence => self.ant_turbulence(n),
            NoiseType::VlNoiseTurbulence => self.vl_noise_turbulence(n),
            NoiseType::VlHterrain => self.vl_hterrain(n),
            NoiseType::DistortedHeteroTerrain => self.distorted_hetero_terrain(n),
            NoiseType::DoubleMultiFractal => self.double_multi_fractal(n),
            NoiseType::SlickRock => self.slick_rock(n),
            NoiseType::PlanetNoise => self.planet_noise(n),
        }
    }

    /// Shape-modulated marble: a spatial shape term plus scaled turbulence,
    /// folded through the bias wave and a sharpness filter. Output in [0, 1].
    fn marble(&self, n: DVec3) -> f64 {
        let p = self.params;

        let shape = match p.marble_shape {
            MarbleShape::Default => (n.x + n.y + n.z) / 3.0,
            MarbleShape::Ring => n.length(),
            MarbleShape::Swirl => n.y.atan2(n.x) * (3.0 / PI) + n.truncate().length(),
            MarbleShape::Bumps => ((n.x * PI).cos() + (n.y * PI).cos() + (n.z * PI).cos()) / 3.0,
            MarbleShape::Wave => ((n.x + n.y) * PI).sin() * 0.5,
            MarbleShape::YGradient => n.y,
            MarbleShape::XGradient => n.x,
            MarbleShape::ZGradient => n.z,
        };

        let turb = p.distortion
            * turbulence(
                n,
                p.depth,
                p.hard_noise.is_hard(),
                p.basis,
                p.amplitude,
                p.frequency,
            );

        let folded = match p.marble_bias {
            MarbleBias::Sin => 0.5 + 0.5 * ((shape + turb) * PI).sin(),
            MarbleBias::Cos => 0.5 + 0.5 * ((shape + turb) * PI).cos(),
            MarbleBias::Tri => {
                let saw = ((shape + turb) * 0.5).rem_euclid(1.0);
                1.0 - (2.0 * saw - 1.0).abs()
            }
            MarbleBias::Saw => ((shape + turb) * 0.5).rem_euclid(1.0),
        };

        match p.marble_sharp {
            MarbleSharp::Soft => folded,
            MarbleSharp::Sharp => folded.sqrt(),
            MarbleSharp::Sharper => folded.sqrt().sqrt(),
            MarbleSharp::SoftInv => 1.0 - folded,
            MarbleSharp::SharpInv => 1.0 - folded.sqrt(),
            MarbleSharp::SharperInv => 1.0 - folded.sqrt().sqrt(),
        }
    }

    /// Hetero-terrain shattered by a turbulence-displaced second pass.
    fn shattered_hterrain(&self, n: DVec3) -> f64 {
        let p = self.params;
        let d = (turbulence(n, 6, false, p.basis, 0.5, 2.0) * 0.5 + 0.5) * p.distortion * 0.5;
        let t1 = turbulence(DVec3::new(n.x + d, n.y + d, n.z), 0, false, p.basis, 0.5, 2.0) + 0.5;
        let t2 = hetero_terrain(
            n * 2.0,
            p.dimension,
            p.lacunarity,
            p.depth,
            p.fractal_offset,
            p.basis,
        ) * 0.5;
        (t1 * t2 + t2 * 0.5) * 0.5
    }

    /// Hetero-terrain with a fine sine layering term driven by distortion.
    fn strata_hterrain(&self, n: DVec3) -> f64 {
        let p = self.params;
        let value = hetero_terrain(
            n,
            p.dimension,
            p.lacunarity,
            p.depth,
            p.fractal_offset,
            p.basis,
        ) * 0.5;
        let frequency = p.distortion * 5.0 * 155.0;
        let steps = (value * frequency).sin() * (0.000001 * frequency);
        value * 0.5 + steps * 0.5
    }

    /// Double turbulence with fixed probe offsets; see DESIGN notes for the
    /// choice of constants. Output in [0, 1] for soft noise.
    fn ant_turbulence(&self, n: DVec3) -> f64 {
        let p = self.params;
        let hard = p.hard_noise.is_hard();
        let probe = DVec3::new(n.x + 1.0, n.y + 2.0, n.z + 3.0);
        let t = turbulence_vector(probe, p.depth, hard, p.basis, 1.0, p.frequency)
            * 0.25
            * p.distortion;
        turbulence(n + t, 2, hard, p.basis, 0.5, 2.0) * 0.5 + 0.5
    }

    /// Distorted-domain noise sampled through a turbulence displacement.
    fn vl_noise_turbulence(&self, n: DVec3) -> f64 {
        let p = self.params;
        let t = turbulence_vector(
            n,
            p.depth,
            p.hard_noise.is_hard(),
            p.basis,
            p.amplitude,
            p.frequency,
        ) * 0.25;
        variable_lacunarity(n + t, p.distortion, p.basis, p.vl_basis) * 0.5 + 0.5
    }

    /// Hetero-terrain amplitude-modulated by distorted-domain noise.
    fn vl_hterrain(&self, n: DVec3) -> f64 {
        let p = self.params;
        let ht = hetero_terrain(
            n,
            p.dimension,
            p.lacunarity,
            p.depth,
            p.fractal_offset,
            p.basis,
        ) * 0.25;
        let vl = variable_lacunarity(n, p.distortion, p.basis, p.vl_basis);
        ht * 2.0 * (0.5 + 0.5 * vl)
    }

    /// Hetero-terrain displaced by a coarse single-octave hetero pass.
    fn distorted_hetero_terrain(&self, n: DVec3) -> f64 {
        let p = self.params;
        let h1 = hetero_terrain(n, 1.0, 2.0, 1, 1.0, p.basis) * 0.5;
        let displaced = n + DVec3::splat(h1 * p.distortion);
        let h2 = hetero_terrain(
            displaced,
            p.dimension,
            p.lacunarity,
            p.depth,
            p.fractal_offset,
            p.vl_basis,
        ) * 0.25;
        h1 * 0.25 + h2
    }

    /// Sum of squares of a coarse and a fine multifractal pass.
    fn double_multi_fractal(&self, n: DVec3) -> f64 {
        let p = self.params;
        let n1 = multi_fractal(n * 1.5 + DVec3::ONE, 1.0, 1.0, 1, p.basis) * p.fractal_offset;
        let n2 = multi_fractal(
            n - DVec3::ONE,
            p.dimension,
            p.lacunarity,
            8,
            p.vl_basis,
        ) * p.gain;
        (n1 * n1 + n2 * n2) * 0.5
    }

    /// Ridged multifractal displaced by a coarse multifractal. Gain and the
    /// secondary basis come from the parameters, nothing is hardcoded.
    fn slick_rock(&self, n: DVec3) -> f64 {
        let p = self.params;
        let d = multi_fractal(n, 1.0, 2.0, 2, p.basis) * p.distortion * 0.25;
        let r = ridged_multi_fractal(
            n + DVec3::splat(d),
            p.dimension,
            p.lacunarity,
            p.depth,
            p.fractal_offset,
            p.gain,
            p.vl_basis,
        );
        (d + r) * 0.5
    }

    /// Chained turbulence triple; each stage reuses the previous result as
    /// a coordinate, and the z stage is rescaled to [0, 1].
    fn planet_noise(&self, n: DVec3) -> f64 {
        let p = self.params;
        let hard = p.hard_noise.is_hard();
        let offset = 1.0;
        let tx = turbulence(n, p.depth, hard, p.basis, 0.5, 2.0);
        let ty = turbulence(
            DVec3::new(tx + offset, n.y + offset, n.z),
            p.depth,
            hard,
            p.basis,
            0.5,
            2.0,
        );
        let tz = turbulence(
            DVec3::new(tx, ty + offset, n.z + offset),
            p.depth,
            hard,
            p.basis,
            0.5,
            2.0,
        );
        tz * 0.5 + 0.5
    }
}
