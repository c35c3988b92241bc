//! Primitive noise bases and fractal combinators.
//!
//! All noise functions are pure Rust with fixed lattice tables, so output
//! is deterministic across processes without any seeding. Signed output is
//! roughly in [-1, 1]; the Voronoi and cell bases may exceed that range and
//! callers are expected to cope.

mod fractal;
mod perlin;
mod voronoi;

pub use fractal::{
    fractal, hetero_terrain, hybrid_multi_fractal, multi_fractal, ridged_multi_fractal,
    turbulence, turbulence_vector, variable_lacunarity,
};

use glam::DVec3;
use landform_spec::Basis;

/// Linear interpolation.
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Smooth interpolation (smoothstep / hermite).
#[inline]
pub(crate) fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Quintic interpolation (smoother than smoothstep).
#[inline]
pub(crate) fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Floor to i64 without the cast-toward-zero pitfall for negatives.
#[inline]
pub(crate) fn fast_floor(x: f64) -> i64 {
    if x >= 0.0 {
        x as i64
    } else {
        x as i64 - 1
    }
}

/// Evaluates a primitive basis at a point. Single match, no dispatch tables.
pub fn basis_value(basis: Basis, p: DVec3) -> f64 {
    match basis {
        Basis::BlenderOriginal => perlin::value_noise(p),
        Basis::OriginalPerlin => perlin::perlin_original(p),
        Basis::ImprovedPerlin => perlin::perlin_improved(p),
        Basis::VoronoiF1 => voronoi::distances(p)[0] * 2.0 - 1.0,
        Basis::VoronoiF2 => voronoi::distances(p)[1] * 2.0 - 1.0,
        Basis::VoronoiF3 => voronoi::distances(p)[2] * 2.0 - 1.0,
        Basis::VoronoiF4 => voronoi::distances(p)[3] * 2.0 - 1.0,
        Basis::VoronoiF2F1 => {
            let d = voronoi::distances(p);
            (d[1] - d[0]) * 2.0 - 1.0
        }
        Basis::VoronoiCrackle => {
            let d = voronoi::distances(p);
            let t = (10.0 * (d[1] - d[0])).min(1.0);
            t * 2.0 - 1.0
        }
        Basis::CellNoise => voronoi::cell_noise(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landform_spec::ParamEnum;

    #[test]
    fn test_all_bases_deterministic() {
        let p = DVec3::new(1.37, -2.11, 0.83);
        for basis in Basis::all() {
            assert_eq!(basis_value(*basis, p), basis_value(*basis, p));
        }
    }

    #[test]
    fn test_all_bases_finite_on_awkward_points() {
        let points = [
            DVec3::ZERO,
            DVec3::new(-1000.5, 1000.5, 0.0),
            DVec3::new(1e6, -1e6, 1e6),
            DVec3::new(0.5, 0.5, 0.5),
        ];
        for basis in Basis::all() {
            for p in points {
                assert!(basis_value(*basis, p).is_finite(), "{basis:?} at {p:?}");
            }
        }
    }

    #[test]
    fn test_gradient_bases_roughly_bounded() {
        for basis in [
            Basis::BlenderOriginal,
            Basis::OriginalPerlin,
            Basis::ImprovedPerlin,
        ] {
            for i in 0..200 {
                let p = DVec3::new(i as f64 * 0.173, i as f64 * -0.311, i as f64 * 0.057);
                let v = basis_value(basis, p);
                assert!(v.abs() <= 1.5, "{basis:?} returned {v}");
            }
        }
    }
}
