//! Musgrave fractal combinators and turbulence over a primitive basis.
//!
//! Spectral weights follow the classic `lacunarity^-H` form; octave counts
//! are integers (the parameter model caps them at 16), so no fractional
//! remainder octave is accumulated.

use glam::DVec3;
use landform_spec::Basis;

use super::basis_value;

/// Offsets decorrelating the y and z turbulence channels.
const VECTOR_OFFSET_Y: DVec3 = DVec3::new(119.34, 87.21, 31.53);
const VECTOR_OFFSET_Z: DVec3 = DVec3::new(-47.19, 151.77, 91.11);

/// Fractional Brownian motion.
pub fn fractal(p: DVec3, h: f64, lacunarity: f64, octaves: u32, basis: Basis) -> f64 {
    let pw_hl = lacunarity.powf(-h);
    let mut pwr = 1.0;
    let mut value = 0.0;
    let mut q = p;

    for _ in 0..octaves.max(1) {
        value += basis_value(basis, q) * pwr;
        pwr *= pw_hl;
        q *= lacunarity;
    }
    value
}

/// Multiplicative multifractal.
pub fn multi_fractal(p: DVec3, h: f64, lacunarity: f64, octaves: u32, basis: Basis) -> f64 {
    let pw_hl = lacunarity.powf(-h);
    let mut pwr = 1.0;
    let mut value = 1.0;
    let mut q = p;

    for _ in 0..octaves.max(1) {
        value *= pwr * basis_value(basis, q) + 1.0;
        pwr *= pw_hl;
        q *= lacunarity;
    }
    value
}

/// Heterogeneous terrain: flat valleys, increasingly rough peaks.
pub fn hetero_terrain(
    p: DVec3,
    h: f64,
    lacunarity: f64,
    octaves: u32,
    offset: f64,
    basis: Basis,
) -> f64 {
    let pw_hl = lacunarity.powf(-h);
    let mut pwr = pw_hl;

    // First unscaled octave sets the base elevation.
    let mut q = p;
    let mut value = offset + basis_value(basis, q);
    q *= lacunarity;

    for _ in 1..octaves.max(1) {
        let increment = (basis_value(basis, q) + offset) * pwr * value;
        value += increment;
        pwr *= pw_hl;
        q *= lacunarity;
    }
    value
}

/// Hybrid additive/multiplicative multifractal.
pub fn hybrid_multi_fractal(
    p: DVec3,
    h: f64,
    lacunarity: f64,
    octaves: u32,
    offset: f64,
    gain: f64,
    basis: Basis,
) -> f64 {
    let pw_hl = lacunarity.powf(-h);
    let mut pwr = pw_hl;

    let mut q = p;
    let mut value = basis_value(basis, q) + offset;
    let mut weight = gain * value;
    q *= lacunarity;

    for _ in 1..octaves.max(1) {
        if weight <= 0.001 {
            break;
        }
        if weight > 1.0 {
            weight = 1.0;
        }
        let signal = (basis_value(basis, q) + offset) * pwr;
        pwr *= pw_hl;
        value += weight * signal;
        weight *= gain * signal;
        q *= lacunarity;
    }
    value
}

/// Ridged multifractal: inverted-abs octaves weighted by the previous one.
pub fn ridged_multi_fractal(
    p: DVec3,
    h: f64,
    lacunarity: f64,
    octaves: u32,
    offset: f64,
    gain: f64,
    basis: Basis,
) -> f64 {
    let pw_hl = lacunarity.powf(-h);
    let mut pwr = pw_hl;

    let mut q = p;
    let mut signal = offset - basis_value(basis, q).abs();
    signal *= signal;
    let mut value = signal;

    for _ in 1..octaves.max(1) {
        q *= lacunarity;
        let weight = (signal * gain).clamp(0.0, 1.0);
        signal = offset - basis_value(basis, q).abs();
        signal *= signal;
        signal *= weight;
        value += signal * pwr;
        pwr *= pw_hl;
    }
    value
}

/// Summed-octave turbulence. `octaves` counts additional octaves, so 0
/// still evaluates one sample. Hard mode folds octaves through `abs`.
pub fn turbulence(
    p: DVec3,
    octaves: u32,
    hard: bool,
    basis: Basis,
    amp_scale: f64,
    freq_scale: f64,
) -> f64 {
    let mut amp = 1.0;
    let mut freq = 1.0;
    let mut sum = 0.0;

    for _ in 0..=octaves {
        let mut t = basis_value(basis, p * freq);
        if hard {
            t = t.abs();
        }
        sum += t * amp;
        amp *= amp_scale;
        freq *= freq_scale;
    }
    sum
}

/// Three decorrelated turbulence channels.
pub fn turbulence_vector(
    p: DVec3,
    octaves: u32,
    hard: bool,
    basis: Basis,
    amp_scale: f64,
    freq_scale: f64,
) -> DVec3 {
    DVec3::new(
        turbulence(p, octaves, hard, basis, amp_scale, freq_scale),
        turbulence(p + VECTOR_OFFSET_Y, octaves, hard, basis, amp_scale, freq_scale),
        turbulence(p + VECTOR_OFFSET_Z, octaves, hard, basis, amp_scale, freq_scale),
    )
}

/// Distorted-domain noise: the first basis displaces the sample point of
/// the second.
pub fn variable_lacunarity(p: DVec3, distortion: f64, basis1: Basis, basis2: Basis) -> f64 {
    let spread = DVec3::splat(13.5);
    let displaced = DVec3::new(
        basis_value(basis1, p + spread),
        basis_value(basis1, p),
        basis_value(basis1, p - spread),
    ) * distortion;
    basis_value(basis2, p + displaced)
}
