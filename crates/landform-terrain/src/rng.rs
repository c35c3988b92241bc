//! Deterministic RNG wrapper using PCG32.
//!
//! The engine holds no process-wide randomness: an RNG is constructed from
//! the seed field where needed and discarded afterwards, so identical
//! parameters always reproduce identical output across process restarts.

use glam::DVec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits so distinct
    /// 32-bit seeds map to distinct PCG32 states.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random f64 in the range [-1.0, 1.0).
    #[inline]
    pub fn gen_signed_f64(&mut self) -> f64 {
        self.gen_f64() * 2.0 - 1.0
    }

    /// Generate a uniformly distributed unit vector.
    ///
    /// Rejection-samples the unit ball and normalizes; the loop is
    /// deterministic for a given seed and terminates quickly.
    pub fn unit_vector(&mut self) -> DVec3 {
        loop {
            let v = DVec3::new(
                self.gen_signed_f64(),
                self.gen_signed_f64(),
                self.gen_signed_f64(),
            );
            let len_sq = v.length_squared();
            if len_sq > 1e-12 && len_sq <= 1.0 {
                return v / len_sq.sqrt();
            }
        }
    }
}
