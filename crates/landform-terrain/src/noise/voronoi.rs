//! Voronoi (cellular) distances and cell noise.
//!
//! Each lattice cell owns one jittered feature point derived from a hashed
//! per-cell RNG, so the field is deterministic without global state. The
//! F1..F4 distances are the four nearest feature distances over the 3x3x3
//! neighborhood of the query cell.

use glam::DVec3;

use super::fast_floor;
use crate::rng::DeterministicRng;

/// Hash multipliers for mixing cell coordinates into an RNG seed.
const HASH_X: u32 = 374_761_393;
const HASH_Y: u32 = 668_265_263;
const HASH_Z: u32 = 2_147_483_647;

#[inline]
fn cell_rng(cx: i64, cy: i64, cz: i64) -> DeterministicRng {
    let seed = (cx as u32)
        .wrapping_mul(HASH_X)
        .wrapping_add((cy as u32).wrapping_mul(HASH_Y))
        .wrapping_add((cz as u32).wrapping_mul(HASH_Z));
    DeterministicRng::new(seed)
}

/// Jittered feature point of a cell.
#[inline]
fn cell_point(cx: i64, cy: i64, cz: i64) -> DVec3 {
    let mut rng = cell_rng(cx, cy, cz);
    DVec3::new(
        cx as f64 + rng.gen_f64(),
        cy as f64 + rng.gen_f64(),
        cz as f64 + rng.gen_f64(),
    )
}

/// Ordered distances [F1, F2, F3, F4] to the nearest feature points.
pub(crate) fn distances(p: DVec3) -> [f64; 4] {
    let cx = fast_floor(p.x);
    let cy = fast_floor(p.y);
    let cz = fast_floor(p.z);

    let mut da = [f64::MAX; 4];

    for dz in -1..=1 {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let feature = cell_point(cx + dx, cy + dy, cz + dz);
                let dist = (p - feature).length();

                // Insertion into the sorted four smallest.
                if dist < da[3] {
                    da[3] = dist;
                    let mut i = 3;
                    while i > 0 && da[i] < da[i - 1] {
                        da.swap(i, i - 1);
                        i -= 1;
                    }
                }
            }
        }
    }

    da
}

/// Piecewise-constant per-cell hash noise. Signed, in [-1, 1].
pub fn cell_noise(p: DVec3) -> f64 {
    let mut rng = cell_rng(fast_floor(p.x), fast_floor(p.y), fast_floor(p.z));
    rng.gen_signed_f64()
}
