//! Fixed-table lattice noises: value noise and the two Perlin variants.
//!
//! The permutation table is the classic 256-entry reference table rather
//! than a shuffled one, because the historical bases are unseeded: every
//! process must agree on the lattice.

use glam::DVec3;

use super::{fast_floor, lerp, quintic, smoothstep};

/// Reference permutation table.
const PERM: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209,
    76, 132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198,
    173, 186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44,
    154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79,
    113, 224, 232, 178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12,
    191, 179, 162, 241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29,
    24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Hash a lattice corner into a byte.
#[inline]
fn hash3(xi: i64, yi: i64, zi: i64) -> u8 {
    let x = (xi & 255) as usize;
    let y = (yi & 255) as usize;
    let z = (zi & 255) as usize;
    PERM[(x + PERM[(y + PERM[z] as usize) & 255] as usize) & 255]
}

/// Classic gradient dot product from the low hash bits.
#[inline]
fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// Shared trilinear lattice interpolation.
#[inline]
fn lattice3<F, G>(p: DVec3, fade: F, corner: G) -> f64
where
    F: Fn(f64) -> f64,
    G: Fn(i64, i64, i64, f64, f64, f64) -> f64,
{
    let x0 = fast_floor(p.x);
    let y0 = fast_floor(p.y);
    let z0 = fast_floor(p.z);

    let fx = p.x - x0 as f64;
    let fy = p.y - y0 as f64;
    let fz = p.z - z0 as f64;

    let u = fade(fx);
    let v = fade(fy);
    let w = fade(fz);

    let mut corners = [0.0; 8];
    for (idx, c) in corners.iter_mut().enumerate() {
        let dx = (idx & 1) as i64;
        let dy = ((idx >> 1) & 1) as i64;
        let dz = ((idx >> 2) & 1) as i64;
        *c = corner(
            x0 + dx,
            y0 + dy,
            z0 + dz,
            fx - dx as f64,
            fy - dy as f64,
            fz - dz as f64,
        );
    }

    let x00 = lerp(corners[0], corners[1], u);
    let x10 = lerp(corners[2], corners[3], u);
    let x01 = lerp(corners[4], corners[5], u);
    let x11 = lerp(corners[6], corners[7], u);
    let y0v = lerp(x00, x10, v);
    let y1v = lerp(x01, x11, v);
    lerp(y0v, y1v, w)
}

/// Lattice value noise, the "Blender default" basis. Signed, in [-1, 1].
pub fn value_noise(p: DVec3) -> f64 {
    lattice3(p, smoothstep, |xi, yi, zi, _, _, _| {
        hash3(xi, yi, zi) as f64 * (2.0 / 255.0) - 1.0
    })
}

/// Original Perlin gradient noise with the hermite fade curve.
pub fn perlin_original(p: DVec3) -> f64 {
    lattice3(p, smoothstep, |xi, yi, zi, dx, dy, dz| {
        grad(hash3(xi, yi, zi), dx, dy, dz)
    })
}

/// Improved Perlin gradient noise with the quintic fade curve.
pub fn perlin_improved(p: DVec3) -> f64 {
    lattice3(p, quintic, |xi, yi, zi, dx, dy, dz| {
        grad(hash3(xi, yi, zi), dx, dy, dz)
    })
}
