//! Tessellation: grid and sphere lattices, water plane, cursor placement.
//!
//! Vertices are emitted in row-major order with explicit index arithmetic,
//! so adjacent faces share indices without deduplication. Heights are
//! sampled in parallel per row into a preallocated buffer; output ordering
//! never depends on scheduling.

use std::f64::consts::PI;

use glam::DVec3;
use landform_spec::{LandscapeParams, MeshKind};
use rayon::prelude::*;

use crate::composer::Sampler;
use crate::error::{TerrainError, TerrainResult};

/// A mesh face: triangle or quad, indices into the vertex array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Triangle.
    Tri([u32; 3]),
    /// Quad.
    Quad([u32; 4]),
}

impl Face {
    /// Face indices as a slice.
    pub fn indices(&self) -> &[u32] {
        match self {
            Face::Tri(idx) => idx,
            Face::Quad(idx) => idx,
        }
    }
}

/// Vertex and face arrays produced by the tessellator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions in row-major lattice order.
    pub vertices: Vec<[f64; 3]>,
    /// Faces indexing into `vertices`.
    pub faces: Vec<Face>,
}

impl MeshBuffers {
    fn translate(&mut self, delta: DVec3) {
        for v in &mut self.vertices {
            v[0] += delta.x;
            v[1] += delta.y;
            v[2] += delta.z;
        }
    }
}

/// A generated landscape: the terrain buffers plus an optional water plane.
#[derive(Debug, Clone, PartialEq)]
pub struct LandscapeMesh {
    /// The displaced terrain mesh.
    pub terrain: MeshBuffers,
    /// Flat water plane, present when `water_plane` was requested.
    pub water: Option<MeshBuffers>,
}

/// Generates the full landscape mesh for a validated parameter set.
pub fn generate(params: &LandscapeParams) -> TerrainResult<LandscapeMesh> {
    if let Err(errors) = landform_spec::validate_params(params).into_result() {
        if let Some(first) = errors.into_iter().next() {
            return Err(TerrainError::from(first));
        }
    }

    let sampler = Sampler::new(params);
    let mut terrain = match params.kind {
        MeshKind::Grid => grid_mesh(params, &sampler),
        MeshKind::Sphere => sphere_mesh(params, &sampler),
    };
    let mut water = params.water_plane.then(|| water_plane(params));

    if params.at_cursor {
        let delta = DVec3::from(params.translate);
        terrain.translate(delta);
        if let Some(w) = water.as_mut() {
            w.translate(delta);
        }
    }

    Ok(LandscapeMesh { terrain, water })
}

/// Builds the flat water plane: a 2x2 grid at `water_level`. The composer
/// is never invoked.
pub fn water_plane(params: &LandscapeParams) -> MeshBuffers {
    let hx = params.size_x / 2.0;
    let hy = params.size_y / 2.0;
    let z = params.water_level;

    let vertices = vec![
        [-hx, -hy, z],
        [hx, -hy, z],
        [-hx, hy, z],
        [hx, hy, z],
    ];
    let faces = if params.triangulate {
        vec![Face::Tri([0, 1, 3]), Face::Tri([0, 3, 2])]
    } else {
        vec![Face::Quad([0, 1, 3, 2])]
    };

    MeshBuffers { vertices, faces }
}

/// Regular grid: `sub_x * sub_y` vertices spanning the configured extent,
/// z from the composer.
fn grid_mesh(params: &LandscapeParams, sampler: &Sampler<'_>) -> MeshBuffers {
    let nx = params.sub_x as usize;
    let ny = params.sub_y as usize;

    let mut heights = vec![0.0f64; nx * ny];
    heights
        .par_chunks_mut(nx)
        .enumerate()
        .for_each(|(j, row)| {
            let y = params.size_y * (j as f64 / (ny - 1) as f64 - 0.5);
            for (i, h) in row.iter_mut().enumerate() {
                let x = params.size_x * (i as f64 / (nx - 1) as f64 - 0.5);
                *h = sampler.height(DVec3::new(x, y, 0.0));
            }
        });

    let mut vertices = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        let y = params.size_y * (j as f64 / (ny - 1) as f64 - 0.5);
        for i in 0..nx {
            let x = params.size_x * (i as f64 / (nx - 1) as f64 - 0.5);
            vertices.push([x, y, heights[j * nx + i]]);
        }
    }

    MeshBuffers {
        faces: lattice_faces(nx, ny, params.triangulate),
        vertices,
    }
}

/// UV sphere: `(sub_x + 1) * (sub_y + 1)` vertices, radially displaced by
/// the composer. The poles keep their duplicate column; a later weld pass
/// may remove the seam.
fn sphere_mesh(params: &LandscapeParams, sampler: &Sampler<'_>) -> MeshBuffers {
    let nx = params.sub_x as usize + 1;
    let ny = params.sub_y as usize + 1;

    let mut vertices = vec![[0.0f64; 3]; nx * ny];
    vertices
        .par_chunks_mut(nx)
        .enumerate()
        .for_each(|(j, row)| {
            // Inclination from south to north pole.
            let phi = -PI / 2.0 + PI * j as f64 / (ny - 1) as f64;
            for (i, out) in row.iter_mut().enumerate() {
                let theta = 2.0 * PI * i as f64 / (nx - 1) as f64;
                let unit = DVec3::new(
                    phi.cos() * theta.cos(),
                    phi.cos() * theta.sin(),
                    phi.sin(),
                );
                let h = sampler.height(unit);
                let v = unit * (1.0 + h / params.size);
                *out = [v.x, v.y, v.z];
            }
        });

    MeshBuffers {
        faces: lattice_faces(nx, ny, params.triangulate),
        vertices,
    }
}

/// Connects each 2x2 quartet of a row-major `nx * ny` lattice. The
/// triangulated diagonal always runs from the quad's first corner.
fn lattice_faces(nx: usize, ny: usize, triangulate: bool) -> Vec<Face> {
    let quads = (nx - 1) * (ny - 1);
    let mut faces = Vec::with_capacity(if triangulate { quads * 2 } else { quads });

    for j in 0..ny - 1 {
        for i in 0..nx - 1 {
            let a = (j * nx + i) as u32;
            let b = a + 1;
            let c = a + nx as u32 + 1;
            let d = a + nx as u32;
            if triangulate {
                faces.push(Face::Tri([a, b, c]));
                faces.push(Face::Tri([a, c, d]));
            } else {
                faces.push(Face::Quad([a, b, c, d]));
            }
        }
    }
    faces
}

#[cfg(test)]
mod tests {
    use super::*;
    use landform_spec::{Falloff, NoiseType};

    #[test]
    fn test_grid_counts() {
        let params = LandscapeParams {
            sub_x: 6,
            sub_y: 5,
            ..Default::default()
        };
        let mesh = generate(&params).unwrap();
        assert_eq!(mesh.terrain.vertices.len(), 30);
        assert_eq!(mesh.terrain.faces.len(), 5 * 4);
        assert!(mesh.water.is_none());
    }

    #[test]
    fn test_triangulated_grid_doubles_faces() {
        let params = LandscapeParams {
            sub_x: 4,
            sub_y: 4,
            triangulate: true,
            ..Default::default()
        };
        let mesh = generate(&params).unwrap();
        assert_eq!(mesh.terrain.faces.len(), 9 * 2);
        assert!(mesh
            .terrain
            .faces
            .iter()
            .all(|f| matches!(f, Face::Tri(_))));
    }

    #[test]
    fn test_face_indices_in_range() {
        let params = LandscapeParams {
            kind: landform_spec::MeshKind::Sphere,
            sub_x: 8,
            sub_y: 6,
            ..Default::default()
        };
        let mesh = generate(&params).unwrap();
        let count = mesh.terrain.vertices.len() as u32;
        assert_eq!(count, 9 * 7);
        for face in &mesh.terrain.faces {
            for &idx in face.indices() {
                assert!(idx < count);
            }
        }
    }

    #[test]
    fn test_grid_spans_extent() {
        let params = LandscapeParams {
            sub_x: 4,
            sub_y: 4,
            size_x: 6.0,
            size_y: 4.0,
            ..Default::default()
        };
        let mesh = generate(&params).unwrap();
        let xs: Vec<f64> = mesh.terrain.vertices.iter().map(|v| v[0]).collect();
        let ys: Vec<f64> = mesh.terrain.vertices.iter().map(|v| v[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f64::MAX, f64::min), -3.0);
        assert_eq!(xs.iter().cloned().fold(f64::MIN, f64::max), 3.0);
        assert_eq!(ys.iter().cloned().fold(f64::MAX, f64::min), -2.0);
        assert_eq!(ys.iter().cloned().fold(f64::MIN, f64::max), 2.0);
    }

    #[test]
    fn test_water_plane_is_two_by_two() {
        let params = LandscapeParams {
            size_x: 10.0,
            size_y: 10.0,
            water_plane: true,
            water_level: 0.5,
            ..Default::default()
        };
        let water = water_plane(&params);
        assert_eq!(water.vertices.len(), 4);
        assert_eq!(water.faces.len(), 1);
        assert!(water.vertices.iter().all(|v| v[2] == 0.5));

        let mesh = generate(&params).unwrap();
        assert_eq!(mesh.water, Some(water));
    }

    #[test]
    fn test_cursor_translation_moves_everything() {
        let params = LandscapeParams {
            sub_x: 4,
            sub_y: 4,
            at_cursor: true,
            translate: [10.0, -5.0, 2.0],
            water_plane: true,
            height: 0.0,
            ..Default::default()
        };
        let mesh = generate(&params).unwrap();
        // height 0 puts every terrain vertex at z = height_offset = 0,
        // so translation is directly visible.
        assert!(mesh.terrain.vertices.iter().all(|v| v[2] == 2.0));
        let water = mesh.water.unwrap();
        assert!(water.vertices.iter().all(|v| v[0].abs() != 1.0));
        assert!(water.vertices.iter().all(|v| v[2] == 2.0));
    }

    #[test]
    fn test_generation_is_reproducible() {
        let params = LandscapeParams {
            noise_type: NoiseType::HybridMultiFractal,
            seed: 77,
            falloff: Falloff::Xy,
            ..Default::default()
        };
        let a = generate(&params).unwrap();
        let b = generate(&params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_invalid_params() {
        let params = LandscapeParams {
            sub_x: 2,
            ..Default::default()
        };
        assert!(generate(&params).is_err());
    }

    #[test]
    fn test_stable_diagonal() {
        let params = LandscapeParams {
            sub_x: 4,
            sub_y: 4,
            triangulate: true,
            ..Default::default()
        };
        let mesh = generate(&params).unwrap();
        // First quad splits along the 0-5 diagonal, every run.
        assert_eq!(mesh.terrain.faces[0], Face::Tri([0, 1, 5]));
        assert_eq!(mesh.terrain.faces[1], Face::Tri([0, 5, 4]));
    }
}
