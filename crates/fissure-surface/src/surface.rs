//! Builder output.

use serde::{Deserialize, Serialize};

use fissure_math::Vec3;
use fissure_mesh::normals::compute_vertex_normals;
use fissure_mesh::{BoundaryMesh, TriangleMesh};

/// Counters describing how a surface was assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceStats {
    /// Ring pairs that produced geometry.
    pub pairs_emitted: usize,
    /// Ring pairs skipped because the surrounding markers had all finished.
    pub pairs_skipped: usize,
    /// End caps emitted at open strip ends.
    pub caps: usize,
    /// Triangles dropped because two corners welded together.
    pub collapsed: usize,
}

/// A crack surface: unique vertices plus index triples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrackSurface {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
    pub stats: SurfaceStats,
}

impl CrackSurface {
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Converts into a SoA mesh with area-weighted vertex normals.
    pub fn to_triangle_mesh(&self) -> TriangleMesh {
        let mut mesh = TriangleMesh::with_capacity(self.vertices.len(), self.triangles.len());
        for &v in &self.vertices {
            mesh.push_vertex(v);
        }
        for &tri in &self.triangles {
            mesh.push_triangle(tri);
        }
        compute_vertex_normals(&mut mesh);
        mesh
    }

    /// Total surface area.
    pub fn area(&self) -> f64 {
        (0..self.triangles.len())
            .map(|t| {
                let [a, b, c] = self.triangle_vertices(t);
                0.5 * (b - a).cross(c - a).length()
            })
            .sum()
    }
}

impl BoundaryMesh for CrackSurface {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    fn vertex(&self, i: usize) -> Vec3 {
        self.vertices[i]
    }

    fn triangle(&self, t: usize) -> [u32; 3] {
        self.triangles[t]
    }
}
