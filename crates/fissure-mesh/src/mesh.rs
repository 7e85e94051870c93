//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! Boundary bodies are stored this way, and the reconstructed crack
//! surface is converted into it before being handed to the downstream
//! mesh-processing pipeline.

use fissure_math::Vec3;
use fissure_types::{FissureError, FissureResult};
use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryMesh;

/// A triangle mesh stored in Structure-of-Arrays layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    // --- Vertex data (SoA) ---
    /// X coordinates of all vertices.
    pub pos_x: Vec<f64>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f64>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f64>,

    /// X components of vertex normals.
    pub normal_x: Vec<f64>,
    /// Y components of vertex normals.
    pub normal_y: Vec<f64>,
    /// Z components of vertex normals.
    pub normal_z: Vec<f64>,

    // --- Triangle data ---
    /// Triangle indices: each triangle is [v0, v1, v2].
    /// Stored flat: `[t0v0, t0v1, t0v2, t1v0, t1v1, t1v2, ...]`
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f64; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    /// Returns the position as a `Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the normal of vertex `i` as a `Vec3`.
    #[inline]
    pub fn normal_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.normal_x[i], self.normal_y[i], self.normal_z[i])
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Sets the position of vertex `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        self.pos_x[i] = p.x;
        self.pos_y[i] = p.y;
        self.pos_z[i] = p.z;
    }

    /// Appends a vertex with a zero normal and returns its index.
    pub fn push_vertex(&mut self, p: Vec3) -> u32 {
        let index = self.pos_x.len() as u32;
        self.pos_x.push(p.x);
        self.pos_y.push(p.y);
        self.pos_z.push(p.z);
        self.normal_x.push(0.0);
        self.normal_y.push(0.0);
        self.normal_z.push(0.0);
        index
    }

    /// Appends a triangle.
    #[inline]
    pub fn push_triangle(&mut self, tri: [u32; 3]) {
        self.indices.extend_from_slice(&tri);
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        for i in 0..self.vertex_count() {
            self.pos_x[i] += offset.x;
            self.pos_y[i] += offset.y;
            self.pos_z[i] += offset.z;
        }
    }

    /// Axis-aligned bounds as `(min, max)`. `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        if self.vertex_count() == 0 {
            return None;
        }
        let mut min = Vec3::splat(f64::INFINITY);
        let mut max = Vec3::splat(f64::NEG_INFINITY);
        for i in 0..self.vertex_count() {
            let p = self.position_vec3(i);
            min = min.min(p);
            max = max.max(p);
        }
        Some((min, max))
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            normal_x: Vec::with_capacity(vertex_capacity),
            normal_y: Vec::with_capacity(vertex_capacity),
            normal_z: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All SoA arrays have the same length
    /// - Triangle indices are within bounds
    /// - No degenerate triangles (repeated vertex indices)
    /// - All positions are finite
    pub fn validate(&self) -> FissureResult<()> {
        let n = self.pos_x.len();

        // Check SoA consistency
        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(FissureError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }
        if self.normal_x.len() != n || self.normal_y.len() != n || self.normal_z.len() != n {
            return Err(FissureError::InvalidMesh(
                "Normal arrays have inconsistent lengths".into(),
            ));
        }

        // Check indices
        if self.indices.len() % 3 != 0 {
            return Err(FissureError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(FissureError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(FissureError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        if let Some(i) = (0..n).find(|&i| !self.position_vec3(i).is_finite()) {
            return Err(FissureError::InvalidMesh(format!(
                "Vertex {} has a non-finite position",
                i
            )));
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved AoS position data.
    ///
    /// Converts from `[x0, y0, z0, x1, y1, z1, ...]` to SoA layout.
    /// Normals are zeroed; call `normals::compute_vertex_normals` to fill them.
    pub fn from_interleaved(positions: &[f64], indices: &[u32]) -> FissureResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(FissureError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        let mut mesh = Self::with_capacity(n, indices.len() / 3);

        for p in positions.chunks_exact(3) {
            mesh.push_vertex(Vec3::new(p[0], p[1], p[2]));
        }
        mesh.indices = indices.to_vec();

        mesh.validate()?;
        Ok(mesh)
    }

    /// Constructs a mesh from a vertex list and triangle index triples.
    pub fn from_vertices(vertices: &[Vec3], triangles: &[[u32; 3]]) -> FissureResult<Self> {
        let mut mesh = Self::with_capacity(vertices.len(), triangles.len());
        for &v in vertices {
            mesh.push_vertex(v);
        }
        for &tri in triangles {
            mesh.push_triangle(tri);
        }
        mesh.validate()?;
        Ok(mesh)
    }
}

impl BoundaryMesh for TriangleMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        TriangleMesh::vertex_count(self)
    }

    #[inline]
    fn triangle_count(&self) -> usize {
        TriangleMesh::triangle_count(self)
    }

    #[inline]
    fn vertex(&self, i: usize) -> Vec3 {
        self.position_vec3(i)
    }

    #[inline]
    fn triangle(&self, t: usize) -> [u32; 3] {
        TriangleMesh::triangle(self, t)
    }
}
