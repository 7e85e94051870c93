//! Boundary mesh capability.
//!
//! The crack front only needs to read vertex positions and triangle
//! indices of the host body. Anything that can answer those two queries
//! (a loaded mesh, the output of a CSG service, a procedural body) can be
//! used as the breakthrough surface.

use fissure_math::Vec3;

/// Read-only triangle mesh view.
///
/// Implementations must return triangles in a stable order: the
/// intersection tester reports the first triangle hit in that order.
pub trait BoundaryMesh {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of triangles.
    fn triangle_count(&self) -> usize;

    /// Position of vertex `i`.
    fn vertex(&self, i: usize) -> Vec3;

    /// The three vertex indices of triangle `t`.
    fn triangle(&self, t: usize) -> [u32; 3];

    /// The three corner positions of triangle `t`.
    #[inline]
    fn triangle_vertices(&self, t: usize) -> [Vec3; 3] {
        let [a, b, c] = self.triangle(t);
        [
            self.vertex(a as usize),
            self.vertex(b as usize),
            self.vertex(c as usize),
        ]
    }
}

impl<M: BoundaryMesh + ?Sized> BoundaryMesh for &M {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn triangle_count(&self) -> usize {
        (**self).triangle_count()
    }

    fn vertex(&self, i: usize) -> Vec3 {
        (**self).vertex(i)
    }

    fn triangle(&self, t: usize) -> [u32; 3] {
        (**self).triangle(t)
    }
}
