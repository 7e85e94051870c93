//! Vertex normal computation from triangle mesh data.
//!
//! Computes area-weighted vertex normals by accumulating
//! face normals from each adjacent triangle.

use fissure_math::Vec3;

use crate::mesh::TriangleMesh;

/// Recompute vertex normals from triangle geometry (area-weighted).
///
/// Each triangle's face normal (weighted by its area) is accumulated
/// at each vertex, then normalized. Vertices with no non-degenerate
/// adjacent triangle keep a zero normal.
///
/// This modifies the mesh's `normal_x`, `normal_y`, `normal_z` arrays in place.
pub fn compute_vertex_normals(mesh: &mut TriangleMesh) {
    let n = mesh.vertex_count();
    let mut accum = vec![Vec3::ZERO; n];

    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(t).map(|i| i as usize);
        let pa = mesh.position_vec3(a);
        let e1 = mesh.position_vec3(b) - pa;
        let e2 = mesh.position_vec3(c) - pa;

        // Magnitude = 2 × triangle area
        let face = e1.cross(e2);
        accum[a] += face;
        accum[b] += face;
        accum[c] += face;
    }

    for (i, normal) in accum.into_iter().enumerate() {
        let normal = normal.normalize_or_zero();
        mesh.normal_x[i] = normal.x;
        mesh.normal_y[i] = normal.y;
        mesh.normal_z[i] = normal.z;
    }
}

/// Unit face normal of triangle `t`, or zero for a degenerate triangle.
pub fn face_normal(mesh: &TriangleMesh, t: usize) -> Vec3 {
    let [a, b, c] = mesh.triangle(t).map(|i| i as usize);
    let pa = mesh.position_vec3(a);
    (mesh.position_vec3(b) - pa)
        .cross(mesh.position_vec3(c) - pa)
        .normalize_or_zero()
}
