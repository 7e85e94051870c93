//! Procedural boundary-body generators.
//!
//! These generators produce deterministic, resolution-configurable meshes
//! with consistent winding. `box_mesh` is the standard host body for a
//! crack seeded inside a block of material.

use std::collections::HashMap;

use fissure_math::Vec3;

use crate::mesh::TriangleMesh;

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0.
///
/// # Arguments
/// - `cols`: Number of quads along X (vertex count = cols + 1).
/// - `rows`: Number of quads along Y (vertex count = rows + 1).
/// - `width`: Total width.
/// - `height`: Total height.
///
/// # Example
/// ```
/// use fissure_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f64, height: f64) -> TriangleMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;
    let mut mesh = TriangleMesh::with_capacity(verts_x * verts_y, cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f64 / cols as f64;
            let v = j as f64 / rows as f64;
            let index = mesh.push_vertex(Vec3::new(-half_w + u * width, half_h - v * height, 0.0));
            mesh.normal_z[index as usize] = 1.0; // Facing +Z
        }
    }

    // Two triangles per quad
    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            mesh.push_triangle([top_left, bot_left, top_right]);
            mesh.push_triangle([top_right, bot_left, bot_right]);
        }
    }

    mesh
}

/// Generates a closed axis-aligned box spanning `min..max`.
///
/// Each face is split into `subdivisions × subdivisions` quads. Vertices on
/// shared edges and corners are welded, so the result is a closed 2-manifold
/// with outward-facing triangles.
///
/// # Example
/// ```
/// use fissure_math::Vec3;
/// use fissure_mesh::generators::box_mesh;
/// let mesh = box_mesh(Vec3::splat(-1.0), Vec3::splat(1.0), 1);
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn box_mesh(min: Vec3, max: Vec3, subdivisions: usize) -> TriangleMesh {
    let n = subdivisions.max(1);
    let vertex_count = 6 * n * n + 2;
    let mut mesh = TriangleMesh::with_capacity(vertex_count, 12 * n * n);
    let mut lattice: HashMap<[usize; 3], u32> = HashMap::with_capacity(vertex_count);

    let extent = max - min;
    let mut vertex_at = |mesh: &mut TriangleMesh, cell: [usize; 3]| -> u32 {
        *lattice.entry(cell).or_insert_with(|| {
            let p = Vec3::new(
                min.x + extent.x * cell[0] as f64 / n as f64,
                min.y + extent.y * cell[1] as f64 / n as f64,
                min.z + extent.z * cell[2] as f64 / n as f64,
            );
            mesh.push_vertex(p)
        })
    };

    for axis in 0..3 {
        // Tangent axes ordered so that tangent_u × tangent_v = +axis.
        let tangent_u = (axis + 1) % 3;
        let tangent_v = (axis + 2) % 3;

        for side in [0, n] {
            for a in 0..n {
                for b in 0..n {
                    let corner = |du: usize, dv: usize| {
                        let mut cell = [0; 3];
                        cell[axis] = side;
                        cell[tangent_u] = a + du;
                        cell[tangent_v] = b + dv;
                        cell
                    };

                    let p00 = vertex_at(&mut mesh, corner(0, 0));
                    let p10 = vertex_at(&mut mesh, corner(1, 0));
                    let p11 = vertex_at(&mut mesh, corner(1, 1));
                    let p01 = vertex_at(&mut mesh, corner(0, 1));

                    if side == n {
                        mesh.push_triangle([p00, p10, p11]);
                        mesh.push_triangle([p00, p11, p01]);
                    } else {
                        mesh.push_triangle([p00, p11, p10]);
                        mesh.push_triangle([p00, p01, p11]);
                    }
                }
            }
        }
    }

    mesh
}

/// Generates a UV sphere centered at the origin.
///
/// # Arguments
/// - `radius`: Sphere radius.
/// - `stacks`: Number of horizontal slices (latitude divisions).
/// - `slices`: Number of vertical slices (longitude divisions).
pub fn uv_sphere(radius: f64, stacks: usize, slices: usize) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity((stacks + 1) * (slices + 1), stacks * slices * 2);

    for i in 0..=stacks {
        let phi = std::f64::consts::PI * i as f64 / stacks as f64;
        for j in 0..=slices {
            let theta = std::f64::consts::TAU * j as f64 / slices as f64;
            let unit = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());

            let index = mesh.push_vertex(unit * radius) as usize;
            mesh.normal_x[index] = unit.x;
            mesh.normal_y[index] = unit.y;
            mesh.normal_z[index] = unit.z;
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * (slices + 1) + j) as u32;
            let b = a + (slices + 1) as u32;

            // Skip degenerate triangles at poles
            if i != 0 {
                mesh.push_triangle([a, b, a + 1]);
            }
            if i != stacks - 1 {
                mesh.push_triangle([a + 1, b, b + 1]);
            }
        }
    }

    mesh
}
