//! Mesh topology queries.
//!
//! Builds edge adjacency from a triangle index buffer. Used to verify
//! that a reconstructed crack surface is watertight: every edge shared
//! by exactly two triangles, traversed once in each direction.

use std::collections::{BTreeMap, HashSet};

use crate::boundary::BoundaryMesh;

/// Precomputed edge topology for a triangle mesh.
#[derive(Debug, Clone)]
pub struct Topology {
    /// For each vertex, the list of triangles that contain it.
    pub vertex_triangles: Vec<Vec<u32>>,

    /// Unique edges as `(v_min, v_max)` pairs, in ascending order.
    pub edges: Vec<[u32; 2]>,

    /// For each edge, the adjacent triangles.
    pub edge_triangles: Vec<Vec<u32>>,

    /// Number of directed edges that appear more than once.
    /// Non-zero means some neighboring triangles disagree on winding.
    pub repeated_directed_edges: usize,
}

impl Topology {
    /// Build topology from any boundary-mesh view.
    pub fn build<M: BoundaryMesh + ?Sized>(mesh: &M) -> Self {
        let vertex_count = mesh.vertex_count();
        let tri_count = mesh.triangle_count();

        let mut vertex_triangles: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];
        // Key: (min_vertex, max_vertex) to canonicalize edge direction
        let mut edge_map: BTreeMap<(u32, u32), Vec<u32>> = BTreeMap::new();
        let mut directed: HashSet<(u32, u32)> = HashSet::with_capacity(tri_count * 3);
        let mut repeated_directed_edges = 0;

        for t in 0..tri_count {
            let [a, b, c] = mesh.triangle(t);
            for v in [a, b, c] {
                vertex_triangles[v as usize].push(t as u32);
            }
            for (v0, v1) in [(a, b), (b, c), (c, a)] {
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                edge_map.entry(key).or_default().push(t as u32);
                if !directed.insert((v0, v1)) {
                    repeated_directed_edges += 1;
                }
            }
        }

        let (edges, edge_triangles): (Vec<[u32; 2]>, Vec<Vec<u32>>) = edge_map
            .into_iter()
            .map(|((v0, v1), tris)| ([v0, v1], tris))
            .unzip();

        Self {
            vertex_triangles,
            edges,
            edge_triangles,
            repeated_directed_edges,
        }
    }

    /// Returns the 1-ring vertex neighborhood of vertex `v`.
    pub fn one_ring<M: BoundaryMesh + ?Sized>(&self, v: u32, mesh: &M) -> HashSet<u32> {
        let mut neighbors = HashSet::new();
        for &tri in &self.vertex_triangles[v as usize] {
            for u in mesh.triangle(tri as usize) {
                if u != v {
                    neighbors.insert(u);
                }
            }
        }
        neighbors
    }

    /// Returns the number of boundary edges (edges with only 1 adjacent triangle).
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_triangles
            .iter()
            .filter(|tris| tris.len() == 1)
            .count()
    }

    /// Returns the number of edges shared by more than two triangles.
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_triangles
            .iter()
            .filter(|tris| tris.len() > 2)
            .count()
    }

    /// Returns true if the mesh is closed (no boundary edges).
    pub fn is_closed(&self) -> bool {
        self.boundary_edge_count() == 0
    }

    /// Returns true if every edge is shared by exactly two triangles.
    pub fn is_manifold(&self) -> bool {
        !self.edges.is_empty() && self.edge_triangles.iter().all(|tris| tris.len() == 2)
    }

    /// Returns true if no directed edge is used twice.
    pub fn is_consistently_oriented(&self) -> bool {
        self.repeated_directed_edges == 0
    }
}
