//! Exact-position vertex deduplication.

use std::collections::HashMap;

use fissure_math::Vec3;

/// Hash key for a position: bit patterns with `-0.0` folded onto `0.0`.
fn position_key(p: Vec3) -> [u64; 3] {
    let fold = |x: f64| if x == 0.0 { 0.0f64.to_bits() } else { x.to_bits() };
    [fold(p.x), fold(p.y), fold(p.z)]
}

/// Assigns one index per distinct position, in first-seen order.
///
/// Two positions are the same vertex only if every coordinate compares
/// equal. No tolerance is applied.
#[derive(Debug, Clone, Default)]
pub struct VertexWelder {
    lookup: HashMap<[u64; 3], u32>,
    vertices: Vec<Vec3>,
}

impl VertexWelder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `p`, inserting it if unseen.
    pub fn insert(&mut self, p: Vec3) -> u32 {
        let next = self.vertices.len() as u32;
        let index = *self.lookup.entry(position_key(p)).or_insert(next);
        if index == next {
            self.vertices.push(p);
        }
        index
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The unique vertices, indexed as returned by [`insert`](Self::insert).
    pub fn into_vertices(self) -> Vec<Vec3> {
        self.vertices
    }
}
