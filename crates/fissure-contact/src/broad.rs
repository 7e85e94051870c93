//! Broad phase: per-triangle axis-aligned bounding boxes.
//!
//! The crack front tests many short segments against the same boundary
//! mesh every step. Caching triangle boxes once lets the narrow phase
//! skip triangles that are obviously out of reach.

use fissure_math::Vec3;
use fissure_mesh::BoundaryMesh;

/// Cached axis-aligned bounding boxes, one per boundary triangle.
///
/// Iteration order is always mesh order, so a prefiltered search finds
/// the same first triangle as an unfiltered one.
#[derive(Debug, Clone, Default)]
pub struct TriangleBounds {
    mins: Vec<Vec3>,
    maxs: Vec<Vec3>,
}

impl TriangleBounds {
    /// Builds boxes for every triangle of `mesh`.
    pub fn build<M: BoundaryMesh + ?Sized>(mesh: &M) -> Self {
        let n = mesh.triangle_count();
        let mut mins = Vec::with_capacity(n);
        let mut maxs = Vec::with_capacity(n);
        for t in 0..n {
            let [a, b, c] = mesh.triangle_vertices(t);
            mins.push(a.min(b).min(c));
            maxs.push(a.max(b).max(c));
        }
        Self { mins, maxs }
    }

    /// Number of cached boxes.
    pub fn len(&self) -> usize {
        self.mins.len()
    }

    /// Returns true if no boxes are cached.
    pub fn is_empty(&self) -> bool {
        self.mins.is_empty()
    }

    /// Bounding box of triangle `t` as `(min, max)`.
    pub fn get(&self, t: usize) -> Option<(Vec3, Vec3)> {
        Some((*self.mins.get(t)?, *self.maxs.get(t)?))
    }

    /// Whether triangle `t`'s box overlaps the box spanned by `p0`–`p1`.
    ///
    /// Touching boxes count as overlapping.
    #[inline]
    pub fn may_touch(&self, t: usize, p0: Vec3, p1: Vec3) -> bool {
        let seg_min = p0.min(p1);
        let seg_max = p0.max(p1);
        let (lo, hi) = (self.mins[t], self.maxs[t]);
        lo.cmple(seg_max).all() && hi.cmpge(seg_min).all()
    }

    /// Triangle indices whose box can touch the segment, in mesh order.
    pub fn candidates(&self, p0: Vec3, p1: Vec3) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&t| self.may_touch(t, p0, p1))
    }
}
