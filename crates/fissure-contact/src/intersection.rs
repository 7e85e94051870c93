//! Narrow phase: exact segment/triangle intersection.
//!
//! Plane crossing first, then a barycentric inside test:
//!
//! ```text
//! u = v1 - v0,  v = v2 - v0,  n = u × v
//! r = -n·(p0 - v0) / n·(p1 - p0)            plane parameter, must be in [0, 1]
//! P = p0 + r (p1 - p0)
//! w = P - v0
//! D = (u·v)² - (u·u)(v·v)
//! s = ((u·v)(w·v) - (v·v)(w·u)) / D          must be in [0, 1]
//! t = ((u·v)(w·u) - (u·u)(w·v)) / D          must be ≥ 0 with s + t ≤ 1
//! ```

use fissure_math::Vec3;
use fissure_mesh::BoundaryMesh;
use fissure_types::constants::SEGMENT_PARALLEL_EPSILON;
use fissure_types::{FissureError, FissureResult, TriangleId};

use crate::broad::TriangleBounds;

/// Result of a segment test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// Intersection point on a hit; the segment end `p1` on a miss.
    pub point: Vec3,
    /// Whether the segment crossed the boundary.
    pub hit: bool,
    /// The first triangle hit, in mesh order.
    pub triangle: Option<TriangleId>,
}

impl SegmentHit {
    /// A miss for the segment ending at `end`.
    pub fn miss(end: Vec3) -> Self {
        Self {
            point: end,
            hit: false,
            triangle: None,
        }
    }
}

/// Outcome of testing one triangle.
enum TriangleTest {
    Skip,
    Hit(Vec3),
}

/// Segment-versus-triangle-mesh tester.
///
/// Stateless apart from the parallel tolerance; safe to share across
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct IntersectionTester {
    /// `|n·(p1-p0)|` below this treats the segment as parallel to the plane.
    pub parallel_epsilon: f64,
}

impl Default for IntersectionTester {
    fn default() -> Self {
        Self {
            parallel_epsilon: SEGMENT_PARALLEL_EPSILON,
        }
    }
}

impl IntersectionTester {
    /// Tester with the default parallel tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tests `p0 → p1` against every triangle of `mesh` in order.
    ///
    /// Degenerate triangles (zero normal) and parallel segments are
    /// skipped. A zero or non-finite barycentric system is an error.
    pub fn test_segment<M: BoundaryMesh + ?Sized>(
        &self,
        p0: Vec3,
        p1: Vec3,
        mesh: &M,
    ) -> FissureResult<SegmentHit> {
        for t in 0..mesh.triangle_count() {
            if let TriangleTest::Hit(point) = self.test_triangle(p0, p1, mesh, t)? {
                return Ok(hit(point, t));
            }
        }
        Ok(SegmentHit::miss(p1))
    }

    /// Same as [`test_segment`](Self::test_segment), skipping triangles
    /// whose cached box cannot touch the segment.
    ///
    /// `bounds` must have been built from `mesh`.
    pub fn test_segment_bounded<M: BoundaryMesh + ?Sized>(
        &self,
        p0: Vec3,
        p1: Vec3,
        mesh: &M,
        bounds: &TriangleBounds,
    ) -> FissureResult<SegmentHit> {
        if bounds.len() != mesh.triangle_count() {
            return Err(FissureError::InvalidMesh(format!(
                "Bounds cache has {} boxes but mesh has {} triangles",
                bounds.len(),
                mesh.triangle_count()
            )));
        }
        for t in bounds.candidates(p0, p1) {
            if let TriangleTest::Hit(point) = self.test_triangle(p0, p1, mesh, t)? {
                return Ok(hit(point, t));
            }
        }
        Ok(SegmentHit::miss(p1))
    }

    fn test_triangle<M: BoundaryMesh + ?Sized>(
        &self,
        p0: Vec3,
        p1: Vec3,
        mesh: &M,
        t: usize,
    ) -> FissureResult<TriangleTest> {
        let [v0, v1, v2] = mesh.triangle_vertices(t);
        let u = v1 - v0;
        let v = v2 - v0;
        let n = u.cross(v);
        if n == Vec3::ZERO {
            return Ok(TriangleTest::Skip);
        }

        let dir = p1 - p0;
        let a = -n.dot(p0 - v0);
        let b = n.dot(dir);
        if b.abs() < self.parallel_epsilon {
            return Ok(TriangleTest::Skip);
        }

        let r = a / b;
        if !(0.0..=1.0).contains(&r) {
            return Ok(TriangleTest::Skip);
        }

        let point = p0 + r * dir;

        let uu = u.dot(u);
        let uv = u.dot(v);
        let vv = v.dot(v);
        let w = point - v0;
        let wu = w.dot(u);
        let wv = w.dot(v);
        let d = uv * uv - uu * vv;
        if d == 0.0 {
            return Err(FissureError::DegenerateGeometry {
                triangle: t as u32,
                reason: "barycentric denominator is zero".into(),
            });
        }

        let s = (uv * wv - vv * wu) / d;
        let tt = (uv * wu - uu * wv) / d;
        if !s.is_finite() || !tt.is_finite() {
            return Err(FissureError::DegenerateGeometry {
                triangle: t as u32,
                reason: format!("non-finite barycentric coordinates ({s}, {tt})"),
            });
        }

        if !(0.0..=1.0).contains(&s) {
            return Ok(TriangleTest::Skip);
        }
        if tt < 0.0 || s + tt > 1.0 {
            return Ok(TriangleTest::Skip);
        }

        Ok(TriangleTest::Hit(point))
    }
}

fn hit(point: Vec3, t: usize) -> SegmentHit {
    SegmentHit {
        point,
        hit: true,
        triangle: Some(TriangleId(t as u32)),
    }
}
