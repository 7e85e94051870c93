//! # fissure-contact
//!
//! Segment-versus-boundary intersection for the crack front.
//!
//! Each propagation step produces one line segment per active marker
//! (previous position → current position). The front is finished at a
//! marker when that segment crosses the host body's surface.
//!
//! Two phases, mirroring a classic collision pipeline:
//! 1. **Broad phase**: [`TriangleBounds`] culls triangles whose bounding
//!    box cannot touch the segment's bounding box (optional).
//! 2. **Narrow phase**: [`IntersectionTester`] runs the exact
//!    segment/plane + barycentric test and returns the first hit in mesh
//!    order.

pub mod broad;
pub mod intersection;

pub use broad::TriangleBounds;
pub use intersection::{IntersectionTester, SegmentHit};
