//! Rotations about the lateral axis.
//!
//! The crack front starts as a ring of markers at a single seed point.
//! Each marker's propagation direction is the previous marker's direction
//! rotated by `360° / N` about the lateral axis.

use glam::{DMat3, DVec3};

/// Rotation matrix for `angle` radians about the unit vector `axis`.
#[inline]
pub fn rotation_about(axis: DVec3, angle: f64) -> DMat3 {
    DMat3::from_axis_angle(axis, angle)
}

/// Generates `count` propagation directions evenly spaced about `axis`.
///
/// The rotation is applied cumulatively (direction `i + 1` is direction `i`
/// rotated once more), so the sequence matches a front seeded by repeatedly
/// turning a single heading.
///
/// # Example
/// ```
/// use fissure_math::{ring_directions, Vec3};
/// let dirs = ring_directions(Vec3::X, Vec3::Y, 4);
/// assert_eq!(dirs.len(), 4);
/// assert!((dirs[1] - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
/// ```
pub fn ring_directions(initial: DVec3, axis: DVec3, count: usize) -> Vec<DVec3> {
    if count == 0 {
        return Vec::new();
    }

    let theta = std::f64::consts::TAU / count as f64;
    let step = rotation_about(axis, theta);

    let mut directions = Vec::with_capacity(count);
    let mut direction = initial;
    for _ in 0..count {
        directions.push(direction);
        direction = step * direction;
    }
    directions
}
