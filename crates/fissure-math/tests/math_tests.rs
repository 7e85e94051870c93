//! Integration tests for fissure-math.

use fissure_math::{ring_directions, rotation_about, LateralAxis, Vec3};

// ─── Rotation Tests ───────────────────────────────────────────

#[test]
fn quarter_turn_about_y() {
    let r = rotation_about(Vec3::Y, std::f64::consts::FRAC_PI_2);
    let v = r * Vec3::X;
    assert!((v - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
}

#[test]
fn ring_directions_are_evenly_spaced() {
    let n = 12;
    let dirs = ring_directions(Vec3::X, Vec3::Y, n);
    assert_eq!(dirs.len(), n);

    let expected = std::f64::consts::TAU / n as f64;
    for i in 0..n {
        let a = dirs[i];
        let b = dirs[(i + 1) % n];
        assert!((a.length() - 1.0).abs() < 1e-12);
        assert!(a.y.abs() < 1e-12, "direction {i} left the XZ plane");
        let angle = a.angle_between(b);
        assert!(
            (angle - expected).abs() < 1e-9,
            "step {i}: angle {angle}, expected {expected}"
        );
    }
}

#[test]
fn ring_directions_empty() {
    assert!(ring_directions(Vec3::X, Vec3::Y, 0).is_empty());
}

// ─── LateralAxis Tests ────────────────────────────────────────

#[test]
fn basis_axis_reads_component() {
    let axis = LateralAxis::new(Vec3::Y).unwrap();
    assert_eq!(axis.coordinate(Vec3::new(1.0, 2.5, -3.0)), 2.5);
}

#[test]
fn basis_axis_sets_component_exactly() {
    let axis = LateralAxis::new(Vec3::new(0.0, 3.0, 0.0)).unwrap();
    let mut p = Vec3::new(0.1, 0.7, 0.3);
    axis.set_coordinate(&mut p, 0.123456789);
    assert_eq!(p, Vec3::new(0.1, 0.123456789, 0.3));
}

#[test]
fn oblique_axis_preserves_orthogonal_part() {
    let axis = LateralAxis::new(Vec3::new(1.0, 1.0, 0.0)).unwrap();
    let mut p = Vec3::new(2.0, 0.0, 5.0);
    axis.set_coordinate(&mut p, 1.0);
    assert!((axis.coordinate(p) - 1.0).abs() < 1e-12);
    assert!((p.z - 5.0).abs() < 1e-12);
}

#[test]
fn zero_axis_rejected() {
    assert!(LateralAxis::new(Vec3::ZERO).is_none());
}

#[test]
fn offset_moves_along_axis() {
    let axis = LateralAxis::default();
    let p = axis.offset(Vec3::new(1.0, 1.0, 1.0), -0.5);
    assert_eq!(p, Vec3::new(1.0, 0.5, 1.0));
}
