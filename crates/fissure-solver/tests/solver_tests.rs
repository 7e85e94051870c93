//! Integration tests for fissure-solver.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fissure_material::ToughnessField;
use fissure_math::{LateralAxis, Vec3};
use fissure_mesh::generators::{box_mesh, quad_grid};
use fissure_mesh::TriangleMesh;
use fissure_solver::restlessness::Restlessness;
use fissure_solver::{
    smooth_markers, smooth_ring, CrackFront, FixedRestlessness, FrontConfig, Marker,
    SmoothingConfig, UniformRestlessness,
};
use fissure_types::MarkerId;

/// A small plane far from the seed point: nothing ever reaches it.
fn distant_plane() -> TriangleMesh {
    let mut mesh = quad_grid(1, 1, 1.0, 1.0);
    mesh.translate(Vec3::new(0.0, 0.0, 100.0));
    mesh
}

fn fixed_front(config: FrontConfig, toughness: ToughnessField, r: f64) -> CrackFront {
    CrackFront::new(
        Vec3::ZERO,
        config,
        toughness,
        Box::new(FixedRestlessness::constant(r)),
    )
    .unwrap()
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn config_defaults() {
    let config = FrontConfig::default();
    assert_eq!(config.marker_count, 60);
    assert!((config.move_speed - 0.025).abs() < 1e-15);
    assert_eq!(config.restlessness_range, [0.15, 1.0]);
    assert_eq!(config.smoothing.iterations, 10);
    assert!(!config.smoothing.freeze_finished);
    assert!(config.validate().is_ok());
}

#[test]
fn config_presets_validate() {
    assert!(FrontConfig::debug().validate().is_ok());
    assert!(FrontConfig::high_resolution().validate().is_ok());
    assert_eq!(SmoothingConfig::disabled().iterations, 0);
    assert!(SmoothingConfig::preserve_breakthroughs().freeze_finished);
}

#[test]
fn config_rejects_small_ring() {
    let config = FrontConfig {
        marker_count: 4,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_bad_speed() {
    for speed in [0.0, -0.1, f64::NAN] {
        let config = FrontConfig {
            move_speed: speed,
            ..Default::default()
        };
        assert!(config.validate().is_err(), "speed {speed}");
    }
}

#[test]
fn config_rejects_parallel_axes() {
    let config = FrontConfig {
        initial_direction: [0.0, 2.0, 0.0],
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_zero_axes() {
    let config = FrontConfig {
        lateral_axis: [0.0, 0.0, 0.0],
        ..Default::default()
    };
    assert!(config.validate().is_err());
    let config = FrontConfig {
        initial_direction: [0.0, 0.0, 0.0],
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_bad_restlessness() {
    for range in [[0.5, 0.2], [-0.1, 0.5], [0.2, 1.5]] {
        let config = FrontConfig {
            restlessness_range: range,
            ..Default::default()
        };
        assert!(config.validate().is_err(), "range {range:?}");
    }
}

#[test]
fn config_serialization_fills_defaults() {
    let config: FrontConfig = serde_json::from_str(r#"{ "marker_count": 12 }"#).unwrap();
    assert_eq!(config.marker_count, 12);
    assert_eq!(config.smoothing, SmoothingConfig::default());
}

// ─── Restlessness Tests ───────────────────────────────────────

#[test]
fn uniform_is_seeded_and_in_range() {
    let mut a = UniformRestlessness::seeded(7, [0.15, 1.0]).unwrap();
    let mut b = UniformRestlessness::seeded(7, [0.15, 1.0]).unwrap();
    for _ in 0..200 {
        let x = a.sample();
        assert_eq!(x, b.sample());
        assert!((0.15..=1.0).contains(&x));
    }
    assert_eq!(a.name(), "uniform");
}

#[test]
fn uniform_rejects_inverted_range() {
    assert!(UniformRestlessness::seeded(1, [1.0, 0.0]).is_err());
}

#[test]
fn fixed_cycles() {
    let mut fixed = FixedRestlessness::new(vec![0.2, 0.4]).unwrap();
    let drawn: Vec<f64> = (0..5).map(|_| fixed.sample()).collect();
    assert_eq!(drawn, vec![0.2, 0.4, 0.2, 0.4, 0.2]);
    assert!(FixedRestlessness::new(Vec::new()).is_err());
}

// ─── Marker Tests ─────────────────────────────────────────────

#[test]
fn energy_conservation() {
    let lateral = LateralAxis::default();
    let dir = Vec3::new(0.6, 0.0, 0.8);
    let mut bias = -1.0;
    while bias <= 1.0 {
        let mut m = Marker::new(Vec3::new(1.0, 2.0, 3.0), dir, lateral, 0.025);
        m.propagate_with_bias(bias);
        let delta = m.current() - m.previous();
        let forward = delta.dot(dir);
        let sideways = delta.dot(Vec3::Y);
        assert!(
            (forward.abs() + sideways.abs() - 0.025).abs() < 1e-15,
            "bias {bias}"
        );
        bias += 0.125;
    }
}

#[test]
fn propagate_uses_restlessness_after_first_step() {
    let field = ToughnessField::new(vec![1.0]).unwrap();
    let mut source = FixedRestlessness::constant(0.5);
    let mut m = Marker::new(Vec3::ZERO, Vec3::X, LateralAxis::default(), 0.025);

    let first = m.propagate(&field, true, &mut source);
    assert_eq!(first, 0.0);

    let second = m.propagate(&field, false, &mut source);
    let expected = 0.5 * field.weight_at(0.0);
    assert!((second - expected).abs() < 1e-15);
    assert!(second > 0.0, "weak spot above pulls the marker up");
    assert!(m.current().y > 0.0);
}

#[test]
fn finished_marker_stays_put() {
    let mut m = Marker::new(Vec3::ZERO, Vec3::X, LateralAxis::default(), 0.025);
    m.propagate_with_bias(0.0);
    let hit = Vec3::new(0.02, 0.0, 0.0);
    m.finish(hit);
    assert!(m.is_finished());
    assert_eq!(m.intersection(), Some(hit));

    let mut source = FixedRestlessness::constant(1.0);
    m.propagate(&ToughnessField::new(vec![1.0]).unwrap(), false, &mut source);
    m.propagate_with_bias(0.3);
    assert_eq!(m.current(), hit);
}

#[test]
fn marker_serialization() {
    let m = Marker::new(Vec3::new(0.5, 0.0, 0.0), Vec3::Z, LateralAxis::default(), 0.01);
    let json = serde_json::to_string(&m).unwrap();
    let recovered: Marker = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, m);
}

// ─── Smoothing Tests ──────────────────────────────────────────

#[test]
fn smoothing_keeps_constant_ring() {
    let mut values = vec![0.25; 9];
    let shift = smooth_ring(&mut values, &[], 10);
    assert!(shift < 1e-15);
    assert!(values.iter().all(|v| (v - 0.25).abs() < 1e-15));
}

#[test]
fn smoothing_is_in_place_in_order() {
    // One sweep by hand: index 0 sees originals, index 1 sees the new value at 0.
    let mut values = vec![5.0, 0.0, 0.0, 0.0, 0.0, 0.0];
    smooth_ring(&mut values, &[], 1);
    let v0 = 5.0 / 5.0;
    let v1 = (0.0 + v0 + 0.0 + 0.0 + 0.0) / 5.0;
    assert!((values[0] - v0).abs() < 1e-15);
    assert!((values[1] - v1).abs() < 1e-15);
}

#[test]
fn smoothing_respects_frozen() {
    let mut values = vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
    let mut frozen = vec![false; 7];
    frozen[0] = true;
    smooth_ring(&mut values, &frozen, 10);
    assert_eq!(values[0], 1.0);
    assert!(values[1] > 0.0);
}

#[test]
fn smoothing_zero_iterations_is_noop() {
    let mut values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(smooth_ring(&mut values, &[], 0), 0.0);
    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn repeated_smoothing_shifts_less() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let n = rng.gen_range(5..40);
        let mut values: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let first = smooth_ring(&mut values, &[], 10);
        let second = smooth_ring(&mut values, &[], 10);
        assert!(second <= first + 1e-12, "first {first}, second {second}");
    }
}

#[test]
fn smoothing_markers_freeze_finished() {
    let lateral = LateralAxis::default();
    let mut markers: Vec<Marker> = (0..6)
        .map(|i| Marker::new(Vec3::new(0.0, i as f64 * 0.1, 0.0), Vec3::X, lateral, 0.025))
        .collect();
    let pinned = Vec3::new(0.0, 0.5, 0.0);
    markers[5].finish(pinned);

    smooth_markers(&mut markers, &SmoothingConfig::preserve_breakthroughs());
    assert_eq!(markers[5].current(), pinned);

    smooth_markers(&mut markers, &SmoothingConfig::default());
    assert_ne!(markers[5].current(), pinned);
    assert_eq!(markers[5].intersection(), Some(pinned));
}

// ─── CrackFront Tests ─────────────────────────────────────────

#[test]
fn ring_is_evenly_spaced() {
    let front = fixed_front(FrontConfig::debug(), ToughnessField::homogeneous(), 1.0);
    assert_eq!(front.len(), 8);
    assert_eq!(front.finished_count(), 0);
    assert!(!front.is_complete());

    let step = std::f64::consts::TAU / 8.0;
    let markers = front.markers();
    for i in 0..markers.len() {
        let a = markers[i].direction();
        let b = markers[(i + 1) % markers.len()].direction();
        assert!(!markers[i].is_finished());
        assert!(a.dot(Vec3::Y).abs() < 1e-12);
        assert!((a.angle_between(b) - step).abs() < 1e-9, "pair {i}");
    }
}

#[test]
fn first_step_moves_forward_exactly() {
    let field = ToughnessField::new(vec![0.3]).unwrap();
    let mut front = fixed_front(FrontConfig::debug(), field, 1.0);
    let report = front.step(&distant_plane()).unwrap();
    assert_eq!(report.step, 0);
    assert_eq!(report.max_bias, 0.0);
    for m in front.markers() {
        let expected = 0.025 * m.direction();
        assert!((m.current() - expected).length() < 1e-15);
    }
}

#[test]
fn distant_boundary_keeps_running() {
    let mut front = fixed_front(FrontConfig::debug(), ToughnessField::homogeneous(), 0.5);
    let plane = distant_plane();
    for _ in 0..5 {
        let report = front.step(&plane).unwrap();
        assert!(report.breakthroughs.is_empty());
        assert_eq!(report.active, 8);
    }
    assert_eq!(front.finished_count(), 0);
    assert_eq!(front.step_index(), 5);
}

#[test]
fn markers_break_through_box() {
    let config = FrontConfig {
        marker_count: 5,
        ..Default::default()
    };
    let body = box_mesh(Vec3::splat(-0.06), Vec3::splat(0.06), 1);
    let mut front = CrackFront::new(
        Vec3::new(0.0, 0.013, 0.0),
        config,
        ToughnessField::homogeneous(),
        Box::new(FixedRestlessness::constant(1.0)),
    )
    .unwrap();

    front.step(&body).unwrap();
    front.step(&body).unwrap();
    assert_eq!(front.finished_count(), 0);

    let report = front.step(&body).unwrap();
    assert_eq!(report.breakthroughs.len(), 5);
    assert!(front.is_complete());

    let ids: Vec<MarkerId> = report.breakthroughs.iter().map(|b| b.marker).collect();
    assert_eq!(ids, (0..5).map(MarkerId).collect::<Vec<_>>());

    for m in front.markers() {
        let hit = m.intersection().unwrap();
        assert!((m.current() - hit).length() < 1e-12);
        let reach = hit.x.abs().max(hit.z.abs());
        assert!((reach - 0.06).abs() < 1e-12, "hit {hit:?}");
    }

    // Nothing left to move.
    let report = front.step(&body).unwrap();
    assert_eq!(report.active, 0);
    assert_eq!(front.finished_count(), 5);
}

#[test]
fn parallel_and_broad_phase_match_sequential() {
    let field = ToughnessField::new(vec![-0.05, 0.04]).unwrap();
    let body = box_mesh(Vec3::splat(-0.3), Vec3::splat(0.3), 4);

    let run = |parallel: bool, broad_phase: bool| {
        let config = FrontConfig {
            marker_count: 24,
            parallel,
            broad_phase,
            ..Default::default()
        };
        let mut front =
            CrackFront::seeded(Vec3::new(0.01, 0.0, -0.02), config, field.clone(), 99).unwrap();
        for _ in 0..25 {
            front.step(&body).unwrap();
        }
        (front.markers().to_vec(), front.finished_count())
    };

    let reference = run(false, false);
    assert_eq!(run(true, false), reference);
    assert_eq!(run(false, true), reference);
    assert_eq!(run(true, true), reference);
}

#[test]
fn seeded_fronts_are_deterministic() {
    let field = ToughnessField::new(vec![0.02]).unwrap();
    let plane = distant_plane();
    let mut a = CrackFront::seeded(Vec3::ZERO, FrontConfig::debug(), field.clone(), 3).unwrap();
    let mut b = CrackFront::seeded(Vec3::ZERO, FrontConfig::debug(), field, 3).unwrap();
    for _ in 0..10 {
        a.step(&plane).unwrap();
        b.step(&plane).unwrap();
    }
    assert_eq!(a.markers(), b.markers());
    assert!(a.max_lateral_deviation() > 0.0);
}

#[test]
fn front_rejects_non_finite_start() {
    let res = CrackFront::seeded(
        Vec3::new(f64::NAN, 0.0, 0.0),
        FrontConfig::debug(),
        ToughnessField::homogeneous(),
        0,
    );
    assert!(res.is_err());
}
