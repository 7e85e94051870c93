//! Integration tests for fissure-io.

use fissure_io::contract::{BoundarySpec, RunParams, ScenarioInput, ToughnessSpec};
use fissure_io::export::{to_obj_string, SurfaceSequenceExporter};
use fissure_io::validator::validate_input;
use fissure_material::MaterialDatabase;
use fissure_math::Vec3;
use fissure_mesh::generators::quad_grid;
use fissure_surface::CrackSurface;

const SEAM_TOML: &str = r#"
name = "seam"
start = [0.0, 0.1, 0.0]

[front]
marker_count = 24
move_speed = 0.05

[front.smoothing]
iterations = 4

[toughness]
material = "welded_seam"

[boundary]
kind = "box"
min = [-2.5, -2.5, -2.5]
max = [2.5, 2.5, 2.5]

[run]
step_budget = 50
seed = 7
"#;

fn unit_box() -> BoundarySpec {
    BoundarySpec::Box {
        min: [-1.0; 3],
        max: [1.0; 3],
        subdivisions: 2,
    }
}

fn small_surface() -> CrackSurface {
    CrackSurface {
        vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
        triangles: vec![[0, 1, 2]],
        stats: Default::default(),
    }
}

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn parse_toml_scenario() {
    let input = ScenarioInput::from_toml_str(SEAM_TOML).unwrap();
    assert_eq!(input.name, "seam");
    assert_eq!(input.start, [0.0, 0.1, 0.0]);
    assert_eq!(input.front.marker_count, 24);
    assert_eq!(input.front.smoothing.iterations, 4);
    assert!(!input.front.smoothing.freeze_finished);
    assert_eq!(input.front.restlessness_range, [0.15, 1.0]);
    assert_eq!(
        input.toughness,
        ToughnessSpec::Material {
            material: "welded_seam".into()
        }
    );
    assert_eq!(input.boundary.kind(), "box");
    assert_eq!(input.run.step_budget, 50);
    assert_eq!(input.run.seed, Some(7));
    assert!((input.surface.thickness - 0.005).abs() < 1e-15);
}

#[test]
fn minimal_toml_uses_defaults() {
    let input = ScenarioInput::from_toml_str(
        r#"
[boundary]
kind = "sphere"
center = [0.0, 0.0, 0.0]
radius = 1.5
"#,
    )
    .unwrap();
    assert_eq!(input.name, "scenario");
    assert_eq!(input.front.marker_count, 60);
    assert_eq!(input.run, RunParams::default());
    assert_eq!(input.toughness, ToughnessSpec::default());
    let mesh = input.boundary.build().unwrap();
    assert!(mesh.triangle_count() > 0);
}

#[test]
fn explicit_weak_positions() {
    let input = ScenarioInput::from_toml_str(
        r#"
[toughness]
weak_positions = [0.25, -0.5]

[boundary]
kind = "plane"
center = [0.0, 0.0, 0.3]
width = 2.0
height = 2.0
"#,
    )
    .unwrap();
    let field = input.toughness.resolve(&MaterialDatabase::with_defaults()).unwrap();
    assert_eq!(field.weak_positions(), &[0.25, -0.5]);

    let plane = input.boundary.build().unwrap();
    let (lo, hi) = plane.bounds().unwrap();
    assert!((lo.z - 0.3).abs() < 1e-12 && (hi.z - 0.3).abs() < 1e-12);
}

#[test]
fn toml_round_trip() {
    let input = ScenarioInput::from_toml_str(SEAM_TOML).unwrap();
    let text = input.to_toml_string().unwrap();
    let recovered = ScenarioInput::from_toml_str(&text).unwrap();
    assert_eq!(recovered, input);
}

#[test]
fn json_with_inline_mesh() {
    let mut input = ScenarioInput::new("inline", BoundarySpec::Mesh {
        mesh: quad_grid(2, 2, 1.0, 1.0),
    });
    input.run.record_history = true;
    let json = input.to_json_string().unwrap();
    let recovered = ScenarioInput::from_json_str(&json).unwrap();
    assert_eq!(recovered, input);
    assert_eq!(recovered.boundary.build().unwrap().triangle_count(), 8);
}

#[test]
fn malformed_toml_is_serialization_error() {
    let err = ScenarioInput::from_toml_str("boundary = 3").unwrap_err();
    assert!(matches!(err, fissure_types::FissureError::Serialization(_)));
}

#[test]
fn load_from_file() {
    let dir = std::env::temp_dir();
    let toml_path = dir.join(format!("fissure_io_test_{}.toml", std::process::id()));
    std::fs::write(&toml_path, SEAM_TOML).unwrap();
    let from_toml = ScenarioInput::load(&toml_path).unwrap();

    let json_path = dir.join(format!("fissure_io_test_{}.json", std::process::id()));
    std::fs::write(&json_path, from_toml.to_json_string().unwrap()).unwrap();
    let from_json = ScenarioInput::load(&json_path).unwrap();

    assert_eq!(from_toml, from_json);
    let _ = std::fs::remove_file(toml_path);
    let _ = std::fs::remove_file(json_path);
}

#[test]
fn missing_file_is_io_error() {
    let err = ScenarioInput::load(std::path::Path::new("/nonexistent/fissure.toml")).unwrap_err();
    assert!(matches!(err, fissure_types::FissureError::Io(_)));
}

// ─── Validator Tests ──────────────────────────────────────────

#[test]
fn valid_scenario_passes() {
    let db = MaterialDatabase::with_defaults();
    let input = ScenarioInput::from_toml_str(SEAM_TOML).unwrap();
    assert!(validate_input(&input, &db).is_ok());
}

#[test]
fn unknown_material_fails() {
    let db = MaterialDatabase::with_defaults();
    let mut input = ScenarioInput::new("x", unit_box());
    input.toughness = ToughnessSpec::Material {
        material: "granite".into(),
    };
    let err = validate_input(&input, &db).unwrap_err();
    assert!(err.to_string().contains("granite"));
}

#[test]
fn inverted_box_fails() {
    let db = MaterialDatabase::with_defaults();
    let input = ScenarioInput::new(
        "x",
        BoundarySpec::Box {
            min: [1.0, -1.0, -1.0],
            max: [-1.0, 1.0, 1.0],
            subdivisions: 1,
        },
    );
    assert!(validate_input(&input, &db).is_err());
}

#[test]
fn zero_budget_fails() {
    let db = MaterialDatabase::with_defaults();
    let mut input = ScenarioInput::new("x", unit_box());
    input.run.step_budget = 0;
    assert!(validate_input(&input, &db).is_err());
}

#[test]
fn bad_front_config_fails() {
    let db = MaterialDatabase::with_defaults();
    let mut input = ScenarioInput::new("x", unit_box());
    input.front.marker_count = 3;
    assert!(validate_input(&input, &db).is_err());
}

#[test]
fn non_finite_start_fails() {
    let db = MaterialDatabase::with_defaults();
    let mut input = ScenarioInput::new("x", unit_box());
    input.start = [0.0, f64::INFINITY, 0.0];
    assert!(validate_input(&input, &db).is_err());
}

#[test]
fn degenerate_sphere_fails() {
    let db = MaterialDatabase::with_defaults();
    let input = ScenarioInput::new(
        "x",
        BoundarySpec::Sphere {
            center: [0.0; 3],
            radius: 0.0,
            stacks: 8,
            slices: 8,
        },
    );
    assert!(validate_input(&input, &db).is_err());
}

// ─── Export Tests ─────────────────────────────────────────────

#[test]
fn obj_export() {
    let obj = to_obj_string(&small_surface());
    let lines: Vec<&str> = obj.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "v 0 0 0");
    assert_eq!(lines[1], "v 1 0 0");
    assert_eq!(lines[3], "f 1 2 3");
}

#[test]
fn sequence_export() {
    let mut exporter = SurfaceSequenceExporter::new("unused.json", "probe");
    exporter.submit(0, &CrackSurface::default());
    exporter.submit(1, &small_surface());
    assert_eq!(exporter.frame_count(), 2);

    let json: serde_json::Value = serde_json::from_str(&exporter.to_json().unwrap()).unwrap();
    assert_eq!(json["scenario"], "probe");
    assert_eq!(json["frames"][1]["step"], 1);
    assert_eq!(json["frames"][1]["positions"].as_array().unwrap().len(), 9);
    assert_eq!(json["frames"][1]["indices"].as_array().unwrap().len(), 3);
    assert!(json["frames"][0]["indices"].as_array().unwrap().is_empty());
}

#[test]
fn sequence_export_writes_file() {
    let path = std::env::temp_dir().join(format!("fissure_seq_{}.json", std::process::id()));
    let mut exporter = SurfaceSequenceExporter::new(path.to_str().unwrap(), "probe");
    exporter.submit(0, &small_surface());
    exporter.finalize().unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"probe\""));
    let _ = std::fs::remove_file(path);
}
