//! CLI command implementations.

use std::path::Path;

use fissure_io::contract::ScenarioInput;
use fissure_io::export::{to_obj_string, SurfaceSequenceExporter};
use fissure_io::validator::validate_input;
use fissure_material::MaterialDatabase;
use fissure_mesh::Topology;
use fissure_sim::metrics::RunMetrics;
use fissure_sim::scenarios::ScenarioKind;
use fissure_sim::Simulation;
use fissure_telemetry::TracingSink;

use crate::OutputArgs;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Run built-in scenarios.
pub fn run(
    scenario_name: &str,
    steps: Option<u32>,
    seed: Option<u64>,
    out: &OutputArgs,
    verbose: bool,
) -> CliResult {
    println!("Fissure Scenario Runs");
    println!("═════════════════════");
    println!();

    let kinds: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                return Err(format!(
                    "Unknown scenario: '{scenario_name}'. Available: {}, all",
                    available.join(", ")
                )
                .into());
            }
        }
    };
    if kinds.len() > 1 && (out.obj.is_some() || out.frames.is_some()) {
        return Err("--obj and --frames need a single --scenario".into());
    }

    let db = MaterialDatabase::with_defaults();
    let mut all_metrics = Vec::new();
    for kind in kinds {
        let mut input = kind.input();
        if let Some(steps) = steps {
            input.run.step_budget = steps;
        }
        if seed.is_some() {
            input.run.seed = seed;
        }
        all_metrics.push(execute(&input, &db, out, verbose)?);
    }

    report(&all_metrics, out)
}

/// Run a simulation from a scenario file.
pub fn simulate(config_path: &str, out: &OutputArgs, verbose: bool) -> CliResult {
    println!("Fissure Simulation");
    println!("──────────────────");
    println!("Config: {config_path}");
    println!();

    let input = ScenarioInput::load(Path::new(config_path))?;
    let db = MaterialDatabase::with_defaults();
    let metrics = execute(&input, &db, out, verbose)?;
    report(&[metrics], out)
}

/// Validate a scenario file.
pub fn validate(path: &str) -> CliResult {
    let input = ScenarioInput::load(Path::new(path))?;
    let db = MaterialDatabase::with_defaults();
    validate_input(&input, &db)?;

    let boundary = input.boundary.build()?;
    let topology = Topology::build(&boundary);

    println!("✓ Valid scenario: {}", input.name);
    println!(
        "  Ring: {} markers, speed {}",
        input.front.marker_count, input.front.move_speed
    );
    println!(
        "  Boundary: {} ({} vertices, {} triangles, {})",
        input.boundary.kind(),
        boundary.vertex_count(),
        boundary.triangle_count(),
        if topology.is_closed() { "closed" } else { "open" },
    );
    println!("  Step budget: {}", input.run.step_budget);
    Ok(())
}

/// List built-in scenarios and materials, or dump one scenario.
pub fn scenarios(dump: Option<&str>) -> CliResult {
    if let Some(name) = dump {
        let kind = ScenarioKind::from_name(name)
            .ok_or_else(|| format!("Unknown scenario: '{name}'"))?;
        print!("{}", kind.input().to_toml_string()?);
        return Ok(());
    }

    println!("Scenarios:");
    for kind in ScenarioKind::all() {
        println!("  {:<14} {}", kind.name(), kind.description());
    }
    println!();

    let db = MaterialDatabase::with_defaults();
    println!("Materials:");
    for name in db.names() {
        if let Some(profile) = db.get(name) {
            println!("  {:<14} {}", name, profile.description);
        }
    }
    Ok(())
}

fn execute(
    input: &ScenarioInput,
    db: &MaterialDatabase,
    out: &OutputArgs,
    verbose: bool,
) -> Result<RunMetrics, Box<dyn std::error::Error>> {
    let mut sim = Simulation::from_input(input, db)?;
    if out.frames.is_some() {
        sim.set_record_history(true);
    }
    if verbose {
        sim.add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));
    }

    println!(
        "Running: {} ({} markers, {} boundary tris, budget {} steps)",
        input.name,
        sim.front().len(),
        sim.boundary().triangle_count(),
        input.run.step_budget,
    );
    let metrics = sim.run(input.run.step_budget)?;

    if let Some(path) = &out.obj {
        std::fs::write(path, to_obj_string(sim.surface()))?;
        println!("  Surface written to {path}");
    }
    if let Some(path) = &out.frames {
        let mut exporter = SurfaceSequenceExporter::new(path, &input.name);
        for (step, surface) in sim.history().iter().enumerate() {
            exporter.submit(step as u64, surface);
        }
        exporter.finalize()?;
        println!("  {} frames written to {path}", exporter.frame_count());
    }
    Ok(metrics)
}

fn report(metrics: &[RunMetrics], out: &OutputArgs) -> CliResult {
    if out.json {
        println!("{}", serde_json::to_string_pretty(metrics)?);
    } else {
        println!();
        println!(
            "{:<14} {:>6} {:>9} {:>9} {:>10} {:>10}",
            "scenario", "steps", "finished", "complete", "tris", "total ms"
        );
        for m in metrics {
            println!(
                "{:<14} {:>6} {:>5}/{:<3} {:>9} {:>10} {:>10.2}",
                m.scenario,
                m.steps,
                m.finished_markers,
                m.marker_count,
                m.completed,
                m.surface_triangles,
                m.total_wall_time * 1000.0,
            );
        }
    }

    if let Some(path) = &out.output {
        std::fs::write(path, RunMetrics::to_csv(metrics))?;
        println!("Metrics written to {path}");
    }
    Ok(())
}
