//! Built-in scenarios.
//!
//! 1. **Box breakout**: 60 markers from the center of a 5×5×5 box, 100 steps
//! 2. **Layered box**: same body, layered shale pulling the crack sideways
//! 3. **Plane probe**: small ring against a single plane, finishes quickly

use serde::{Deserialize, Serialize};

use fissure_io::contract::{BoundarySpec, RunParams, ScenarioInput, ToughnessSpec};
use fissure_solver::FrontConfig;

/// Which built-in scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    BoxBreakout,
    LayeredBox,
    PlaneProbe,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::BoxBreakout,
            ScenarioKind::LayeredBox,
            ScenarioKind::PlaneProbe,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::BoxBreakout => "box_breakout",
            ScenarioKind::LayeredBox => "layered_box",
            ScenarioKind::PlaneProbe => "plane_probe",
        }
    }

    /// Looks a scenario up by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            ScenarioKind::BoxBreakout => "60 markers breaking out of a 5x5x5 box",
            ScenarioKind::LayeredBox => "box breakout through layered shale",
            ScenarioKind::PlaneProbe => "12 markers against a single plane",
        }
    }

    /// The full scenario input.
    pub fn input(&self) -> ScenarioInput {
        match self {
            ScenarioKind::BoxBreakout => box_breakout(),
            ScenarioKind::LayeredBox => layered_box(),
            ScenarioKind::PlaneProbe => plane_probe(),
        }
    }
}

fn reference_box() -> BoundarySpec {
    BoundarySpec::Box {
        min: [-2.5; 3],
        max: [2.5; 3],
        subdivisions: 2,
    }
}

/// Create the box breakout scenario.
///
/// Default ring (60 markers, speed 0.025) seeded at the origin of a
/// ±2.5 box with uniform toughness, 100 steps.
pub fn box_breakout() -> ScenarioInput {
    let mut input = ScenarioInput::new(ScenarioKind::BoxBreakout.name(), reference_box());
    input.run = RunParams {
        seed: Some(0),
        ..Default::default()
    };
    input
}

/// Create the layered box scenario.
///
/// Same body as the breakout, with the `layered_shale` preset and a
/// faster front so the crack reaches the walls within the budget.
pub fn layered_box() -> ScenarioInput {
    let mut input = ScenarioInput::new(ScenarioKind::LayeredBox.name(), reference_box());
    input.toughness = ToughnessSpec::Material {
        material: "layered_shale".into(),
    };
    input.front.move_speed = 0.05;
    input.run = RunParams {
        step_budget: 150,
        seed: Some(1),
        record_history: false,
    };
    input
}

/// Create the plane probe scenario.
///
/// A 12-marker ring just below a plane at `z = 0.2`. Markers heading
/// toward +Z finish; the rest exhaust the budget.
pub fn plane_probe() -> ScenarioInput {
    let mut input = ScenarioInput::new(
        ScenarioKind::PlaneProbe.name(),
        BoundarySpec::Plane {
            center: [0.0, 0.0, 0.2],
            width: 2.0,
            height: 2.0,
            subdivisions: 4,
        },
    );
    input.front = FrontConfig {
        marker_count: 12,
        ..FrontConfig::default()
    };
    input.toughness = ToughnessSpec::Positions {
        weak_positions: vec![0.05],
    };
    input.run = RunParams {
        step_budget: 30,
        seed: Some(2),
        record_history: true,
    };
    input
}
