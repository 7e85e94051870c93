//! Scenario runner: builds a simulation from an input and collects metrics.

use fissure_io::contract::ScenarioInput;
use fissure_material::MaterialDatabase;
use fissure_types::FissureResult;

use crate::driver::Simulation;
use crate::metrics::RunMetrics;
use crate::scenarios::ScenarioKind;

/// Runs scenarios and collects metrics.
pub struct ScenarioRunner;

impl ScenarioRunner {
    /// Run a single scenario for its configured step budget.
    pub fn run(input: &ScenarioInput, db: &MaterialDatabase) -> FissureResult<RunMetrics> {
        let mut sim = Simulation::from_input(input, db)?;
        sim.run(input.run.step_budget)
    }

    /// Run all built-in scenarios and return metrics for each.
    pub fn run_all(db: &MaterialDatabase) -> FissureResult<Vec<RunMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let metrics = Self::run(&kind.input(), db)?;
            results.push(metrics);
        }
        Ok(results)
    }
}
