//! # fissure-sim
//!
//! Simulation driver for the Fissure engine.
//!
//! Wires a [`CrackFront`](fissure_solver::CrackFront), a boundary mesh and
//! a [`CrackSurfaceBuilder`](fissure_surface::CrackSurfaceBuilder) into a
//! step loop with telemetry, and ships the built-in scenarios plus run
//! metrics with CSV export.

pub mod driver;
pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use driver::Simulation;
pub use metrics::RunMetrics;
pub use runner::ScenarioRunner;
pub use scenarios::ScenarioKind;
