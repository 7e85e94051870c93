//! # fissure-io
//!
//! Scenario input contract, validation and surface export.
//!
//! Defines the boundary types that external systems (CLI, config files,
//! downstream mesh pipelines) use to communicate with the Fissure core.

pub mod contract;
pub mod export;
pub mod validator;

pub use contract::{BoundarySpec, RunParams, ScenarioInput, ToughnessSpec};
pub use export::{to_obj_string, SurfaceSequenceExporter};
pub use validator::validate_input;
