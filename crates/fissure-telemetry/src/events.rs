//! Simulation event types.
//!
//! Structured events emitted by the driver at fixed points of each step.
//! Events are lightweight value types that carry just enough data to be
//! useful for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
///
/// Events are tagged with a step index and carry domain-specific data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Step number (0-indexed).
    pub step: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Step started.
    StepBegin {
        /// Markers still propagating.
        active_markers: usize,
    },

    /// A marker crossed the boundary.
    MarkerFinished {
        /// Ring index of the marker.
        marker: u32,
        /// Intersection point.
        point: [f64; 3],
        /// Boundary triangle that was hit.
        triangle: u32,
    },

    /// Lateral smoothing finished.
    Smoothed {
        /// Sweeps performed.
        iterations: u32,
        /// Largest lateral change of any marker.
        max_shift: f64,
    },

    /// Crack surface rebuilt.
    SurfaceBuilt {
        vertices: usize,
        triangles: usize,
    },

    /// Step completed.
    StepEnd {
        /// Wall-clock time for the entire step (seconds).
        wall_time: f64,
        /// Finished markers after the step.
        finished_count: usize,
    },

    /// The run ended.
    Completed {
        /// Steps taken.
        steps: u64,
        /// Finished markers at the end.
        finished_count: usize,
        /// Whether every marker broke through (as opposed to budget exhaustion).
        all_finished: bool,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl EventKind {
    /// Short snake_case name of the variant.
    pub fn label(&self) -> &str {
        match self {
            Self::StepBegin { .. } => "step_begin",
            Self::MarkerFinished { .. } => "marker_finished",
            Self::Smoothed { .. } => "smoothed",
            Self::SurfaceBuilt { .. } => "surface_built",
            Self::StepEnd { .. } => "step_end",
            Self::Completed { .. } => "completed",
            Self::Custom { label, .. } => label.as_str(),
        }
    }
}

impl SimulationEvent {
    /// Creates a new event for the given step.
    pub fn new(step: u64, kind: EventKind) -> Self {
        Self { step, kind }
    }

    /// Creates a custom event with a JSON-encoded payload.
    pub fn custom<T: Serialize>(step: u64, label: &str, payload: &T) -> serde_json::Result<Self> {
        Ok(Self::new(
            step,
            EventKind::Custom {
                label: label.to_string(),
                payload: serde_json::to_string(payload)?,
            },
        ))
    }
}
