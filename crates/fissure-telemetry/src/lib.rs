//! # fissure-telemetry
//!
//! Event bus for simulation telemetry. Emits structured events
//! (step timing, breakthroughs, smoothing, surface sizes) that can be
//! consumed by pluggable sinks (in-memory buffers, `tracing` logs, etc.).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, SharedVecSink, TracingSink, VecSink};
