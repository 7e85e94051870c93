//! # fissure-solver
//!
//! Crack-front propagation.
//!
//! ## Key Types
//!
//! - [`Marker`]: one point of the front, with its last step segment
//! - [`CrackFront`]: the marker ring and the per-step pipeline
//! - [`Restlessness`]: pluggable stochastic bias source
//! - [`FrontConfig`] / [`SmoothingConfig`]: run configuration

pub mod config;
pub mod front;
pub mod marker;
pub mod restlessness;
pub mod smoothing;

pub use config::{FrontConfig, SmoothingConfig};
pub use front::{Breakthrough, CrackFront, StepReport};
pub use marker::Marker;
pub use restlessness::{FixedRestlessness, Restlessness, UniformRestlessness};
pub use smoothing::{smooth_markers, smooth_ring};
