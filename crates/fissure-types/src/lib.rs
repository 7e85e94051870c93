//! # fissure-types
//!
//! Shared types, identifiers, error types, and calibration constants
//! for the Fissure crack-propagation engine.
//!
//! This crate has zero domain logic: it defines the vocabulary
//! that all other Fissure crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{FissureError, FissureResult};
pub use ids::{MarkerId, TriangleId};
pub use scalar::Scalar;
