//! # fissure-math
//!
//! Geometry primitives for the Fissure crack-propagation engine.
//!
//! Provides:
//! - Re-exports of double-precision `glam` types (`Vec3`, `Mat3`, `Quat`)
//! - Ring rotation helpers used to seed the crack front
//! - [`LateralAxis`]: coordinate access along the toughness-bias axis

pub mod lateral;
pub mod rotation;

// Double precision throughout: the bias curve and the segment tolerances are calibrated for f64.
pub use glam::{DMat3 as Mat3, DQuat as Quat, DVec3 as Vec3};

pub use lateral::LateralAxis;
pub use rotation::{ring_directions, rotation_about};
