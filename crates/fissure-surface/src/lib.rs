//! # fissure-surface
//!
//! Reconstructs a renderable crack surface from the marker ring.
//!
//! The builder is stateless: every call turns the ring's current and
//! previous positions into a fresh, thin slab mesh. Consumers decide
//! whether to keep one surface per step or only the latest.

pub mod builder;
pub mod surface;
pub mod weld;

pub use builder::{CrackSurfaceBuilder, SurfaceConfig};
pub use surface::{CrackSurface, SurfaceStats};
pub use weld::VertexWelder;
