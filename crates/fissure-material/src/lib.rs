//! # fissure-material
//!
//! Material toughness model and preset database.
//!
//! ## Design
//!
//! The [`ToughnessField`] is a sparse set of weak positions along the
//! lateral axis. It answers one question per marker per step: how
//! strongly, and in which direction, should the crack deviate from
//! straight-line propagation?
//!
//! The [`MaterialDatabase`] stores named [`ToughnessProfile`] presets so
//! scenarios can refer to a material by name.

pub mod database;
pub mod profile;
pub mod toughness;

pub use database::MaterialDatabase;
pub use profile::ToughnessProfile;
pub use toughness::{ToughnessField, WeakSpot};
