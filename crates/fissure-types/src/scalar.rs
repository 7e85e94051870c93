//! Scalar type alias for the simulation.
//!
//! The bias curve and the intersection tolerances are calibrated in
//! double precision, so everything geometric runs on `f64`.

/// The floating-point type used throughout the simulation.
pub type Scalar = f64;
