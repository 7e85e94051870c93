//! Error types for the Fissure engine.
//!
//! All crates return `FissureResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Fissure engine.
#[derive(Debug, Error)]
pub enum FissureError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid (ring too small, zero axis, ...).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A boundary triangle produced an unsolvable barycentric system.
    #[error("Degenerate geometry in triangle {triangle}: {reason}")]
    DegenerateGeometry {
        triangle: u32,
        reason: String,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A simulation invariant was violated.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Convenience alias for `Result<T, FissureError>`.
pub type FissureResult<T> = Result<T, FissureError>;
