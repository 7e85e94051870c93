//! Named toughness presets.

use serde::{Deserialize, Serialize};

use fissure_types::FissureResult;

use crate::toughness::ToughnessField;

/// A named material description that produces a [`ToughnessField`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToughnessProfile {
    /// Lookup key (e.g., "layered_shale").
    pub name: String,

    /// One-line description for listings.
    #[serde(default)]
    pub description: String,

    /// Weak lateral positions, in priority order for tie-breaking.
    pub weak_positions: Vec<f64>,
}

impl ToughnessProfile {
    /// Builds the validated toughness field for this profile.
    pub fn field(&self) -> FissureResult<ToughnessField> {
        ToughnessField::new(self.weak_positions.clone())
    }

    /// Number of weak positions.
    pub fn weak_count(&self) -> usize {
        self.weak_positions.len()
    }
}
