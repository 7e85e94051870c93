//! Material database with toughness presets.
//!
//! Presets are keyed by name and can be extended at runtime.

use std::collections::HashMap;

use crate::profile::ToughnessProfile;

/// A named collection of toughness presets.
///
/// Materials are looked up by name (e.g., "homogeneous", "layered_shale").
/// Custom materials can be registered at runtime.
#[derive(Debug, Clone)]
pub struct MaterialDatabase {
    materials: HashMap<String, ToughnessProfile>,
}

impl MaterialDatabase {
    /// Creates a new database with the built-in presets.
    pub fn with_defaults() -> Self {
        let mut db = Self::empty();

        db.register(homogeneous());
        db.register(layered_shale());
        db.register(welded_seam());
        db.register(laminate());

        db
    }

    /// Creates an empty database.
    pub fn empty() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// Registers a material. Overwrites if the name already exists.
    pub fn register(&mut self, profile: ToughnessProfile) {
        self.materials.insert(profile.name.clone(), profile);
    }

    /// Looks up a material by name. Returns `None` if not found.
    pub fn get(&self, name: &str) -> Option<&ToughnessProfile> {
        self.materials.get(name)
    }

    /// Returns all registered material names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.materials.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns true if the database is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialDatabase {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── Built-in Presets ─────────────────────────────────────────────────

/// Uniform material. The crack runs straight.
fn homogeneous() -> ToughnessProfile {
    ToughnessProfile {
        name: "homogeneous".into(),
        description: "Uniform toughness, no lateral bias".into(),
        weak_positions: Vec::new(),
    }
}

/// Sedimentary layering with bedding planes every 0.75 units.
fn layered_shale() -> ToughnessProfile {
    ToughnessProfile {
        name: "layered_shale".into(),
        description: "Bedding planes at regular lateral spacing".into(),
        weak_positions: vec![-1.5, -0.75, 0.75, 1.5],
    }
}

/// A single weld line slightly above the seed point.
fn welded_seam() -> ToughnessProfile {
    ToughnessProfile {
        name: "welded_seam".into(),
        description: "One heat-affected seam above the seed".into(),
        weak_positions: vec![0.5],
    }
}

/// Thin bonded plies stacked above the seed point.
fn laminate() -> ToughnessProfile {
    ToughnessProfile {
        name: "laminate".into(),
        description: "Closely spaced ply interfaces".into(),
        weak_positions: vec![0.25, 0.5, 0.75, 1.0],
    }
}
