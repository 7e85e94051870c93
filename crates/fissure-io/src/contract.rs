//! Scenario input contract types.
//!
//! These types define the I/O boundary of the Fissure engine. They are
//! serializable for CLI configuration files (TOML or JSON).
//!
//! ```toml
//! name = "seam"
//! start = [0.0, 0.0, 0.0]
//!
//! [front]
//! marker_count = 60
//!
//! [toughness]
//! material = "welded_seam"
//!
//! [boundary]
//! kind = "box"
//! min = [-2.5, -2.5, -2.5]
//! max = [2.5, 2.5, 2.5]
//!
//! [run]
//! step_budget = 100
//! seed = 7
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use fissure_material::{MaterialDatabase, ToughnessField};
use fissure_math::Vec3;
use fissure_mesh::generators::{box_mesh, quad_grid, uv_sphere};
use fissure_mesh::TriangleMesh;
use fissure_solver::FrontConfig;
use fissure_surface::SurfaceConfig;
use fissure_types::constants::DEFAULT_STEP_BUDGET;
use fissure_types::{FissureError, FissureResult};

/// Complete input specification for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Label used in logs and metrics.
    #[serde(default = "default_name")]
    pub name: String,

    /// Seed point of the crack front.
    #[serde(default)]
    pub start: [f64; 3],

    #[serde(default)]
    pub front: FrontConfig,

    #[serde(default)]
    pub toughness: ToughnessSpec,

    /// The host body the crack breaks out of.
    pub boundary: BoundarySpec,

    #[serde(default)]
    pub surface: SurfaceConfig,

    #[serde(default)]
    pub run: RunParams,
}

fn default_name() -> String {
    "scenario".to_string()
}

/// Where the toughness field comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToughnessSpec {
    /// A preset from the material database.
    Material { material: String },
    /// An explicit list of weak lateral positions.
    Positions { weak_positions: Vec<f64> },
}

impl Default for ToughnessSpec {
    fn default() -> Self {
        Self::Positions {
            weak_positions: Vec::new(),
        }
    }
}

impl ToughnessSpec {
    /// Builds the toughness field, looking presets up in `db`.
    pub fn resolve(&self, db: &MaterialDatabase) -> FissureResult<ToughnessField> {
        match self {
            Self::Material { material } => db
                .get(material)
                .ok_or_else(|| {
                    FissureError::InvalidConfig(format!(
                        "Unknown material '{}'. Available: {}",
                        material,
                        db.names().join(", ")
                    ))
                })?
                .field(),
            Self::Positions { weak_positions } => ToughnessField::new(weak_positions.clone()),
        }
    }
}

/// Procedural or inline boundary geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoundarySpec {
    /// Closed axis-aligned box.
    Box {
        min: [f64; 3],
        max: [f64; 3],
        #[serde(default = "default_subdivisions")]
        subdivisions: usize,
    },
    /// Rectangle in the XY plane (normal +Z) centered at `center`.
    Plane {
        center: [f64; 3],
        width: f64,
        height: f64,
        #[serde(default = "default_subdivisions")]
        subdivisions: usize,
    },
    /// UV sphere.
    Sphere {
        center: [f64; 3],
        radius: f64,
        #[serde(default = "default_stacks")]
        stacks: usize,
        #[serde(default = "default_slices")]
        slices: usize,
    },
    /// Arbitrary triangle mesh given inline.
    Mesh { mesh: TriangleMesh },
}

fn default_subdivisions() -> usize {
    1
}

fn default_stacks() -> usize {
    16
}

fn default_slices() -> usize {
    32
}

impl BoundarySpec {
    /// Generates the boundary mesh.
    pub fn build(&self) -> FissureResult<TriangleMesh> {
        let mesh = match self {
            Self::Box {
                min,
                max,
                subdivisions,
            } => box_mesh(Vec3::from_array(*min), Vec3::from_array(*max), *subdivisions),
            Self::Plane {
                center,
                width,
                height,
                subdivisions,
            } => {
                let mut mesh = quad_grid(*subdivisions, *subdivisions, *width, *height);
                mesh.translate(Vec3::from_array(*center));
                mesh
            }
            Self::Sphere {
                center,
                radius,
                stacks,
                slices,
            } => {
                let mut mesh = uv_sphere(*radius, *stacks, *slices);
                mesh.translate(Vec3::from_array(*center));
                mesh
            }
            Self::Mesh { mesh } => mesh.clone(),
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Short name of the boundary kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Plane { .. } => "plane",
            Self::Sphere { .. } => "sphere",
            Self::Mesh { .. } => "mesh",
        }
    }
}

/// Run-level parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunParams {
    /// Maximum number of steps.
    pub step_budget: u32,
    /// Restlessness seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Keep one crack surface per step instead of only the latest.
    pub record_history: bool,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            step_budget: DEFAULT_STEP_BUDGET,
            seed: None,
            record_history: false,
        }
    }
}

impl ScenarioInput {
    /// A scenario with default settings against `boundary`.
    pub fn new(name: &str, boundary: BoundarySpec) -> Self {
        Self {
            name: name.to_string(),
            start: [0.0; 3],
            front: FrontConfig::default(),
            toughness: ToughnessSpec::default(),
            boundary,
            surface: SurfaceConfig::default(),
            run: RunParams::default(),
        }
    }

    pub fn start_point(&self) -> Vec3 {
        Vec3::from_array(self.start)
    }

    pub fn from_toml_str(s: &str) -> FissureResult<Self> {
        toml::from_str(s).map_err(|e| FissureError::Serialization(e.to_string()))
    }

    pub fn to_toml_string(&self) -> FissureResult<String> {
        toml::to_string_pretty(self).map_err(|e| FissureError::Serialization(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> FissureResult<Self> {
        serde_json::from_str(s).map_err(|e| FissureError::Serialization(e.to_string()))
    }

    pub fn to_json_string(&self) -> FissureResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FissureError::Serialization(e.to_string()))
    }

    /// Loads a scenario file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> FissureResult<Self> {
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text),
            _ => Self::from_toml_str(&text),
        }
    }
}
