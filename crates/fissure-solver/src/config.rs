//! Crack-front configuration.
//!
//! Parameters that control ring seeding, per-step propagation and the
//! smoothing filter.

use serde::{Deserialize, Serialize};

use fissure_math::{LateralAxis, Vec3};
use fissure_types::constants::{
    DEFAULT_MARKER_COUNT, DEFAULT_MOVE_SPEED, DEFAULT_RESTLESSNESS_RANGE,
    DEFAULT_SMOOTHING_ITERATIONS, MIN_MARKER_COUNT,
};
use fissure_types::{FissureError, FissureResult};

/// Smallest `|dir × lateral|` accepted between the two axes.
const AXIS_PARALLEL_TOLERANCE: f64 = 1e-9;

/// Configuration for the lateral smoothing pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Full ring sweeps per step. Zero disables smoothing.
    pub iterations: u32,

    /// Keep finished markers fixed. They still act as neighbors.
    pub freeze_finished: bool,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_SMOOTHING_ITERATIONS,
            freeze_finished: false,
        }
    }
}

impl SmoothingConfig {
    /// No smoothing at all: markers drift independently.
    pub fn disabled() -> Self {
        Self {
            iterations: 0,
            ..Default::default()
        }
    }

    /// Default sweeps, but breakthrough points stay exactly where they landed.
    pub fn preserve_breakthroughs() -> Self {
        Self {
            freeze_finished: true,
            ..Default::default()
        }
    }
}

/// Configuration for a [`CrackFront`](crate::front::CrackFront).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontConfig {
    /// Number of markers in the ring.
    pub marker_count: usize,

    /// Displacement per step (scene units).
    pub move_speed: f64,

    /// Heading of marker 0. The other headings are rotated about the lateral axis.
    pub initial_direction: [f64; 3],

    /// Axis the toughness bias deflects along.
    pub lateral_axis: [f64; 3],

    /// `[min, max]` of the stochastic bias factor.
    pub restlessness_range: [f64; 2],

    /// Run segment tests on the rayon pool.
    pub parallel: bool,

    /// Cull boundary triangles by bounding box before the exact test.
    pub broad_phase: bool,

    /// Lateral smoothing applied after every propagation sweep.
    pub smoothing: SmoothingConfig,
}

impl Default for FrontConfig {
    fn default() -> Self {
        Self {
            marker_count: DEFAULT_MARKER_COUNT,
            move_speed: DEFAULT_MOVE_SPEED,
            initial_direction: [1.0, 0.0, 0.0],
            lateral_axis: [0.0, 1.0, 0.0],
            restlessness_range: DEFAULT_RESTLESSNESS_RANGE,
            parallel: false,
            broad_phase: true,
            smoothing: SmoothingConfig::default(),
        }
    }
}

impl FrontConfig {
    /// Creates a config for debugging (small ring, easy to inspect).
    pub fn debug() -> Self {
        Self {
            marker_count: 8,
            ..Default::default()
        }
    }

    /// Creates a high-resolution config (dense ring, half step length).
    pub fn high_resolution() -> Self {
        Self {
            marker_count: 240,
            move_speed: DEFAULT_MOVE_SPEED * 0.5,
            parallel: true,
            ..Default::default()
        }
    }

    /// Heading of marker 0 as a vector.
    pub fn direction(&self) -> Vec3 {
        Vec3::from_array(self.initial_direction)
    }

    /// Normalized lateral axis.
    pub fn lateral(&self) -> FissureResult<LateralAxis> {
        LateralAxis::new(Vec3::from_array(self.lateral_axis)).ok_or_else(|| {
            FissureError::InvalidConfig(format!(
                "Lateral axis {:?} must be finite and non-zero",
                self.lateral_axis
            ))
        })
    }

    /// Checks every ring invariant.
    pub fn validate(&self) -> FissureResult<()> {
        if self.marker_count < MIN_MARKER_COUNT {
            return Err(FissureError::InvalidConfig(format!(
                "Ring needs at least {} markers, got {}",
                MIN_MARKER_COUNT, self.marker_count
            )));
        }
        if u32::try_from(self.marker_count).is_err() {
            return Err(FissureError::InvalidConfig(format!(
                "Ring of {} markers is too large",
                self.marker_count
            )));
        }
        if !(self.move_speed.is_finite() && self.move_speed > 0.0) {
            return Err(FissureError::InvalidConfig(format!(
                "Move speed must be positive, got {}",
                self.move_speed
            )));
        }

        let dir = self.direction();
        if !dir.is_finite() || dir.length_squared() == 0.0 {
            return Err(FissureError::InvalidConfig(format!(
                "Initial direction {:?} must be finite and non-zero",
                self.initial_direction
            )));
        }
        let lateral = self.lateral()?;
        if dir.normalize().cross(lateral.dir()).length() < AXIS_PARALLEL_TOLERANCE {
            return Err(FissureError::InvalidConfig(
                "Initial direction is parallel to the lateral axis".into(),
            ));
        }

        let [lo, hi] = self.restlessness_range;
        if !(lo.is_finite() && hi.is_finite() && 0.0 <= lo && lo <= hi && hi <= 1.0) {
            return Err(FissureError::InvalidConfig(format!(
                "Restlessness range [{}, {}] must satisfy 0 <= min <= max <= 1",
                lo, hi
            )));
        }

        Ok(())
    }
}
