//! Calibration constants and simulation defaults.

/// Default number of markers in the crack-front ring.
pub const DEFAULT_MARKER_COUNT: usize = 60;

/// Smallest ring the smoothing window can operate on.
pub const MIN_MARKER_COUNT: usize = SMOOTHING_WINDOW;

/// Default per-step marker displacement (scene units).
pub const DEFAULT_MOVE_SPEED: f64 = 0.025;

/// Default restlessness range `[min, max]` the stochastic bias factor is drawn from.
pub const DEFAULT_RESTLESSNESS_RANGE: [f64; 2] = [0.15, 1.0];

/// Number of markers averaged by one smoothing update (centered window).
pub const SMOOTHING_WINDOW: usize = 5;

/// Default smoothing sweeps per step.
pub const DEFAULT_SMOOTHING_ITERATIONS: u32 = 10;

/// Default slab thickness of the reconstructed crack surface.
pub const DEFAULT_SURFACE_THICKNESS: f64 = 0.005;

/// Parallel-segment tolerance for `|n · (p1 - p0)|`.
pub const SEGMENT_PARALLEL_EPSILON: f64 = 1.0e-6;

/// Default step budget for a simulation run.
pub const DEFAULT_STEP_BUDGET: u32 = 100;
