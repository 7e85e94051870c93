//! Sources of the stochastic bias factor.
//!
//! Every non-first propagation scales the toughness weight by a factor
//! `r`, so two runs over identical material still produce different
//! cracks. The source is a trait so tests and replays can pin it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fissure_types::{FissureError, FissureResult};

/// Produces restlessness factors, one per active marker per step.
///
/// Called in ring index order.
pub trait Restlessness: Send {
    /// Next factor. Production sources stay within `[0, 1]`.
    fn sample(&mut self) -> f64;

    /// Returns the source name.
    fn name(&self) -> &str;
}

/// Uniform draw from `[min, max]`.
#[derive(Debug, Clone)]
pub struct UniformRestlessness<R: Rng = StdRng> {
    rng: R,
    min: f64,
    max: f64,
}

impl UniformRestlessness<StdRng> {
    /// Deterministic source seeded from `seed`.
    pub fn seeded(seed: u64, range: [f64; 2]) -> FissureResult<Self> {
        Self::from_rng(StdRng::seed_from_u64(seed), range)
    }

    /// Source seeded from OS entropy.
    pub fn from_entropy(range: [f64; 2]) -> FissureResult<Self> {
        Self::from_rng(StdRng::from_entropy(), range)
    }
}

impl<R: Rng> UniformRestlessness<R> {
    /// Wraps an existing generator.
    pub fn from_rng(rng: R, range: [f64; 2]) -> FissureResult<Self> {
        let [min, max] = range;
        if !(min.is_finite() && max.is_finite() && min <= max) {
            return Err(FissureError::InvalidConfig(format!(
                "Invalid restlessness range [{}, {}]",
                min, max
            )));
        }
        Ok(Self { rng, min, max })
    }

    /// The `[min, max]` range.
    pub fn range(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

impl<R: Rng + Send> Restlessness for UniformRestlessness<R> {
    fn sample(&mut self) -> f64 {
        self.rng.gen_range(self.min..=self.max)
    }

    fn name(&self) -> &str {
        "uniform"
    }
}

/// Replays a fixed sequence, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct FixedRestlessness {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedRestlessness {
    /// Cycles through `values`. Rejects an empty sequence.
    pub fn new(values: Vec<f64>) -> FissureResult<Self> {
        if values.is_empty() {
            return Err(FissureError::InvalidConfig(
                "Fixed restlessness needs at least one value".into(),
            ));
        }
        Ok(Self { values, cursor: 0 })
    }

    /// Always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self {
            values: vec![value],
            cursor: 0,
        }
    }
}

impl Restlessness for FixedRestlessness {
    fn sample(&mut self) -> f64 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
