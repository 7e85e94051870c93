//! Toughness field: the lateral bias model.
//!
//! The response curve is empirical: it was calibrated by eye against
//! reference fracture renders, not derived from a stress solution. The
//! constants below are reproduced exactly so runs stay comparable.
//!
//! ```text
//! ratio  = threshold / (threshold + 0.35)
//! raw    = exp(0.357 * (ratio * distance - threshold)^3)^(π/10) + 0.004
//! weight = clamp(raw, 0, 1) * 0.67 * sign
//! ```
//!
//! where `threshold` is the nearest weak position itself and `distance`
//! the absolute lateral offset to it.

use fissure_math::{LateralAxis, Vec3};
use fissure_types::{FissureError, FissureResult};
use serde::{Deserialize, Serialize};

/// Offset added to the threshold in the decay ratio denominator.
pub const RATIO_OFFSET: f64 = 0.35;

/// Coefficient of the cubic term inside the exponential.
pub const CURVE_GAIN: f64 = 0.357;

/// Exponent applied to the exponential (π / 10).
pub const CURVE_EXPONENT: f64 = std::f64::consts::PI / 10.0;

/// Floor added before clamping.
pub const CURVE_FLOOR: f64 = 0.004;

/// Maximum absolute bias weight.
pub const MAX_WEIGHT: f64 = 0.67;

/// Sign factor used when a marker sits exactly on a weak position.
///
/// A zero sign would lock the marker onto the seam and produce a
/// perfectly straight crack there.
pub const SEAM_SIGN: f64 = 0.01;

/// The weak position closest to a queried lateral coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeakSpot {
    /// Index into the field's weak position list.
    pub index: usize,
    /// Lateral coordinate of the weak position.
    pub position: f64,
    /// `position - lateral`: positive when the weak spot lies above the query.
    pub offset: f64,
}

impl WeakSpot {
    /// Absolute lateral distance to the weak spot.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.offset.abs()
    }
}

/// Sparse scalar field of weaker material along the lateral axis.
///
/// Read-only for the duration of a run; shared by every marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ToughnessField {
    weak_positions: Vec<f64>,
}

impl ToughnessField {
    /// Creates a field from an ordered list of weak lateral positions.
    ///
    /// Rejects non-finite positions and `-0.35`, where the decay ratio
    /// denominator vanishes.
    pub fn new(weak_positions: Vec<f64>) -> FissureResult<Self> {
        for (i, &w) in weak_positions.iter().enumerate() {
            if !w.is_finite() {
                return Err(FissureError::InvalidConfig(format!(
                    "Weak position {} is not finite ({})",
                    i, w
                )));
            }
            if w + RATIO_OFFSET == 0.0 {
                return Err(FissureError::InvalidConfig(format!(
                    "Weak position {} at {} makes the decay ratio undefined",
                    i, w
                )));
            }
        }
        Ok(Self { weak_positions })
    }

    /// A field with no weak spots: zero bias everywhere.
    pub fn homogeneous() -> Self {
        Self::default()
    }

    /// The weak positions, in the order they were supplied.
    pub fn weak_positions(&self) -> &[f64] {
        &self.weak_positions
    }

    /// Returns true if the field has no weak spots.
    pub fn is_empty(&self) -> bool {
        self.weak_positions.is_empty()
    }

    /// Finds the weak position nearest to `lateral`.
    ///
    /// On equal distances the earliest position in the list wins.
    pub fn nearest(&self, lateral: f64) -> Option<WeakSpot> {
        let mut best: Option<WeakSpot> = None;
        for (index, &position) in self.weak_positions.iter().enumerate() {
            let offset = position - lateral;
            match best {
                Some(b) if offset.abs() >= b.distance() => {}
                _ => {
                    best = Some(WeakSpot {
                        index,
                        position,
                        offset,
                    })
                }
            }
        }
        best
    }

    /// Signed bias weight in `[-MAX_WEIGHT, MAX_WEIGHT]` at a lateral coordinate.
    ///
    /// Negative when the nearest weak spot lies below `lateral`, positive
    /// when above. An empty field yields `0.0`.
    pub fn weight_at(&self, lateral: f64) -> f64 {
        let Some(spot) = self.nearest(lateral) else {
            return 0.0;
        };

        let sign = if spot.position < lateral {
            -1.0
        } else if spot.position > lateral {
            1.0
        } else {
            SEAM_SIGN
        };

        sign * response_magnitude(spot.distance(), spot.position)
    }

    /// Signed bias weight at a 3D point, measured along `axis`.
    pub fn weight_at_point(&self, p: Vec3, axis: &LateralAxis) -> f64 {
        self.weight_at(axis.coordinate(p))
    }
}

impl TryFrom<Vec<f64>> for ToughnessField {
    type Error = FissureError;

    fn try_from(weak_positions: Vec<f64>) -> FissureResult<Self> {
        Self::new(weak_positions)
    }
}

impl From<ToughnessField> for Vec<f64> {
    fn from(field: ToughnessField) -> Self {
        field.weak_positions
    }
}

/// Unsigned response curve: `clamp(raw, 0, 1) * MAX_WEIGHT`.
pub fn response_magnitude(distance: f64, threshold: f64) -> f64 {
    let ratio = threshold / (threshold + RATIO_OFFSET);
    let cubic = (ratio * distance - threshold).powi(3);
    let raw = (CURVE_GAIN * cubic).exp().powf(CURVE_EXPONENT) + CURVE_FLOOR;
    raw.clamp(0.0, 1.0) * MAX_WEIGHT
}
