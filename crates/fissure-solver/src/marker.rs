//! A single point on the crack front.

use serde::{Deserialize, Serialize};

use fissure_material::ToughnessField;
use fissure_math::{LateralAxis, Vec3};

use crate::restlessness::Restlessness;

/// One element of the crack-front ring.
///
/// Moves forward along a fixed heading each step, deflected along the
/// lateral axis by the toughness bias. Once finished it never moves again
/// except through smoothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    current: Vec3,
    previous: Vec3,
    direction: Vec3,
    lateral: LateralAxis,
    move_speed: f64,
    finished: bool,
    intersection: Option<Vec3>,
}

impl Marker {
    /// A marker at `start` heading along `direction` (normalized).
    pub fn new(start: Vec3, direction: Vec3, lateral: LateralAxis, move_speed: f64) -> Self {
        Self {
            current: start,
            previous: start,
            direction: direction.normalize_or_zero(),
            lateral,
            move_speed,
            finished: false,
            intersection: None,
        }
    }

    #[inline]
    pub fn current(&self) -> Vec3 {
        self.current
    }

    #[inline]
    pub fn previous(&self) -> Vec3 {
        self.previous
    }

    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    #[inline]
    pub fn lateral(&self) -> &LateralAxis {
        &self.lateral
    }

    #[inline]
    pub fn move_speed(&self) -> f64 {
        self.move_speed
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Where the marker broke through the boundary, if it has.
    #[inline]
    pub fn intersection(&self) -> Option<Vec3> {
        self.intersection
    }

    /// The segment travelled in the last step: `(previous, current)`.
    #[inline]
    pub fn segment(&self) -> (Vec3, Vec3) {
        (self.previous, self.current)
    }

    /// Current coordinate along the lateral axis.
    #[inline]
    pub fn lateral_coordinate(&self) -> f64 {
        self.lateral.coordinate(self.current)
    }

    /// Overwrites the lateral coordinate of the current position.
    #[inline]
    pub fn set_lateral_coordinate(&mut self, value: f64) {
        self.lateral.set_coordinate(&mut self.current, value);
    }

    /// Advances one step and returns the bias that was applied.
    ///
    /// The first step is a pure forward move. Later steps draw `r` from
    /// `restlessness` and use `bias = r * toughness.weight_at(current)`.
    /// Finished markers stay put and draw nothing.
    pub fn propagate(
        &mut self,
        toughness: &ToughnessField,
        is_first_step: bool,
        restlessness: &mut dyn Restlessness,
    ) -> f64 {
        if self.finished {
            return 0.0;
        }
        let bias = if is_first_step {
            0.0
        } else {
            let r = restlessness.sample();
            r * toughness.weight_at_point(self.current, &self.lateral)
        };
        self.propagate_with_bias(bias);
        bias
    }

    /// Advances one step with an explicit bias in `[-1, 1]`.
    ///
    /// `|forward| + |lateral| == move_speed`: the bias trades forward
    /// progress for sideways drift.
    pub fn propagate_with_bias(&mut self, bias: f64) {
        if self.finished {
            return;
        }
        self.previous = self.current;
        self.current += self.move_speed * self.direction * (1.0 - bias.abs())
            + bias * self.move_speed * self.lateral.dir();
    }

    /// Marks the marker finished at the boundary intersection `point`.
    pub fn finish(&mut self, point: Vec3) {
        self.current = point;
        self.intersection = Some(point);
        self.finished = true;
    }
}
