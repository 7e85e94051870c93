//! Coordinate access along the lateral (toughness-bias) axis.
//!
//! Smoothing and the toughness field only ever look at a marker's
//! coordinate along this axis. When the axis is a positive basis vector
//! the coordinate is read and written directly so the update is exact.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A unit axis with exact component access for basis-aligned directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LateralAxis {
    dir: DVec3,
    component: Option<usize>,
}

impl LateralAxis {
    /// Creates a lateral axis from any non-zero direction (normalized).
    ///
    /// Returns `None` for zero-length or non-finite input.
    pub fn new(dir: DVec3) -> Option<Self> {
        let dir = dir.try_normalize()?;
        let component = [DVec3::X, DVec3::Y, DVec3::Z]
            .iter()
            .position(|&basis| basis == dir);
        Some(Self { dir, component })
    }

    /// The unit direction.
    #[inline]
    pub fn dir(&self) -> DVec3 {
        self.dir
    }

    /// Coordinate of `p` along the axis.
    #[inline]
    pub fn coordinate(&self, p: DVec3) -> f64 {
        match self.component {
            Some(c) => p[c],
            None => p.dot(self.dir),
        }
    }

    /// Overwrites the axis coordinate of `p`, leaving the orthogonal part untouched.
    #[inline]
    pub fn set_coordinate(&self, p: &mut DVec3, value: f64) {
        match self.component {
            Some(c) => p[c] = value,
            None => *p += (value - p.dot(self.dir)) * self.dir,
        }
    }

    /// `p` shifted by `distance` along the axis.
    #[inline]
    pub fn offset(&self, p: DVec3, distance: f64) -> DVec3 {
        p + self.dir * distance
    }
}

impl Default for LateralAxis {
    fn default() -> Self {
        Self {
            dir: DVec3::Y,
            component: Some(1),
        }
    }
}
