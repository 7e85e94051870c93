//! The crack front: a ring of markers advanced in lockstep.
//!
//! One [`CrackFront::step`] is:
//!
//! ```text
//! for each active marker (index order):
//!     propagate (bias from toughness × restlessness)
//!     test previous → current against the boundary
//!     on hit: snap to the intersection point, mark finished
//! smooth lateral coordinates over the whole ring
//! ```
//!
//! Marker state is committed only if the whole step succeeds.

use rayon::prelude::*;
use tracing::{debug, info};

use fissure_contact::{IntersectionTester, SegmentHit, TriangleBounds};
use fissure_material::ToughnessField;
use fissure_math::{ring_directions, LateralAxis, Vec3};
use fissure_mesh::BoundaryMesh;
use fissure_types::{FissureError, FissureResult, MarkerId, TriangleId};

use crate::config::FrontConfig;
use crate::marker::Marker;
use crate::restlessness::{Restlessness, UniformRestlessness};
use crate::smoothing::smooth_markers;

/// A marker that crossed the boundary during a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakthrough {
    pub marker: MarkerId,
    pub point: Vec3,
    pub triangle: TriangleId,
}

/// Summary of one [`CrackFront::step`].
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Zero-based index of the step just taken.
    pub step: u64,
    /// Markers that propagated this step.
    pub active: usize,
    /// Markers that finished this step, in index order.
    pub breakthroughs: Vec<Breakthrough>,
    /// Total finished markers after the step.
    pub finished_count: usize,
    /// Largest absolute bias applied.
    pub max_bias: f64,
    /// Largest lateral change caused by smoothing.
    pub smoothing_shift: f64,
}

/// Ring of markers expanding from a seed point.
pub struct CrackFront {
    markers: Vec<Marker>,
    finished_count: usize,
    step_index: u64,
    origin: Vec3,
    lateral: LateralAxis,
    toughness: ToughnessField,
    config: FrontConfig,
    restlessness: Box<dyn Restlessness>,
    tester: IntersectionTester,
}

impl CrackFront {
    /// Seeds a ring at `start` with the given restlessness source.
    ///
    /// Marker `i` heads along the initial direction rotated `i * 360°/N`
    /// about the lateral axis.
    pub fn new(
        start: Vec3,
        config: FrontConfig,
        toughness: ToughnessField,
        restlessness: Box<dyn Restlessness>,
    ) -> FissureResult<Self> {
        config.validate()?;
        if !start.is_finite() {
            return Err(FissureError::InvalidConfig(format!(
                "Start location {:?} is not finite",
                start
            )));
        }

        let lateral = config.lateral()?;
        let markers: Vec<Marker> =
            ring_directions(config.direction().normalize(), lateral.dir(), config.marker_count)
                .into_iter()
                .map(|dir| Marker::new(start, dir, lateral, config.move_speed))
                .collect();

        debug!(
            markers = markers.len(),
            move_speed = config.move_speed,
            restlessness = restlessness.name(),
            "Seeded crack front"
        );

        Ok(Self {
            markers,
            finished_count: 0,
            step_index: 0,
            origin: start,
            lateral,
            toughness,
            config,
            restlessness,
            tester: IntersectionTester::new(),
        })
    }

    /// Seeds a ring with a uniform restlessness source seeded from `seed`.
    pub fn seeded(
        start: Vec3,
        config: FrontConfig,
        toughness: ToughnessField,
        seed: u64,
    ) -> FissureResult<Self> {
        let source = UniformRestlessness::seeded(seed, config.restlessness_range)?;
        Self::new(start, config, toughness, Box::new(source))
    }

    /// Advances every active marker one step against `boundary`.
    pub fn step<M: BoundaryMesh + Sync + ?Sized>(
        &mut self,
        boundary: &M,
    ) -> FissureResult<StepReport> {
        let first = self.step_index == 0;
        let mut next = self.markers.clone();

        let mut active = Vec::with_capacity(next.len());
        let mut max_bias: f64 = 0.0;
        for (i, marker) in next.iter_mut().enumerate() {
            if marker.is_finished() {
                continue;
            }
            let bias = marker.propagate(&self.toughness, first, self.restlessness.as_mut());
            max_bias = max_bias.max(bias.abs());
            active.push(i);
        }

        let bounds = self
            .config
            .broad_phase
            .then(|| TriangleBounds::build(boundary));
        let hits = self.test_segments(&next, &active, boundary, bounds.as_ref())?;

        let mut breakthroughs = Vec::new();
        for (&i, hit) in active.iter().zip(&hits) {
            let (true, Some(triangle)) = (hit.hit, hit.triangle) else {
                continue;
            };
            next[i].finish(hit.point);
            let marker = MarkerId(i as u32);
            info!(%marker, step = self.step_index, point = ?hit.point, "Marker broke through");
            breakthroughs.push(Breakthrough {
                marker,
                point: hit.point,
                triangle,
            });
        }

        let smoothing_shift = smooth_markers(&mut next, &self.config.smoothing);

        self.markers = next;
        self.finished_count += breakthroughs.len();
        let step = self.step_index;
        self.step_index += 1;

        debug!(
            step,
            active = active.len(),
            finished = self.finished_count,
            max_bias,
            smoothing_shift,
            "Crack front step"
        );

        Ok(StepReport {
            step,
            active: active.len(),
            breakthroughs,
            finished_count: self.finished_count,
            max_bias,
            smoothing_shift,
        })
    }

    fn test_segments<M: BoundaryMesh + Sync + ?Sized>(
        &self,
        markers: &[Marker],
        active: &[usize],
        boundary: &M,
        bounds: Option<&TriangleBounds>,
    ) -> FissureResult<Vec<SegmentHit>> {
        let tester = self.tester;
        let test = |i: &usize| -> FissureResult<SegmentHit> {
            let (p0, p1) = markers[*i].segment();
            match bounds {
                Some(b) => tester.test_segment_bounded(p0, p1, boundary, b),
                None => tester.test_segment(p0, p1, boundary),
            }
        };

        if self.config.parallel {
            active.par_iter().map(test).collect()
        } else {
            active.iter().map(test).collect()
        }
    }

    /// The marker ring in index order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// A single marker.
    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(id.index())
    }

    /// Number of markers in the ring.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Always false for a validated front; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn finished_count(&self) -> usize {
        self.finished_count
    }

    /// True once every marker has broken through.
    pub fn is_complete(&self) -> bool {
        self.finished_count == self.markers.len()
    }

    /// Number of steps taken so far.
    pub fn step_index(&self) -> u64 {
        self.step_index
    }

    /// The seed point.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn toughness(&self) -> &ToughnessField {
        &self.toughness
    }

    pub fn config(&self) -> &FrontConfig {
        &self.config
    }

    /// Largest lateral distance of any marker from the seed point.
    pub fn max_lateral_deviation(&self) -> f64 {
        let base = self.lateral.coordinate(self.origin);
        self.markers
            .iter()
            .map(|m| (m.lateral_coordinate() - base).abs())
            .fold(0.0, f64::max)
    }

    /// Replaces the restlessness source (e.g., to replay a recorded run).
    pub fn set_restlessness(&mut self, restlessness: Box<dyn Restlessness>) {
        self.restlessness = restlessness;
    }
}

impl std::fmt::Debug for CrackFront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrackFront")
            .field("markers", &self.markers.len())
            .field("finished_count", &self.finished_count)
            .field("step_index", &self.step_index)
            .field("restlessness", &self.restlessness.name())
            .finish()
    }
}
