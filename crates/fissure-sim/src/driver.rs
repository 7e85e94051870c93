//! Simulation driver: advances the front and rebuilds the surface.
//!
//! Per step:
//!
//! ```text
//! StepBegin → front.step(boundary) → MarkerFinished* → Smoothed
//!           → builder.build(ring) → SurfaceBuilt → StepEnd
//! ```
//!
//! `run` repeats this until every marker has finished or the step
//! budget is spent, then emits `Completed`.

use std::time::Instant;

use tracing::{debug, info};

use fissure_io::contract::ScenarioInput;
use fissure_io::validator::validate_input;
use fissure_material::MaterialDatabase;
use fissure_mesh::{Topology, TriangleMesh};
use fissure_solver::{CrackFront, StepReport, UniformRestlessness};
use fissure_surface::{CrackSurface, CrackSurfaceBuilder};
use fissure_telemetry::{EventBus, EventKind, EventSink, SimulationEvent};
use fissure_types::FissureResult;

use crate::metrics::RunMetrics;

/// A crack front inside a boundary body, plus its reconstructed surface.
pub struct Simulation {
    name: String,
    front: CrackFront,
    boundary: TriangleMesh,
    builder: CrackSurfaceBuilder,
    surface: CrackSurface,
    history: Option<Vec<CrackSurface>>,
    bus: EventBus,
    step_times: Vec<f64>,
}

impl Simulation {
    /// Assembles a simulation from prepared parts.
    pub fn new(
        name: &str,
        front: CrackFront,
        boundary: TriangleMesh,
        builder: CrackSurfaceBuilder,
    ) -> Self {
        Self {
            name: name.to_string(),
            front,
            boundary,
            builder,
            surface: CrackSurface::default(),
            history: None,
            bus: EventBus::new(),
            step_times: Vec::new(),
        }
    }

    /// Validates `input` and builds every part it describes.
    pub fn from_input(input: &ScenarioInput, db: &MaterialDatabase) -> FissureResult<Self> {
        validate_input(input, db)?;

        let toughness = input.toughness.resolve(db)?;
        let boundary = input.boundary.build()?;
        let range = input.front.restlessness_range;
        let restlessness = match input.run.seed {
            Some(seed) => UniformRestlessness::seeded(seed, range)?,
            None => UniformRestlessness::from_entropy(range)?,
        };
        let front = CrackFront::new(
            input.start_point(),
            input.front.clone(),
            toughness,
            Box::new(restlessness),
        )?;
        let builder = CrackSurfaceBuilder::new(input.surface.clone())?;

        info!(
            scenario = %input.name,
            boundary = input.boundary.kind(),
            triangles = boundary.triangle_count(),
            markers = front.len(),
            "Simulation ready"
        );

        let mut sim = Self::new(&input.name, front, boundary, builder);
        sim.set_record_history(input.run.record_history);
        Ok(sim)
    }

    /// Keep every step's surface instead of only the latest.
    pub fn set_record_history(&mut self, record: bool) {
        match (record, self.history.is_some()) {
            (true, false) => self.history = Some(Vec::new()),
            (false, true) => self.history = None,
            _ => {}
        }
    }

    /// Registers a telemetry sink.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.bus.add_sink(sink);
    }

    /// Runs one step and rebuilds the surface.
    pub fn advance(&mut self) -> FissureResult<StepReport> {
        let start = Instant::now();
        let step = self.front.step_index();

        let active = self.front.len() - self.front.finished_count();
        self.bus.emit(SimulationEvent::new(
            step,
            EventKind::StepBegin {
                active_markers: active,
            },
        ));

        let report = self.front.step(&self.boundary)?;

        for b in &report.breakthroughs {
            self.bus.emit(SimulationEvent::new(
                step,
                EventKind::MarkerFinished {
                    marker: b.marker.0,
                    point: b.point.to_array(),
                    triangle: b.triangle.0,
                },
            ));
        }
        self.bus.emit(SimulationEvent::new(
            step,
            EventKind::Smoothed {
                iterations: self.front.config().smoothing.iterations,
                max_shift: report.smoothing_shift,
            },
        ));

        self.surface = self.builder.build(self.front.markers());
        if let Some(history) = &mut self.history {
            history.push(self.surface.clone());
        }
        self.bus.emit(SimulationEvent::new(
            step,
            EventKind::SurfaceBuilt {
                vertices: self.surface.vertices.len(),
                triangles: self.surface.triangles.len(),
            },
        ));
        if tracing::enabled!(tracing::Level::DEBUG) && !self.surface.is_empty() {
            let topo = Topology::build(&self.surface);
            debug!(
                step,
                closed = topo.is_closed(),
                manifold = topo.is_manifold(),
                oriented = topo.is_consistently_oriented(),
                "Surface topology"
            );
        }

        let wall_time = start.elapsed().as_secs_f64();
        self.step_times.push(wall_time);
        self.bus.emit(SimulationEvent::new(
            step,
            EventKind::StepEnd {
                wall_time,
                finished_count: report.finished_count,
            },
        ));
        self.bus.flush();

        Ok(report)
    }

    /// Advances until every marker has finished or `step_budget` more
    /// steps have run.
    pub fn run(&mut self, step_budget: u32) -> FissureResult<RunMetrics> {
        let total_start = Instant::now();
        let mut taken = 0u32;
        while taken < step_budget && !self.front.is_complete() {
            self.advance()?;
            taken += 1;
        }
        let total_wall_time = total_start.elapsed().as_secs_f64();

        let completed = self.front.is_complete();
        self.bus.emit(SimulationEvent::new(
            self.front.step_index(),
            EventKind::Completed {
                steps: self.front.step_index(),
                finished_count: self.front.finished_count(),
                all_finished: completed,
            },
        ));
        self.bus.finalize();

        info!(
            scenario = %self.name,
            steps = self.front.step_index(),
            finished = self.front.finished_count(),
            markers = self.front.len(),
            completed,
            "Simulation finished"
        );

        Ok(self.metrics(total_wall_time))
    }

    fn metrics(&self, total_wall_time: f64) -> RunMetrics {
        let times = &self.step_times;
        let avg_step_time = if times.is_empty() {
            0.0
        } else {
            times.iter().sum::<f64>() / times.len() as f64
        };
        let min_step_time = if times.is_empty() {
            0.0
        } else {
            times.iter().copied().fold(f64::MAX, f64::min)
        };
        let max_step_time = times.iter().copied().fold(0.0, f64::max);

        RunMetrics {
            scenario: self.name.clone(),
            marker_count: self.front.len(),
            finished_markers: self.front.finished_count(),
            completed: self.front.is_complete(),
            steps: self.front.step_index(),
            total_wall_time,
            avg_step_time,
            min_step_time,
            max_step_time,
            max_lateral_deviation: self.front.max_lateral_deviation(),
            surface_vertices: self.surface.vertices.len(),
            surface_triangles: self.surface.triangles.len(),
            surface_area: self.surface.area(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn front(&self) -> &CrackFront {
        &self.front
    }

    pub fn boundary(&self) -> &TriangleMesh {
        &self.boundary
    }

    /// The latest crack surface.
    pub fn surface(&self) -> &CrackSurface {
        &self.surface
    }

    /// One surface per step, when history recording is on.
    pub fn history(&self) -> &[CrackSurface] {
        self.history.as_deref().unwrap_or(&[])
    }

    pub fn is_complete(&self) -> bool {
        self.front.is_complete()
    }
}
