//! Run metrics: data collected during a simulation run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Markers in the ring.
    pub marker_count: usize,
    /// Markers that broke through.
    pub finished_markers: usize,
    /// Whether every marker broke through before the budget ran out.
    pub completed: bool,
    /// Number of steps executed.
    pub steps: u64,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per step (seconds).
    pub avg_step_time: f64,
    /// Minimum step time.
    pub min_step_time: f64,
    /// Maximum step time.
    pub max_step_time: f64,
    /// Largest lateral distance of any marker from the seed point.
    pub max_lateral_deviation: f64,
    /// Final surface vertex count.
    pub surface_vertices: usize,
    /// Final surface triangle count.
    pub surface_triangles: usize,
    /// Final surface area.
    pub surface_area: f64,
}

impl RunMetrics {
    /// CSV header matching [`to_csv_row`](Self::to_csv_row).
    pub fn to_csv_header() -> String {
        "scenario,marker_count,finished,completed,steps,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,max_lateral_deviation,surface_vertices,surface_triangles,surface_area".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6},{},{},{:.6}",
            self.scenario,
            self.marker_count,
            self.finished_markers,
            self.completed,
            self.steps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.max_lateral_deviation,
            self.surface_vertices,
            self.surface_triangles,
            self.surface_area,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[RunMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
