//! Crack surface export.
//!
//! [`SurfaceSequenceExporter`] captures one surface per step and writes
//! the whole sequence to a JSON file for visual inspection. Surfaces are
//! rebuilt from scratch every step, so each frame carries its own indices.

use std::fmt::Write as _;

use serde::Serialize;

use fissure_surface::CrackSurface;
use fissure_types::{FissureError, FissureResult};

/// A single captured surface.
#[derive(Serialize)]
struct FrameData {
    step: u64,
    positions: Vec<f64>, // Interleaved [x0,y0,z0, x1,y1,z1, ...]
    indices: Vec<u32>,
}

#[derive(Serialize)]
struct SequenceData<'a> {
    scenario: &'a str,
    frames: &'a [FrameData],
}

/// Collects per-step crack surfaces and writes them as one JSON document.
///
/// Usage:
/// ```text
/// let mut exporter = SurfaceSequenceExporter::new("crack.json", "box_breakout");
/// // ... call submit() after every step ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct SurfaceSequenceExporter {
    output_path: String,
    scenario: String,
    frames: Vec<FrameData>,
}

impl SurfaceSequenceExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: &str, scenario: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
            scenario: scenario.to_string(),
            frames: Vec::new(),
        }
    }

    /// Captures `surface` as the frame for `step`.
    pub fn submit(&mut self, step: u64, surface: &CrackSurface) {
        let positions = surface.vertices.iter().flat_map(|v| v.to_array()).collect();
        let indices = surface.triangles.iter().flatten().copied().collect();
        self.frames.push(FrameData {
            step,
            positions,
            indices,
        });
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Serializes the captured frames.
    pub fn to_json(&self) -> FissureResult<String> {
        let data = SequenceData {
            scenario: &self.scenario,
            frames: &self.frames,
        };
        serde_json::to_string(&data).map_err(|e| FissureError::Serialization(e.to_string()))
    }

    /// Writes the JSON file.
    pub fn finalize(&self) -> FissureResult<()> {
        std::fs::write(&self.output_path, self.to_json()?)?;
        Ok(())
    }
}

/// Wavefront OBJ text for a single surface (1-based indices).
pub fn to_obj_string(surface: &CrackSurface) -> String {
    let mut out = String::with_capacity(32 * (surface.vertices.len() + surface.triangles.len()));
    for v in &surface.vertices {
        let _ = writeln!(out, "v {} {} {}", v.x, v.y, v.z);
    }
    for [a, b, c] in &surface.triangles {
        let _ = writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1);
    }
    out
}
