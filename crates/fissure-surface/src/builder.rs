//! Crack surface construction.
//!
//! Each ring pair `(A, B)` spans a quad between the markers' previous
//! positions (`A0`, `B0`) and current positions (`A1`, `B1`). The quad is
//! extruded along `-lateral` by the configured thickness into a closed
//! slab (primed names are the bottom layer):
//!
//! ```text
//!   top     B1 B0 A0 A1        bottom   A1' A0' B0' B1'
//!   outer   B1 A1 A1' B1'      inner    A0 B0 B0' A0'
//!   cap B   B0 B1 B1' B0'      cap A    A1 A0 A0' A1'
//! ```
//!
//! Every slab edge is used once in each direction, so the faces share one
//! winding. Caps only close open strip ends: between two emitted pairs
//! they would be coincident back-to-back faces.
//!
//! Pairs follow the ring adjacency `next = (i + 1) % (N - 1)` for
//! `i in 0..N-1`. The last marker therefore never starts or ends a pair;
//! it only takes part in the skip test of pair 0. Existing renders were
//! produced this way and the layout is kept for comparability.

use serde::{Deserialize, Serialize};

use fissure_math::Vec3;
use fissure_solver::Marker;
use fissure_types::constants::DEFAULT_SURFACE_THICKNESS;
use fissure_types::{FissureError, FissureResult};

use crate::surface::{CrackSurface, SurfaceStats};
use crate::weld::VertexWelder;

/// Surface reconstruction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Slab thickness along `-lateral`.
    pub thickness: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_SURFACE_THICKNESS,
        }
    }
}

impl SurfaceConfig {
    pub fn with_thickness(thickness: f64) -> Self {
        Self { thickness }
    }

    pub fn validate(&self) -> FissureResult<()> {
        if !(self.thickness.is_finite() && self.thickness > 0.0) {
            return Err(FissureError::InvalidConfig(format!(
                "Surface thickness must be positive, got {}",
                self.thickness
            )));
        }
        Ok(())
    }
}

/// Builds [`CrackSurface`]s from marker rings.
#[derive(Debug, Clone)]
pub struct CrackSurfaceBuilder {
    config: SurfaceConfig,
}

/// Corner indices of one slab: `[A0, A1, B0, B1]` top, then bottom.
struct Slab {
    top: [u32; 4],
    bottom: [u32; 4],
}

const A0: usize = 0;
const A1: usize = 1;
const B0: usize = 2;
const B1: usize = 3;

impl CrackSurfaceBuilder {
    pub fn new(config: SurfaceConfig) -> FissureResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Builds the surface for the ring's current state.
    ///
    /// Rings shorter than three markers have no pairs and yield an empty
    /// surface.
    pub fn build(&self, markers: &[Marker]) -> CrackSurface {
        let n = markers.len();
        if n < 3 {
            return CrackSurface::default();
        }
        let pairs = n - 1;

        let emitted: Vec<bool> = (0..pairs)
            .map(|i| {
                let next = (i + 1) % pairs;
                let prev = if i == 0 { n - 1 } else { i - 1 };
                !(markers[i].is_finished() && markers[next].is_finished() && markers[prev].is_finished())
            })
            .collect();

        let mut welder = VertexWelder::new();
        let mut triangles = Vec::new();
        let mut stats = SurfaceStats::default();

        for i in 0..pairs {
            if !emitted[i] {
                stats.pairs_skipped += 1;
                continue;
            }
            stats.pairs_emitted += 1;

            let next = (i + 1) % pairs;
            let slab = self.slab(&mut welder, &markers[i], &markers[next]);
            let (t, b) = (slab.top, slab.bottom);

            let mut quads = vec![
                [t[B1], t[B0], t[A0], t[A1]],
                [b[A1], b[A0], b[B0], b[B1]],
                [t[B1], t[A1], b[A1], b[B1]],
                [t[A0], t[B0], b[B0], b[A0]],
            ];
            if !emitted[(i + 1) % pairs] {
                quads.push([t[B0], t[B1], b[B1], b[B0]]);
                stats.caps += 1;
            }
            if !emitted[(i + pairs - 1) % pairs] {
                quads.push([t[A1], t[A0], b[A0], b[A1]]);
                stats.caps += 1;
            }

            for [p, q, r, s] in quads {
                for tri in [[p, q, r], [p, r, s]] {
                    if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                        stats.collapsed += 1;
                    } else {
                        triangles.push(tri);
                    }
                }
            }
        }

        CrackSurface {
            vertices: welder.into_vertices(),
            triangles,
            stats,
        }
    }

    fn slab(&self, welder: &mut VertexWelder, a: &Marker, b: &Marker) -> Slab {
        let top_points = [a.previous(), a.current(), b.previous(), b.current()];
        let bottom_points: [Vec3; 4] = [
            a.lateral().offset(a.previous(), -self.config.thickness),
            a.lateral().offset(a.current(), -self.config.thickness),
            b.lateral().offset(b.previous(), -self.config.thickness),
            b.lateral().offset(b.current(), -self.config.thickness),
        ];
        Slab {
            top: top_points.map(|p| welder.insert(p)),
            bottom: bottom_points.map(|p| welder.insert(p)),
        }
    }
}

impl Default for CrackSurfaceBuilder {
    fn default() -> Self {
        Self {
            config: SurfaceConfig::default(),
        }
    }
}
