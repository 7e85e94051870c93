//! Scenario validation.
//!
//! Validates scenario inputs before the driver receives them,
//! catching data-level errors early with clear diagnostics.

use fissure_material::MaterialDatabase;
use fissure_types::{FissureError, FissureResult};

use crate::contract::{BoundarySpec, ScenarioInput};

/// Validates a complete scenario input.
///
/// Checks:
/// - Start point is finite
/// - Front and surface configs satisfy their invariants
/// - Toughness resolves against `db`
/// - Boundary parameters are sensible and the generated mesh is valid
/// - Step budget is non-zero
pub fn validate_input(input: &ScenarioInput, db: &MaterialDatabase) -> FissureResult<()> {
    if !input.start.iter().all(|c| c.is_finite()) {
        return Err(FissureError::InvalidConfig(format!(
            "Start point {:?} is not finite",
            input.start
        )));
    }

    input.front.validate()?;
    input.surface.validate()?;
    input.toughness.resolve(db)?;

    validate_boundary(&input.boundary)?;
    input
        .boundary
        .build()
        .map_err(|e| FissureError::InvalidMesh(format!("Boundary mesh: {}", e)))?;

    if input.run.step_budget == 0 {
        return Err(FissureError::InvalidConfig(
            "Step budget must be >= 1".into(),
        ));
    }

    Ok(())
}

/// Validates procedural boundary parameters.
fn validate_boundary(boundary: &BoundarySpec) -> FissureResult<()> {
    match boundary {
        BoundarySpec::Box {
            min,
            max,
            subdivisions,
        } => {
            if min.iter().zip(max).any(|(lo, hi)| !(lo < hi)) {
                return Err(FissureError::InvalidConfig(format!(
                    "Box min {:?} must be below max {:?} on every axis",
                    min, max
                )));
            }
            if *subdivisions == 0 {
                return Err(FissureError::InvalidConfig(
                    "Box subdivisions must be >= 1".into(),
                ));
            }
        }
        BoundarySpec::Plane {
            width,
            height,
            subdivisions,
            ..
        } => {
            if !(*width > 0.0 && *height > 0.0) {
                return Err(FissureError::InvalidConfig(
                    "Plane width and height must be positive".into(),
                ));
            }
            if *subdivisions == 0 {
                return Err(FissureError::InvalidConfig(
                    "Plane subdivisions must be >= 1".into(),
                ));
            }
        }
        BoundarySpec::Sphere {
            radius,
            stacks,
            slices,
            ..
        } => {
            if !(*radius > 0.0) {
                return Err(FissureError::InvalidConfig(
                    "Sphere radius must be positive".into(),
                ));
            }
            if *stacks < 2 || *slices < 3 {
                return Err(FissureError::InvalidConfig(
                    "Sphere needs at least 2 stacks and 3 slices".into(),
                ));
            }
        }
        BoundarySpec::Mesh { mesh } => {
            if mesh.triangle_count() == 0 {
                return Err(FissureError::InvalidMesh(
                    "Inline boundary mesh has no triangles".into(),
                ));
            }
        }
    }
    Ok(())
}
