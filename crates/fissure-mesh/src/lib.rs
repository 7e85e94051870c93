//! # fissure-mesh
//!
//! Triangle mesh representation with Structure-of-Arrays (SoA) layout,
//! plus the [`BoundaryMesh`] capability the crack front intersects against.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`]: The core mesh type. Stores positions, normals
//!   and topology in contiguous SoA buffers.
//! - [`BoundaryMesh`]: Read-only "vertex positions + triangle indices" view.
//!   Any geometry provider implementing it can act as the host body.
//! - [`Topology`]: Edge adjacency and manifold diagnostics.
//! - Procedural generators for boundary bodies (boxes, planes, spheres).

pub mod boundary;
pub mod generators;
pub mod mesh;
pub mod normals;
pub mod topology;

pub use boundary::BoundaryMesh;
pub use mesh::TriangleMesh;
pub use topology::Topology;
