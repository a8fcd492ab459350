//! Top-level module for mesh topology abstractions.
//!
//! This module provides the core types and traits for representing a mesh
//! as an incidence structure over wisps of increasing degree:
//! - Wisp, degree and link identifiers
//! - The id allocator shared by every store
//! - The [`Incidence`](topomesh::Incidence) traits and the in-memory [`Topomesh`](topomesh::Topomesh)
//! - The two-degree [`CellMesh`](cell_mesh::CellMesh) with addressable links
//!
//! Most users will interact with the `Incidence` traits and `Topomesh` for
//! building and navigating mesh topologies.

pub mod cell_mesh;
pub mod id_alloc;
pub mod link;
pub mod topomesh;
pub mod wisp;

pub use cell_mesh::CellMesh;
pub use id_alloc::{IdAllocator, IdPolicy};
pub use link::{LinkEnds, LinkId};
pub use topomesh::*;
pub use wisp::{Degree, WispId};
