#![cfg_attr(docsrs, feature(doc_cfg))]
//! # wisp-mesh
//!
//! wisp-mesh stores the combinatorial topology of a mesh as an incidence
//! structure of arbitrary degree. Every element is a *wisp* of some degree
//! `0..=D` (points, edges, faces, volumes, ...); a link joins a wisp of degree
//! `d` to one of degree `d + 1`, and is queryable from both ends.
//!
//! ## Features
//! - [`Topomesh`](topology::topomesh::Topomesh): an in-memory store behind the
//!   [`Incidence`](topology::topomesh::Incidence) /
//!   [`MutableIncidence`](topology::topomesh::MutableIncidence) traits
//! - Multi-hop navigation and neighbourhoods through
//!   [`IncidenceQueryExt`](topology::topomesh::IncidenceQueryExt)
//! - Topological surgery: [`divide_wisp`](algs::divide::divide_wisp), merges,
//!   edge flips and clean-up passes in [`algs::edit`]
//! - A two-degree [`CellMesh`](topology::cell_mesh::CellMesh) with
//!   individually addressable, possibly parallel links
//! - A plain-text reader/writer in [`io::txt`]
//!
//! ## Determinism
//!
//! Listings are ordered by degree then id, adjacency follows link insertion
//! order and identifiers are assigned by a configurable
//! [`IdPolicy`](topology::id_alloc::IdPolicy), so the same sequence of calls
//! always produces the same mesh.
//!
//! ## Invariant checks
//!
//! Every mutator re-validates the store in debug builds. Enable the
//! `strict-invariants` (or `check-invariants`) feature to keep the checks in
//! release builds.

// Re-export our major subsystems:
pub mod algs;
pub mod debug_invariants;
pub mod io;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::MeshInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::divide::{Division, divide_wisp};
    pub use crate::algs::traversal::Dir;
    pub use crate::debug_invariants::MeshInvariants;
    pub use crate::io::txt::{TxtReader, TxtWriter};
    pub use crate::io::{MeshData, TopomeshReader, TopomeshWriter};
    pub use crate::mesh_error::MeshError;
    pub use crate::topology::cell_mesh::CellMesh;
    pub use crate::topology::id_alloc::IdPolicy;
    pub use crate::topology::link::{LinkEnds, LinkId};
    pub use crate::topology::topomesh::{
        Incidence, IncidenceQueryExt, MutableIncidence, Topomesh, TopomeshOptions,
    };
    pub use crate::topology::wisp::{Degree, WispId};
}
