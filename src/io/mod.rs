//! Mesh I/O helpers for topomesh structures.
//!
//! This module provides trait-based readers and writers that load and save a
//! [`Topomesh`] together with a free-form text description. Formats only use
//! the public query/mutation API of the store.

pub mod txt;

use crate::mesh_error::MeshError;
use crate::topology::topomesh::Topomesh;
use std::io::{Read, Write};

/// Topology plus the description lines stored alongside it.
#[derive(Clone, Debug)]
pub struct MeshData {
    pub mesh: Topomesh,
    pub description: Vec<String>,
}

/// Trait for readers producing a topomesh.
pub trait TopomeshReader {
    /// Parse mesh data from a reader.
    fn read<R: Read>(&self, reader: R) -> Result<MeshData, MeshError>;
}

/// Trait for writers serializing a topomesh.
pub trait TopomeshWriter {
    /// Write `mesh` and `description` to a writer.
    fn write<W: Write>(
        &self,
        writer: W,
        mesh: &Topomesh,
        description: &[String],
    ) -> Result<(), MeshError>;
}
