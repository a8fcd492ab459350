//! Link identifiers and records for the legacy bipartite mesh.
//!
//! In the degree-generic store a link is fully described by its
//! `(border, region)` pair. The two-degree [`CellMesh`](crate::topology::cell_mesh::CellMesh)
//! additionally gives every link its own id so that parallel incidences
//! between the same cell and point can coexist and be removed one at a time.

use crate::topology::wisp::WispId;
use std::fmt;

/// Identifier of an individually addressable cell/point link.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct LinkId(u32);

impl LinkId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        LinkId(raw)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LinkId").field(&self.0).finish()
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Endpoints of a legacy link: the cell (degree 1) and the point (degree 0).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LinkEnds {
    pub cell: WispId,
    pub point: WispId,
}

impl LinkEnds {
    #[inline]
    pub fn new(cell: WispId, point: WispId) -> Self {
        Self { cell, point }
    }
}
