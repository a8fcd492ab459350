//! Two-degree "cells and points" mesh with individually addressable links.
//!
//! [`CellMesh`] is the `max_degree = 1` instance of [`Topomesh`]: cells are
//! degree-1 wisps and points degree-0 wisps, so every adjacency query is the
//! degree-generic one. On top of the store it keeps a table of link ids;
//! several links may join the same cell and point, and the store holds one
//! incidence for the pair as long as at least one of them is alive.

use crate::mesh_error::MeshError;
use crate::topology::id_alloc::IdAllocator;
use crate::topology::link::{LinkEnds, LinkId};
use crate::topology::topomesh::{Incidence, IncidenceQueryExt, MutableIncidence, Topomesh};
use crate::topology::wisp::WispId;
use std::collections::BTreeMap;

const POINT: usize = 0;
const CELL: usize = 1;

/// Bipartite cell/point mesh.
///
/// Cells and points draw their ids from the same wisp id space, so a point id
/// never equals a live cell id.
///
/// # Example
/// ```rust
/// use wisp_mesh::topology::cell_mesh::CellMesh;
/// let mut m = CellMesh::new();
/// let c = m.add_cell(None).unwrap();
/// let p = m.add_point(None).unwrap();
/// let l1 = m.add_link(c, p, None).unwrap();
/// let l2 = m.add_link(c, p, None).unwrap();
/// assert_ne!(l1, l2);
/// m.remove_link(l1).unwrap();
/// assert_eq!(m.points(Some(c)).unwrap(), vec![p]);
/// ```
#[derive(Clone, Debug)]
pub struct CellMesh {
    mesh: Topomesh,
    links: BTreeMap<LinkId, LinkEnds>,
    link_ids: IdAllocator,
}

impl Default for CellMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl CellMesh {
    pub fn new() -> Self {
        Self {
            mesh: Topomesh::new(1),
            links: BTreeMap::new(),
            link_ids: IdAllocator::default(),
        }
    }

    /// Degree-generic view of this mesh.
    #[inline]
    pub fn as_topomesh(&self) -> &Topomesh {
        &self.mesh
    }

    fn expect_kind(&self, w: WispId, kind: usize) -> Result<(), MeshError> {
        match self.mesh.degree(w) {
            Ok(d) if d == kind => Ok(()),
            _ => Err(MeshError::UnknownWisp(w)),
        }
    }

    fn multiplicity(&self, ends: LinkEnds) -> usize {
        self.links.values().filter(|e| **e == ends).count()
    }

    // ---------------------------------------------------------------------
    // existence
    // ---------------------------------------------------------------------

    pub fn has_cell(&self, cid: WispId) -> bool {
        self.expect_kind(cid, CELL).is_ok()
    }

    pub fn has_point(&self, pid: WispId) -> bool {
        self.expect_kind(pid, POINT).is_ok()
    }

    pub fn has_link(&self, lid: LinkId) -> bool {
        self.links.contains_key(&lid)
    }

    // ---------------------------------------------------------------------
    // links
    // ---------------------------------------------------------------------

    /// Every link id, ascending.
    pub fn links(&self) -> impl Iterator<Item = LinkId> + '_ {
        self.links.keys().copied()
    }

    pub fn nb_links(&self) -> usize {
        self.links.len()
    }

    pub fn cell(&self, lid: LinkId) -> Result<WispId, MeshError> {
        self.ends(lid).map(|e| e.cell)
    }

    pub fn point(&self, lid: LinkId) -> Result<WispId, MeshError> {
        self.ends(lid).map(|e| e.point)
    }

    pub fn ends(&self, lid: LinkId) -> Result<LinkEnds, MeshError> {
        self.links
            .get(&lid)
            .copied()
            .ok_or(MeshError::UnknownLinkId(lid))
    }

    pub fn cell_links(&self, cid: WispId) -> Result<Vec<LinkId>, MeshError> {
        self.expect_kind(cid, CELL)?;
        Ok(self
            .links
            .iter()
            .filter(|(_, e)| e.cell == cid)
            .map(|(l, _)| *l)
            .collect())
    }

    pub fn nb_cell_links(&self, cid: WispId) -> Result<usize, MeshError> {
        Ok(self.cell_links(cid)?.len())
    }

    pub fn point_links(&self, pid: WispId) -> Result<Vec<LinkId>, MeshError> {
        self.expect_kind(pid, POINT)?;
        Ok(self
            .links
            .iter()
            .filter(|(_, e)| e.point == pid)
            .map(|(l, _)| *l)
            .collect())
    }

    pub fn nb_point_links(&self, pid: WispId) -> Result<usize, MeshError> {
        Ok(self.point_links(pid)?.len())
    }

    // ---------------------------------------------------------------------
    // cells
    // ---------------------------------------------------------------------

    /// Cells linked to `pid`, or every cell when `pid` is `None`.
    pub fn cells(&self, pid: Option<WispId>) -> Result<Vec<WispId>, MeshError> {
        match pid {
            None => self.mesh.wisps(Some(CELL)),
            Some(p) => {
                self.expect_kind(p, POINT)?;
                self.mesh.regions(p, None)
            }
        }
    }

    pub fn nb_cells(&self, pid: Option<WispId>) -> Result<usize, MeshError> {
        match pid {
            None => self.mesh.nb_wisps(Some(CELL)),
            Some(p) => {
                self.expect_kind(p, POINT)?;
                self.mesh.nb_regions(p)
            }
        }
    }

    /// Cells sharing at least one point with `cid`.
    pub fn cell_neighbors(&self, cid: WispId) -> Result<Vec<WispId>, MeshError> {
        self.expect_kind(cid, CELL)?;
        self.mesh.border_neighbors(cid)
    }

    pub fn nb_cell_neighbors(&self, cid: WispId) -> Result<usize, MeshError> {
        Ok(self.cell_neighbors(cid)?.len())
    }

    // ---------------------------------------------------------------------
    // points
    // ---------------------------------------------------------------------

    /// Points linked to `cid`, or every point when `cid` is `None`.
    pub fn points(&self, cid: Option<WispId>) -> Result<Vec<WispId>, MeshError> {
        match cid {
            None => self.mesh.wisps(Some(POINT)),
            Some(c) => {
                self.expect_kind(c, CELL)?;
                self.mesh.borders(c, None)
            }
        }
    }

    pub fn nb_points(&self, cid: Option<WispId>) -> Result<usize, MeshError> {
        match cid {
            None => self.mesh.nb_wisps(Some(POINT)),
            Some(c) => {
                self.expect_kind(c, CELL)?;
                self.mesh.nb_borders(c)
            }
        }
    }

    /// Points sharing at least one cell with `pid`.
    pub fn point_neighbors(&self, pid: WispId) -> Result<Vec<WispId>, MeshError> {
        self.expect_kind(pid, POINT)?;
        self.mesh.region_neighbors(pid)
    }

    pub fn nb_point_neighbors(&self, pid: WispId) -> Result<usize, MeshError> {
        Ok(self.point_neighbors(pid)?.len())
    }

    // ---------------------------------------------------------------------
    // mutation
    // ---------------------------------------------------------------------

    pub fn add_cell(&mut self, cid: Option<WispId>) -> Result<WispId, MeshError> {
        self.mesh.add_wisp(CELL, cid)
    }

    pub fn add_point(&mut self, pid: Option<WispId>) -> Result<WispId, MeshError> {
        self.mesh.add_wisp(POINT, pid)
    }

    /// Links `cid` and `pid` under a new link id (or `lid` if given).
    ///
    /// Parallel links between the same pair are allowed.
    pub fn add_link(
        &mut self,
        cid: WispId,
        pid: WispId,
        lid: Option<LinkId>,
    ) -> Result<LinkId, MeshError> {
        self.expect_kind(cid, CELL)?;
        self.expect_kind(pid, POINT)?;
        let ends = LinkEnds::new(cid, pid);
        let lid = LinkId::new(self.link_ids.allocate(lid.map(LinkId::get))?);
        if !self.mesh.has_link(pid, cid) {
            if let Err(e) = self.mesh.link(pid, cid) {
                self.link_ids.free(lid.get());
                return Err(e);
            }
        }
        self.links.insert(lid, ends);
        Ok(lid)
    }

    pub fn remove_link(&mut self, lid: LinkId) -> Result<(), MeshError> {
        let ends = self.ends(lid)?;
        if self.multiplicity(ends) == 1 {
            self.mesh.unlink(ends.point, ends.cell)?;
        }
        self.links.remove(&lid);
        self.link_ids.free(lid.get());
        Ok(())
    }

    /// Removes `cid` and every link attached to it; points are kept.
    pub fn remove_cell(&mut self, cid: WispId) -> Result<(), MeshError> {
        self.expect_kind(cid, CELL)?;
        self.mesh.remove_wisp(cid)?;
        self.drop_links_where(|e| e.cell == cid);
        Ok(())
    }

    /// Removes `pid` and every link attached to it; cells are kept.
    pub fn remove_point(&mut self, pid: WispId) -> Result<(), MeshError> {
        self.expect_kind(pid, POINT)?;
        self.mesh.remove_wisp(pid)?;
        self.drop_links_where(|e| e.point == pid);
        Ok(())
    }

    fn drop_links_where(&mut self, pred: impl Fn(&LinkEnds) -> bool) {
        let doomed: Vec<LinkId> = self
            .links
            .iter()
            .filter(|(_, e)| pred(e))
            .map(|(l, _)| *l)
            .collect();
        for lid in doomed {
            self.links.remove(&lid);
            self.link_ids.free(lid.get());
        }
    }

    pub fn clear(&mut self) {
        self.mesh.clear();
        self.links.clear();
        self.link_ids.reset();
    }

    pub fn clear_links(&mut self) {
        self.mesh.clear_links();
        self.links.clear();
        self.link_ids.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_links_are_individually_removable() {
        let mut m = CellMesh::new();
        let c = m.add_cell(None).unwrap();
        let p = m.add_point(None).unwrap();
        let l0 = m.add_link(c, p, None).unwrap();
        let l1 = m.add_link(c, p, None).unwrap();
        assert_eq!(m.nb_links(), 2);
        assert_eq!(m.as_topomesh().nb_links(), 1);
        assert_eq!(m.cell_links(c).unwrap(), vec![l0, l1]);

        m.remove_link(l0).unwrap();
        assert_eq!(m.cells(Some(p)).unwrap(), vec![c]);
        m.remove_link(l1).unwrap();
        assert!(m.cells(Some(p)).unwrap().is_empty());
        assert_eq!(m.remove_link(l1), Err(MeshError::UnknownLinkId(l1)));
    }

    #[test]
    fn kinds_are_checked() {
        let mut m = CellMesh::new();
        let c = m.add_cell(None).unwrap();
        let p = m.add_point(None).unwrap();
        assert!(m.has_cell(c) && !m.has_cell(p));
        assert!(m.has_point(p) && !m.has_point(c));
        assert_eq!(m.add_link(p, c, None), Err(MeshError::UnknownWisp(p)));
        assert_eq!(m.nb_links(), 0);
    }

    #[test]
    fn cell_ids_are_shared_with_points() {
        let mut m = CellMesh::new();
        let c = m.add_cell(Some(WispId::new(100))).unwrap();
        assert_eq!(m.add_point(Some(WispId::new(100))), Err(MeshError::IdInUse(100)));
        assert_eq!(m.add_point(None).unwrap(), WispId::new(0));
        assert_eq!(c, WispId::new(100));
    }

    #[test]
    fn requested_link_id_collision_does_not_link() {
        let mut m = CellMesh::new();
        let c = m.add_cell(None).unwrap();
        let p = m.add_point(None).unwrap();
        let q = m.add_point(None).unwrap();
        let l = m.add_link(c, p, Some(LinkId::new(7))).unwrap();
        assert_eq!(l, LinkId::new(7));
        assert_eq!(m.add_link(c, q, Some(l)), Err(MeshError::IdInUse(7)));
        assert_eq!(m.points(Some(c)).unwrap(), vec![p]);
    }

    #[test]
    fn removing_a_point_drops_its_links() {
        let mut m = CellMesh::new();
        let c = m.add_cell(None).unwrap();
        let p = m.add_point(None).unwrap();
        let q = m.add_point(None).unwrap();
        m.add_link(c, p, None).unwrap();
        let lq = m.add_link(c, q, None).unwrap();
        m.add_link(c, p, None).unwrap();
        m.remove_point(p).unwrap();
        assert_eq!(m.links().collect::<Vec<_>>(), vec![lq]);
        assert_eq!(m.points(Some(c)).unwrap(), vec![q]);
        assert_eq!(m.cell(lq).unwrap(), c);
        assert_eq!(m.point(lq).unwrap(), q);
    }

    #[test]
    fn clear_links_keeps_entities() {
        let mut m = CellMesh::new();
        let c = m.add_cell(None).unwrap();
        let p = m.add_point(None).unwrap();
        m.add_link(c, p, None).unwrap();
        m.clear_links();
        assert_eq!(m.nb_links(), 0);
        assert_eq!(m.nb_cells(None).unwrap(), 1);
        assert_eq!(m.nb_points(None).unwrap(), 1);
        assert_eq!(m.nb_points(Some(c)).unwrap(), 0);
        m.clear();
        assert_eq!(m.nb_cells(None).unwrap(), 0);
        assert_eq!(m.nb_points(None).unwrap(), 0);
    }
}
