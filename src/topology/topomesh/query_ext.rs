use super::incidence_trait::Incidence;
use crate::algs::{neighbors, traversal};
use crate::mesh_error::MeshError;
use crate::topology::wisp::{Degree, WispId};

/// Derived navigation queries for every [`Incidence`] implementation.
///
/// Read-only; results are recomputed on each call.
pub trait IncidenceQueryExt: Incidence {
    /// Borders of `w`: one hop when `target` is `None`, otherwise every wisp
    /// of degree `target` reachable through border chains.
    ///
    /// # Example
    /// ```rust
    /// use wisp_mesh::prelude::*;
    /// let mut m = Topomesh::new(2);
    /// let v = m.add_wisp(0, None).unwrap();
    /// let e = m.add_wisp(1, None).unwrap();
    /// let f = m.add_wisp(2, None).unwrap();
    /// m.link(v, e).unwrap();
    /// m.link(e, f).unwrap();
    /// assert_eq!(m.borders(f, None).unwrap(), vec![e]);
    /// assert_eq!(m.borders(f, Some(0)).unwrap(), vec![v]);
    /// ```
    fn borders(&self, w: WispId, target: Option<Degree>) -> Result<Vec<WispId>, MeshError> {
        traversal::borders(self, w, target)
    }

    /// Regions of `w`: one hop when `target` is `None`, otherwise every wisp
    /// of degree `target` reachable through region chains.
    fn regions(&self, w: WispId, target: Option<Degree>) -> Result<Vec<WispId>, MeshError> {
        traversal::regions(self, w, target)
    }

    /// Same-degree wisps sharing at least one border with `w`.
    fn border_neighbors(&self, w: WispId) -> Result<Vec<WispId>, MeshError> {
        neighbors::border_neighbors(self, w)
    }

    /// Same-degree wisps sharing at least one region with `w`.
    fn region_neighbors(&self, w: WispId) -> Result<Vec<WispId>, MeshError> {
        neighbors::region_neighbors(self, w)
    }

    fn nb_border_neighbors(&self, w: WispId) -> Result<usize, MeshError> {
        Ok(self.border_neighbors(w)?.len())
    }

    fn nb_region_neighbors(&self, w: WispId) -> Result<usize, MeshError> {
        Ok(self.region_neighbors(w)?.len())
    }
}

impl<M: Incidence + ?Sized> IncidenceQueryExt for M {}
