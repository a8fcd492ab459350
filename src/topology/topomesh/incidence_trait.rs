//! Core read-only trait for incidence structures.
//!
//! [`Incidence`] exposes the one-hop relations of a topomesh: which wisps
//! exist, their degree, and the borders/regions directly linked to a wisp.
//! Everything else (multi-hop descent, neighbourhoods, surgery) is written
//! once on top of these primitives.

use crate::mesh_error::MeshError;
use crate::topology::wisp::{Degree, WispId};

/// One-hop incidence API over wisps of degree `0..=max_degree()`.
///
/// # Provided Methods
/// - Link lookup ([`has_link`](Incidence::has_link))
/// - Border/region counts
/// - Collected wisp lists
pub trait Incidence {
    /// Largest degree a wisp may have. Fixed at construction.
    fn max_degree(&self) -> Degree;

    /// True if a live wisp carries `w`.
    fn has_wisp(&self, w: WispId) -> bool;

    /// Degree of `w`.
    ///
    /// # Errors
    /// [`MeshError::UnknownWisp`] if `w` is absent.
    fn degree(&self, w: WispId) -> Result<Degree, MeshError>;

    /// Degree-(d-1) wisps directly linked below `w`, in link insertion order.
    fn border_slice(&self, w: WispId) -> Result<&[WispId], MeshError>;

    /// Degree-(d+1) wisps directly linked above `w`, in link insertion order.
    fn region_slice(&self, w: WispId) -> Result<&[WispId], MeshError>;

    /// All wisps, or those of one degree. Degree-ascending, then id-ascending.
    ///
    /// # Errors
    /// [`MeshError::InvalidDegree`] if `degree` exceeds `max_degree()`.
    fn wisp_iter<'a>(
        &'a self,
        degree: Option<Degree>,
    ) -> Result<Box<dyn Iterator<Item = WispId> + 'a>, MeshError>;

    /// Number of wisps, or of wisps of one degree.
    fn nb_wisps(&self, degree: Option<Degree>) -> Result<usize, MeshError>;

    /// Number of links across every pair of consecutive degrees.
    fn nb_links(&self) -> usize;

    // --- provided ---

    /// Collected form of [`wisp_iter`](Incidence::wisp_iter).
    fn wisps(&self, degree: Option<Degree>) -> Result<Vec<WispId>, MeshError> {
        Ok(self.wisp_iter(degree)?.collect())
    }

    /// True if `lower` is a border of `upper`. Unknown ids yield `false`.
    fn has_link(&self, lower: WispId, upper: WispId) -> bool {
        self.border_slice(upper)
            .map(|bs| bs.contains(&lower))
            .unwrap_or(false)
    }

    /// Number of borders of `w`.
    fn nb_borders(&self, w: WispId) -> Result<usize, MeshError> {
        Ok(self.border_slice(w)?.len())
    }

    /// Number of regions of `w`.
    fn nb_regions(&self, w: WispId) -> Result<usize, MeshError> {
        Ok(self.region_slice(w)?.len())
    }

    /// Checks `degree <= max_degree()`.
    fn check_degree(&self, degree: Degree) -> Result<(), MeshError> {
        if degree > self.max_degree() {
            Err(MeshError::degree_out_of_bounds(degree, self.max_degree()))
        } else {
            Ok(())
        }
    }
}
