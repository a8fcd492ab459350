//! Same-degree adjacency through a shared lower or higher degree wisp.
//!
//! Two wisps of equal degree are *border neighbors* when they share a border
//! (cells sharing a point, faces sharing an edge) and *region neighbors* when
//! they share a region (points of a common cell). Nothing is cached.

use crate::mesh_error::MeshError;
use crate::topology::topomesh::Incidence;
use crate::topology::wisp::WispId;
use std::collections::HashSet;

fn two_hop<M: Incidence + ?Sized>(
    mesh: &M,
    w: WispId,
    first: fn(&M, WispId) -> Result<&[WispId], MeshError>,
    second: fn(&M, WispId) -> Result<&[WispId], MeshError>,
) -> Result<Vec<WispId>, MeshError> {
    let mut seen: HashSet<WispId> = HashSet::new();
    seen.insert(w);
    let mut out = Vec::new();
    for &mid in first(mesh, w)? {
        for &n in second(mesh, mid)? {
            if seen.insert(n) {
                out.push(n);
            }
        }
    }
    Ok(out)
}

/// Wisps sharing at least one border with `w`, excluding `w`.
///
/// # Example
/// ```rust
/// use wisp_mesh::prelude::*;
/// use wisp_mesh::algs::neighbors::border_neighbors;
/// let mut m = Topomesh::new(1);
/// let p = m.add_wisp(0, None).unwrap();
/// let a = m.add_wisp(1, None).unwrap();
/// let b = m.add_wisp(1, None).unwrap();
/// m.link(p, a).unwrap();
/// m.link(p, b).unwrap();
/// assert_eq!(border_neighbors(&m, a).unwrap(), vec![b]);
/// ```
pub fn border_neighbors<M: Incidence + ?Sized>(
    mesh: &M,
    w: WispId,
) -> Result<Vec<WispId>, MeshError> {
    two_hop(mesh, w, M::border_slice, M::region_slice)
}

/// Wisps sharing at least one region with `w`, excluding `w`.
pub fn region_neighbors<M: Incidence + ?Sized>(
    mesh: &M,
    w: WispId,
) -> Result<Vec<WispId>, MeshError> {
    two_hop(mesh, w, M::region_slice, M::border_slice)
}
