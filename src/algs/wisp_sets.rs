//! Growing, shrinking and bounding sets of same-degree wisps.
//!
//! Sets are returned as `BTreeSet`s so results are ordered independently of
//! the input order.

use crate::mesh_error::MeshError;
use crate::topology::topomesh::{Incidence, IncidenceQueryExt};
use crate::topology::wisp::WispId;
use std::collections::BTreeSet;

/// `wids` plus one layer of border neighbors around them.
pub fn expand<M, I>(mesh: &M, wids: I) -> Result<BTreeSet<WispId>, MeshError>
where
    M: Incidence + ?Sized,
    I: IntoIterator<Item = WispId>,
{
    let mut out = BTreeSet::new();
    for w in wids {
        out.insert(w);
        out.extend(mesh.border_neighbors(w)?);
    }
    Ok(out)
}

/// Members of `wids` touching the outside: some border of theirs has a
/// region outside the set. With `outer`, members with a border owned by a
/// single region (the mesh boundary) also count.
pub fn border<M, I>(mesh: &M, wids: I, outer: bool) -> Result<BTreeSet<WispId>, MeshError>
where
    M: Incidence + ?Sized,
    I: IntoIterator<Item = WispId>,
{
    let inside: BTreeSet<WispId> = wids.into_iter().collect();
    let mut out = BTreeSet::new();
    for &w in &inside {
        for &b in mesh.border_slice(w)? {
            let regions = mesh.region_slice(b)?;
            let on_boundary = outer && regions.len() == 1;
            if on_boundary || regions.iter().any(|r| !inside.contains(r)) {
                out.insert(w);
                break;
            }
        }
    }
    Ok(out)
}

/// `wids` minus its [`border`] layer.
pub fn shrink<M, I>(mesh: &M, wids: I) -> Result<BTreeSet<WispId>, MeshError>
where
    M: Incidence + ?Sized,
    I: IntoIterator<Item = WispId>,
{
    let inside: BTreeSet<WispId> = wids.into_iter().collect();
    let layer = border(mesh, inside.iter().copied(), false)?;
    Ok(inside.difference(&layer).copied().collect())
}

/// Every border of a wisp of `wids`.
pub fn expand_to_border<M, I>(mesh: &M, wids: I) -> Result<BTreeSet<WispId>, MeshError>
where
    M: Incidence + ?Sized,
    I: IntoIterator<Item = WispId>,
{
    let mut out = BTreeSet::new();
    for w in wids {
        out.extend(mesh.border_slice(w)?.iter().copied());
    }
    Ok(out)
}

/// Every region of a wisp of `wids`.
pub fn expand_to_region<M, I>(mesh: &M, wids: I) -> Result<BTreeSet<WispId>, MeshError>
where
    M: Incidence + ?Sized,
    I: IntoIterator<Item = WispId>,
{
    let mut out = BTreeSet::new();
    for w in wids {
        out.extend(mesh.region_slice(w)?.iter().copied());
    }
    Ok(out)
}

/// Borders of `wids` that separate the set from the rest of the mesh:
/// those with a single region, or with a region outside the set.
pub fn external_border<M, I>(mesh: &M, wids: I) -> Result<BTreeSet<WispId>, MeshError>
where
    M: Incidence + ?Sized,
    I: IntoIterator<Item = WispId>,
{
    let inside: BTreeSet<WispId> = wids.into_iter().collect();
    let mut out = BTreeSet::new();
    for b in expand_to_border(mesh, inside.iter().copied())? {
        let regions = mesh.region_slice(b)?;
        if regions.len() == 1 || regions.iter().any(|r| !inside.contains(r)) {
            out.insert(b);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::topomesh::{MutableIncidence, Topomesh};

    /// A strip of `n` cells where cell `i` holds points `i` and `i + 1`.
    fn strip(n: usize) -> (Topomesh, Vec<WispId>, Vec<WispId>) {
        let mut m = Topomesh::new(1);
        let p: Vec<_> = (0..=n).map(|_| m.add_wisp(0, None).unwrap()).collect();
        let c: Vec<_> = (0..n)
            .map(|i| {
                let c = m.add_wisp(1, None).unwrap();
                m.link_all(c, [p[i], p[i + 1]]).unwrap();
                c
            })
            .collect();
        (m, p, c)
    }

    fn set(ids: impl IntoIterator<Item = WispId>) -> BTreeSet<WispId> {
        ids.into_iter().collect()
    }

    #[test]
    fn expand_and_shrink_are_layered() {
        let (m, _, c) = strip(5);
        assert_eq!(expand(&m, [c[2]]).unwrap(), set([c[1], c[2], c[3]]));
        assert_eq!(shrink(&m, [c[1], c[2], c[3]]).unwrap(), set([c[2]]));
        assert_eq!(shrink(&m, c.clone()).unwrap(), set(c.clone()));
    }

    #[test]
    fn border_with_and_without_outer() {
        let (m, _, c) = strip(4);
        assert!(border(&m, c.clone(), false).unwrap().is_empty());
        assert_eq!(border(&m, c.clone(), true).unwrap(), set([c[0], c[3]]));
        assert_eq!(border(&m, [c[1], c[2]], false).unwrap(), set([c[1], c[2]]));
    }

    #[test]
    fn expand_to_border_and_region() {
        let (m, p, c) = strip(3);
        assert_eq!(expand_to_border(&m, [c[0], c[1]]).unwrap(), set([p[0], p[1], p[2]]));
        assert_eq!(expand_to_region(&m, [p[1]]).unwrap(), set([c[0], c[1]]));
    }

    #[test]
    fn external_border_skips_interior() {
        let (m, p, c) = strip(4);
        assert_eq!(external_border(&m, [c[1], c[2]]).unwrap(), set([p[1], p[3]]));
        assert_eq!(external_border(&m, c.clone()).unwrap(), set([p[0], p[4]]));
    }
}
