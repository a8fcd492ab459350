//! Structural editing: cascading removal, merging, edge flips and cleanup passes.

use crate::algs::wisp_sets::external_border;
use crate::mesh_error::MeshError;
use crate::topology::topomesh::MutableIncidence;
use crate::topology::wisp::{Degree, WispId};
use itertools::Itertools;
use std::collections::{BTreeMap, HashSet};

/// Removes `wid` and, degree by degree downward, every border left without
/// any region.
///
/// Returns the removed wisps as `(degree, id)` pairs, top degree first.
///
/// # Example
/// ```rust
/// use wisp_mesh::prelude::*;
/// use wisp_mesh::algs::edit::clean_remove;
/// let mut m = Topomesh::new(1);
/// let a = m.add_wisp(0, None).unwrap();
/// let b = m.add_wisp(0, None).unwrap();
/// let e = m.add_wisp(1, None).unwrap();
/// m.link_all(e, [a, b]).unwrap();
/// let removed = clean_remove(&mut m, e).unwrap();
/// assert_eq!(removed.len(), 3);
/// assert_eq!(m.nb_wisps(None).unwrap(), 0);
/// ```
pub fn clean_remove<M: MutableIncidence + ?Sized>(
    mesh: &mut M,
    wid: WispId,
) -> Result<Vec<(Degree, WispId)>, MeshError> {
    let top = mesh.degree(wid)?;
    let mut removed = Vec::new();
    let mut level = vec![wid];
    for degree in (1..=top).rev() {
        let mut orphans = Vec::new();
        let mut seen = HashSet::new();
        for w in level {
            let borders = mesh.border_slice(w)?.to_vec();
            mesh.remove_wisp(w)?;
            removed.push((degree, w));
            for b in borders {
                if mesh.nb_regions(b)? == 0 && seen.insert(b) {
                    orphans.push(b);
                }
            }
        }
        level = orphans;
    }
    for w in level {
        mesh.remove_wisp(w)?;
        removed.push((0, w));
    }
    log::debug!("clean_remove {wid}: {} wisps removed", removed.len());
    Ok(removed)
}

/// Fuses two wisps of the same degree into a new one.
///
/// The wisps must share a non-empty frontier (common borders) and every
/// frontier wisp must have exactly these two regions. The new wisp takes the
/// union of their regions and the union of their borders minus the frontier;
/// the old wisps are then removed with [`clean_remove`], which also drops the
/// frontier and anything it alone held.
///
/// # Errors
/// [`MeshError::InvalidDegree`] if degrees differ, [`MeshError::InvalidMerge`]
/// if the frontier preconditions fail.
pub fn merge_wisps<M: MutableIncidence + ?Sized>(
    mesh: &mut M,
    wid1: WispId,
    wid2: WispId,
) -> Result<WispId, MeshError> {
    let degree = mesh.degree(wid1)?;
    let degree2 = mesh.degree(wid2)?;
    if degree != degree2 {
        return Err(MeshError::InvalidDegree(format!(
            "cannot merge wisp {wid1} of degree {degree} with wisp {wid2} of degree {degree2}"
        )));
    }
    if wid1 == wid2 {
        return Err(MeshError::InvalidMerge(wid1, wid2, "same wisp".into()));
    }
    let borders1 = mesh.border_slice(wid1)?.to_vec();
    let borders2 = mesh.border_slice(wid2)?.to_vec();
    let frontier: Vec<WispId> = borders1
        .iter()
        .copied()
        .filter(|b| borders2.contains(b))
        .collect();
    if frontier.is_empty() {
        return Err(MeshError::InvalidMerge(wid1, wid2, "no shared border".into()));
    }
    for &b in &frontier {
        let n = mesh.nb_regions(b)?;
        if n != 2 {
            return Err(MeshError::InvalidMerge(
                wid1,
                wid2,
                format!("frontier wisp {b} has {n} regions"),
            ));
        }
    }

    let regions: Vec<WispId> = mesh
        .region_slice(wid1)?
        .iter()
        .chain(mesh.region_slice(wid2)?)
        .copied()
        .unique()
        .collect();
    let kept: Vec<WispId> = borders1
        .into_iter()
        .chain(borders2)
        .filter(|b| !frontier.contains(b))
        .unique()
        .collect();

    let merged = mesh.add_wisp(degree, None)?;
    for r in regions {
        mesh.link(merged, r)?;
    }
    mesh.link_all(merged, kept)?;
    clean_remove(mesh, wid1)?;
    clean_remove(mesh, wid2)?;
    log::debug!("merged wisps {wid1} and {wid2} into {merged}");
    Ok(merged)
}

fn only<I: IntoIterator<Item = WispId>>(it: I) -> Option<WispId> {
    let mut it = it.into_iter();
    let first = it.next()?;
    match it.next() {
        None => Some(first),
        Some(_) => None,
    }
}

/// Flips an interior edge of a triangulated surface.
///
/// `eid` must border exactly two triangles `(p1, p3, p4)` and `(p2, p3, p4)`
/// where `(p3, p4)` are its endpoints. Afterwards the edge joins `p1` and
/// `p2`, and the triangles are `(p1, p2, p4)` and `(p1, p2, p3)`.
///
/// # Errors
/// [`MeshError::InvalidDegree`] if `eid` is not an edge of a mesh with faces,
/// [`MeshError::InvalidFlip`] if its neighbourhood is not two triangles.
pub fn flip_edge<M: MutableIncidence + ?Sized>(mesh: &mut M, eid: WispId) -> Result<(), MeshError> {
    if mesh.degree(eid)? != 1 || mesh.max_degree() < 2 {
        return Err(MeshError::InvalidDegree(format!(
            "wisp {eid} is not an edge of a mesh with faces"
        )));
    }
    let flip_err = |why: &str| MeshError::InvalidFlip(eid, why.to_string());
    let (f1, f2) = match mesh.region_slice(eid)? {
        &[a, b] => (a, b),
        _ => return Err(flip_err("edge does not separate exactly two faces")),
    };
    let (p3, p4) = match mesh.border_slice(eid)? {
        &[a, b] => (a, b),
        _ => return Err(flip_err("edge does not have exactly two vertices")),
    };

    let mut apex = Vec::with_capacity(2);
    let mut outer = Vec::with_capacity(4);
    for f in [f1, f2] {
        let edges = mesh.border_slice(f)?.to_vec();
        if edges.len() != 3 {
            return Err(flip_err("adjacent face is not a triangle"));
        }
        let mut corners = HashSet::new();
        for &e in &edges {
            corners.extend(mesh.border_slice(e)?.iter().copied());
        }
        let p = only(corners.into_iter().filter(|p| *p != p3 && *p != p4))
            .ok_or_else(|| flip_err("triangle has no unique opposite vertex"))?;
        apex.push(p);
        // edge of `f` avoiding p3 (joins p and p4), then edge avoiding p4 (joins p and p3)
        for avoid in [p3, p4] {
            let e = only(
                edges
                    .iter()
                    .copied()
                    .filter(|&e| e != eid)
                    .filter(|&e| mesh.border_slice(e).map_or(false, |bs| !bs.contains(&avoid))),
            )
            .ok_or_else(|| flip_err("triangle edges are ambiguous"))?;
            outer.push(e);
        }
    }
    let (p1, p2) = (apex[0], apex[1]);
    if p1 == p2 {
        return Err(flip_err("both triangles share the opposite vertex"));
    }
    // outer = [e14, e13, e24, e23]
    let (e13, e24) = (outer[1], outer[2]);

    mesh.unlink(p3, eid)?;
    mesh.unlink(p4, eid)?;
    mesh.link(p1, eid)?;
    mesh.link(p2, eid)?;
    mesh.unlink(e13, f1)?;
    mesh.unlink(e24, f2)?;
    mesh.link(e24, f1)?;
    mesh.link(e13, f2)?;
    log::debug!("flipped edge {eid}: ({p3}, {p4}) -> ({p1}, {p2})");
    Ok(())
}

/// Removes wisps of degree `d >= 1` with fewer than `d + 1` borders, lowest
/// degree first. Removal does not cascade.
pub fn clean_geometry<M: MutableIncidence + ?Sized>(
    mesh: &mut M,
) -> Result<Vec<(Degree, WispId)>, MeshError> {
    let mut removed = Vec::new();
    for degree in 1..=mesh.max_degree() {
        for w in mesh.wisps(Some(degree))? {
            if mesh.nb_borders(w)? < degree + 1 {
                mesh.remove_wisp(w)?;
                removed.push((degree, w));
            }
        }
    }
    Ok(removed)
}

/// Removes wisps below the top degree that have no region, highest degree
/// first, so orphaned faces release their edges before edges are examined.
pub fn clean_orphans<M: MutableIncidence + ?Sized>(
    mesh: &mut M,
) -> Result<Vec<(Degree, WispId)>, MeshError> {
    let mut removed = Vec::new();
    for degree in (0..mesh.max_degree()).rev() {
        for w in mesh.wisps(Some(degree))? {
            if mesh.nb_regions(w)? == 0 {
                mesh.remove_wisp(w)?;
                removed.push((degree, w));
            }
        }
    }
    Ok(removed)
}

/// Replaces wisps of degree `D - 1` that separate the same set of regions
/// by a single wisp.
///
/// Wisps are grouped by their sorted regions. A group of two or more is
/// collapsed when its wisps bound at least two regions, or, with `outer`,
/// also when they sit on the boundary of a single region. The replacement
/// is linked to the shared regions and to the external border of the group;
/// the old wisps then go through [`clean_remove`], which drops the borders
/// only they held. Wisps without any region are left alone.
///
/// Returns the replacement wisps in ascending order of their region sets.
pub fn clean_duplicated_borders<M: MutableIncidence + ?Sized>(
    mesh: &mut M,
    outer: bool,
) -> Result<Vec<WispId>, MeshError> {
    let Some(degree) = mesh.max_degree().checked_sub(1) else {
        return Ok(Vec::new());
    };
    let mut groups: BTreeMap<Vec<WispId>, Vec<WispId>> = BTreeMap::new();
    for w in mesh.wisps(Some(degree))? {
        let mut key = mesh.region_slice(w)?.to_vec();
        if key.is_empty() {
            continue;
        }
        key.sort_unstable();
        groups.entry(key).or_default().push(w);
    }

    let mut created = Vec::new();
    for (regions, wids) in groups {
        if wids.len() < 2 || (!outer && regions.len() < 2) {
            continue;
        }
        let kept = external_border(&*mesh, wids.iter().copied())?;
        let single = mesh.add_wisp(degree, None)?;
        for r in regions {
            mesh.link(single, r)?;
        }
        mesh.link_all(single, kept)?;
        for &w in &wids {
            clean_remove(mesh, w)?;
        }
        log::debug!("replaced duplicated borders {wids:?} by {single}");
        created.push(single);
    }
    Ok(created)
}
