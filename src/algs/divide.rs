//! Division of a wisp into two halves joined by a new separating wisp.
//!
//! The borders of a degree-`d` wisp are expected to form a ring: consecutive
//! borders share a *connector* of degree `d-2` (edges of a face share
//! vertices, faces of a cell share edges). Two connectors on that ring are
//! chosen as split points; walking the ring from the first split point to the
//! second yields the borders of one half, the rest of the ring the other.
//!
//! For `d = 1` the ring degenerates to the two endpoints of the edge: the
//! split points are those endpoints and the separator is a fresh vertex.
//!
//! The whole plan is computed and validated before the first mutation, so a
//! failed division leaves the mesh untouched.

use crate::mesh_error::MeshError;
use crate::topology::topomesh::MutableIncidence;
use crate::topology::wisp::{Degree, WispId};
use hashbrown::HashMap;

/// Result of a division: the two halves and the wisp separating them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Division {
    pub first: WispId,
    pub second: WispId,
    pub separator: WispId,
}

impl From<Division> for (WispId, WispId, WispId) {
    fn from(d: Division) -> Self {
        (d.first, d.second, d.separator)
    }
}

/// Validated description of a division, ready to apply.
#[derive(Clone, Debug, PartialEq, Eq)]
struct DivisionPlan {
    /// Borders given to the first half (separator excluded).
    first: Vec<WispId>,
    /// Borders given to the second half (separator excluded).
    second: Vec<WispId>,
    /// Borders of the separator.
    separator_borders: Vec<WispId>,
}

/// Splits `wid` (of degree `degree`) into two halves along `split1`/`split2`.
///
/// Returns `(half1, half2, separator)`. `half1` receives the borders met
/// when walking the ring from `split1` (through the first border, in link
/// insertion order, touching `split1`) up to `split2`; `half2` receives the
/// remaining borders. Both halves get the separator as a border and inherit
/// every region of `wid`, which is removed.
///
/// # Errors
/// - [`MeshError::UnknownWisp`] if `wid` or a split point is absent;
/// - [`MeshError::InvalidDegree`] if `degree` is 0 or differs from `degree(wid)`;
/// - [`MeshError::InvalidSplitPoints`] if the split points coincide or are not
///   on the ring of `wid`;
/// - [`MeshError::DisconnectedRing`] if the borders of `wid` do not form a
///   single closed ring.
///
/// # Example
/// ```rust
/// use wisp_mesh::prelude::*;
/// use wisp_mesh::algs::divide::divide_wisp;
/// // a square face v0-v1-v2-v3
/// let mut m = Topomesh::new(2);
/// let v: Vec<_> = (0..4).map(|_| m.add_wisp(0, None).unwrap()).collect();
/// let e: Vec<_> = (0..4).map(|i| {
///     let e = m.add_wisp(1, None).unwrap();
///     m.link_all(e, [v[i], v[(i + 1) % 4]]).unwrap();
///     e
/// }).collect();
/// let f = m.add_wisp(2, None).unwrap();
/// m.link_all(f, e.clone()).unwrap();
///
/// let (h1, h2, sep) = divide_wisp(&mut m, 2, f, v[0], v[2]).unwrap();
/// assert!(!m.has_wisp(f));
/// assert_eq!(m.border_slice(sep).unwrap(), &[v[0], v[2]]);
/// assert_eq!(m.nb_borders(h1).unwrap(), 3);
/// assert_eq!(m.nb_borders(h2).unwrap(), 3);
/// ```
pub fn divide_wisp<M: MutableIncidence + ?Sized>(
    mesh: &mut M,
    degree: Degree,
    wid: WispId,
    split1: WispId,
    split2: WispId,
) -> Result<(WispId, WispId, WispId), MeshError> {
    divide(mesh, degree, wid, split1, split2).map(Into::into)
}

/// Same as [`divide_wisp`], returning a named [`Division`].
pub fn divide<M: MutableIncidence + ?Sized>(
    mesh: &mut M,
    degree: Degree,
    wid: WispId,
    split1: WispId,
    split2: WispId,
) -> Result<Division, MeshError> {
    let plan = plan_division(mesh, degree, wid, split1, split2)?;
    let regions = mesh.region_slice(wid)?.to_vec();

    let separator = mesh.add_wisp(degree - 1, None)?;
    for &b in &plan.separator_borders {
        mesh.link(b, separator)?;
    }
    let first = mesh.add_wisp(degree, None)?;
    mesh.link_all(first, plan.first.iter().copied().chain([separator]))?;
    let second = mesh.add_wisp(degree, None)?;
    mesh.link_all(second, plan.second.iter().copied().chain([separator]))?;
    for &r in &regions {
        mesh.link(first, r)?;
        mesh.link(second, r)?;
    }
    mesh.remove_wisp(wid)?;

    log::debug!(
        "divided wisp {wid} (degree {degree}) at {split1}/{split2} into {first} + {second}, separator {separator}"
    );
    Ok(Division {
        first,
        second,
        separator,
    })
}

fn plan_division<M: MutableIncidence + ?Sized>(
    mesh: &M,
    degree: Degree,
    wid: WispId,
    split1: WispId,
    split2: WispId,
) -> Result<DivisionPlan, MeshError> {
    let actual = mesh.degree(wid)?;
    if degree != actual {
        return Err(MeshError::InvalidDegree(format!(
            "wisp {wid} has degree {actual}, not {degree}"
        )));
    }
    if degree == 0 {
        return Err(MeshError::InvalidDegree(format!(
            "wisp {wid} has degree 0 and cannot be divided"
        )));
    }
    for s in [split1, split2] {
        if !mesh.has_wisp(s) {
            return Err(MeshError::UnknownWisp(s));
        }
    }
    let bad_split = || MeshError::InvalidSplitPoints {
        wisp: wid,
        first: split1,
        second: split2,
    };
    if split1 == split2 {
        return Err(bad_split());
    }
    if degree == 1 {
        return plan_edge_division(mesh, wid, split1, split2, bad_split);
    }
    plan_ring_division(mesh, wid, split1, split2, bad_split)
}

/// An edge is cut between its two endpoints; the separator is a bare vertex.
fn plan_edge_division<M: MutableIncidence + ?Sized>(
    mesh: &M,
    wid: WispId,
    split1: WispId,
    split2: WispId,
    bad_split: impl Fn() -> MeshError,
) -> Result<DivisionPlan, MeshError> {
    let ends = mesh.border_slice(wid)?;
    if !ends.contains(&split1) || !ends.contains(&split2) {
        return Err(bad_split());
    }
    if ends.len() != 2 {
        return Err(MeshError::DisconnectedRing(wid));
    }
    Ok(DivisionPlan {
        first: vec![split1],
        second: vec![split2],
        separator_borders: Vec::new(),
    })
}

fn plan_ring_division<M: MutableIncidence + ?Sized>(
    mesh: &M,
    wid: WispId,
    split1: WispId,
    split2: WispId,
    bad_split: impl Fn() -> MeshError,
) -> Result<DivisionPlan, MeshError> {
    let ring = mesh.border_slice(wid)?;

    // connector -> indices (into `ring`) of the borders it touches
    let mut touching: HashMap<WispId, Vec<usize>> = HashMap::new();
    let mut connectors: Vec<&[WispId]> = Vec::with_capacity(ring.len());
    for (i, &b) in ring.iter().enumerate() {
        let conns = mesh.border_slice(b)?;
        for &c in conns {
            touching.entry(c).or_default().push(i);
        }
        connectors.push(conns);
    }
    if !touching.contains_key(&split1) || !touching.contains_key(&split2) {
        return Err(bad_split());
    }
    let closed = ring.len() >= 2
        && connectors.iter().all(|c| c.len() == 2)
        && touching.values().all(|members| members.len() == 2);
    if !closed {
        return Err(MeshError::DisconnectedRing(wid));
    }

    let mut halves: [Vec<WispId>; 2] = [Vec::new(), Vec::new()];
    let mut visited = vec![false; ring.len()];
    let mut side = 0;
    let mut crossed = false;
    let mut entry = split1;
    let mut current = touching[&split1][0];
    loop {
        if visited[current] {
            return Err(MeshError::DisconnectedRing(wid));
        }
        visited[current] = true;
        halves[side].push(ring[current]);

        let exit = if connectors[current][0] == entry {
            connectors[current][1]
        } else {
            connectors[current][0]
        };
        if exit == split1 {
            break;
        }
        if exit == split2 {
            side = 1;
            crossed = true;
        }
        let pair = &touching[&exit];
        current = if pair[0] == current { pair[1] } else { pair[0] };
        entry = exit;
    }
    if !crossed || visited.iter().any(|v| !v) {
        return Err(MeshError::DisconnectedRing(wid));
    }

    let [first, second] = halves;
    Ok(DivisionPlan {
        first,
        second,
        separator_borders: vec![split1, split2],
    })
}
