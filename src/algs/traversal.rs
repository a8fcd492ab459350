//! Multi-hop border/region traversal.
//!
//! Links only join consecutive degrees, so reaching wisps `k` degrees below
//! (or above) a seed is a breadth-first walk of exactly `k` levels. Each level
//! is deduplicated; output follows discovery order.

use crate::mesh_error::MeshError;
use crate::topology::topomesh::Incidence;
use crate::topology::wisp::{Degree, WispId};
use std::collections::HashSet;

/// Direction of a traversal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    /// Towards borders (degree - 1).
    Down,
    /// Towards regions (degree + 1).
    Up,
}

#[inline]
fn step_neighbors<'a, M: Incidence + ?Sized>(
    mesh: &'a M,
    dir: Dir,
    w: WispId,
) -> Result<&'a [WispId], MeshError> {
    match dir {
        Dir::Down => mesh.border_slice(w),
        Dir::Up => mesh.region_slice(w),
    }
}

/// Walks `levels` steps in `dir` from every seed, returning the distinct
/// wisps reached at the last level in discovery order.
///
/// `levels == 0` returns the deduplicated seeds.
pub fn walk_levels<M, I>(mesh: &M, seeds: I, dir: Dir, levels: usize) -> Result<Vec<WispId>, MeshError>
where
    M: Incidence + ?Sized,
    I: IntoIterator<Item = WispId>,
{
    let mut frontier: Vec<WispId> = Vec::new();
    let mut seen: HashSet<WispId> = HashSet::new();
    for s in seeds {
        if !mesh.has_wisp(s) {
            return Err(MeshError::UnknownWisp(s));
        }
        if seen.insert(s) {
            frontier.push(s);
        }
    }
    for _ in 0..levels {
        let mut next = Vec::new();
        seen.clear();
        for &w in &frontier {
            for &q in step_neighbors(mesh, dir, w)? {
                if seen.insert(q) {
                    next.push(q);
                }
            }
        }
        frontier = next;
    }
    Ok(frontier)
}

/// Borders of `w`, one hop or down to degree `target`.
///
/// # Errors
/// [`MeshError::UnknownWisp`] if `w` is absent; [`MeshError::InvalidDegree`]
/// if `target` is not strictly below `degree(w)`.
pub fn borders<M: Incidence + ?Sized>(
    mesh: &M,
    w: WispId,
    target: Option<Degree>,
) -> Result<Vec<WispId>, MeshError> {
    let degree = mesh.degree(w)?;
    let Some(target) = target else {
        return Ok(mesh.border_slice(w)?.to_vec());
    };
    if target >= degree {
        return Err(MeshError::InvalidDegree(format!(
            "target degree {target} is not below degree {degree} of wisp {w}"
        )));
    }
    walk_levels(mesh, [w], Dir::Down, degree - target)
}

/// Regions of `w`, one hop or up to degree `target`.
///
/// # Errors
/// [`MeshError::UnknownWisp`] if `w` is absent; [`MeshError::InvalidDegree`]
/// if `target` is not strictly above `degree(w)` or exceeds the max degree.
pub fn regions<M: Incidence + ?Sized>(
    mesh: &M,
    w: WispId,
    target: Option<Degree>,
) -> Result<Vec<WispId>, MeshError> {
    let degree = mesh.degree(w)?;
    let Some(target) = target else {
        return Ok(mesh.region_slice(w)?.to_vec());
    };
    mesh.check_degree(target)?;
    if target <= degree {
        return Err(MeshError::InvalidDegree(format!(
            "target degree {target} is not above degree {degree} of wisp {w}"
        )));
    }
    walk_levels(mesh, [w], Dir::Up, target - degree)
}
