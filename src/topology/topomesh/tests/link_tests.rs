use crate::mesh_error::MeshError;
use crate::topology::topomesh::{Incidence, MutableIncidence, Topomesh};
use crate::topology::wisp::WispId;

fn edge() -> (Topomesh, WispId, WispId, WispId) {
    let mut m = Topomesh::new(2);
    let a = m.add_wisp(0, None).unwrap();
    let b = m.add_wisp(0, None).unwrap();
    let e = m.add_wisp(1, None).unwrap();
    (m, a, b, e)
}

#[test]
fn link_is_mirrored() {
    let (mut m, a, b, e) = edge();
    m.link(b, e).unwrap();
    m.link(a, e).unwrap();
    assert_eq!(m.border_slice(e).unwrap(), &[b, a]);
    assert_eq!(m.region_slice(a).unwrap(), &[e]);
    assert!(m.has_link(a, e));
    assert!(!m.has_link(e, a));
    assert_eq!(m.nb_links(), 2);
    assert_eq!(m.nb_borders(e).unwrap(), 2);
    assert_eq!(m.nb_regions(b).unwrap(), 1);
}

#[test]
fn link_rejects_non_consecutive_degrees() {
    let (mut m, a, b, e) = edge();
    let f = m.add_wisp(2, None).unwrap();
    assert!(matches!(m.link(a, f), Err(MeshError::InvalidDegree(_))));
    assert!(matches!(m.link(e, a), Err(MeshError::InvalidDegree(_))));
    assert!(matches!(m.link(a, b), Err(MeshError::InvalidDegree(_))));
    assert_eq!(m.nb_links(), 0);
}

#[test]
fn link_rejects_duplicates_and_unknowns() {
    let (mut m, a, _, e) = edge();
    m.link(a, e).unwrap();
    assert_eq!(m.link(a, e), Err(MeshError::DuplicateLink { lower: a, upper: e }));
    let ghost = WispId::new(99);
    assert_eq!(m.link(ghost, e), Err(MeshError::UnknownWisp(ghost)));
    assert_eq!(m.nb_links(), 1);
}

#[test]
fn unlink_removes_both_sides() {
    let (mut m, a, b, e) = edge();
    m.link_all(e, [a, b]).unwrap();
    m.unlink(a, e).unwrap();
    assert_eq!(m.border_slice(e).unwrap(), &[b]);
    assert!(m.region_slice(a).unwrap().is_empty());
    assert_eq!(m.unlink(a, e), Err(MeshError::UnknownLink { lower: a, upper: e }));
    assert_eq!(m.nb_links(), 1);
}

#[test]
fn link_all_is_all_or_nothing() {
    let (mut m, a, b, e) = edge();
    let f = m.add_wisp(2, None).unwrap();
    assert!(matches!(m.link_all(e, [a, f]), Err(MeshError::InvalidDegree(_))));
    assert_eq!(
        m.link_all(e, [a, b, a]),
        Err(MeshError::DuplicateLink { lower: a, upper: e })
    );
    assert_eq!(m.nb_links(), 0);
}

#[test]
fn clear_links_keeps_wisps() {
    let (mut m, a, b, e) = edge();
    m.link_all(e, [a, b]).unwrap();
    m.clear_links();
    assert_eq!(m.nb_links(), 0);
    assert_eq!(m.nb_wisps(None).unwrap(), 3);
    assert!(m.border_slice(e).unwrap().is_empty());
}

#[test]
fn from_parts_builds_links() {
    let w = WispId::new;
    let m = Topomesh::from_parts(1, [(0, w(0)), (0, w(1)), (1, w(5))], [(w(1), w(5)), (w(0), w(5))])
        .unwrap();
    assert_eq!(m.border_slice(w(5)).unwrap(), &[w(1), w(0)]);
    assert!(Topomesh::from_parts(1, [(0, w(0))], [(w(0), w(3))]).is_err());
}
