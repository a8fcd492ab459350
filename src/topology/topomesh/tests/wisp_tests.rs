use crate::mesh_error::MeshError;
use crate::topology::id_alloc::IdPolicy;
use crate::topology::topomesh::{Incidence, MutableIncidence, Topomesh, TopomeshOptions};
use crate::topology::wisp::WispId;

#[test]
fn add_wisp_assigns_ids_across_degrees() {
    let mut m = Topomesh::new(2);
    let v = m.add_wisp(0, None).unwrap();
    let e = m.add_wisp(1, None).unwrap();
    let f = m.add_wisp(2, None).unwrap();
    assert_eq!((v.get(), e.get(), f.get()), (0, 1, 2));
    assert_eq!(m.degree(e).unwrap(), 1);
    assert_eq!(m.nb_wisps(None).unwrap(), 3);
    assert_eq!(m.nb_wisps(Some(2)).unwrap(), 1);
    assert_eq!(m.wisps(None).unwrap(), vec![v, e, f]);
}

#[test]
fn requested_ids_are_honoured_once() {
    let mut m = Topomesh::new(1);
    let a = m.add_wisp(1, Some(WispId::new(42))).unwrap();
    assert_eq!(a, WispId::new(42));
    assert_eq!(m.add_wisp(0, Some(a)), Err(MeshError::IdInUse(42)));
    assert_eq!(m.nb_wisps(None).unwrap(), 1);
}

#[test]
fn degree_bounds_are_enforced() {
    let mut m = Topomesh::new(2);
    assert!(matches!(m.add_wisp(3, None), Err(MeshError::InvalidDegree(_))));
    assert!(matches!(m.wisps(Some(3)), Err(MeshError::InvalidDegree(_))));
    assert!(matches!(m.nb_wisps(Some(9)), Err(MeshError::InvalidDegree(_))));
    assert!(m.wisps(Some(2)).unwrap().is_empty());
}

#[test]
fn unknown_wisp_queries_fail() {
    let m = Topomesh::new(1);
    let w = WispId::new(5);
    assert!(!m.has_wisp(w));
    assert_eq!(m.degree(w), Err(MeshError::UnknownWisp(w)));
    assert_eq!(m.border_slice(w), Err(MeshError::UnknownWisp(w)));
    assert_eq!(m.region_slice(w), Err(MeshError::UnknownWisp(w)));
    assert_eq!(m.nb_borders(w), Err(MeshError::UnknownWisp(w)));
}

#[test]
fn wisps_are_listed_by_degree_then_id() {
    let mut m = Topomesh::new(1);
    let e = m.add_wisp(1, Some(WispId::new(1))).unwrap();
    let v = m.add_wisp(0, Some(WispId::new(7))).unwrap();
    let u = m.add_wisp(0, Some(WispId::new(3))).unwrap();
    assert_eq!(m.wisps(None).unwrap(), vec![u, v, e]);
}

#[test]
fn freed_ids_follow_the_policy() {
    let mut m = Topomesh::new(0);
    let ids: Vec<_> = (0..4).map(|_| m.add_wisp(0, None).unwrap()).collect();
    m.remove_wisp(ids[2]).unwrap();
    m.remove_wisp(ids[1]).unwrap();
    assert_eq!(m.add_wisp(0, None).unwrap(), ids[1]);

    let mut mono = Topomesh::with_options(TopomeshOptions::new(0).with_id_policy(IdPolicy::Monotonic));
    let a = mono.add_wisp(0, None).unwrap();
    mono.remove_wisp(a).unwrap();
    assert_eq!(mono.add_wisp(0, None).unwrap(), WispId::new(1));
    assert_eq!(mono.options().id_policy, IdPolicy::Monotonic);
}

#[test]
fn clear_restarts_ids() {
    let mut m = Topomesh::new(1);
    let v = m.add_wisp(0, None).unwrap();
    let e = m.add_wisp(1, None).unwrap();
    m.link(v, e).unwrap();
    m.clear();
    assert_eq!(m.nb_wisps(None).unwrap(), 0);
    assert_eq!(m.nb_links(), 0);
    assert_eq!(m.add_wisp(1, None).unwrap(), WispId::new(0));
}

#[test]
fn default_mesh_has_three_degrees() {
    let m = Topomesh::default();
    assert_eq!(m.max_degree(), 3);
}

#[test]
fn checked_construction_caps_the_degree() {
    assert!(Topomesh::try_new(TopomeshOptions::DEGREE_LIMIT).is_ok());
    assert!(matches!(
        Topomesh::try_new(usize::MAX),
        Err(MeshError::InvalidDegree(_))
    ));
    assert!(matches!(
        Topomesh::try_with_options(TopomeshOptions::new(TopomeshOptions::DEGREE_LIMIT + 1)),
        Err(MeshError::InvalidDegree(_))
    ));
}

#[test]
fn far_and_extreme_ids_are_accepted() {
    let mut m = Topomesh::new(0);
    let far = WispId::new(1_000_000_000);
    assert_eq!(m.add_wisp(0, Some(far)).unwrap(), far);
    let top = WispId::new(u32::MAX);
    assert_eq!(m.add_wisp(0, Some(top)).unwrap(), top);
    assert_eq!(m.add_wisp(0, None).unwrap(), WispId::new(0));
    assert_eq!(m.wisps(None).unwrap(), vec![WispId::new(0), far, top]);
    m.remove_wisp(top).unwrap();
    assert_eq!(m.add_wisp(0, Some(top)).unwrap(), top);
}

#[test]
fn exhausted_id_space_is_reported() {
    let mut m = Topomesh::with_options(TopomeshOptions::new(0).with_id_policy(IdPolicy::Monotonic));
    m.add_wisp(0, Some(WispId::new(u32::MAX))).unwrap();
    assert_eq!(m.add_wisp(0, None), Err(MeshError::IdSpaceExhausted));
}
