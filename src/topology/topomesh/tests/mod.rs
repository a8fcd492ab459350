mod link_tests;
mod wisp_tests;

static_assertions::assert_impl_all!(crate::topology::topomesh::Topomesh: Send, Sync, Clone);
static_assertions::assert_impl_all!(crate::topology::cell_mesh::CellMesh: Send, Sync, Clone);
