//! Re-export public algorithms.

pub mod divide;
pub mod edit;
pub mod neighbors;
pub mod traversal;
pub mod wisp_sets;

pub use divide::{Division, divide, divide_wisp};
pub use edit::{
    clean_duplicated_borders, clean_geometry, clean_orphans, clean_remove, flip_edge, merge_wisps,
};
pub use traversal::Dir;
