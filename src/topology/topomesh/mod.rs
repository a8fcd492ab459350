//! Degree-indexed incidence store ("topomesh") and the traits it implements.
//!
//! - [`Incidence`]: read-only one-hop primitives.
//! - [`MutableIncidence`]: wisp/link mutation, maintaining invariants.
//! - [`IncidenceQueryExt`]: multi-hop navigation derived from the primitives.
//! - [`Topomesh`]: the in-memory store.

pub mod in_memory;
pub mod incidence_trait;
pub mod mutable;
pub mod options;
pub mod query_ext;

pub use in_memory::Topomesh;
pub use incidence_trait::Incidence;
pub use mutable::MutableIncidence;
pub use options::TopomeshOptions;
pub use query_ext::IncidenceQueryExt;

#[cfg(test)]
mod tests;
