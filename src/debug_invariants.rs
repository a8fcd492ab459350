//! Structural self-checks for incidence structures.
//!
//! Every mutating primitive of [`Topomesh`](crate::topology::topomesh::Topomesh)
//! re-checks the wisps it touched through
//! [`check_mesh_invariants!`](crate::check_mesh_invariants). The check is
//! compiled into debug builds and into release builds that enable
//! `strict-invariants` or `check-invariants`; elsewhere it vanishes.

use crate::mesh_error::MeshError;

/// A structure whose incidence bookkeeping can be audited as a whole.
pub trait MeshInvariants {
    /// Full sweep: mirror symmetry of borders and regions, degree gaps,
    /// duplicate links, strata and the cached counters. Returns the first
    /// violation as [`MeshError::InvariantViolation`].
    fn validate_invariants(&self) -> Result<(), MeshError>;

    /// Runs [`validate_invariants`](Self::validate_invariants) and panics on
    /// failure when invariant checking is compiled in.
    fn assert_invariants(&self) {
        crate::check_mesh_invariants!(self.validate_invariants(), "full sweep");
    }
}

/// Evaluates a `Result<(), MeshError>` check and panics with the name of the
/// operation that broke the structure.
#[macro_export]
macro_rules! check_mesh_invariants {
    ($check:expr, $op:literal) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $check {
            panic!(concat!("wisp-mesh: ", $op, " left the incidence structure inconsistent: {}"), e);
        }
    };
}
