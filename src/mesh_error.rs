//! MeshError: Unified error type for wisp-mesh public APIs
//!
//! Every fallible operation of the incidence store, the navigation queries,
//! the topological editor and the text I/O layer reports failures through
//! this type. Errors are local and non-retryable: they describe a caller
//! contract violation or a structurally malformed input.

use crate::topology::link::LinkId;
use crate::topology::wisp::WispId;
use thiserror::Error;

/// Unified error type for wisp-mesh operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// No live wisp carries this id.
    #[error("wisp {0} does not exist")]
    UnknownWisp(WispId),
    /// The two wisps exist but are not linked.
    #[error("wisps {lower} and {upper} are not linked")]
    UnknownLink { lower: WispId, upper: WispId },
    /// No live legacy link carries this id.
    #[error("link {0} does not exist")]
    UnknownLinkId(LinkId),
    /// Degree out of `[0, max_degree]`, or two wisps whose degrees are not
    /// consecutive where consecutive degrees are required.
    #[error("invalid degree: {0}")]
    InvalidDegree(String),
    /// A caller-requested id is already held by a live entity of the same kind.
    #[error("id {0} is already in use")]
    IdInUse(u32),
    /// Every id of the `u32` range has been issued.
    #[error("no identifier left to allocate")]
    IdSpaceExhausted,
    /// The (lower, upper) pair is already linked.
    #[error("wisps {lower} and {upper} are already linked")]
    DuplicateLink { lower: WispId, upper: WispId },
    /// Split points of a divide do not sit on the wisp's border ring.
    #[error("invalid split points {first} and {second} for wisp {wisp}")]
    InvalidSplitPoints {
        wisp: WispId,
        first: WispId,
        second: WispId,
    },
    /// The borders of the wisp do not form a single closed ring.
    #[error("borders of wisp {0} do not form a single closed ring")]
    DisconnectedRing(WispId),
    /// Merge preconditions (shared frontier with exactly two regions) failed.
    #[error("cannot merge wisps {0} and {1}: {2}")]
    InvalidMerge(WispId, WispId, String),
    /// Edge flip preconditions (two triangles around the edge) failed.
    #[error("cannot flip edge {0}: {1}")]
    InvalidFlip(WispId, String),
    /// Internal consistency check failed.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
    /// Malformed text input.
    #[error("parse error: {0}")]
    MeshIoParse(String),
    /// Underlying reader/writer failure.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for MeshError {
    fn from(err: std::io::Error) -> Self {
        MeshError::Io(err.to_string())
    }
}

impl MeshError {
    /// Degree outside of `[0, max_degree]`.
    pub(crate) fn degree_out_of_bounds(degree: usize, max_degree: usize) -> Self {
        MeshError::InvalidDegree(format!(
            "degree {degree} is outside of mesh bounds [0, {max_degree}]"
        ))
    }
}
