//! Construction options for [`Topomesh`](super::Topomesh).

use crate::topology::id_alloc::IdPolicy;
use crate::topology::wisp::Degree;
use serde::{Deserialize, Serialize};

/// Fixed configuration of a topomesh.
///
/// `max_degree` bounds the degree of every wisp for the lifetime of the
/// structure; `id_policy` decides which id an `add_wisp(d, None)` receives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopomeshOptions {
    pub max_degree: Degree,
    pub id_policy: IdPolicy,
}

impl Default for TopomeshOptions {
    fn default() -> Self {
        Self {
            max_degree: 3,
            id_policy: IdPolicy::SmallestFree,
        }
    }
}

impl TopomeshOptions {
    /// Largest `max_degree` accepted by the checked constructors and the
    /// readers.
    pub const DEGREE_LIMIT: Degree = 255;

    pub fn new(max_degree: Degree) -> Self {
        Self {
            max_degree,
            ..Self::default()
        }
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }
}
