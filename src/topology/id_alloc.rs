//! Identifier allocation with reuse of released ids.
//!
//! An [`IdAllocator`] hands out small dense `u32` ids for one entity kind.
//! Callers may request a specific id (e.g. to keep externally meaningful ids
//! when merging structures) or let the allocator pick one according to its
//! [`IdPolicy`].

use crate::mesh_error::MeshError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How an allocator picks an id when none is requested.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdPolicy {
    /// Smallest id not currently in use; released ids are reused.
    #[default]
    SmallestFree,
    /// One past the largest id ever issued; released ids are never handed out
    /// automatically (they can still be requested explicitly).
    Monotonic,
    /// Most recently released id first, then fresh ids.
    Lifo,
}

/// Issues and recycles ids for a single entity kind.
///
/// Ids at or above `high` have never been issued. Below it, every id that is
/// not live belongs to exactly one inclusive range of `free`, keyed by its
/// first id; adjacent ranges are coalesced. A request far above `high`
/// therefore records its gap as a single range.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    policy: IdPolicy,
    high: u64,
    free: BTreeMap<u32, u32>,
    /// Release order, only maintained under [`IdPolicy::Lifo`]. May hold ids
    /// that were reserved again since; those are skipped on pick.
    released: Vec<u32>,
}

impl IdAllocator {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[inline]
    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Returns true if `id` is currently handed out.
    #[inline]
    pub fn is_live(&self, id: u32) -> bool {
        u64::from(id) < self.high && !self.is_free(id)
    }

    /// Reserves `requested` if given, otherwise picks an id per policy.
    ///
    /// # Errors
    /// [`MeshError::IdInUse`] if `requested` is live,
    /// [`MeshError::IdSpaceExhausted`] if no fresh id is left.
    pub fn allocate(&mut self, requested: Option<u32>) -> Result<u32, MeshError> {
        match requested {
            Some(id) => self.reserve(id),
            None => self.pick(),
        }
    }

    /// Returns `id` to the pool. Releasing an id that is not live is a no-op.
    pub fn free(&mut self, id: u32) {
        if !self.is_live(id) {
            return;
        }
        self.insert_range(id, id);
        if self.policy == IdPolicy::Lifo {
            self.released.push(id);
        }
    }

    /// Forgets every issued id.
    pub fn reset(&mut self) {
        self.high = 0;
        self.free.clear();
        self.released.clear();
    }

    fn is_free(&self, id: u32) -> bool {
        self.free
            .range(..=id)
            .next_back()
            .is_some_and(|(_, &last)| id <= last)
    }

    /// Adds `first..=last` to the free ranges, merging with its neighbours.
    fn insert_range(&mut self, mut first: u32, mut last: u32) {
        if let Some((&s, &l)) = self.free.range(..first).next_back() {
            if l.checked_add(1) == Some(first) {
                self.free.remove(&s);
                first = s;
            }
        }
        if let Some(next) = last.checked_add(1) {
            if let Some(l) = self.free.remove(&next) {
                last = l;
            }
        }
        self.free.insert(first, last);
    }

    /// Removes `id` from the free range holding it. Caller checked `is_free(id)`.
    fn take_free(&mut self, id: u32) {
        let Some((&s, &l)) = self.free.range(..=id).next_back() else {
            return;
        };
        self.free.remove(&s);
        if s < id {
            self.free.insert(s, id - 1);
        }
        if id < l {
            self.free.insert(id + 1, l);
        }
    }

    fn fresh(&mut self) -> Result<u32, MeshError> {
        let id = u32::try_from(self.high).map_err(|_| MeshError::IdSpaceExhausted)?;
        self.high += 1;
        Ok(id)
    }

    fn reserve(&mut self, id: u32) -> Result<u32, MeshError> {
        let wide = u64::from(id);
        if wide >= self.high {
            if wide > self.high {
                // `high <= id - 1 < u32::MAX` here
                self.insert_range(self.high as u32, id - 1);
            }
            self.high = wide + 1;
            return Ok(id);
        }
        if !self.is_free(id) {
            return Err(MeshError::IdInUse(id));
        }
        self.take_free(id);
        Ok(id)
    }

    fn pick(&mut self) -> Result<u32, MeshError> {
        match self.policy {
            IdPolicy::SmallestFree => {
                if let Some((&first, _)) = self.free.first_key_value() {
                    self.take_free(first);
                    return Ok(first);
                }
            }
            IdPolicy::Monotonic => {}
            IdPolicy::Lifo => {
                while let Some(id) = self.released.pop() {
                    if self.is_free(id) {
                        self.take_free(id);
                        return Ok(id);
                    }
                }
            }
        }
        self.fresh()
    }
}
