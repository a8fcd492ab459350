//! `WispId`: a strong, zero-cost handle for topological elements
//!
//! Every element of a topomesh (vertex, edge, face, volume, ...) is a *wisp*
//! identified by a small dense integer. `WispId` wraps a `u32` so ids cannot be
//! mixed up with degrees, counts or legacy link ids.
//!
//! This module provides:
//! - A transparent `WispId` newtype around `u32`.
//! - The `Degree` alias used for the dimension class of a wisp.
//! - Implementations of common traits (`Debug`, `Display`, ordering,
//!   hashing, serde) so `WispId` can be used in maps, sets, and printed easily.

use std::fmt;

/// Dimension class of a wisp: 0 = vertex, 1 = edge, 2 = face, 3 = volume, ...
pub type Degree = usize;

/// Opaque identifier of a wisp, unique among the live wisps of a mesh.
///
/// # Memory layout
/// This type is `repr(transparent)`, meaning it has the same ABI and
/// alignment as its single field (`u32`).
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct WispId(u32);

impl WispId {
    /// Creates a new `WispId` from a raw `u32` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use wisp_mesh::topology::wisp::WispId;
    /// let w = WispId::new(3);
    /// assert_eq!(w.get(), 3);
    /// ```
    #[inline]
    pub const fn new(raw: u32) -> Self {
        WispId(raw)
    }

    /// Returns the inner `u32` value of this `WispId`.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for WispId {
    #[inline]
    fn from(raw: u32) -> Self {
        WispId(raw)
    }
}

impl From<WispId> for u32 {
    #[inline]
    fn from(w: WispId) -> Self {
        w.0
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

/// Custom `Debug` implementation to display as `WispId(raw_value)`.
impl fmt::Debug for WispId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WispId").field(&self.0).finish()
    }
}

/// Prints only the raw integer.
impl fmt::Display for WispId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertion that `WispId` has the same size as `u32`.
    use super::*;
    use static_assertions::{assert_eq_align, assert_eq_size};

    assert_eq_size!(WispId, u32);
    assert_eq_align!(WispId, u32);
}
