use super::incidence_trait::Incidence;
use crate::mesh_error::MeshError;
use crate::topology::wisp::{Degree, WispId};

/// Trait for incidence structures that support mutation.
///
/// [`Incidence`] provides the one-hop queries. `MutableIncidence` adds the
/// primitives every editing algorithm is built from. Each mutator either
/// applies fully or returns an error leaving the structure untouched.
pub trait MutableIncidence: Incidence {
    /// Create a wisp of `degree` with no links, using `id` if given.
    ///
    /// # Errors
    /// [`MeshError::InvalidDegree`] for a degree above `max_degree()`,
    /// [`MeshError::IdInUse`] if `id` is live.
    fn add_wisp(&mut self, degree: Degree, id: Option<WispId>) -> Result<WispId, MeshError>;

    /// Remove `w` and **all** links touching it.
    fn remove_wisp(&mut self, w: WispId) -> Result<(), MeshError>;

    /// Link `lower` (degree d) as a border of `upper` (degree d+1).
    ///
    /// # Errors
    /// [`MeshError::UnknownWisp`], [`MeshError::InvalidDegree`] when degrees
    /// are not consecutive, [`MeshError::DuplicateLink`].
    fn link(&mut self, lower: WispId, upper: WispId) -> Result<(), MeshError>;

    /// Remove the link between `lower` and `upper`.
    ///
    /// # Errors
    /// [`MeshError::UnknownLink`] if they are not linked.
    fn unlink(&mut self, lower: WispId, upper: WispId) -> Result<(), MeshError>;

    /// Remove every wisp and link; identifiers restart from scratch.
    fn clear(&mut self);

    /// Remove every link, keeping all wisps and their ids.
    fn clear_links(&mut self);

    // ---------- convenience mutators ----------

    /// Link every wisp of `borders` below `upper`.
    ///
    /// Validates all pairs first so that a failure leaves no partial links.
    fn link_all(
        &mut self,
        upper: WispId,
        borders: impl IntoIterator<Item = WispId>,
    ) -> Result<(), MeshError> {
        let borders: Vec<WispId> = borders.into_iter().collect();
        let upper_degree = self.degree(upper)?;
        let mut seen = Vec::with_capacity(borders.len());
        for &b in &borders {
            let d = self.degree(b)?;
            if upper_degree.checked_sub(1) != Some(d) {
                return Err(MeshError::InvalidDegree(format!(
                    "cannot link wisp {b} of degree {d} below wisp {upper} of degree {upper_degree}"
                )));
            }
            if self.has_link(b, upper) || seen.contains(&b) {
                return Err(MeshError::DuplicateLink {
                    lower: b,
                    upper,
                });
            }
            seen.push(b);
        }
        for b in borders {
            self.link(b, upper)?;
        }
        Ok(())
    }
}
