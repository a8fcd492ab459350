//! In-memory implementation of the [`Incidence`] and [`MutableIncidence`] traits.
//!
//! [`Topomesh`] keeps one record per wisp in a hash map keyed by [`WispId`].
//! A record holds the wisp's degree and two adjacency lists (borders below,
//! regions above), mirrored so every link is queryable from both ends.
//! Wisps are also bucketed by degree ("strata") in ordered sets, which gives
//! deterministic listing and O(1) per-degree counts. A stratum exists only
//! once a wisp of its degree has been added, so `max_degree` costs nothing.

use super::incidence_trait::Incidence;
use super::mutable::MutableIncidence;
use super::options::TopomeshOptions;
use crate::debug_invariants::MeshInvariants;
use crate::mesh_error::MeshError;
use crate::topology::id_alloc::IdAllocator;
use crate::topology::wisp::{Degree, WispId};
use hashbrown::HashMap;
use std::collections::{BTreeMap, BTreeSet};

/// Per-wisp record: degree plus mirrored adjacency.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct WispRecord {
    pub(crate) degree: Degree,
    /// Degree-(d-1) wisps, in link insertion order.
    pub(crate) borders: Vec<WispId>,
    /// Degree-(d+1) wisps, in link insertion order.
    pub(crate) regions: Vec<WispId>,
}

impl WispRecord {
    fn new(degree: Degree) -> Self {
        Self {
            degree,
            ..Self::default()
        }
    }
}

/// Incidence store over wisps of degree `0..=max_degree`.
///
/// # Example
/// ```rust
/// use wisp_mesh::topology::topomesh::{Incidence, MutableIncidence, Topomesh};
/// let mut m = Topomesh::new(1);
/// let v = m.add_wisp(0, None).unwrap();
/// let e = m.add_wisp(1, None).unwrap();
/// m.link(v, e).unwrap();
/// assert_eq!(m.border_slice(e).unwrap(), &[v]);
/// assert_eq!(m.region_slice(v).unwrap(), &[e]);
/// ```
#[derive(Clone, Debug)]
pub struct Topomesh {
    options: TopomeshOptions,
    pub(crate) records: HashMap<WispId, WispRecord>,
    /// `strata[&d]` holds the ids of every wisp of degree `d`.
    pub(crate) strata: BTreeMap<Degree, BTreeSet<WispId>>,
    ids: IdAllocator,
    nb_links: usize,
}

impl Default for Topomesh {
    fn default() -> Self {
        Self::with_options(TopomeshOptions::default())
    }
}

impl Topomesh {
    /// Creates an empty mesh whose wisps may have degree `0..=max_degree`.
    pub fn new(max_degree: Degree) -> Self {
        Self::with_options(TopomeshOptions::new(max_degree))
    }

    pub fn with_options(options: TopomeshOptions) -> Self {
        Self {
            options,
            records: HashMap::new(),
            strata: BTreeMap::new(),
            ids: IdAllocator::new(options.id_policy),
            nb_links: 0,
        }
    }

    /// Like [`new`](Self::new), rejecting degrees above
    /// [`TopomeshOptions::DEGREE_LIMIT`].
    pub fn try_new(max_degree: Degree) -> Result<Self, MeshError> {
        Self::try_with_options(TopomeshOptions::new(max_degree))
    }

    /// Like [`with_options`](Self::with_options), rejecting degrees above
    /// [`TopomeshOptions::DEGREE_LIMIT`].
    pub fn try_with_options(options: TopomeshOptions) -> Result<Self, MeshError> {
        if options.max_degree > TopomeshOptions::DEGREE_LIMIT {
            return Err(MeshError::InvalidDegree(format!(
                "max degree {} exceeds the limit of {}",
                options.max_degree,
                TopomeshOptions::DEGREE_LIMIT
            )));
        }
        Ok(Self::with_options(options))
    }

    #[inline]
    pub fn options(&self) -> &TopomeshOptions {
        &self.options
    }

    /// Builds a mesh from explicit wisp declarations and `(lower, upper)` links.
    ///
    /// # Example
    /// ```rust
    /// use wisp_mesh::topology::topomesh::{Incidence, Topomesh};
    /// use wisp_mesh::topology::wisp::WispId;
    /// let w = WispId::new;
    /// let m = Topomesh::from_parts(1, [(0, w(0)), (0, w(1)), (1, w(2))], [(w(0), w(2)), (w(1), w(2))]).unwrap();
    /// assert_eq!(m.nb_links(), 2);
    /// ```
    pub fn from_parts<W, L>(max_degree: Degree, wisps: W, links: L) -> Result<Self, MeshError>
    where
        W: IntoIterator<Item = (Degree, WispId)>,
        L: IntoIterator<Item = (WispId, WispId)>,
    {
        let mut mesh = Self::new(max_degree);
        for (degree, id) in wisps {
            mesh.add_wisp(degree, Some(id))?;
        }
        for (lower, upper) in links {
            mesh.link(lower, upper)?;
        }
        Ok(mesh)
    }

    #[inline]
    fn record(&self, w: WispId) -> Result<&WispRecord, MeshError> {
        self.records.get(&w).ok_or(MeshError::UnknownWisp(w))
    }

    /// Checks that `lower` may be linked below `upper` (both exist, degrees consecutive).
    fn check_link_degrees(&self, lower: WispId, upper: WispId) -> Result<(), MeshError> {
        let dl = self.record(lower)?.degree;
        let du = self.record(upper)?.degree;
        if du.checked_sub(1) != Some(dl) {
            return Err(MeshError::InvalidDegree(format!(
                "cannot link wisp {lower} of degree {dl} below wisp {upper} of degree {du}"
            )));
        }
        Ok(())
    }

    fn detach_all(&mut self, w: WispId) -> usize {
        let Some(rec) = self.records.get_mut(&w) else {
            return 0;
        };
        let borders = std::mem::take(&mut rec.borders);
        let regions = std::mem::take(&mut rec.regions);
        for b in &borders {
            if let Some(r) = self.records.get_mut(b) {
                r.regions.retain(|x| *x != w);
            }
        }
        for u in &regions {
            if let Some(r) = self.records.get_mut(u) {
                r.borders.retain(|x| *x != w);
            }
        }
        borders.len() + regions.len()
    }
}

impl Incidence for Topomesh {
    #[inline]
    fn max_degree(&self) -> Degree {
        self.options.max_degree
    }

    #[inline]
    fn has_wisp(&self, w: WispId) -> bool {
        self.records.contains_key(&w)
    }

    fn degree(&self, w: WispId) -> Result<Degree, MeshError> {
        Ok(self.record(w)?.degree)
    }

    fn border_slice(&self, w: WispId) -> Result<&[WispId], MeshError> {
        Ok(&self.record(w)?.borders)
    }

    fn region_slice(&self, w: WispId) -> Result<&[WispId], MeshError> {
        Ok(&self.record(w)?.regions)
    }

    fn wisp_iter<'a>(
        &'a self,
        degree: Option<Degree>,
    ) -> Result<Box<dyn Iterator<Item = WispId> + 'a>, MeshError> {
        match degree {
            Some(d) => {
                self.check_degree(d)?;
                match self.strata.get(&d) {
                    Some(stratum) => Ok(Box::new(stratum.iter().copied())),
                    None => Ok(Box::new(std::iter::empty())),
                }
            }
            None => Ok(Box::new(self.strata.values().flat_map(|s| s.iter().copied()))),
        }
    }

    fn nb_wisps(&self, degree: Option<Degree>) -> Result<usize, MeshError> {
        match degree {
            Some(d) => {
                self.check_degree(d)?;
                Ok(self.strata.get(&d).map_or(0, BTreeSet::len))
            }
            None => Ok(self.records.len()),
        }
    }

    #[inline]
    fn nb_links(&self) -> usize {
        self.nb_links
    }
}

impl MutableIncidence for Topomesh {
    fn add_wisp(&mut self, degree: Degree, id: Option<WispId>) -> Result<WispId, MeshError> {
        self.check_degree(degree)?;
        let w = WispId::new(self.ids.allocate(id.map(WispId::get))?);
        self.records.insert(w, WispRecord::new(degree));
        self.strata.entry(degree).or_default().insert(w);
        log::trace!("add wisp {w} (degree {degree})");
        crate::check_mesh_invariants!(self.validate_around(&[w]), "add_wisp");
        Ok(w)
    }

    /// Remove `w` and all links touching it.
    ///
    /// # Example
    /// ```rust
    /// use wisp_mesh::topology::topomesh::{Incidence, MutableIncidence, Topomesh};
    /// let mut m = Topomesh::new(1);
    /// let v = m.add_wisp(0, None).unwrap();
    /// let e = m.add_wisp(1, None).unwrap();
    /// m.link(v, e).unwrap();
    /// m.remove_wisp(v).unwrap();
    /// assert!(m.border_slice(e).unwrap().is_empty());
    /// assert_eq!(m.nb_links(), 0);
    /// ```
    fn remove_wisp(&mut self, w: WispId) -> Result<(), MeshError> {
        let degree = self.record(w)?.degree;
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        let touched: Vec<WispId> = {
            let rec = self.record(w)?;
            rec.borders.iter().chain(&rec.regions).copied().chain([w]).collect()
        };
        let dropped = self.detach_all(w);
        self.nb_links -= dropped;
        self.records.remove(&w);
        if let Some(stratum) = self.strata.get_mut(&degree) {
            stratum.remove(&w);
        }
        self.ids.free(w.get());
        log::trace!("remove wisp {w} (degree {degree}, {dropped} links)");
        crate::check_mesh_invariants!(self.validate_around(&touched), "remove_wisp");
        Ok(())
    }

    fn link(&mut self, lower: WispId, upper: WispId) -> Result<(), MeshError> {
        self.check_link_degrees(lower, upper)?;
        if self.has_link(lower, upper) {
            return Err(MeshError::DuplicateLink { lower, upper });
        }
        if let Some(r) = self.records.get_mut(&upper) {
            r.borders.push(lower);
        }
        if let Some(r) = self.records.get_mut(&lower) {
            r.regions.push(upper);
        }
        self.nb_links += 1;
        log::trace!("link {lower} -> {upper}");
        crate::check_mesh_invariants!(self.validate_around(&[lower, upper]), "link");
        Ok(())
    }

    fn unlink(&mut self, lower: WispId, upper: WispId) -> Result<(), MeshError> {
        if !self.has_link(lower, upper) {
            return Err(MeshError::UnknownLink { lower, upper });
        }
        if let Some(r) = self.records.get_mut(&upper) {
            r.borders.retain(|x| *x != lower);
        }
        if let Some(r) = self.records.get_mut(&lower) {
            r.regions.retain(|x| *x != upper);
        }
        self.nb_links -= 1;
        log::trace!("unlink {lower} -> {upper}");
        crate::check_mesh_invariants!(self.validate_around(&[lower, upper]), "unlink");
        Ok(())
    }

    fn clear(&mut self) {
        self.records.clear();
        self.strata.clear();
        self.ids.reset();
        self.nb_links = 0;
    }

    fn clear_links(&mut self) {
        for rec in self.records.values_mut() {
            rec.borders.clear();
            rec.regions.clear();
        }
        self.nb_links = 0;
    }
}

impl Topomesh {
    /// Checks the records of `wisps` and of their direct neighbours: mirror
    /// symmetry, degree gaps, duplicate links, strata and allocator
    /// membership. Ids in `wisps` that are no longer live must have left
    /// every structure. Cost is proportional to the neighbourhood, which
    /// lets every mutator run it.
    pub(crate) fn validate_around(&self, wisps: &[WispId]) -> Result<(), MeshError> {
        let violation = |msg: String| Err(MeshError::InvariantViolation(msg));
        for &w in wisps {
            let Some(rec) = self.records.get(&w) else {
                if self.ids.is_live(w.get()) {
                    return violation(format!("removed wisp {w} still holds its id"));
                }
                if self.strata.values().any(|s| s.contains(&w)) {
                    return violation(format!("removed wisp {w} is still listed in a stratum"));
                }
                continue;
            };
            if !self.ids.is_live(w.get()) {
                return violation(format!("wisp {w} holds an id the allocator considers free"));
            }
            if !self.strata.get(&rec.degree).is_some_and(|s| s.contains(&w)) {
                return violation(format!("wisp {w} is missing from stratum {}", rec.degree));
            }
            for (i, &b) in rec.borders.iter().enumerate() {
                if rec.borders[..i].contains(&b) {
                    return violation(format!("duplicate link {b} -> {w}"));
                }
                match self.records.get(&b) {
                    Some(brec)
                        if rec.degree.checked_sub(1) == Some(brec.degree)
                            && brec.regions.contains(&w) => {}
                    Some(_) => return violation(format!("link {b} -> {w} is not mirrored")),
                    None => return violation(format!("wisp {w} lists missing border {b}")),
                }
            }
            for (i, &u) in rec.regions.iter().enumerate() {
                if rec.regions[..i].contains(&u) {
                    return violation(format!("duplicate link {w} -> {u}"));
                }
                match self.records.get(&u) {
                    Some(urec)
                        if urec.degree.checked_sub(1) == Some(rec.degree)
                            && urec.borders.contains(&w) => {}
                    Some(_) => return violation(format!("link {w} -> {u} is not mirrored")),
                    None => return violation(format!("wisp {w} lists missing region {u}")),
                }
            }
        }
        Ok(())
    }
}

impl MeshInvariants for Topomesh {
    /// Checks link endpoints, degree gaps, duplicate pairs, mirror
    /// symmetry, strata membership and the cached link count.
    fn validate_invariants(&self) -> Result<(), MeshError> {
        let violation = |msg: String| Err(MeshError::InvariantViolation(msg));
        let mut counted = 0usize;
        let mut mirrored = 0usize;
        let mut listed = 0usize;
        for (&d, stratum) in &self.strata {
            if d > self.max_degree() {
                return violation(format!("stratum {d} exceeds the max degree"));
            }
            for w in stratum {
                match self.records.get(w) {
                    Some(rec) if rec.degree == d => {}
                    _ => return violation(format!("stratum {d} lists stale wisp {w}")),
                }
            }
            listed += stratum.len();
        }
        if listed != self.records.len() {
            return violation(format!(
                "strata list {listed} wisps but {} records exist",
                self.records.len()
            ));
        }
        for (&w, rec) in &self.records {
            if !self.ids.is_live(w.get()) {
                return violation(format!("wisp {w} holds an id the allocator considers free"));
            }
            let mut seen = BTreeSet::new();
            for &b in &rec.borders {
                if !seen.insert(b) {
                    return violation(format!("duplicate link {b} -> {w}"));
                }
                let Some(brec) = self.records.get(&b) else {
                    return violation(format!("wisp {w} lists missing border {b}"));
                };
                if rec.degree.checked_sub(1) != Some(brec.degree) {
                    return violation(format!(
                        "link {b} -> {w} joins degrees {} and {}",
                        brec.degree, rec.degree
                    ));
                }
                if !brec.regions.contains(&w) {
                    return violation(format!("missing mirror region {w} on wisp {b}"));
                }
                counted += 1;
            }
            mirrored += rec.regions.len();
            for &u in &rec.regions {
                match self.records.get(&u) {
                    Some(urec) if urec.borders.contains(&w) => {}
                    _ => return violation(format!("missing mirror border {w} on wisp {u}")),
                }
            }
        }
        if counted != mirrored {
            return violation(format!(
                "{counted} border entries but {mirrored} region entries"
            ));
        }
        if counted != self.nb_links {
            return violation(format!(
                "link count {} disagrees with {counted} stored links",
                self.nb_links
            ));
        }
        Ok(())
    }
}
