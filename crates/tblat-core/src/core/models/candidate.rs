use super::ids::{SiteIndex, SublatticeId};
use super::sublattice::{SubIdRef, SublatticeRegistry};
use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "Site arrays are not index-aligned: {positions} positions vs {sublattices} sublattice ids"
)]
pub struct LengthMismatchError {
    pub positions: usize,
    pub sublattices: usize,
}

/// The candidate stage of lattice construction: the superset of spatial sites
/// produced by the external structure builder, before pruning and renumbering.
///
/// Sites are stored column-wise in index-aligned parallel arrays. The arrays
/// never change length after construction; stage-1 modifiers mutate validity
/// flags and positions in place, and sites with `valid == false` are dropped
/// by the finalizer.
#[derive(Debug, Clone)]
pub struct CandidateStructure {
    positions: Vec<Point3<f64>>,
    valid: Vec<bool>,
    sublattices: Vec<SublatticeId>,
    registry: SublatticeRegistry,
}

impl CandidateStructure {
    /// Creates a candidate structure with every site initially valid.
    ///
    /// # Errors
    ///
    /// Returns [`LengthMismatchError`] if `positions` and `sublattices` are
    /// not the same length.
    pub fn new(
        positions: Vec<Point3<f64>>,
        sublattices: Vec<SublatticeId>,
        registry: SublatticeRegistry,
    ) -> Result<Self, LengthMismatchError> {
        if positions.len() != sublattices.len() {
            return Err(LengthMismatchError {
                positions: positions.len(),
                sublattices: sublattices.len(),
            });
        }
        let valid = vec![true; positions.len()];
        Ok(Self {
            positions,
            valid,
            sublattices,
            registry,
        })
    }

    pub fn site_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of sites still marked valid.
    pub fn valid_count(&self) -> usize {
        self.valid.iter().filter(|&&v| v).count()
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Mutable access to site positions. The slice length is the array
    /// length, so geometric modifiers cannot break index alignment.
    pub fn positions_mut(&mut self) -> &mut [Point3<f64>] {
        &mut self.positions
    }

    pub fn valid(&self) -> &[bool] {
        &self.valid
    }

    pub fn is_valid(&self, site: SiteIndex) -> bool {
        self.valid[site]
    }

    /// Marks a site invalid. Validity is one-way: there is no operation that
    /// resurrects a site.
    pub fn invalidate(&mut self, site: SiteIndex) {
        self.valid[site] = false;
    }

    pub fn sublattices(&self) -> &[SublatticeId] {
        &self.sublattices
    }

    pub fn registry(&self) -> &SublatticeRegistry {
        &self.registry
    }

    /// Returns the site indices belonging to the given sublattice.
    pub fn sites_of(&self, id: SublatticeId) -> impl Iterator<Item = SiteIndex> + '_ {
        self.sublattices
            .iter()
            .enumerate()
            .filter(move |&(_, &s)| s == id)
            .map(|(i, _)| i)
    }

    /// A fresh read-only view binding the sublattice-id array to the registry.
    pub fn sub_id_ref(&self) -> SubIdRef<'_> {
        SubIdRef::new(&self.sublattices, &self.registry)
    }
}
