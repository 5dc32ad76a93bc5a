use super::error::ModifierError;
use super::pruning;
use crate::core::connectivity::Connectivity;
use crate::core::models::candidate::CandidateStructure;
use crate::core::models::finalized::FinalizedStructure;
use crate::core::models::ids::{SiteIndex, SublatticeId};
use crate::core::models::sublattice::SubIdRef;
use nalgebra::Point3;
use num_complex::Complex64;
use std::sync::Arc;
use tracing::trace;

/// Callback of a [`SiteStateModifier`]: may flip validity flags to `false`
/// for the sites of one sublattice. Resurrection attempts are ignored.
pub type SiteStateFn = Arc<dyn Fn(&mut [bool], &[Point3<f64>], &str) + Send + Sync>;

/// Callback of a [`PositionModifier`]: rewrites the positions of one
/// sublattice in place.
pub type PositionFn = Arc<dyn Fn(&mut [Point3<f64>], &str) + Send + Sync>;

/// Callback of a [`HoppingGenerator`]: computes new hopping index pairs from
/// the finalized positions and sublattice view.
pub type HoppingFn = Arc<dyn Fn(&[Point3<f64>], SubIdRef) -> HoppingPairs + Send + Sync>;

/// Site index pairs which should form new hoppings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoppingPairs {
    pub from: Vec<SiteIndex>,
    pub to: Vec<SiteIndex>,
}

/// Stage-1 modifier that invalidates lattice sites, e.g. to create vacancies.
///
/// The user callback runs once per sublattice present, over a validity view
/// restricted to that sublattice. Afterwards, sites left with fewer than
/// `min_neighbors` valid neighbors are pruned iteratively to a fixed point.
#[derive(Clone)]
pub struct SiteStateModifier {
    apply: SiteStateFn,
    min_neighbors: u32,
}

impl std::fmt::Debug for SiteStateModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteStateModifier")
            .field("min_neighbors", &self.min_neighbors)
            .finish_non_exhaustive()
    }
}

impl SiteStateModifier {
    /// Wraps a user callback with a minimum-neighbor threshold applied after
    /// all callback invocations.
    ///
    /// # Errors
    ///
    /// Returns [`ModifierError::NegativeMinNeighbors`] if `min_neighbors` is
    /// negative.
    pub fn new<F>(apply: F, min_neighbors: i32) -> Result<Self, ModifierError>
    where
        F: Fn(&mut [bool], &[Point3<f64>], &str) + Send + Sync + 'static,
    {
        if min_neighbors < 0 {
            return Err(ModifierError::NegativeMinNeighbors {
                value: min_neighbors,
            });
        }
        Ok(Self {
            apply: Arc::new(apply),
            min_neighbors: min_neighbors as u32,
        })
    }

    pub fn min_neighbors(&self) -> u32 {
        self.min_neighbors
    }

    /// Runs the callback per sublattice, then neighbor-count pruning.
    ///
    /// The callback receives a gathered validity view and matching positions
    /// for one sublattice at a time; flags are scattered back with AND, so
    /// the callback can only invalidate, never resurrect. Positions and
    /// sublattice ids are untouched.
    pub fn apply_to(
        &self,
        candidate: &mut CandidateStructure,
        connectivity: &impl Connectivity,
    ) {
        for (id, name) in sublattice_names(candidate) {
            let sites: Vec<SiteIndex> = candidate.sites_of(id).collect();
            if sites.is_empty() {
                continue;
            }

            let mut flags: Vec<bool> = sites.iter().map(|&s| candidate.is_valid(s)).collect();
            let positions: Vec<Point3<f64>> =
                sites.iter().map(|&s| candidate.positions()[s]).collect();
            (self.apply)(&mut flags, &positions, &name);

            for (&site, &flag) in sites.iter().zip(&flags) {
                if !flag {
                    candidate.invalidate(site);
                }
            }
        }

        pruning::prune_by_neighbor_count(candidate, connectivity, self.min_neighbors);
    }
}

/// Stage-1 modifier that rewrites site geometry in place, e.g. to apply
/// deformations like strain or bending.
///
/// The callback runs once per sublattice present with a mutable positions
/// view; the slice length fixes the array length, so index identity is
/// preserved for downstream connectivity. Never touches validity.
#[derive(Clone)]
pub struct PositionModifier {
    apply: PositionFn,
}

impl PositionModifier {
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&mut [Point3<f64>], &str) + Send + Sync + 'static,
    {
        Self {
            apply: Arc::new(apply),
        }
    }

    pub fn apply_to(&self, candidate: &mut CandidateStructure) {
        for (id, name) in sublattice_names(candidate) {
            let sites: Vec<SiteIndex> = candidate.sites_of(id).collect();
            if sites.is_empty() {
                continue;
            }

            let mut positions: Vec<Point3<f64>> =
                sites.iter().map(|&s| candidate.positions()[s]).collect();
            (self.apply)(&mut positions, &name);

            let all = candidate.positions_mut();
            for (&site, &position) in sites.iter().zip(&positions) {
                all[site] = position;
            }
        }
    }
}

fn sublattice_names(candidate: &CandidateStructure) -> Vec<(SublatticeId, String)> {
    candidate
        .registry()
        .iter()
        .map(|(id, name)| (id, name.to_string()))
        .collect()
}

/// Stage-2 modifier that introduces a new hopping family via a list of index
/// pairs.
///
/// This can be used to create hoppings independent of the main lattice
/// definition, e.g. additional local hoppings modelling defects. A generator
/// constructed without a callback is inert and skipped.
#[derive(Clone)]
pub struct HoppingGenerator {
    name: String,
    energy: Complex64,
    make: Option<HoppingFn>,
}

impl HoppingGenerator {
    pub fn new<F>(name: &str, energy: Complex64, make: F) -> Self
    where
        F: Fn(&[Point3<f64>], SubIdRef) -> HoppingPairs + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            energy,
            make: Some(Arc::new(make)),
        }
    }

    /// A generator with no callback; applying it is a no-op.
    pub fn inert(name: &str, energy: Complex64) -> Self {
        Self {
            name: name.to_string(),
            energy,
            make: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn energy(&self) -> Complex64 {
        self.energy
    }

    pub fn is_active(&self) -> bool {
        self.make.is_some()
    }

    /// Invokes the callback and registers the returned pairs as a new
    /// hopping family under this generator's name and energy.
    ///
    /// # Errors
    ///
    /// Fails without touching the structure if the callback returns
    /// mismatched-length index arrays, an out-of-range site index, or a
    /// self-pair, or if the family name is already registered.
    pub fn apply_to(&self, finalized: &mut FinalizedStructure) -> Result<(), ModifierError> {
        let Some(make) = &self.make else {
            trace!(name = %self.name, "Skipping inert hopping generator.");
            return Ok(());
        };

        let pairs = make(finalized.positions(), finalized.sub_id_ref());
        if pairs.from.len() != pairs.to.len() {
            return Err(ModifierError::MismatchedPairArrays {
                name: self.name.clone(),
                from_len: pairs.from.len(),
                to_len: pairs.to.len(),
            });
        }

        let site_count = finalized.site_count();
        for (&from, &to) in pairs.from.iter().zip(&pairs.to) {
            for index in [from, to] {
                if index >= site_count {
                    return Err(ModifierError::SiteIndexOutOfRange {
                        name: self.name.clone(),
                        index,
                        site_count,
                    });
                }
            }
            if from == to {
                return Err(ModifierError::SelfPair {
                    name: self.name.clone(),
                    index: from,
                });
            }
        }

        let pair_list: Vec<(SiteIndex, SiteIndex)> =
            pairs.from.into_iter().zip(pairs.to).collect();
        trace!(name = %self.name, pairs = pair_list.len(), "Registering generated hopping family.");
        finalized.register_family(&self.name, self.energy, pair_list)?;
        Ok(())
    }
}
