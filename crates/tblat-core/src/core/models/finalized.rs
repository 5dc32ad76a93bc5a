use super::candidate::CandidateStructure;
use super::ids::{SiteIndex, SublatticeId};
use super::sublattice::{SubIdRef, SublatticeRegistry};
use nalgebra::Point3;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Hopping family '{name}' is already registered")]
pub struct DuplicateFamilyError {
    pub name: String,
}

/// A named family of hoppings sharing one complex weight.
///
/// Pairs are directed `(from, to)` site indices into the finalized structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoppingFamily {
    pub name: String,
    pub energy: Complex64,
    pub pairs: Vec<(SiteIndex, SiteIndex)>,
}

/// The finalized stage of lattice construction: surviving sites renumbered
/// contiguously, plus the hopping topology grouped into named families.
///
/// The family table is an append-only registry: families are never removed or
/// renamed once added, and names are unique. Stage-2 modifiers append new
/// families in place.
#[derive(Debug, Clone)]
pub struct FinalizedStructure {
    positions: Vec<Point3<f64>>,
    sublattices: Vec<SublatticeId>,
    registry: SublatticeRegistry,
    families: Vec<HoppingFamily>,
    family_map: HashMap<String, usize>,
}

impl FinalizedStructure {
    /// Finalizes a pruned candidate: drops every site with `valid == false`
    /// and renumbers the survivors contiguously in ascending index order.
    ///
    /// Returns the structure (with an empty family table; base-lattice
    /// families are registered by the caller) together with the
    /// old-index → new-index mapping, `None` for dropped sites.
    pub fn from_candidate(candidate: &CandidateStructure) -> (Self, Vec<Option<SiteIndex>>) {
        let mut mapping = vec![None; candidate.site_count()];
        let mut positions = Vec::with_capacity(candidate.valid_count());
        let mut sublattices = Vec::with_capacity(candidate.valid_count());

        for old in 0..candidate.site_count() {
            if candidate.is_valid(old) {
                mapping[old] = Some(positions.len());
                positions.push(candidate.positions()[old]);
                sublattices.push(candidate.sublattices()[old]);
            }
        }

        let finalized = Self {
            positions,
            sublattices,
            registry: candidate.registry().clone(),
            families: Vec::new(),
            family_map: HashMap::new(),
        };
        (finalized, mapping)
    }

    pub fn site_count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    pub fn sublattices(&self) -> &[SublatticeId] {
        &self.sublattices
    }

    pub fn registry(&self) -> &SublatticeRegistry {
        &self.registry
    }

    /// A fresh read-only view binding the sublattice-id array to the registry.
    pub fn sub_id_ref(&self) -> SubIdRef<'_> {
        SubIdRef::new(&self.sublattices, &self.registry)
    }

    /// Appends a new hopping family to the registry.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateFamilyError`] if a family with this name already
    /// exists; the table is left untouched.
    pub fn register_family(
        &mut self,
        name: &str,
        energy: Complex64,
        pairs: Vec<(SiteIndex, SiteIndex)>,
    ) -> Result<usize, DuplicateFamilyError> {
        if self.family_map.contains_key(name) {
            return Err(DuplicateFamilyError {
                name: name.to_string(),
            });
        }
        let index = self.families.len();
        self.families.push(HoppingFamily {
            name: name.to_string(),
            energy,
            pairs,
        });
        self.family_map.insert(name.to_string(), index);
        Ok(index)
    }

    pub fn family(&self, name: &str) -> Option<&HoppingFamily> {
        self.family_map.get(name).map(|&i| &self.families[i])
    }

    /// All hopping families in registration order.
    pub fn families(&self) -> &[HoppingFamily] {
        &self.families
    }

    pub fn family_count(&self) -> usize {
        self.families.len()
    }
}
