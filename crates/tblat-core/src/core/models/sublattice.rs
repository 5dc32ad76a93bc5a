use super::ids::{SiteIndex, SublatticeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Sublattice '{name}' is already registered")]
pub struct DuplicateSublatticeError {
    pub name: String,
}

/// Append-only table mapping human-readable sublattice names to dense ids.
///
/// Ids are assigned in registration order and never reused; both structures
/// of a construction job share one registry so that sublattice ids stay
/// meaningful across finalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SublatticeRegistry {
    names: Vec<String>,
    name_map: HashMap<String, SublatticeId>,
}

impl SublatticeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new sublattice name and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateSublatticeError`] if the name is already taken.
    pub fn register(&mut self, name: &str) -> Result<SublatticeId, DuplicateSublatticeError> {
        if self.name_map.contains_key(name) {
            return Err(DuplicateSublatticeError {
                name: name.to_string(),
            });
        }
        let id = SublatticeId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.name_map.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn id_of(&self, name: &str) -> Option<SublatticeId> {
        self.name_map.get(name).copied()
    }

    pub fn name_of(&self, id: SublatticeId) -> Option<&str> {
        self.names.get(id.as_index()).map(String::as_str)
    }

    /// Returns an iterator over all registered `(id, name)` pairs in
    /// registration order.
    pub fn iter(&self) -> impl Iterator<Item = (SublatticeId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (SublatticeId(i as u32), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Transient read-only view binding a per-site sublattice-id array to its
/// name registry.
///
/// Passed to hopping-generator callbacks so they can express intent by
/// sublattice name instead of raw integer id. Constructed fresh per call and
/// owned by neither structure.
#[derive(Debug, Clone, Copy)]
pub struct SubIdRef<'a> {
    ids: &'a [SublatticeId],
    registry: &'a SublatticeRegistry,
}

impl<'a> SubIdRef<'a> {
    pub fn new(ids: &'a [SublatticeId], registry: &'a SublatticeRegistry) -> Self {
        Self { ids, registry }
    }

    /// The per-site sublattice-id array, index-aligned with site positions.
    pub fn ids(&self) -> &'a [SublatticeId] {
        self.ids
    }

    pub fn id_of(&self, name: &str) -> Option<SublatticeId> {
        self.registry.id_of(name)
    }

    pub fn name_of(&self, id: SublatticeId) -> Option<&'a str> {
        self.registry.name_of(id)
    }

    /// Returns the site indices belonging to the named sublattice.
    ///
    /// An unknown name yields an empty iterator.
    pub fn sites_of(&self, name: &str) -> impl Iterator<Item = SiteIndex> {
        let wanted = self.registry.id_of(name);
        self.ids
            .iter()
            .enumerate()
            .filter(move |&(_, &id)| Some(id) == wanted)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_assigns_dense_ids_in_order() {
        let mut registry = SublatticeRegistry::new();
        let a = registry.register("A").unwrap();
        let b = registry.register("B").unwrap();

        assert_eq!(a, SublatticeId(0));
        assert_eq!(b, SublatticeId(1));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.id_of("A"), Some(a));
        assert_eq!(registry.name_of(b), Some("B"));
        assert_eq!(registry.id_of("C"), None);
        assert_eq!(registry.name_of(SublatticeId(7)), None);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = SublatticeRegistry::new();
        registry.register("A").unwrap();

        let err = registry.register("A").unwrap_err();
        assert_eq!(err.name, "A");
        assert_eq!(registry.len(), 1, "Failed registration must not append");
    }

    #[test]
    fn sub_id_ref_resolves_sites_by_name() {
        let mut registry = SublatticeRegistry::new();
        let a = registry.register("A").unwrap();
        let b = registry.register("B").unwrap();
        let ids = vec![a, b, a, b, a];

        let view = SubIdRef::new(&ids, &registry);
        let a_sites: Vec<_> = view.sites_of("A").collect();
        let b_sites: Vec<_> = view.sites_of("B").collect();

        assert_eq!(a_sites, vec![0, 2, 4]);
        assert_eq!(b_sites, vec![1, 3]);
        assert_eq!(view.sites_of("missing").count(), 0);
    }
}
