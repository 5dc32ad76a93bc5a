//! Boundary to the external neighbor-search collaborator.
//!
//! Neighbor-count pruning queries candidate-stage connectivity repeatedly;
//! the provider is treated as a pure lookup with no side effects.

use super::models::ids::SiteIndex;

/// Read-only neighbor query over a candidate structure snapshot.
pub trait Connectivity {
    /// The site indices adjacent to `site`. Validity filtering is the
    /// caller's concern; this returns the raw candidate-stage adjacency.
    fn neighbors(&self, site: SiteIndex) -> &[SiteIndex];
}

/// Adjacency cache built from an undirected link list, the form the
/// neighbor-search collaborator typically hands over.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    neighbors: Vec<Vec<SiteIndex>>,
}

impl AdjacencyList {
    /// Builds the cache for `site_count` sites from undirected links.
    /// Each link `(a, b)` makes `b` a neighbor of `a` and vice versa;
    /// duplicate links are collapsed.
    pub fn from_links(site_count: usize, links: &[(SiteIndex, SiteIndex)]) -> Self {
        let mut neighbors = vec![Vec::new(); site_count];
        for &(a, b) in links {
            if !neighbors[a].contains(&b) {
                neighbors[a].push(b);
                neighbors[b].push(a);
            }
        }
        Self { neighbors }
    }

    pub fn site_count(&self) -> usize {
        self.neighbors.len()
    }
}

impl Connectivity for AdjacencyList {
    fn neighbors(&self, site: SiteIndex) -> &[SiteIndex] {
        &self.neighbors[site]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_are_symmetric_and_deduplicated() {
        let adjacency = AdjacencyList::from_links(4, &[(0, 1), (1, 2), (1, 0), (2, 3)]);

        assert_eq!(adjacency.site_count(), 4);
        assert_eq!(adjacency.neighbors(0), &[1]);
        assert_eq!(adjacency.neighbors(1), &[0, 2]);
        assert_eq!(adjacency.neighbors(2), &[1, 3]);
        assert_eq!(adjacency.neighbors(3), &[2]);
    }

    #[test]
    fn isolated_sites_have_no_neighbors() {
        let adjacency = AdjacencyList::from_links(3, &[(0, 1)]);
        assert!(adjacency.neighbors(2).is_empty());
    }
}
