use crate::core::connectivity::Connectivity;
use crate::core::models::candidate::CandidateStructure;
use crate::core::models::ids::SiteIndex;
use std::collections::VecDeque;
use tracing::debug;

/// Invalidates every site whose count of valid neighbors is below
/// `min_neighbors`, cascading to a fixed point.
///
/// Invalidating a site can push its neighbors below the threshold, so this is
/// a worklist algorithm rather than a single scan: when a site is removed,
/// its still-valid neighbors are re-examined. Each site can be invalidated at
/// most once, which bounds the work by the site count and guarantees
/// termination. At the fixed point, every surviving site has at least
/// `min_neighbors` surviving neighbors.
///
/// `min_neighbors == 0` is a no-op. Returns the number of sites invalidated.
pub fn prune_by_neighbor_count(
    candidate: &mut CandidateStructure,
    connectivity: &impl Connectivity,
    min_neighbors: u32,
) -> usize {
    if min_neighbors == 0 {
        return 0;
    }
    let threshold = min_neighbors as usize;
    let site_count = candidate.site_count();

    let mut in_queue = vec![false; site_count];
    let mut queue: VecDeque<SiteIndex> = VecDeque::with_capacity(site_count);
    for site in 0..site_count {
        if candidate.is_valid(site) {
            queue.push_back(site);
            in_queue[site] = true;
        }
    }

    let mut removed = 0;
    while let Some(site) = queue.pop_front() {
        in_queue[site] = false;
        if !candidate.is_valid(site) {
            continue;
        }

        let valid_neighbors = connectivity
            .neighbors(site)
            .iter()
            .filter(|&&n| candidate.is_valid(n))
            .count();
        if valid_neighbors >= threshold {
            continue;
        }

        candidate.invalidate(site);
        removed += 1;
        for &neighbor in connectivity.neighbors(site) {
            if candidate.is_valid(neighbor) && !in_queue[neighbor] {
                queue.push_back(neighbor);
                in_queue[neighbor] = true;
            }
        }
    }

    debug!(min_neighbors, removed, "Neighbor-count pruning reached fixed point.");
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::connectivity::AdjacencyList;
    use crate::core::models::sublattice::SublatticeRegistry;
    use nalgebra::Point3;

    fn chain_candidate(n: usize) -> (CandidateStructure, AdjacencyList) {
        let mut registry = SublatticeRegistry::new();
        let a = registry.register("A").unwrap();
        let positions = (0..n).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect();
        let candidate = CandidateStructure::new(positions, vec![a; n], registry).unwrap();

        let links: Vec<_> = (0..n.saturating_sub(1)).map(|i| (i, i + 1)).collect();
        let adjacency = AdjacencyList::from_links(n, &links);
        (candidate, adjacency)
    }

    /// Triangle {2, 3, 4} with a two-site tail 0-1 hanging off site 2.
    fn triangle_with_tail() -> (CandidateStructure, AdjacencyList) {
        let mut registry = SublatticeRegistry::new();
        let a = registry.register("A").unwrap();
        let positions = (0..5).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect();
        let candidate = CandidateStructure::new(positions, vec![a; 5], registry).unwrap();

        let adjacency = AdjacencyList::from_links(5, &[(0, 1), (1, 2), (2, 3), (2, 4), (3, 4)]);
        (candidate, adjacency)
    }

    #[test]
    fn zero_threshold_is_a_no_op() {
        let (mut candidate, adjacency) = chain_candidate(5);
        let removed = prune_by_neighbor_count(&mut candidate, &adjacency, 0);

        assert_eq!(removed, 0);
        assert_eq!(candidate.valid_count(), 5);
    }

    #[test]
    fn chain_interior_survives_threshold_one() {
        let (mut candidate, adjacency) = chain_candidate(5);
        let removed = prune_by_neighbor_count(&mut candidate, &adjacency, 1);

        // Every chain site keeps at least one neighbor, nothing cascades.
        assert_eq!(removed, 0);
        assert_eq!(candidate.valid_count(), 5);
    }

    #[test]
    fn chain_pruning_cascades_from_the_endpoints() {
        let (mut candidate, adjacency) = chain_candidate(5);
        let removed = prune_by_neighbor_count(&mut candidate, &adjacency, 2);

        // Endpoints fall first, then their neighbors, until no open chain
        // segment can satisfy two surviving neighbors per site.
        assert_eq!(removed, 5);
        assert_eq!(candidate.valid_count(), 0);
    }

    #[test]
    fn cascade_stops_at_a_cycle() {
        let (mut candidate, adjacency) = triangle_with_tail();
        let removed = prune_by_neighbor_count(&mut candidate, &adjacency, 2);

        // The tail cascades away (0, then 1); the triangle sustains itself.
        assert_eq!(removed, 2);
        assert!(!candidate.is_valid(0));
        assert!(!candidate.is_valid(1));
        assert!(candidate.is_valid(2));
        assert!(candidate.is_valid(3));
        assert!(candidate.is_valid(4));
    }

    #[test]
    fn pruning_only_removes_sites() {
        let (mut candidate, adjacency) = triangle_with_tail();
        let before: Vec<bool> = candidate.valid().to_vec();
        prune_by_neighbor_count(&mut candidate, &adjacency, 2);

        for (site, (&was, &is)) in before.iter().zip(candidate.valid()).enumerate() {
            assert!(was || !is, "Site {site} was resurrected by pruning");
        }
    }

    #[test]
    fn pruned_structure_is_a_fixed_point() {
        let (mut candidate, adjacency) = triangle_with_tail();
        prune_by_neighbor_count(&mut candidate, &adjacency, 2);

        let removed_again = prune_by_neighbor_count(&mut candidate, &adjacency, 2);
        assert_eq!(removed_again, 0);
    }

    #[test]
    fn already_invalid_sites_do_not_count_as_neighbors() {
        let (mut candidate, adjacency) = triangle_with_tail();
        candidate.invalidate(3);

        // With one triangle corner gone, the remaining corners each have a
        // single surviving neighbor and the whole graph cascades away.
        let removed = prune_by_neighbor_count(&mut candidate, &adjacency, 2);
        assert_eq!(removed, 4);
        assert_eq!(candidate.valid_count(), 0);
    }
}
