//! Pathfinding algorithms
//!
//! Unit-weight shortest path driven by the indexed priority queue.

use super::common::{AlgoResult, GraphView, NodeId};
use super::priority::{PriorityQueue, QueueItem};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    /// Nodes from `source` to `target`, both included
    pub path: Vec<NodeId>,
    /// Number of edges on the path
    pub hops: usize,
}

/// Walk `parent` links back from `target_idx`; the source is its own parent.
fn reconstruct(
    view: &GraphView,
    parent: &FxHashMap<usize, usize>,
    target_idx: usize,
) -> Vec<NodeId> {
    let mut path = vec![view.index_to_node[target_idx]];
    let mut curr = target_idx;
    while let Some(&prev) = parent.get(&curr) {
        if prev == curr {
            break;
        }
        path.push(view.index_to_node[prev]);
        curr = prev;
    }
    path.reverse();
    path
}

/// Shortest path by hop count.
///
/// Dijkstra with every edge weighing 1. Queue priority is the negated distance so
/// the max-heap always yields the nearest frontier node. A node whose tentative
/// distance improves while queued is re-prioritised in place.
///
/// Returns `Ok(None)` when `target` is unreachable or either endpoint is not in
/// the view. The number of hops is always minimal; which of several equally short
/// paths is returned depends on successor order and heap tie-breaks.
pub fn shortest_path(
    view: &GraphView,
    source: NodeId,
    target: NodeId,
) -> AlgoResult<Option<PathResult>> {
    let (Some(source_idx), Some(target_idx)) = (view.index_of(source), view.index_of(target))
    else {
        return Ok(None);
    };

    let mut dist: FxHashMap<usize, i64> = FxHashMap::default();
    let mut parent: FxHashMap<usize, usize> = FxHashMap::default();
    let mut frontier = PriorityQueue::new();

    dist.insert(source_idx, 0);
    parent.insert(source_idx, source_idx);
    frontier.push(source_idx, 0);

    while !frontier.is_empty() {
        let QueueItem { node, priority } = frontier.pop_max()?;
        let distance = -priority;

        if node == target_idx {
            let path = reconstruct(view, &parent, target_idx);
            debug!(source, target, hops = distance, "shortest path found");
            return Ok(Some(PathResult {
                source,
                target,
                hops: path.len() - 1,
                path,
            }));
        }

        for &next in view.successors(node) {
            let candidate = distance + 1;
            let improves = dist.get(&next).map_or(true, |&known| candidate < known);
            if improves {
                dist.insert(next, candidate);
                parent.insert(next, node);
                frontier.push(next, -candidate);
            }
        }
    }

    debug!(source, target, "target unreachable");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::VecDeque;

    /// Breadth-first search, used as the reference for hop counts
    fn bfs(view: &GraphView, source: NodeId, target: NodeId) -> Option<PathResult> {
        let source_idx = view.index_of(source)?;
        let target_idx = view.index_of(target)?;

        let mut queue = VecDeque::new();
        let mut parent = FxHashMap::default(); // index -> parent index

        queue.push_back(source_idx);
        parent.insert(source_idx, source_idx);

        while let Some(current_idx) = queue.pop_front() {
            if current_idx == target_idx {
                let path = reconstruct(view, &parent, target_idx);
                return Some(PathResult {
                    source,
                    target,
                    hops: path.len() - 1,
                    path,
                });
            }

            for &next_idx in view.successors(current_idx) {
                if let std::collections::hash_map::Entry::Vacant(slot) = parent.entry(next_idx) {
                    slot.insert(current_idx);
                    queue.push_back(next_idx);
                }
            }
        }

        None
    }

    fn assert_valid_path(view: &GraphView, result: &PathResult) {
        assert_eq!(result.path.first(), Some(&result.source));
        assert_eq!(result.path.last(), Some(&result.target));
        assert_eq!(result.hops + 1, result.path.len());
        for pair in result.path.windows(2) {
            let u = view.index_of(pair[0]).unwrap();
            let v = view.index_of(pair[1]).unwrap();
            assert!(view.successors(u).contains(&v), "{} -> {} is not an edge", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_bfs() {
        // 1->2->3
        let view = GraphView::from_edges(&[1, 2, 3], &[(1, 2), (2, 3)]);

        let result = bfs(&view, 1, 3).unwrap();
        assert_eq!(result.path, vec![1, 2, 3]);
        assert_eq!(result.hops, 2);
    }

    #[test]
    fn test_shortest_path() {
        // 0->1, 1->2, 1->3, 2->3, 3->4, 3->5, 4->5
        let nodes = [0, 1, 2, 3, 4, 5];
        let edges = [(0, 1), (1, 2), (1, 3), (2, 3), (3, 4), (3, 5), (4, 5)];
        let view = GraphView::from_edges(&nodes, &edges);

        let result = shortest_path(&view, 0, 5).unwrap().unwrap();
        assert_eq!(result.path, vec![0, 1, 3, 5]);
        assert_eq!(result.hops, 3);
    }

    #[test]
    fn test_source_equals_target() {
        let view = GraphView::from_edges(&[4, 5], &[(4, 5)]);
        let result = shortest_path(&view, 4, 4).unwrap().unwrap();
        assert_eq!(result.path, vec![4]);
        assert_eq!(result.hops, 0);
    }

    #[test]
    fn test_unreachable_and_unknown() {
        // Edge points the wrong way
        let view = GraphView::from_edges(&[1, 2], &[(2, 1)]);
        assert_eq!(shortest_path(&view, 1, 2), Ok(None));
        assert_eq!(shortest_path(&view, 1, 99), Ok(None));
        assert!(bfs(&view, 1, 2).is_none());
    }

    #[test]
    fn test_shortcut_discovered_late_is_taken() {
        // 0 -> 1 -> 2 -> 3 -> 9 and 0 -> 4 -> 9; the second branch is shorter
        let nodes = [0, 1, 2, 3, 4, 9];
        let edges = [(0, 1), (1, 2), (2, 3), (3, 9), (0, 4), (4, 9)];
        let view = GraphView::from_edges(&nodes, &edges);

        let result = shortest_path(&view, 0, 9).unwrap().unwrap();
        assert_eq!(result.path, vec![0, 4, 9]);
    }

    #[test]
    fn test_random_graphs_match_bfs() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..40 {
            let n = rng.gen_range(2..40u64);
            let nodes: Vec<NodeId> = (0..n).collect();
            let mut edges = Vec::new();
            for _ in 0..rng.gen_range(0..n * 3) {
                edges.push((rng.gen_range(0..n), rng.gen_range(0..n)));
            }
            let view = GraphView::from_edges(&nodes, &edges);

            for _ in 0..10 {
                let s = rng.gen_range(0..n);
                let t = rng.gen_range(0..n);
                let found = shortest_path(&view, s, t).unwrap();
                let oracle = bfs(&view, s, t);
                match (found, oracle) {
                    (Some(found), Some(oracle)) => {
                        assert_valid_path(&view, &found);
                        assert_eq!(found.hops, oracle.hops);
                    }
                    (None, None) => {}
                    (found, oracle) => panic!("{s}->{t}: got {found:?}, bfs says {oracle:?}"),
                }
            }
        }
    }
}
