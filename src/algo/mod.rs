//! Graph algorithms module
//!
//! Algorithms are implemented in the `graphkit-algorithms` crate over a dense
//! `GraphView`. This module provides the integration/adapter layer: it projects a
//! `GraphStore` into a view and maps results back onto vertex handles. Because the
//! algorithms only ever see the view, the caller's store is never modified.

use crate::config::TopoSortConfig;
use crate::graph::{GraphError, GraphResult, GraphStore, VertexId};
use graphkit_algorithms::{AlgoError, GraphView, NodeId as AlgoNodeId};
use rustc_hash::FxHashMap;

// Re-export algorithm building blocks
pub use graphkit_algorithms::{PathResult, PriorityQueue, QueueItem};

/// Build a GraphView from the store for algorithm execution.
///
/// Dense indices follow the store's enumeration order. A directed store contributes one
/// view edge per stored edge. An undirected store contributes both directions (a
/// self-loop only once), so successors in the view are the store's neighbours.
pub fn build_view(store: &GraphStore) -> GraphView {
    // 1. Collect nodes in enumeration order
    let vertices = store.vertices();

    // 2. Build index mappings
    let index_to_node: Vec<AlgoNodeId> = vertices.iter().map(VertexId::as_u64).collect();
    let mut node_to_index: FxHashMap<VertexId, usize> = FxHashMap::default();
    node_to_index.reserve(vertices.len());
    for (idx, &v) in vertices.iter().enumerate() {
        node_to_index.insert(v, idx);
    }

    // 3. Build adjacency lists
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); vertices.len()];
    let edges = store.edges();
    for edge in &edges {
        if let (Some(&u), Some(&v)) = (node_to_index.get(&edge.source), node_to_index.get(&edge.target)) {
            outgoing[u].push(v);
        }
    }
    if !store.is_directed() {
        for edge in &edges {
            if edge.source == edge.target {
                continue;
            }
            if let (Some(&u), Some(&v)) = (node_to_index.get(&edge.source), node_to_index.get(&edge.target)) {
                outgoing[v].push(u);
            }
        }
    }

    // 4. Convert to CSR
    GraphView::from_adjacency_list(index_to_node, outgoing)
}

fn map_algo_error(err: AlgoError) -> GraphError {
    match err {
        AlgoError::NotADag { node } => GraphError::NotADag(VertexId::new(node)),
        other => GraphError::Algorithm(other),
    }
}

/// Topologically sort a directed store.
///
/// Every vertex appears exactly once and before all vertices it has edges to.
/// Fails with [`GraphError::NotDirected`] for an undirected store and with
/// [`GraphError::NotADag`] if any cycle exists. An empty store sorts to an empty
/// sequence.
pub fn topological_sort(store: &GraphStore, config: TopoSortConfig) -> GraphResult<Vec<VertexId>> {
    if !store.is_directed() {
        return Err(GraphError::NotDirected);
    }
    let view = build_view(store);
    let order = graphkit_algorithms::topological_sort(&view, config.deterministic)
        .map_err(map_algo_error)?;
    Ok(order.into_iter().map(VertexId::new).collect())
}

/// Minimum-hop path from `source` to `target`, both included.
///
/// `Ok(None)` means `target` cannot be reached, which is not an error. Fails with
/// [`GraphError::UnknownVertex`] if either endpoint is not in the store. Undirected
/// stores can be walked along an edge either way.
pub fn shortest_path(
    store: &GraphStore,
    source: VertexId,
    target: VertexId,
) -> GraphResult<Option<Vec<VertexId>>> {
    for v in [source, target] {
        if !store.has_vertex(v) {
            return Err(GraphError::UnknownVertex(v));
        }
    }
    let view = build_view(store);
    let result = graphkit_algorithms::shortest_path(&view, source.as_u64(), target.as_u64())
        .map_err(map_algo_error)?;
    Ok(result.map(|found| found.path.into_iter().map(VertexId::new).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphMode;

    #[test]
    fn test_build_view_directed() {
        let store = GraphStore::from_edges(GraphMode::Directed, [(2u64, 0u64), (0, 1), (0, 1)]);
        let view = build_view(&store);

        // Index order is the store's enumeration order, not handle order
        assert_eq!(view.index_to_node, vec![2, 0, 1]);
        assert_eq!(view.successors(0), &[1]);
        assert_eq!(view.successors(1), &[2, 2]);
        assert_eq!(view.out_degree(2), 0);
    }

    #[test]
    fn test_build_view_undirected_is_symmetric() {
        let store = GraphStore::from_edges(GraphMode::Undirected, [(1u64, 0u64), (2, 2)]);
        let view = build_view(&store);
        let idx = |n: u64| view.index_of(n).unwrap();

        assert_eq!(view.successors(idx(0)), &[idx(1)]);
        assert_eq!(view.successors(idx(1)), &[idx(0)]);
        assert_eq!(view.successors(idx(2)), &[idx(2)]);
    }

    #[test]
    fn test_start_order_depends_on_mode() {
        // Enumeration order is 5, 3, 1, 0, 2
        let store = GraphStore::from_edges(GraphMode::Directed, [(5u64, 3u64), (3, 1), (0, 2)]);

        let ascending = topological_sort(&store, TopoSortConfig { deterministic: true }).unwrap();
        let enumerated = topological_sort(&store, TopoSortConfig { deterministic: false }).unwrap();

        let ids = |raw: &[u64]| raw.iter().copied().map(VertexId::new).collect::<Vec<_>>();
        assert_eq!(ascending, ids(&[5, 3, 1, 0, 2]));
        assert_eq!(enumerated, ids(&[0, 2, 5, 3, 1]));
    }

    #[test]
    fn test_topological_sort_rejects_undirected() {
        let store = GraphStore::undirected();
        let result = topological_sort(&store, TopoSortConfig::default());
        assert!(matches!(result, Err(GraphError::NotDirected)));
    }

    #[test]
    fn test_cycle_maps_to_not_a_dag() {
        let store = GraphStore::from_edges(GraphMode::Directed, [(0u64, 1u64), (1, 0)]);
        let result = topological_sort(&store, TopoSortConfig::default());
        assert!(matches!(result, Err(GraphError::NotADag(_))));
    }

    #[test]
    fn test_shortest_path_unknown_endpoint() {
        let mut store = GraphStore::directed();
        let a = store.add_vertex();
        let result = shortest_path(&store, a, VertexId(9));
        assert!(matches!(result, Err(GraphError::UnknownVertex(v)) if v == VertexId(9)));
    }

    #[test]
    fn test_shortest_path_undirected_walks_backwards() {
        // Stored as 0-1, 1-2 but searched from 2 to 0
        let store = GraphStore::from_edges(GraphMode::Undirected, [(0u64, 1u64), (1, 2)]);
        let path = shortest_path(&store, VertexId(2), VertexId(0)).unwrap();
        assert_eq!(path, Some(vec![VertexId(2), VertexId(1), VertexId(0)]));
    }
}
