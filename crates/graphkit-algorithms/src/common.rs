//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm execution,
//! and the error type shared by every algorithm in this crate.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// Errors raised by the algorithms
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    /// A cycle was found while ordering the graph; `node` lies on it
    #[error("graph is not a DAG: cycle through node {node}")]
    NotADag { node: NodeId },

    /// Popped from an empty priority queue
    #[error("priority queue is empty")]
    EmptyQueue,
}

pub type AlgoResult<T> = Result<T, AlgoError>;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Multi-edges are kept: a node listed twice in `successors` is two edges.
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: FxHashMap<NodeId, usize>,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,
}

impl GraphView {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Dense index of a node, if it is part of the view
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.node_to_index.get(&node).copied()
    }

    /// Build a view from per-node adjacency lists.
    ///
    /// `outgoing[i]` holds the dense indices that node `index_to_node[i]` points at,
    /// in the order the traversal should see them.
    pub fn from_adjacency_list(index_to_node: Vec<NodeId>, outgoing: Vec<Vec<usize>>) -> Self {
        let node_count = index_to_node.len();
        debug_assert_eq!(node_count, outgoing.len());

        let mut node_to_index = FxHashMap::default();
        node_to_index.reserve(node_count);
        for (idx, &node) in index_to_node.iter().enumerate() {
            node_to_index.insert(node, idx);
        }

        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        out_offsets.push(0);
        for neighbors in outgoing {
            out_targets.extend(neighbors);
            out_offsets.push(out_targets.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
        }
    }

    /// Build a view from an edge list over explicit node ids.
    ///
    /// Edges naming a node outside `nodes` are ignored.
    pub fn from_edges(nodes: &[NodeId], edges: &[(NodeId, NodeId)]) -> Self {
        let lookup: FxHashMap<NodeId, usize> =
            nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect();
        let mut outgoing = vec![Vec::new(); nodes.len()];
        for (u, v) in edges {
            if let (Some(&ui), Some(&vi)) = (lookup.get(u), lookup.get(v)) {
                outgoing[ui].push(vi);
            }
        }
        Self::from_adjacency_list(nodes.to_vec(), outgoing)
    }
}
