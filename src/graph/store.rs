//! In-memory graph storage implementation
//!
//! A single adjacency-list store serves both graph modes. Every live vertex owns
//! an entry in `adjacency`, even with no neighbours, so "vertex exists" and "has
//! an entry" are the same thing. Directed stores keep `u -> v` under `u`;
//! undirected stores keep each edge once, under its smaller endpoint.

use super::types::{Edge, GraphMode, VertexId};
use crate::config::GraphConfig;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    UnknownVertex(VertexId),

    #[error("Edge {0} not found")]
    UnknownEdge(Edge),

    #[error("Graph is not a DAG: cycle through vertex {0}")]
    NotADag(VertexId),

    #[error("Operation requires a directed graph")]
    NotDirected,

    /// Internal algorithm failure; never produced by a correct search
    #[error(transparent)]
    Algorithm(#[from] graphkit_algorithms::AlgoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory graph storage
///
/// - adjacency: VertexId -> Vec<VertexId>, insertion ordered
/// - next_vertex_id: allocation counter, never reset and never reused
#[derive(Debug, Clone)]
pub struct GraphStore {
    /// Directed or undirected edge semantics
    mode: GraphMode,

    /// Stored neighbour lists, one entry per live vertex
    adjacency: IndexMap<VertexId, Vec<VertexId>>,

    /// Next vertex ID
    next_vertex_id: u64,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new(mode: GraphMode) -> Self {
        GraphStore {
            mode,
            adjacency: IndexMap::new(),
            next_vertex_id: 0,
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphMode::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphMode::Undirected)
    }

    /// Create a store sized and moded from configuration
    pub fn with_config(config: &GraphConfig) -> Self {
        GraphStore {
            mode: config.mode,
            adjacency: IndexMap::with_capacity(config.vertex_capacity),
            next_vertex_id: 0,
        }
    }

    /// Build a store from an edge list, creating every endpoint it mentions.
    ///
    /// The allocation counter is moved past the largest handle seen, so later
    /// [`add_vertex`](Self::add_vertex) calls never collide with these vertices.
    pub fn from_edges<U, V>(mode: GraphMode, edges: impl IntoIterator<Item = (U, V)>) -> Self
    where
        U: Into<VertexId>,
        V: Into<VertexId>,
    {
        let mut store = Self::new(mode);
        for (u, v) in edges {
            let (u, v) = (u.into(), v.into());
            store.ensure_vertex(u);
            store.ensure_vertex(v);
            store.push_edge(u, v);
        }
        store
    }

    /// Register `v` with an empty neighbour list if absent
    fn ensure_vertex(&mut self, v: VertexId) {
        self.adjacency.entry(v).or_default();
        if v.as_u64() >= self.next_vertex_id {
            self.next_vertex_id = v.as_u64() + 1;
        }
    }

    /// Canonical storage slot for an edge in this store's mode
    fn storage_edge(&self, u: VertexId, v: VertexId) -> Edge {
        let edge = Edge { source: u, target: v };
        match self.mode {
            GraphMode::Directed => edge,
            GraphMode::Undirected => edge.canonical(),
        }
    }

    fn push_edge(&mut self, u: VertexId, v: VertexId) {
        let edge = self.storage_edge(u, v);
        if let Some(list) = self.adjacency.get_mut(&edge.source) {
            list.push(edge.target);
        }
    }

    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    pub fn is_directed(&self) -> bool {
        self.mode.is_directed()
    }

    /// Create a vertex with a fresh handle
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.adjacency.insert(id, Vec::new());
        trace!(vertex = id.as_u64(), "vertex created");
        id
    }

    /// Delete a vertex and every edge touching it.
    ///
    /// Returns false, without touching the store, if `v` does not exist.
    pub fn remove_vertex(&mut self, v: VertexId) -> bool {
        let Some(outgoing) = self.adjacency.shift_remove(&v) else {
            return false;
        };

        let mut purged = outgoing.len();
        for neighbours in self.adjacency.values_mut() {
            let before = neighbours.len();
            neighbours.retain(|&w| w != v);
            purged += before - neighbours.len();
        }

        debug!(vertex = v.as_u64(), purged_edges = purged, "vertex removed");
        true
    }

    /// Create an edge between two existing vertices.
    ///
    /// Duplicate edges are kept. Fails with [`GraphError::UnknownVertex`] if
    /// either endpoint is absent, in which case nothing is changed.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        if !self.has_vertex(u) {
            return Err(GraphError::UnknownVertex(u));
        }
        if !self.has_vertex(v) {
            return Err(GraphError::UnknownVertex(v));
        }
        self.push_edge(u, v);
        trace!(source = u.as_u64(), target = v.as_u64(), "edge added");
        Ok(())
    }

    /// Remove one occurrence of the edge.
    ///
    /// Returns false if there was no such edge.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        let edge = self.storage_edge(u, v);
        let Some(list) = self.adjacency.get_mut(&edge.source) else {
            return false;
        };
        match list.iter().position(|&w| w == edge.target) {
            Some(pos) => {
                list.remove(pos);
                trace!(source = u.as_u64(), target = v.as_u64(), "edge removed");
                true
            }
            None => false,
        }
    }

    /// Check if a vertex exists
    pub fn has_vertex(&self, v: VertexId) -> bool {
        self.adjacency.contains_key(&v)
    }

    /// Check if at least one edge joins `u` to `v` (either way round when undirected)
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        let edge = self.storage_edge(u, v);
        self.adjacency
            .get(&edge.source)
            .is_some_and(|list| list.contains(&edge.target))
    }

    /// All live vertices, in creation order
    pub fn vertices(&self) -> Vec<VertexId> {
        self.adjacency.keys().copied().collect()
    }

    /// All stored edges, one entry per edge (multi-edges repeat)
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .flat_map(|(&source, targets)| {
                targets.iter().map(move |&target| Edge { source, target })
            })
            .collect()
    }

    /// Vertices adjacent to `v`.
    ///
    /// Directed: the outgoing list as stored. Undirected: the stored list followed
    /// by every vertex that stores an edge to `v`. Unknown vertices have none.
    pub fn neighbours(&self, v: VertexId) -> Vec<VertexId> {
        let Some(stored) = self.adjacency.get(&v) else {
            return Vec::new();
        };
        let mut result = stored.clone();
        if !self.is_directed() {
            for (&u, list) in &self.adjacency {
                if u == v {
                    continue;
                }
                result.extend(list.iter().filter(|&&w| w == v).map(|_| u));
            }
        }
        result
    }

    /// Every `u` with an edge `u -> v`, once per edge. Always empty when undirected.
    pub fn predecessors(&self, v: VertexId) -> Vec<VertexId> {
        if !self.is_directed() {
            return Vec::new();
        }
        let mut result = Vec::new();
        for (&u, list) in &self.adjacency {
            result.extend(list.iter().filter(|&&w| w == v).map(|_| u));
        }
        result
    }

    /// Number of edges stored under `v`
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.adjacency.get(&v).map_or(0, Vec::len)
    }

    /// Get total number of vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Drop every vertex and edge. The allocation counter keeps its value.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new(GraphMode::Directed)
    }
}
