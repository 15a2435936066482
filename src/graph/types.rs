//! Core type definitions for the graph store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque vertex handle.
///
/// Handles are issued by a [`GraphStore`](super::GraphStore) from a counter that
/// only moves forward, so a removed vertex's handle is never handed out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        VertexId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        VertexId(id)
    }
}

/// An edge between two vertices.
///
/// In a directed graph it runs from `source` to `target`. Undirected graphs keep
/// the smaller handle in `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
}

impl Edge {
    pub fn new(source: impl Into<VertexId>, target: impl Into<VertexId>) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Same endpoints with the smaller handle first
    pub fn canonical(self) -> Self {
        if self.target < self.source {
            Edge {
                source: self.target,
                target: self.source,
            }
        } else {
            self
        }
    }

    pub fn touches(&self, v: VertexId) -> bool {
        self.source == v || self.target == v
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}

/// Edge semantics of a store, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphMode {
    #[default]
    Directed,
    Undirected,
}

impl GraphMode {
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphMode::Directed)
    }
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphMode::Directed => write!(f, "directed"),
            GraphMode::Undirected => write!(f, "undirected"),
        }
    }
}
