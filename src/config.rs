//! Configuration for graph stores and algorithms

use crate::graph::GraphMode;
use serde::{Deserialize, Serialize};

/// Graph store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Edge semantics of the store
    pub mode: GraphMode,
    /// Number of vertices to reserve room for up front
    pub vertex_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            mode: GraphMode::Directed,
            vertex_capacity: 0,
        }
    }
}

/// Topological sort configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopoSortConfig {
    /// Break ties between independent vertices by ascending handle, so the same
    /// graph always sorts the same way
    pub deterministic: bool,
}

impl Default for TopoSortConfig {
    fn default() -> Self {
        Self { deterministic: true }
    }
}
