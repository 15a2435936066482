//! Core graph store
//!
//! This module implements the mutable graph abstraction:
//! - Vertices identified by opaque, never-reused handles
//! - Directed and undirected edge semantics over one adjacency-list store
//! - Multiple edges between the same vertices
//! - Cascading removal of a vertex's edges

pub mod store;
pub mod types;

// Re-export main types
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{Edge, GraphMode, VertexId};
