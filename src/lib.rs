//! Graphkit
//!
//! A small in-memory graph library: a mutable graph store with directed and
//! undirected modes, topological ordering, unit-weight shortest paths, and a
//! Graphviz DOT writer for visualization.
//!
//! # Architecture
//!
//! - `graph`: the adjacency-list store. Vertex handles come from a per-store
//!   counter and are never reused, so a stale handle cannot alias a new vertex.
//! - `algo`: projects a store into the dense view used by the
//!   `graphkit-algorithms` crate and maps results back to vertex handles.
//! - `dot`: write-only DOT rendering of a store plus per-element attributes.
//! - `config`: plain configuration structs with defaults.
//!
//! Everything is single-threaded and synchronous. A store is not internally
//! synchronized; wrap it in a lock if it must be shared.
//!
//! ## Example Usage
//!
//! ```rust
//! use graphkit::{shortest_path, topological_sort, GraphStore, TopoSortConfig};
//!
//! let mut store = GraphStore::directed();
//! let shirt = store.add_vertex();
//! let tie = store.add_vertex();
//! let jacket = store.add_vertex();
//!
//! store.add_edge(shirt, tie).unwrap();
//! store.add_edge(tie, jacket).unwrap();
//!
//! let order = topological_sort(&store, TopoSortConfig::default()).unwrap();
//! assert_eq!(order, vec![shirt, tie, jacket]);
//!
//! let path = shortest_path(&store, shirt, jacket).unwrap();
//! assert_eq!(path, Some(vec![shirt, tie, jacket]));
//! assert_eq!(shortest_path(&store, jacket, shirt).unwrap(), None);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod dot;
pub mod graph;

// Re-export main types for convenience
pub use graph::{Edge, GraphError, GraphMode, GraphResult, GraphStore, VertexId};

pub use algo::{build_view, shortest_path, topological_sort};

pub use config::{GraphConfig, TopoSortConfig};

pub use dot::{write_dot, AttrValue, Attrs, Dot};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
