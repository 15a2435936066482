//! Graphviz DOT export
//!
//! Write-only rendering of a [`GraphStore`] for external visualization tools.
//! Output is deterministic: vertices are listed by ascending handle, edges by
//! (source, target), and attribute keys alphabetically. Only vertices carrying at
//! least one attribute are listed; every edge is.
//!
//! ```
//! use graphkit::dot::Dot;
//! use graphkit::graph::GraphStore;
//!
//! let mut graph = GraphStore::directed();
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! graph.add_edge(a, b).unwrap();
//!
//! let mut dot = Dot::new(&graph);
//! dot.set_vertex_attr(a, "label", "start").unwrap();
//!
//! assert_eq!(
//!     dot.to_dot_string(),
//!     "digraph {\n\t0 [ label=start, ];\n\t0 -> 1;\n}\n"
//! );
//! ```

use crate::graph::{Edge, GraphError, GraphResult, GraphStore, VertexId};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::io::Write;
use tracing::debug;

const DIGRAPH_SEP: &str = "->";
const GRAPH_SEP: &str = "--";

/// A single attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Graphviz ID syntax: bare when it is a plain identifier, quoted otherwise
fn write_id<W: fmt::Write>(s: &str, w: &mut W) -> fmt::Result {
    let bare = !s.is_empty()
        && !s.starts_with(|c: char| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if bare {
        return w.write_str(s);
    }
    w.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => w.write_str("\\\"")?,
            '\n' => w.write_str("\\n")?,
            c => w.write_char(c)?,
        }
    }
    w.write_char('"')
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => write_id(s, f),
            AttrValue::Int(i) => write!(f, "{}", i),
            AttrValue::Float(x) => write!(f, "{}", x),
            AttrValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        AttrValue::Int(i as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(x: f64) -> Self {
        AttrValue::Float(x)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

/// Attribute block, kept sorted by key
pub type Attrs = BTreeMap<String, AttrValue>;

/// A graph plus the attributes to render it with
#[derive(Debug, Clone)]
pub struct Dot<'a> {
    graph: &'a GraphStore,

    /// Graph name written after `digraph`/`graph`; omitted when empty
    pub name: String,

    /// Attributes that apply to the graph as a whole
    pub graph_attrs: Attrs,

    /// Attributes that apply to every edge
    pub edge_global_attrs: Attrs,

    /// Attributes that apply to every vertex
    pub vertex_global_attrs: Attrs,

    vertex_attrs: HashMap<VertexId, Attrs>,
    edge_attrs: HashMap<Edge, Attrs>,
}

impl<'a> Dot<'a> {
    pub fn new(graph: &'a GraphStore) -> Self {
        Dot {
            graph,
            name: String::new(),
            graph_attrs: Attrs::new(),
            edge_global_attrs: Attrs::new(),
            vertex_global_attrs: Attrs::new(),
            vertex_attrs: HashMap::new(),
            edge_attrs: HashMap::new(),
        }
    }

    /// Key under which an edge's attributes live (canonical when undirected)
    fn edge_key(&self, u: VertexId, v: VertexId) -> Edge {
        let edge = Edge { source: u, target: v };
        if self.graph.is_directed() {
            edge
        } else {
            edge.canonical()
        }
    }

    /// Set an attribute on one vertex
    pub fn set_vertex_attr(
        &mut self,
        v: VertexId,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> GraphResult<()> {
        if !self.graph.has_vertex(v) {
            return Err(GraphError::UnknownVertex(v));
        }
        self.vertex_attrs
            .entry(v)
            .or_default()
            .insert(key.into(), value.into());
        Ok(())
    }

    /// Set an attribute on the edge `u -> v` (all copies, if it is a multi-edge)
    pub fn set_edge_attr(
        &mut self,
        u: VertexId,
        v: VertexId,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> GraphResult<()> {
        if !self.graph.has_edge(u, v) {
            return Err(GraphError::UnknownEdge(Edge { source: u, target: v }));
        }
        let edge = self.edge_key(u, v);
        self.edge_attrs
            .entry(edge)
            .or_default()
            .insert(key.into(), value.into());
        Ok(())
    }

    pub fn vertex_attrs(&self, v: VertexId) -> Option<&Attrs> {
        self.vertex_attrs.get(&v)
    }

    pub fn edge_attrs(&self, u: VertexId, v: VertexId) -> Option<&Attrs> {
        self.edge_attrs.get(&self.edge_key(u, v))
    }

    /// Render to an owned string
    pub fn to_dot_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (graph_type, sep) = if self.graph.is_directed() {
            ("digraph", DIGRAPH_SEP)
        } else {
            ("graph", GRAPH_SEP)
        };

        if self.name.is_empty() {
            writeln!(f, "{} {{", graph_type)?;
        } else {
            write!(f, "{} ", graph_type)?;
            write_id(&self.name, f)?;
            writeln!(f, " {{")?;
        }

        // Global attrs if they exist
        if !self.graph_attrs.is_empty() {
            write_attrs(f, "\tgraph", &self.graph_attrs)?;
        }
        if !self.edge_global_attrs.is_empty() {
            write_attrs(f, "\tedge", &self.edge_global_attrs)?;
        }
        if !self.vertex_global_attrs.is_empty() {
            write_attrs(f, "\tnode", &self.vertex_global_attrs)?;
        }

        let mut vertices = self.graph.vertices();
        vertices.sort_unstable();
        for v in vertices {
            match self.vertex_attrs.get(&v) {
                Some(attrs) if !attrs.is_empty() => write_attrs(f, &format!("\t{}", v), attrs)?,
                _ => {}
            }
        }

        let mut edges = self.graph.edges();
        edges.sort_unstable();
        for edge in edges {
            write!(f, "\t{} {} {}", edge.source, sep, edge.target)?;
            match self.edge_attrs.get(&edge) {
                Some(attrs) if !attrs.is_empty() => write_attrs(f, "", attrs)?,
                _ => f.write_str(";\n")?,
            }
        }

        f.write_str("}\n")
    }
}

/// `<prefix> [ k1=v1, k2=v2, ];`
fn write_attrs<W: fmt::Write>(out: &mut W, prefix: &str, attrs: &Attrs) -> fmt::Result {
    write!(out, "{} [ ", prefix)?;
    for (key, value) in attrs {
        write_id(key, out)?;
        write!(out, "={}, ", value)?;
    }
    out.write_str("];\n")
}

/// Write `dot` to `w`, returning the number of bytes written
pub fn write_dot<W: Write>(w: &mut W, dot: &Dot<'_>) -> GraphResult<u64> {
    let rendered = dot.to_dot_string();
    w.write_all(rendered.as_bytes())?;
    debug!(bytes = rendered.len(), "dot output written");
    Ok(rendered.len() as u64)
}
