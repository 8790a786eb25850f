//! Vertex label wrapper.

use crate::graph::Graph;
use crate::types::Edge;

/// A vertex, identified by its label and nothing else.
///
/// The graph's adjacency map is the single source of truth for topology;
/// a vertex never caches its own neighbor list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex {
    label: String,
}

impl Vertex {
    /// Create a vertex with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// The vertex label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Outgoing edges of this vertex, looked up in the graph's adjacency map.
    /// Empty when the vertex is not part of the graph.
    pub fn neighbors<'g>(&self, graph: &'g Graph) -> &'g [Edge] {
        graph.edges_from(&self.label)
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}
