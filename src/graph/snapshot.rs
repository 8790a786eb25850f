//! Read-only snapshot of a graph for external renderers.

use serde::Serialize;

use crate::types::Edge;

use super::Graph;

/// An owned, immutable view of a graph's topology.
///
/// A renderer consumes this to build its own node/edge set; nothing here can
/// reach back into the source graph. Vertices and edges appear in canonical
/// order. To animate a traversal, hand the renderer the ordered label
/// sequence returned by the traversal functions alongside this snapshot and
/// let it pace the per-step highlight itself.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSnapshot {
    /// Whether the source graph stored edges one-directional.
    pub directed: bool,
    /// Vertex labels in canonical order.
    pub vertices: Vec<String>,
    /// Stored edges in canonical order (an undirected source contributes
    /// both mirrored entries).
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// Capture the current state of a graph.
    pub fn capture(graph: &Graph) -> Self {
        let vertices: Vec<String> = graph.vertex_map().keys().cloned().collect();
        let edges: Vec<Edge> = graph
            .vertex_map()
            .values()
            .flat_map(|edges| edges.iter().cloned())
            .collect();

        Self {
            directed: graph.direction() == super::Direction::Directed,
            vertices,
            edges,
        }
    }
}

impl Graph {
    /// Capture a read-only snapshot of this graph. See [`GraphSnapshot`].
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::capture(self)
    }
}
