//! Core graph structure — an adjacency map from vertex labels to edge lists.

use std::collections::BTreeMap;

use crate::graph::factory::Direction;
use crate::types::Edge;

/// A mutable weighted graph backed by an adjacency map.
///
/// The map is kept in canonical form: vertex keys in lexicographic order
/// (intrinsic to the map), each adjacency sequence sorted in descending order
/// by destination label. Canonicalization reruns after every edge insertion,
/// so iteration order is deterministic for rendering and traversal.
///
/// Directed and undirected graphs share this one type; the [`Direction`] tag
/// decides whether edge mutations mirror. There is no internal
/// synchronization — concurrent mutation needs external locking.
#[derive(Debug, Clone)]
pub struct Graph {
    direction: Direction,
    vertices: BTreeMap<String, Vec<Edge>>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            vertices: BTreeMap::new(),
        }
    }

    /// Whether edges are directed or mirrored.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Add a vertex with an empty adjacency sequence. Idempotent.
    pub fn add_vertex(&mut self, label: impl Into<String>) {
        self.vertices.entry(label.into()).or_default();
    }

    /// Add an edge, creating both endpoint vertices as needed.
    ///
    /// On an undirected graph the mirrored edge is inserted in the same
    /// operation. A (src, dest) pair already present is left untouched.
    pub fn add_edge(&mut self, src: &str, dest: &str, weight: f64) {
        self.insert_edge(Edge::new(src, dest, weight));
    }

    /// Add a pre-built edge. Same contract as [`Graph::add_edge`].
    pub fn insert_edge(&mut self, edge: Edge) {
        match self.direction {
            Direction::Directed => self.push_edge(edge),
            Direction::Undirected => {
                let mirror = edge.reversed();
                self.push_edge(edge);
                self.push_edge(mirror);
            }
        }

        self.sort_vertices();
    }

    /// Append one stored edge, deduplicating by (src, dest) pair.
    fn push_edge(&mut self, edge: Edge) {
        self.vertices.entry(edge.dest.clone()).or_default();

        let edges = self.vertices.entry(edge.src.clone()).or_default();
        if !edges.iter().any(|e| e.dest == edge.dest) {
            edges.push(edge);
        }
    }

    /// Remove a vertex and every edge pointing at it.
    pub fn remove_vertex(&mut self, label: &str) {
        if self.vertices.remove(label).is_some() {
            for edges in self.vertices.values_mut() {
                edges.retain(|e| e.dest != label);
            }
        }
    }

    /// Remove the first edge from `src` whose destination is `dest`.
    /// Undirected graphs also remove the mirrored (dest, src) entry.
    pub fn remove_edge(&mut self, src: &str, dest: &str) {
        self.remove_stored_edge(src, dest);

        if self.direction == Direction::Undirected {
            self.remove_stored_edge(dest, src);
        }
    }

    fn remove_stored_edge(&mut self, src: &str, dest: &str) {
        if let Some(edges) = self.vertices.get_mut(src) {
            if let Some(pos) = edges.iter().position(|e| e.dest == dest) {
                edges.remove(pos);
            }
        }
    }

    /// The adjacency map in canonical form.
    pub fn vertex_map(&self) -> &BTreeMap<String, Vec<Edge>> {
        &self.vertices
    }

    /// Outgoing edges of a vertex; empty when the label is absent.
    pub fn edges_from(&self, label: &str) -> &[Edge] {
        self.vertices.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a vertex with this label exists.
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.vertices.contains_key(label)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored adjacency entries, summed across all vertices.
    ///
    /// An undirected graph stores each logical edge twice (once per
    /// direction), so this counts it twice.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vec::len).sum()
    }

    /// Whether the graph holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Empty the adjacency map. Returns whether the graph is now empty
    /// (always true).
    pub fn clear(&mut self) -> bool {
        self.vertices.clear();

        self.vertices.is_empty()
    }

    /// Recompute the canonical view: each adjacency sequence sorted in
    /// descending order by destination label. Vertex key order is maintained
    /// by the map itself. Runs automatically after every edge insertion.
    pub fn sort_vertices(&mut self) {
        for edges in self.vertices.values_mut() {
            edges.sort_by(|a, b| b.cmp(a));
        }
    }
}

/// One line per vertex: `label: (destination, weight) ...` in canonical order.
impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (label, edges) in &self.vertices {
            write!(f, "{}: ", label)?;

            for edge in edges {
                write!(f, "({}, {}) ", edge.dest, edge.weight)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
