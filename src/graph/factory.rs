//! Direction selector and graph construction.

use serde::Serialize;

use super::Graph;

/// Whether a graph stores edges one-directional or mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Edges are one-directional.
    Directed,
    /// Every edge is stored together with its mirror.
    Undirected,
}

impl Direction {
    /// Return a human-readable name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }

    /// Parse a direction from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "directed" => Some(Self::Directed),
            "undirected" => Some(Self::Undirected),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Constructs empty graphs for a given direction selector.
pub struct GraphFactory;

impl GraphFactory {
    /// Create a new empty graph of the requested direction.
    pub fn create(direction: Direction) -> Graph {
        Graph::new(direction)
    }
}
