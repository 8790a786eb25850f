//! graphgen — a weighted graph engine.
//!
//! Mutable adjacency-list graphs with directed and undirected variants,
//! breadth-first/depth-first traversal, randomized and structured graph
//! generators, and flat edge-list import/export.

pub mod cli;
pub mod format;
pub mod generate;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{EdgeListReader, EdgeListWriter};
pub use graph::{Direction, Graph, GraphFactory, GraphSnapshot};
pub use types::{Edge, GraphError, GraphResult, Vertex};
