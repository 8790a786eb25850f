//! Error types for the graphgen library.

use thiserror::Error;

/// All errors that can occur in the graphgen library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Requested more edges than the family can structurally hold.
    #[error("Too many edges: requested {requested}, maximum is {max}")]
    TooManyEdges { requested: i64, max: i64 },

    /// Requested fewer edges than the family requires.
    #[error("Too few edges: requested {requested}, minimum is {min}")]
    TooFewEdges { requested: i64, min: i64 },

    /// Probability outside [0, 1].
    #[error("Probability must be between 0 and 1, got {0}")]
    InvalidProbability(f64),

    /// A k-regular graph needs an even degree sum.
    #[error("Vertex count ({vertices}) times degree ({degree}) must be even")]
    OddDegreeSum { vertices: usize, degree: usize },

    /// The family requires a minimum number of vertices.
    #[error("Graph must have at least {required} vertices, got {actual}")]
    TooFewVertices { required: usize, actual: usize },

    /// Traversal start label absent from the graph.
    #[error("Vertex {0:?} not found in the graph")]
    VertexNotFound(String),

    /// Traversal requested on a graph with no vertices.
    #[error("Graph has no vertices")]
    EmptyGraph,

    /// Edge-list record with the wrong field count.
    #[error("Malformed record on line {line}: expected source,destination,weight")]
    BadRecord { line: usize },

    /// Edge-list record with a non-numeric weight.
    #[error("Bad weight {value:?} on line {line}")]
    BadWeight { line: usize, value: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graphgen operations.
pub type GraphResult<T> = Result<T, GraphError>;
