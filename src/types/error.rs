//! Error types for the adjgraph library.

use thiserror::Error;

/// All errors that can occur in the adjgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex index outside `0..len`.
    #[error("Vertex index {index} out of range (graph has {len} vertices)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Malformed serialized graph text.
    #[error("Format error on line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// More auto-labeled vertices requested than letters available.
    #[error("Letter naming supports at most {max} vertices, {requested} requested")]
    NamingCapacityExceeded { requested: usize, max: usize },

    /// A vertex name the text format cannot carry.
    #[error("Invalid vertex name: {0:?}")]
    InvalidVertexName(String),

    /// No vertex carries the given name.
    #[error("Unknown vertex name: {0:?}")]
    UnknownVertex(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Build a format error for a 1-based line number.
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
        }
    }
}

/// Convenience result type for adjgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
