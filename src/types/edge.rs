//! The logical edge record.

use serde::Serialize;

/// A logical edge as inserted by the caller.
///
/// An undirected edge is recorded once here even though both endpoints
/// carry an adjacency entry for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Source vertex index.
    pub source: usize,
    /// Target vertex index.
    pub target: usize,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Whether both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// The same edge with the lower index first.
    pub fn normalized(&self) -> Self {
        if self.source <= self.target {
            *self
        } else {
            Self::new(self.target, self.source)
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
