//! Vertex struct and the letter-naming strategy.

use serde::Serialize;

use super::MAX_LETTER_VERTICES;
use crate::types::error::{GraphError, GraphResult};

/// A named vertex owning its outgoing adjacency list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex {
    /// Human-readable name (conventionally a single uppercase letter).
    pub name: String,
    /// Outgoing edge targets, in insertion order.
    pub adjacency: Vec<usize>,
}

impl Vertex {
    /// Create a vertex with no edges.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            adjacency: Vec::new(),
        }
    }

    /// Number of outgoing adjacency entries.
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }
}

/// Auto-generated name for the vertex at `index`: `A`, `B`, ... `Z`.
pub fn letter_name(index: usize) -> GraphResult<String> {
    if index >= MAX_LETTER_VERTICES {
        return Err(GraphError::NamingCapacityExceeded {
            requested: index + 1,
            max: MAX_LETTER_VERTICES,
        });
    }
    Ok(char::from(b'A' + index as u8).to_string())
}

/// Whether `name` survives a write and re-read of the text format.
///
/// The name must be non-empty, carry no leading or trailing whitespace, and
/// contain no comma or line break.
pub fn is_storable_name(name: &str) -> bool {
    !name.is_empty()
        && name.trim() == name
        && !name.contains(|c| c == ',' || c == '\n' || c == '\r')
}

/// Check that `name` is a single ASCII uppercase letter.
pub fn is_valid_vertex_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
}
