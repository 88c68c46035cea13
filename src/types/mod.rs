//! All data types for the adjgraph library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use vertex::{is_storable_name, is_valid_vertex_name, letter_name, Vertex};

/// Number of vertices the letter-naming strategy can label (`A`..=`Z`).
pub const MAX_LETTER_VERTICES: usize = 26;

/// Direction marker written on the first line of a directed graph file.
pub const DIRECTED_MARKER: char = 'D';

/// Direction marker written on the first line of an undirected graph file.
pub const UNDIRECTED_MARKER: char = 'U';
