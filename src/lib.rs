//! adjgraph — in-memory adjacency-list graphs.
//!
//! Vertices carry names and insertion-ordered adjacency lists. Graphs can be
//! directed or undirected, round-trip through a small text format, and be
//! walked breadth-first or depth-first.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{render_summary, GraphReader, GraphWriter};
pub use graph::{bfs, dfs, names_of, traverse, Graph, GraphBuilder, TraversalOrder, Visited};
pub use types::{
    is_storable_name, is_valid_vertex_name, letter_name, Edge, GraphError, GraphResult, Vertex,
    MAX_LETTER_VERTICES,
};
