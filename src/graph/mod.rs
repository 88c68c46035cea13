//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod store;
pub mod traversal;

pub use builder::GraphBuilder;
pub use store::Graph;
pub use traversal::{bfs, dfs, names_of, traverse, TraversalOrder, Visited};
