//! Fluent API for building Graph instances.

use crate::types::GraphResult;

use super::Graph;

/// Fluent builder for constructing a Graph.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    directed: bool,
    lettered: usize,
    names: Vec<String>,
    links: Vec<(String, String)>,
}

impl GraphBuilder {
    /// Create a new builder for an undirected graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directed graph instead.
    pub fn directed(mut self) -> Self {
        self.directed = true;
        self
    }

    /// Start from `count` letter-named vertices (`A`, `B`, ...).
    pub fn lettered(mut self, count: usize) -> Self {
        self.lettered = count;
        self
    }

    /// Add a named vertex after the lettered ones.
    pub fn vertex(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Add several named vertices in order.
    pub fn vertices<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add an edge between two vertex names.
    pub fn link(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.links.push((source.into(), target.into()));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::new();
        if self.directed {
            graph.set_directed();
        }
        graph.init(self.lettered)?;
        for name in self.names {
            graph.add_vertex(name)?;
        }
        for (source, target) in &self.links {
            graph.add_edge_by_name(source, target)?;
        }
        Ok(graph)
    }
}
