//! Core graph structure — vertices with adjacency lists plus a name index.

use std::collections::HashMap;

use crate::format::{GraphReader, GraphWriter};
use crate::types::{
    is_storable_name, letter_name, Edge, GraphError, GraphResult, Vertex, MAX_LETTER_VERTICES,
};

/// An in-memory directed or undirected graph.
///
/// Vertex indices are dense (`0..vertex_count()`) and stable until the graph
/// is cleared. Access is single-threaded; callers serialize mutation and
/// traversal themselves.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All vertices, indexed by position.
    vertices: Vec<Vertex>,
    /// Logical edges in insertion order.
    edges: Vec<Edge>,
    /// Name -> index of the first vertex added under that name.
    name_index: HashMap<String, usize>,
    /// Whether edges are one-way.
    directed: bool,
}

impl Graph {
    /// Create a new empty undirected graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }

    /// Create an undirected graph with `count` letter-named vertices.
    pub fn with_vertices(count: usize) -> GraphResult<Self> {
        let mut graph = Self::new();
        graph.init(count)?;
        Ok(graph)
    }

    /// Tells whether the graph is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Mark the graph as directed. Existing edges are left as they are.
    pub fn set_directed(&mut self) {
        self.directed = true;
    }

    /// Mark the graph as undirected. Existing edges are left as they are.
    pub fn set_undirected(&mut self) {
        self.directed = false;
    }

    /// Start the graph over: no vertices, no edges, undirected.
    pub fn make_empty(&mut self) {
        self.clear();
        self.directed = false;
    }

    /// Replace the contents with `count` vertices named `A`, `B`, ...
    ///
    /// The directedness flag is kept. Nothing is changed when `count` exceeds
    /// the letter-naming capacity.
    pub fn init(&mut self, count: usize) -> GraphResult<()> {
        if count > MAX_LETTER_VERTICES {
            return Err(GraphError::NamingCapacityExceeded {
                requested: count,
                max: MAX_LETTER_VERTICES,
            });
        }
        self.clear();
        if count > 0 {
            self.add_vertex_up_to(count - 1)?;
        }
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of logical edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices, in index order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All logical edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a vertex by index.
    pub fn vertex(&self, index: usize) -> GraphResult<&Vertex> {
        self.vertices.get(index).ok_or(GraphError::IndexOutOfRange {
            index,
            len: self.vertices.len(),
        })
    }

    /// Name of the vertex at `index`.
    pub fn vertex_name(&self, index: usize) -> GraphResult<&str> {
        self.vertex(index).map(|v| v.name.as_str())
    }

    /// Index of the first vertex added under `name`.
    pub fn vertex_index(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    /// Outgoing adjacency list of the vertex at `index`.
    pub fn neighbors(&self, index: usize) -> GraphResult<&[usize]> {
        self.vertex(index).map(|v| v.adjacency.as_slice())
    }

    /// Append a vertex named `name` and return its index.
    ///
    /// Names are not required to be unique; a repeated name keeps resolving
    /// to the vertex that first used it. Names the text format cannot carry
    /// (empty, padded with whitespace, or containing a comma or line break)
    /// are rejected.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> GraphResult<usize> {
        let name = name.into();
        if !is_storable_name(&name) {
            return Err(GraphError::InvalidVertexName(name));
        }
        let index = self.vertices.len();
        self.name_index.entry(name.clone()).or_insert(index);
        self.vertices.push(Vertex::new(name));
        Ok(index)
    }

    /// Make sure vertex `index` exists, letter-naming every missing vertex
    /// from the current count up to it. Existing vertices are not renamed.
    pub fn add_vertex_up_to(&mut self, index: usize) -> GraphResult<()> {
        if index < self.vertices.len() {
            return Ok(());
        }
        if index >= MAX_LETTER_VERTICES {
            return Err(GraphError::NamingCapacityExceeded {
                requested: index + 1,
                max: MAX_LETTER_VERTICES,
            });
        }
        for i in self.vertices.len()..=index {
            let name = letter_name(i)?;
            self.add_vertex(name)?;
        }
        Ok(())
    }

    /// Whether `target` appears in the adjacency list of `source`.
    pub fn edge_exists(&self, source: usize, target: usize) -> GraphResult<bool> {
        self.check_index(target)?;
        Ok(self.neighbors(source)?.contains(&target))
    }

    /// Insert the edge `source -> target` (both ways when undirected).
    ///
    /// Returns `false` when the edge was already present. A self-loop takes a
    /// single adjacency entry. The reverse entry of an undirected edge is only
    /// added when the target does not list the source yet, which can happen
    /// after the graph was switched from directed.
    pub fn add_edge(&mut self, source: usize, target: usize) -> GraphResult<bool> {
        if self.edge_exists(source, target)? {
            return Ok(false);
        }
        let edge = Edge::new(source, target);
        self.vertices[source].adjacency.push(target);
        if !self.directed && !edge.is_self_loop() {
            let reverse = &mut self.vertices[target].adjacency;
            if !reverse.contains(&source) {
                reverse.push(source);
            }
        }
        self.edges.push(edge);
        Ok(true)
    }

    /// Insert an edge between two named vertices, creating a vertex for
    /// any name not seen before.
    ///
    /// Nothing is created when either unknown name cannot be stored.
    pub fn add_edge_by_name(&mut self, source: &str, target: &str) -> GraphResult<bool> {
        for name in [source, target] {
            if self.vertex_index(name).is_none() && !is_storable_name(name) {
                return Err(GraphError::InvalidVertexName(name.to_string()));
            }
        }
        let source = self.resolve_or_add(source)?;
        let target = self.resolve_or_add(target)?;
        self.add_edge(source, target)
    }

    /// Render the graph in the text format read by [`Graph::deserialize`].
    pub fn serialize(&self) -> GraphResult<String> {
        GraphWriter::to_text(self)
    }

    /// Parse a graph from the text format.
    pub fn deserialize(text: &str) -> GraphResult<Self> {
        GraphReader::parse(text)
    }

    fn resolve_or_add(&mut self, name: &str) -> GraphResult<usize> {
        match self.vertex_index(name) {
            Some(index) => Ok(index),
            None => self.add_vertex(name),
        }
    }

    fn check_index(&self, index: usize) -> GraphResult<()> {
        self.vertex(index).map(|_| ())
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.name_index.clear();
    }
}
