//! Graph traversal algorithms (BFS, DFS).

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult};

use super::Graph;

/// Visitation order for a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Level by level from the start vertex.
    BreadthFirst,
    /// Follow each edge as deep as possible before the next one.
    DepthFirst,
}

impl TraversalOrder {
    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }

    /// Parse a traversal order from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth" | "breadth-first" => Some(Self::BreadthFirst),
            "dfs" | "depth" | "depth-first" => Some(Self::DepthFirst),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Visited markers for one traversal call, sized to the graph at call time.
#[derive(Debug, Clone)]
pub struct Visited {
    marks: Vec<bool>,
}

impl Visited {
    /// All-unvisited markers for `len` vertices.
    pub fn new(len: usize) -> Self {
        Self {
            marks: vec![false; len],
        }
    }

    /// Mark `index`; returns true only the first time.
    pub fn visit(&mut self, index: usize) -> bool {
        match self.marks.get_mut(index) {
            Some(mark) if !*mark => {
                *mark = true;
                true
            }
            _ => false,
        }
    }

    /// Whether `index` has been marked.
    pub fn is_visited(&self, index: usize) -> bool {
        self.marks.get(index).copied().unwrap_or(false)
    }

    /// Number of marked vertices.
    pub fn count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }
}

/// Run the traversal selected by `order` from `start`.
pub fn traverse(graph: &Graph, start: usize, order: TraversalOrder) -> GraphResult<Vec<usize>> {
    match order {
        TraversalOrder::BreadthFirst => bfs(graph, start),
        TraversalOrder::DepthFirst => dfs(graph, start),
    }
}

/// Breadth-first visit order from `start`.
///
/// Vertices are marked when enqueued, so none is queued twice. Unreachable
/// vertices are left out.
pub fn bfs(graph: &Graph, start: usize) -> GraphResult<Vec<usize>> {
    graph.vertex(start)?;

    let mut visited = Visited::new(graph.vertex_count());
    let mut order: Vec<usize> = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited.visit(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &next in graph.neighbors(current)? {
            if visited.visit(next) {
                queue.push_back(next);
            }
        }
    }

    Ok(order)
}

/// Depth-first visit order from `start`.
///
/// Edges are followed in adjacency-list order. An explicit stack of
/// adjacency cursors stands in for recursion and yields the same order.
pub fn dfs(graph: &Graph, start: usize) -> GraphResult<Vec<usize>> {
    graph.vertex(start)?;

    let mut visited = Visited::new(graph.vertex_count());
    let mut order: Vec<usize> = Vec::new();
    // (vertex, position of the next adjacency entry to examine)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    visited.visit(start);
    order.push(start);
    stack.push((start, 0));

    while let Some(top) = stack.last_mut() {
        let (current, cursor) = *top;
        match graph.neighbors(current)?.get(cursor) {
            Some(&next) => {
                top.1 += 1;
                if visited.visit(next) {
                    order.push(next);
                    stack.push((next, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(order)
}

/// Names of the vertices in `order`.
pub fn names_of<'g>(graph: &'g Graph, order: &[usize]) -> GraphResult<Vec<&'g str>> {
    order.iter().map(|&i| graph.vertex_name(i)).collect()
}

/// Resolve a start vertex given by name.
pub fn start_index(graph: &Graph, name: &str) -> GraphResult<usize> {
    graph
        .vertex_index(name)
        .ok_or_else(|| GraphError::UnknownVertex(name.to_string()))
}
