//! Human-readable graph report.

use std::fmt::Write;

use crate::graph::Graph;

/// Render direction, counts, vertex names and every adjacency list.
pub fn render_summary(graph: &Graph) -> String {
    let mut out = String::new();
    let kind = if graph.is_directed() {
        "directed"
    } else {
        "undirected"
    };
    let _ = writeln!(out, "The graph is {}", kind);
    let _ = writeln!(
        out,
        "The graph contains {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    if graph.is_empty() {
        return out;
    }

    let names: Vec<&str> = graph.vertices().iter().map(|v| v.name.as_str()).collect();
    let _ = writeln!(out, "The vertex names are: {}", names.join(" "));
    let _ = writeln!(out, "The adjacency list for each vertex is:");
    for (i, vertex) in graph.vertices().iter().enumerate() {
        let targets: Vec<String> = vertex.adjacency.iter().map(|t| t.to_string()).collect();
        let line = format!("vertex {}: {}", i, targets.join(" "));
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}
