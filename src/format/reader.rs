//! Reads the text graph format into an in-memory graph.

use std::io::Read;
use std::path::Path;

use crate::graph::Graph;
use crate::types::error::{GraphError, GraphResult};
use crate::types::{DIRECTED_MARKER, UNDIRECTED_MARKER};

/// Reader for text graph files.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph file.
    pub fn read_from_file(path: &Path) -> GraphResult<Graph> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("read {} bytes from {}", text.len(), path.display());
        Self::parse(&text)
    }

    /// Read from any reader into a Graph.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<Graph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Parse graph text.
    ///
    /// Blank lines are skipped. Any malformed line fails the whole parse;
    /// no partially built graph is returned.
    pub fn parse(text: &str) -> GraphResult<Graph> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());
        let eof_line = text.lines().count() + 1;

        // Direction
        let (line_no, marker) = lines
            .next()
            .ok_or_else(|| GraphError::format(eof_line, "missing direction line"))?;
        let mut graph = Graph::new();
        match parse_direction(marker) {
            Some(true) => graph.set_directed(),
            Some(false) => graph.set_undirected(),
            None => {
                return Err(GraphError::format(
                    line_no,
                    format!(
                        "expected '{}' or '{}', found {:?}",
                        DIRECTED_MARKER, UNDIRECTED_MARKER, marker
                    ),
                ))
            }
        }

        // Vertex count
        let (line_no, count) = lines
            .next()
            .ok_or_else(|| GraphError::format(eof_line, "missing vertex count"))?;
        let count: usize = count.parse().map_err(|_| {
            GraphError::format(line_no, format!("invalid vertex count {:?}", count))
        })?;

        // Vertex names
        for found in 0..count {
            let (line_no, name) = lines.next().ok_or_else(|| {
                GraphError::format(
                    eof_line,
                    format!("expected {} vertex names, found {}", count, found),
                )
            })?;
            graph.add_vertex(name).map_err(|_| {
                GraphError::format(line_no, format!("invalid vertex name {:?}", name))
            })?;
        }

        // Edges until EOF
        let mut edge_lines = 0usize;
        for (line_no, line) in lines {
            let (source, target) = parse_edge_line(line)
                .ok_or_else(|| GraphError::format(line_no, format!("malformed edge {:?}", line)))?;
            graph.add_edge_by_name(source, target)?;
            edge_lines += 1;
        }

        log::debug!(
            "parsed {} graph: {} vertices, {} edge lines, {} edges",
            if graph.is_directed() { "directed" } else { "undirected" },
            graph.vertex_count(),
            edge_lines,
            graph.edge_count()
        );
        Ok(graph)
    }
}

/// `Some(true)` for directed, `Some(false)` for undirected.
fn parse_direction(marker: &str) -> Option<bool> {
    let mut chars = marker.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.eq_ignore_ascii_case(&DIRECTED_MARKER) => Some(true),
        (Some(c), None) if c.eq_ignore_ascii_case(&UNDIRECTED_MARKER) => Some(false),
        _ => None,
    }
}

/// Split `src, dst` into its two trimmed, non-empty names.
fn parse_edge_line(line: &str) -> Option<(&str, &str)> {
    let (source, target) = line.split_once(',')?;
    let (source, target) = (source.trim(), target.trim());
    if source.is_empty() || target.is_empty() || target.contains(',') {
        return None;
    }
    Some((source, target))
}
