//! Writes an in-memory graph in the text graph format.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::types::error::GraphResult;
use crate::types::{DIRECTED_MARKER, UNDIRECTED_MARKER};

/// Writer for text graph files.
pub struct GraphWriter;

impl GraphWriter {
    /// Write a graph to a file, replacing it.
    pub fn write_to_file(graph: &Graph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        log::debug!("wrote graph to {}", path.display());
        Ok(())
    }

    /// Write a graph to any writer.
    ///
    /// A directed graph writes every adjacency entry, vertex by vertex, so
    /// entries left over from an undirected past are kept. An undirected
    /// graph writes each logical edge once in insertion order with the lower
    /// index first. Either way reading the text back rebuilds every
    /// adjacency list in the same order.
    pub fn write_to(graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
        let marker = if graph.is_directed() {
            DIRECTED_MARKER
        } else {
            UNDIRECTED_MARKER
        };
        writeln!(writer, "{}", marker)?;
        writeln!(writer, "{}", graph.vertex_count())?;

        for vertex in graph.vertices() {
            writeln!(writer, "{}", vertex.name)?;
        }

        let mut lines = 0usize;
        if graph.is_directed() {
            for vertex in graph.vertices() {
                for &target in &vertex.adjacency {
                    writeln!(writer, "{}, {}", vertex.name, graph.vertex_name(target)?)?;
                    lines += 1;
                }
            }
        } else {
            let mut written: HashSet<(usize, usize)> = HashSet::new();
            for edge in graph.edges() {
                let edge = edge.normalized();
                if !written.insert((edge.source, edge.target)) {
                    continue;
                }
                writeln!(
                    writer,
                    "{}, {}",
                    graph.vertex_name(edge.source)?,
                    graph.vertex_name(edge.target)?
                )?;
                lines += 1;
            }
        }

        log::debug!(
            "wrote {} vertices and {} edge lines",
            graph.vertex_count(),
            lines
        );
        Ok(())
    }

    /// Render a graph to a string.
    pub fn to_text(graph: &Graph) -> GraphResult<String> {
        let mut buf = Vec::new();
        Self::write_to(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
