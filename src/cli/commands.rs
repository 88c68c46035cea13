//! CLI command implementations.

use std::path::Path;

use crate::cli::input::read_interactive;
use crate::format::{render_summary, GraphReader, GraphWriter};
use crate::graph::traversal::{names_of, start_index, traverse, TraversalOrder};
use crate::graph::Graph;
use crate::types::GraphResult;

/// Create a new graph file with `vertices` letter-named vertices.
pub fn cmd_create(path: &Path, directed: bool, vertices: usize) -> GraphResult<()> {
    let mut graph = Graph::new();
    if directed {
        graph.set_directed();
    }
    graph.init(vertices)?;
    GraphWriter::write_to_file(&graph, path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Display information about a graph file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;

    if json {
        let names: Vec<&str> = graph.vertices().iter().map(|v| v.name.as_str()).collect();
        let adjacency: Vec<&[usize]> = graph
            .vertices()
            .iter()
            .map(|v| v.adjacency.as_slice())
            .collect();
        let degrees: Vec<usize> = graph.vertices().iter().map(|v| v.degree()).collect();
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "directed": graph.is_directed(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "names": names,
            "adjacency": adjacency,
            "degrees": degrees,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        print!("{}", render_summary(&graph));
    }
    Ok(())
}

/// Append a named vertex.
pub fn cmd_add_vertex(path: &Path, name: &str, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    let index = graph.add_vertex(name)?;
    GraphWriter::write_to_file(&graph, path)?;

    if json {
        println!("{}", serde_json::json!({"index": index, "name": name}));
    } else {
        println!("Added vertex {} ({}) to {}", index, name, path.display());
    }
    Ok(())
}

/// Add an edge between two named vertices.
pub fn cmd_link(path: &Path, source: &str, target: &str, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    let inserted = graph.add_edge_by_name(source, target)?;
    if inserted {
        GraphWriter::write_to_file(&graph, path)?;
    }

    let arrow = if graph.is_directed() { "->" } else { "--" };
    if json {
        println!(
            "{}",
            serde_json::json!({"source": source, "target": target, "inserted": inserted})
        );
    } else if inserted {
        println!("Linked {} {} {}", source, arrow, target);
    } else {
        println!("Edge {} {} {} already exists", source, arrow, target);
    }
    Ok(())
}

/// Print the visit order of a traversal.
pub fn cmd_traverse(
    path: &Path,
    order: TraversalOrder,
    start: Option<&str>,
    json: bool,
) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let start = match start {
        Some(name) => start_index(&graph, name)?,
        None => 0,
    };
    log::debug!("{} traversal from vertex {}", order, start);

    let visited = traverse(&graph, start, order)?;
    let names = names_of(&graph, &visited)?;

    if json {
        let info = serde_json::json!({
            "order": order.name(),
            "start": start,
            "visited": visited,
            "names": names,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("{}", names.join(" "));
    }
    Ok(())
}

/// Enter a graph interactively on stdin and save it.
pub fn cmd_input(path: &Path) -> GraphResult<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let graph = read_interactive(stdin.lock(), &mut stdout)?;
    GraphWriter::write_to_file(&graph, path)?;
    println!("Saved {}", path.display());
    Ok(())
}

/// Export the graph as JSON.
pub fn cmd_export(path: &Path, pretty: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;

    let output = serde_json::json!({
        "directed": graph.is_directed(),
        "vertices": graph.vertices(),
        "edges": graph.edges(),
    });

    let s = if pretty {
        serde_json::to_string_pretty(&output).unwrap_or_default()
    } else {
        serde_json::to_string(&output).unwrap_or_default()
    };
    println!("{}", s);
    Ok(())
}
