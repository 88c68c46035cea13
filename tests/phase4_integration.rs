//! Phase 4 tests: CLI integration and end-to-end flows.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

use adjgraph::format::GraphReader;
use adjgraph::graph::traversal::{bfs, dfs, names_of};

// ==================== CLI Helpers ====================

/// Run the `adjgraph` CLI with the given arguments and return the output.
fn run_adjgraph(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_adjgraph"))
        .args(args)
        .output()
        .expect("Failed to run adjgraph")
}

/// Run the CLI feeding `stdin` to it.
fn run_adjgraph_with_input(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_adjgraph"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn adjgraph");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("Failed to wait on adjgraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "adjgraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_create() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    let output = run_adjgraph(&["create", path, "--vertices", "3", "--directed"]);
    assert_success(&output);

    let graph = GraphReader::read_from_file(tmp.path()).unwrap();
    assert!(graph.is_directed());
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_cli_create_over_capacity_fails() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    let output = run_adjgraph(&["create", path, "--vertices", "27"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_cli_link_and_traverse() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    assert_success(&run_adjgraph(&["create", path, "--vertices", "4"]));
    for (a, b) in [("A", "B"), ("B", "C"), ("C", "D")] {
        assert_success(&run_adjgraph(&["link", path, a, b]));
    }

    let output = run_adjgraph(&["traverse", path, "--order", "bfs"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "A B C D");

    let output = run_adjgraph(&["traverse", path, "--order", "dfs", "--start", "C"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "C B A D");
}

#[test]
fn test_cli_duplicate_link_reported() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    assert_success(&run_adjgraph(&["create", path, "--vertices", "2"]));
    assert_success(&run_adjgraph(&["link", path, "A", "B"]));
    let output = run_adjgraph(&["link", path, "B", "A"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("already exists"));

    let graph = GraphReader::read_from_file(tmp.path()).unwrap();
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_cli_add_vertex_and_info() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    assert_success(&run_adjgraph(&["create", path, "--vertices", "1"]));
    assert_success(&run_adjgraph(&["add-vertex", path, "Berlin"]));
    assert_success(&run_adjgraph(&["link", path, "A", "Berlin"]));

    let output = run_adjgraph(&["info", path]);
    assert_success(&output);
    let stdout = stdout_str(&output);
    assert!(stdout.contains("The graph is undirected"));
    assert!(stdout.contains("2 vertices and 1 edges"));
    assert!(stdout.contains("The vertex names are: A Berlin"));
}

#[test]
fn test_cli_info_json() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    assert_success(&run_adjgraph(&["create", path, "--vertices", "2", "--directed"]));
    assert_success(&run_adjgraph(&["link", path, "B", "A"]));

    let output = run_adjgraph(&["--format", "json", "info", path]);
    assert_success(&output);
    let info: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(info["directed"], true);
    assert_eq!(info["vertices"], 2);
    assert_eq!(info["edges"], 1);
    assert_eq!(info["adjacency"][1][0], 0);
    assert_eq!(info["degrees"], serde_json::json!([0, 1]));
}

#[test]
fn test_cli_traverse_json() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    assert_success(&run_adjgraph(&["create", path, "--vertices", "3"]));
    assert_success(&run_adjgraph(&["link", path, "A", "C"]));

    let output = run_adjgraph(&["--format", "json", "traverse", path, "--order", "dfs"]);
    assert_success(&output);
    let info: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(info["order"], "dfs");
    assert_eq!(info["visited"], serde_json::json!([0, 2]));
    assert_eq!(info["names"], serde_json::json!(["A", "C"]));
}

#[test]
fn test_cli_export() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    assert_success(&run_adjgraph(&["create", path, "--vertices", "2"]));
    assert_success(&run_adjgraph(&["link", path, "A", "B"]));

    let output = run_adjgraph(&["export", path, "--pretty"]);
    assert_success(&output);
    let doc: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(doc["directed"], false);
    assert_eq!(doc["vertices"][1]["name"], "B");
    assert_eq!(doc["vertices"][1]["adjacency"], serde_json::json!([0]));
    assert_eq!(doc["edges"][0]["source"], 0);
    assert_eq!(doc["edges"][0]["target"], 1);
}

#[test]
fn test_cli_add_vertex_rejects_comma_name() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    assert_success(&run_adjgraph(&["create", path, "--vertices", "1"]));
    let output = run_adjgraph(&["add-vertex", path, "B,C"]);
    assert_eq!(output.status.code(), Some(5));

    let graph = GraphReader::read_from_file(tmp.path()).unwrap();
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_cli_unknown_start_vertex() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    assert_success(&run_adjgraph(&["create", path, "--vertices", "2"]));
    let output = run_adjgraph(&["traverse", path, "--start", "Q"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_cli_invalid_order() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    assert_success(&run_adjgraph(&["create", path, "--vertices", "2"]));
    let output = run_adjgraph(&["traverse", path, "--order", "sideways"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_malformed_file() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "U\n2\nA\nB\nA B\n").unwrap();
    tmp.flush().unwrap();
    let path = tmp.path().to_str().unwrap();

    let output = run_adjgraph(&["info", path]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 5"));
}

#[test]
fn test_cli_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.graph");
    let output = run_adjgraph(&["info", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_interactive_input() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    let output = run_adjgraph_with_input(&["input", path], "D\n4\nA B\nA C\nC D\nend\n");
    assert_success(&output);
    assert!(stdout_str(&output).contains("Please enter the number of vertices"));

    let graph = GraphReader::read_from_file(tmp.path()).unwrap();
    assert!(graph.is_directed());
    assert_eq!(graph.edge_count(), 3);
    let order = bfs(&graph, 0).unwrap();
    assert_eq!(names_of(&graph, &order).unwrap(), vec!["A", "B", "C", "D"]);
    let order = dfs(&graph, 0).unwrap();
    assert_eq!(names_of(&graph, &order).unwrap(), vec!["A", "B", "C", "D"]);
}
