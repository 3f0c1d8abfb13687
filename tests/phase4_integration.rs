//! Phase 4 tests: edge-list loading, CLI integration and end-to-end flows.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

use wgraph::cli::commands::{render_dijkstra, render_info, render_mst, render_traverse};
use wgraph::format::EdgeListReader;
use wgraph::graph::TraversalOrder;
use wgraph::types::GraphError;

const DIAMOND: &str = "\
# the four-node example
A B 1
B C 2
A C 4
C D 1
";

const ISLANDS: &str = "\
A,B,1
C,D,1
E
";

// ==================== Helpers ====================

/// Write `text` to a fresh temporary edge-list file.
fn graph_file(text: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(text.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

/// The `wgraph` binary built for this test run.
fn wgraph_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_wgraph"))
}

/// Run the `wgraph` CLI with the given arguments and return the output.
fn run_wgraph(args: &[&str]) -> Output {
    Command::new(wgraph_bin())
        .args(args)
        .output()
        .expect("Failed to run wgraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "wgraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ==================== Loader Tests ====================

#[test]
fn test_load_undirected_file() {
    let tmp = graph_file(DIAMOND);
    let graph = EdgeListReader::new().read_from_file(tmp.path()).unwrap();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 8);
    let names: Vec<&str> = graph.all_nodes().iter().map(|n| n.name()).collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_load_directed_file() {
    let tmp = graph_file(DIAMOND);
    let graph = EdgeListReader::new()
        .directed(true)
        .read_from_file(tmp.path())
        .unwrap();
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.bfs_order("D").unwrap().len(), 1);
}

#[test]
fn test_load_isolated_node() {
    let graph = EdgeListReader::new().parse_str(ISLANDS).unwrap();
    assert!(graph.contains_node("E"));
    assert_eq!(graph.node_by_name("E").unwrap().degree(), 0);
    assert_eq!(graph.minimum_spanning_forest().component_count(), 3);
}

#[test]
fn test_load_from_reader() {
    let mut cursor = std::io::Cursor::new(DIAMOND.as_bytes());
    let graph = EdgeListReader::new().read_from(&mut cursor).unwrap();
    assert_eq!(graph.minimum_spanning_forest().total_weight(), 4);
}

#[test]
fn test_load_negative_weight() {
    match EdgeListReader::new().parse_str("A B 2\nB C -3\n") {
        Err(GraphError::InvalidWeight(w)) => assert_eq!(w, -3),
        other => panic!("Expected InvalidWeight, got {:?}", other),
    }
}

#[test]
fn test_load_weight_beyond_i64() {
    match EdgeListReader::new().parse_str("A B 99999999999999999999\n") {
        Err(GraphError::InvalidWeight(w)) => assert_eq!(w, i64::MAX),
        other => panic!("Expected InvalidWeight, got {:?}", other),
    }
    match EdgeListReader::new().parse_str("A B -99999999999999999999\n") {
        Err(GraphError::InvalidWeight(w)) => assert_eq!(w, i64::MIN),
        other => panic!("Expected InvalidWeight, got {:?}", other),
    }
    match EdgeListReader::new().parse_str("A B 4294967296\n") {
        Err(GraphError::InvalidWeight(w)) => assert_eq!(w, 4_294_967_296),
        other => panic!("Expected InvalidWeight, got {:?}", other),
    }
}

#[test]
fn test_load_non_numeric_weight() {
    match EdgeListReader::new().parse_str("A B heavy\n") {
        Err(GraphError::Parse { line, message }) => {
            assert_eq!(line, 1);
            assert!(message.contains("heavy"));
        }
        other => panic!("Expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    assert!(matches!(
        EdgeListReader::new().read_from_file(&missing),
        Err(GraphError::Io(_))
    ));
}

// ==================== Command Rendering Tests ====================

#[test]
fn test_render_info() {
    let tmp = graph_file(DIAMOND);
    let text = render_info(tmp.path(), false, false).unwrap();
    assert!(text.contains("Nodes: 4"));
    assert!(text.contains("Edges: 8"));
    assert!(text.contains("Total weight: 16"));

    let json: serde_json::Value =
        serde_json::from_str(&render_info(tmp.path(), true, true).unwrap()).unwrap();
    assert_eq!(json["edges"], 4);
    assert_eq!(json["directed"], true);
}

#[test]
fn test_render_traverse() {
    let tmp = graph_file(DIAMOND);
    let bfs = render_traverse(tmp.path(), "A", TraversalOrder::BreadthFirst, false, false, false)
        .unwrap();
    assert_eq!(bfs, "A\nB\nC\nD");

    let dfs = render_traverse(tmp.path(), "A", TraversalOrder::DepthFirst, false, true, false)
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&dfs).unwrap();
    assert_eq!(json["visited"], serde_json::json!(["A", "C", "D", "B"]));
}

#[test]
fn test_render_dijkstra() {
    let tmp = graph_file(DIAMOND);
    let text = render_dijkstra(tmp.path(), "A", Some("D"), false, false, false).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[..4], ["A\t0", "B\t1", "C\t3", "D\t4"]);
    assert_eq!(lines[4], "Path to D (cost 4): A -> B -> C -> D");

    let json: serde_json::Value = serde_json::from_str(
        &render_dijkstra(tmp.path(), "A", Some("D"), false, true, false).unwrap(),
    )
    .unwrap();
    assert_eq!(json["costs"]["C"], 3);
    assert_eq!(json["path"]["nodes"], serde_json::json!(["A", "B", "C", "D"]));
}

#[test]
fn test_render_dijkstra_unreachable_target() {
    let tmp = graph_file(ISLANDS);
    let text = render_dijkstra(tmp.path(), "A", Some("C"), false, false, false).unwrap();
    assert!(text.ends_with("C is unreachable from A"));
    assert!(!text.contains("D\t"));

    let err = render_dijkstra(tmp.path(), "A", Some("Q"), false, false, false).unwrap_err();
    assert!(matches!(err, GraphError::NodeNotFound(_)));
}

#[test]
fn test_render_mst() {
    let tmp = graph_file(ISLANDS);
    let text = render_mst(tmp.path(), false, false, false).unwrap();
    assert_eq!(text, "A B 1\nC D 1\nComponents: 3\nTotal weight: 2");

    let json: serde_json::Value =
        serde_json::from_str(&render_mst(tmp.path(), false, true, false).unwrap()).unwrap();
    assert_eq!(json["components"], 3);
    assert_eq!(json["edges"][0]["source"], "A");
}

#[test]
fn test_render_mst_directed_input() {
    let tmp = graph_file("A B 5\nC B 1\n");
    let text = render_mst(tmp.path(), true, false, false).unwrap();
    assert_eq!(text, "A B 5\nB C 1\nComponents: 1\nTotal weight: 6");
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_bfs() {
    let tmp = graph_file(DIAMOND);
    let path = tmp.path().to_str().unwrap();

    let output = run_wgraph(&["bfs", path, "A"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "A\nB\nC\nD");
}

#[test]
fn test_cli_json_dijkstra() {
    let tmp = graph_file(DIAMOND);
    let path = tmp.path().to_str().unwrap();

    let output = run_wgraph(&["--format", "json", "dijkstra", path, "A"]);
    assert_success(&output);
    let json: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(json["costs"]["D"], 4);
}

#[test]
fn test_cli_mst() {
    let tmp = graph_file(DIAMOND);
    let path = tmp.path().to_str().unwrap();

    let output = run_wgraph(&["--verbose", "mst", path]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("Total weight: 4"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("prim-jarnik"));
}

#[test]
fn test_cli_exit_codes() {
    let tmp = graph_file(DIAMOND);
    let path = tmp.path().to_str().unwrap();
    let output = run_wgraph(&["dfs", path, "Z"]);
    assert_eq!(output.status.code(), Some(4));

    let bad = graph_file("A B -1\n");
    let output = run_wgraph(&["info", bad.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));

    let output = run_wgraph(&["info", "/nonexistent/wgraph/input.txt"]);
    assert_eq!(output.status.code(), Some(1));
}

// ==================== End-to-End ====================

#[test]
fn test_full_lifecycle() {
    let tmp = graph_file(DIAMOND);
    let mut graph = EdgeListReader::new().read_from_file(tmp.path()).unwrap();

    // Extend after loading, then re-run every algorithm.
    graph.connect_undirected("D", "E", 2);
    graph.connect_undirected("A", "E", 1);

    let paths = graph.dijkstra("A").unwrap();
    assert_eq!(paths.cost(graph.node_id("E").unwrap()), Some(1));
    assert_eq!(paths.cost(graph.node_id("D").unwrap()), Some(3));

    let forest = graph.minimum_spanning_forest();
    assert_eq!(forest.edges().len(), 4);
    assert_eq!(forest.total_weight(), 1 + 2 + 1 + 1);

    let tree = graph.minimum_spanning_tree();
    let tree_paths = tree.dijkstra("A").unwrap();
    assert_eq!(tree_paths.len(), 5);
    assert_eq!(graph.bfs_order("A").unwrap().len(), 5);
}
