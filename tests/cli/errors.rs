use crate::cli::support::{graphq, write_five_node_graph, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

const NEGATIVE_CYCLE: &str = r#"{
  "nodes": [{ "data": { "id": "x" } }, { "data": { "id": "y" } }, { "data": { "id": "z" } }],
  "edges": [
    { "data": { "id": "xy", "source": "x", "target": "y", "weight": 1 } },
    { "data": { "id": "yz", "source": "y", "target": "z", "weight": -3 } },
    { "data": { "id": "zy", "source": "z", "target": "y", "weight": 1 } }
  ]
}"#;

#[test]
fn test_help_and_version() {
    graphq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dijkstra"))
        .stdout(predicate::str::contains("floyd-warshall"));

    graphq()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphq"));
}

#[test]
fn test_no_command_prints_help() {
    graphq()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_graph_is_usage_error() {
    graphq()
        .args(["bfs", "a"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--graph"));
}

#[test]
fn test_unknown_root_is_data_error() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    graphq()
        .arg("--graph")
        .arg(&graph)
        .args(["dijkstra", "zz"])
        .assert()
        .code(3);
}

#[test]
fn test_negative_cycle_fails() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "cycle.json", NEGATIVE_CYCLE);

    graphq()
        .arg("--graph")
        .arg(&graph)
        .args(["bellman-ford", "x", "--directed", "--weight", "weight"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: negative-weight cycle"));
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "cycle.json", NEGATIVE_CYCLE);

    let output = graphq()
        .arg("--graph")
        .arg(&graph)
        .args([
            "--format",
            "json",
            "bellman-ford",
            "x",
            "--directed",
            "--weight",
            "weight",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 1);
    assert_eq!(json["error"]["type"], "negative_cycle_detected");

    let output = graphq()
        .args(["--format", "json", "dijkstra", "a", "--bogus"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.csv", "a,b\n");

    graphq()
        .arg("--graph")
        .arg(&graph)
        .args(["bfs", "a"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("csv"));
}

#[test]
fn test_quiet_suppresses_error_text() {
    graphq()
        .args(["--quiet", "bfs", "a"])
        .assert()
        .code(2)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_yaml_document() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "graph.yaml",
        "nodes:\n  - data: { id: a }\n  - data: { id: b }\nedges:\n  - data: { id: ab, source: a, target: b, weight: 2 }\n",
    );

    graphq()
        .arg("--graph")
        .arg(&graph)
        .args(["dijkstra", "a", "--to", "b", "--weight", "weight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a -[ab]- b"));
}
