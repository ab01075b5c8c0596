use crate::cli::support::{graphq, json_stdout, write_five_node_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_floyd_warshall_single_pair() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    graphq()
        .arg("--graph")
        .arg(&graph)
        .args(["floyd-warshall", "--from", "b", "--to", "d", "--weight", "weight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 7"))
        .stdout(predicate::str::contains("path: b -[bc]- c -[cd]- d"));
}

#[test]
fn test_floyd_warshall_all_pairs_json() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    let json = json_stdout(graphq().arg("--graph").arg(&graph).args([
        "--format",
        "json",
        "floyd-warshall",
        "--weight",
        "weight",
        "--directed",
    ]));

    assert_eq!(json["algorithm"], "floyd-warshall");
    assert_eq!(json["nodes"], 5);
    let pairs = json["pairs"].as_array().unwrap();
    assert_eq!(pairs.len(), 25);

    let pair = |from: &str, to: &str| {
        pairs
            .iter()
            .find(|p| p["from"] == from && p["to"] == to)
            .unwrap()
    };
    assert_eq!(pair("a", "a")["distance"], 0.0);
    assert_eq!(pair("a", "d")["distance"], 10.0);
    assert!(pair("e", "a")["distance"].is_null());
    assert!(pair("e", "a")["path"].is_null());
}

#[test]
fn test_floyd_warshall_matrix() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    graphq()
        .arg("--graph")
        .arg(&graph)
        .args(["floyd-warshall", "--from", "e", "--directed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-"));
}
