use crate::cli::support::{graphq, json_stdout, write_five_node_graph};
use predicates::prelude::*;
use tempfile::tempdir;

fn distance_of<'a>(json: &'a serde_json::Value, node: &str) -> &'a serde_json::Value {
    json["distances"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["node"] == node)
        .map(|entry| &entry["distance"])
        .unwrap()
}

#[test]
fn test_dijkstra_weighted() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    let json = json_stdout(graphq().arg("--graph").arg(&graph).args([
        "--format", "json", "dijkstra", "a", "--weight", "weight",
    ]));

    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["reachable"], 5);
    assert_eq!(distance_of(&json, "a"), 0.0);
    assert_eq!(distance_of(&json, "b"), 3.0);
    assert_eq!(distance_of(&json, "c"), 7.0);
    assert_eq!(distance_of(&json, "d"), 8.0);
    assert_eq!(distance_of(&json, "e"), 1.0);
}

#[test]
fn test_dijkstra_unweighted_counts_hops() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    let json = json_stdout(
        graphq()
            .arg("--graph")
            .arg(&graph)
            .args(["--format", "json", "dijkstra", "a", "--to", "d"]),
    );

    let distances = json["distances"].as_array().unwrap();
    assert_eq!(distances.len(), 1);
    assert_eq!(distances[0]["distance"], 2.0);
}

#[test]
fn test_dijkstra_human_path() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    graphq()
        .arg("--graph")
        .arg(&graph)
        .args(["dijkstra", "a", "--to", "d", "--weight", "weight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dijkstra from a"))
        .stdout(predicate::str::contains("a -[ae]- e -[de]- d"));
}

#[test]
fn test_dijkstra_directed_unreachable() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    let json = json_stdout(graphq().arg("--graph").arg(&graph).args([
        "--format",
        "json",
        "dijkstra",
        "e",
        "--directed",
    ]));
    assert_eq!(json["reachable"], 1);
    assert!(distance_of(&json, "a").is_null());

    graphq()
        .arg("--graph")
        .arg(&graph)
        .args(["dijkstra", "e", "--directed", "--to", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unreachable"));
}

#[test]
fn test_bellman_ford_matches_dijkstra() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    let args = ["a", "--weight", "weight", "--directed"];
    let dijkstra = json_stdout(
        graphq()
            .arg("--graph")
            .arg(&graph)
            .args(["--format", "json", "dijkstra"])
            .args(args),
    );
    let bellman_ford = json_stdout(
        graphq()
            .arg("--graph")
            .arg(&graph)
            .args(["--format", "json", "bellman-ford"])
            .args(args),
    );

    assert_eq!(bellman_ford["algorithm"], "bellman-ford");
    assert_eq!(dijkstra["distances"], bellman_ford["distances"]);
    assert_eq!(distance_of(&bellman_ford, "d"), 10.0);
}

#[test]
fn test_astar_weighted() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    let json = json_stdout(graphq().arg("--graph").arg(&graph).args([
        "--format", "json", "astar", "a", "d", "--weight", "weight",
    ]));
    assert_eq!(json["algorithm"], "astar");
    assert_eq!(json["found"], true);
    assert_eq!(json["distance"], 8.0);

    let json = json_stdout(graphq().arg("--graph").arg(&graph).args([
        "--format",
        "json",
        "astar",
        "a",
        "d",
        "--weight",
        "weight",
        "--directed",
    ]));
    assert_eq!(json["distance"], 10.0);
    let ids: Vec<&str> = json["path"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["a", "ab", "b", "bc", "c", "cd", "d"]);
}

#[test]
fn test_astar_no_path() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    graphq()
        .arg("--graph")
        .arg(&graph)
        .args(["astar", "c", "a", "--directed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from c to a"))
        .stdout(predicate::str::contains("steps:"));

    let json = json_stdout(graphq().arg("--graph").arg(&graph).args([
        "--format",
        "json",
        "astar",
        "c",
        "a",
        "--directed",
    ]));
    assert_eq!(json["found"], false);
    assert!(json["distance"].is_null());
    assert!(json["path"].is_null());
}
