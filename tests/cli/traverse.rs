use crate::cli::support::{graphq, json_stdout, write_five_node_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_bfs_reports_depths() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    let json = json_stdout(
        graphq()
            .arg("--graph")
            .arg(&graph)
            .args(["--format", "json", "bfs", "a"]),
    );

    assert_eq!(json["algorithm"], "bfs");
    assert_eq!(json["root"], "a");
    let visited = json["visited"].as_array().unwrap();
    assert_eq!(visited.len(), 5);
    assert_eq!(visited[0]["node"], "a");
    assert_eq!(visited[0]["depth"], 0);
    for entry in visited {
        let expected = match entry["node"].as_str().unwrap() {
            "a" => 0,
            "b" | "e" => 1,
            _ => 2,
        };
        assert_eq!(entry["depth"], expected, "depth of {}", entry["node"]);
    }
    assert!(json["found"].is_null());
}

#[test]
fn test_bfs_human_output() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    graphq()
        .arg("--graph")
        .arg(&graph)
        .args(["bfs", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs from a"))
        .stdout(predicate::str::contains("(depth 2)"))
        .stdout(predicate::str::contains("path: a"));
}

#[test]
fn test_dfs_directed_stays_on_outgoing_edges() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    let json = json_stdout(
        graphq()
            .arg("--graph")
            .arg(&graph)
            .args(["--format", "json", "dfs", "d", "--directed"]),
    );

    // d only has the outgoing edge de
    let path = json["path"].as_array().unwrap();
    let ids: Vec<&str> = path.iter().map(|e| e["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["d", "de", "e"]);
    assert!(json["visited"][0].get("depth").is_none());
}

#[test]
fn test_find_stops_at_matching_node() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    let json = json_stdout(graphq().arg("--graph").arg(&graph).args([
        "--format",
        "json",
        "bfs",
        "a",
        "--find",
        "[label = \"goal\"]",
    ]));
    assert_eq!(json["found"], "d");

    let path = json["path"].as_array().unwrap();
    assert_eq!(path.last().unwrap()["id"], "d");

    graphq()
        .arg("--graph")
        .arg(&graph)
        .args(["dfs", "a", "--find", "#c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found: c"));
}

#[test]
fn test_find_without_match() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    graphq()
        .arg("--graph")
        .arg(&graph)
        .args(["bfs", "a", "--find", "#zz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no node matching #zz reached"));
}
