use crate::cli::support::{graphq, json_stdout, write_five_node_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_kruskal_weighted() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    graphq()
        .arg("--graph")
        .arg(&graph)
        .args(["kruskal", "--weight", "weight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ae  a - e"))
        .stdout(predicate::str::contains("total weight: 11"))
        .stdout(predicate::str::contains("5 nodes, 4 edges, 1 tree"));
}

#[test]
fn test_kruskal_json() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    let json = json_stdout(graphq().arg("--graph").arg(&graph).args([
        "--format", "json", "kruskal", "--weight", "weight",
    ]));

    assert_eq!(json["algorithm"], "kruskal");
    assert_eq!(json["total_weight"], 11.0);
    assert_eq!(json["trees"], 1);
    let ids: Vec<&str> = json["edges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["ae", "cd", "ab", "bc"]);
}

#[test]
fn test_kruskal_quiet_drops_summary() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());

    graphq()
        .arg("--graph")
        .arg(&graph)
        .args(["--quiet", "kruskal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total weight: 4"))
        .stdout(predicate::str::contains("tree").not());
}
