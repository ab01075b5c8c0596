use crate::cli::support::{graphq, json_stdout, write_five_node_graph, write_graph};
use tempfile::tempdir;

#[test]
fn test_config_defaults_apply() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());
    let config = write_graph(
        dir.path(),
        "graphq.toml",
        "[defaults]\ndirected = true\nweight_attribute = \"weight\"\n",
    );

    let json = json_stdout(
        graphq()
            .arg("--config")
            .arg(&config)
            .arg("--graph")
            .arg(&graph)
            .args(["--format", "json", "dijkstra", "a", "--to", "d"]),
    );
    assert_eq!(json["directed"], true);
    assert_eq!(json["weight"], "weight");
    assert_eq!(json["distances"][0]["distance"], 10.0);
}

#[test]
fn test_flag_overrides_config_weight() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());
    let config = write_graph(
        dir.path(),
        "graphq.toml",
        "[defaults]\nweight_attribute = \"cost\"\n",
    );

    // No edge carries `cost`, so the configured attribute is not a usable weight
    graphq()
        .arg("--config")
        .arg(&config)
        .arg("--graph")
        .arg(&graph)
        .arg("kruskal")
        .assert()
        .code(3);

    let json = json_stdout(
        graphq()
            .arg("--config")
            .arg(&config)
            .arg("--graph")
            .arg(&graph)
            .args(["--format", "json", "kruskal", "--weight", "weight"]),
    );
    assert_eq!(json["total_weight"], 11.0);
}

#[test]
fn test_config_discovered_from_env() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());
    let config = write_graph(dir.path(), "custom.toml", "[defaults]\ndirected = true\n");

    let json = json_stdout(
        graphq()
            .env("GRAPHQ_CONFIG", &config)
            .env("GRAPHQ_GRAPH", &graph)
            .args(["--format", "json", "bfs", "e"]),
    );
    assert_eq!(json["directed"], true);
    assert_eq!(json["visited"].as_array().unwrap().len(), 1);
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_five_node_graph(dir.path());
    let config = write_graph(dir.path(), "graphq.toml", "[logging]\nlevel = \"loud\"\n");

    graphq()
        .arg("--config")
        .arg(&config)
        .arg("--graph")
        .arg(&graph)
        .args(["bfs", "a"])
        .assert()
        .code(2);
}
