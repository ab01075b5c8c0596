use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for graphq
pub fn graphq() -> Command {
    let mut cmd = cargo_bin_cmd!("graphq");
    // Keep the host environment out of config discovery
    cmd.env_remove("GRAPHQ_CONFIG")
        .env_remove("GRAPHQ_GRAPH")
        .env_remove("RUST_LOG")
        .env_remove("GRAPHQ_LOG");
    cmd
}

/// Five nodes a..e with weighted edges ae:1 ab:3 be:4 bc:5 ce:6 cd:2 de:7
pub const FIVE_NODE_GRAPH: &str = r#"{
  "nodes": [
    { "data": { "id": "a" } },
    { "data": { "id": "b" } },
    { "data": { "id": "c" } },
    { "data": { "id": "d", "label": "goal" } },
    { "data": { "id": "e" } }
  ],
  "edges": [
    { "data": { "id": "ae", "source": "a", "target": "e", "weight": 1 } },
    { "data": { "id": "ab", "source": "a", "target": "b", "weight": 3 } },
    { "data": { "id": "be", "source": "b", "target": "e", "weight": 4 } },
    { "data": { "id": "bc", "source": "b", "target": "c", "weight": 5 } },
    { "data": { "id": "ce", "source": "c", "target": "e", "weight": 6 } },
    { "data": { "id": "cd", "source": "c", "target": "d", "weight": 2 } },
    { "data": { "id": "de", "source": "d", "target": "e", "weight": 7 } }
  ]
}"#;

/// Write the five-node fixture into `dir` and return its path
pub fn write_five_node_graph(dir: &Path) -> PathBuf {
    write_graph(dir, "graph.json", FIVE_NODE_GRAPH)
}

/// Write an arbitrary graph document into `dir`
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Parse the stdout of a successful JSON invocation
pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
