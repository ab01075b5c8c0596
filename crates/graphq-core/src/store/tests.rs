use std::fs;

use tempfile::tempdir;

use super::*;

fn five_node_graph() -> Graph {
    let mut graph = Graph::new();
    for id in ["a", "b", "c", "d", "e"] {
        graph.add_node(Node::new(id)).unwrap();
    }
    for (id, w) in [
        ("ae", 1.0),
        ("ab", 3.0),
        ("be", 4.0),
        ("bc", 5.0),
        ("ce", 6.0),
        ("cd", 2.0),
        ("de", 7.0),
    ] {
        let (source, target) = id.split_at(1);
        graph
            .add_edge(Edge::new(id, source, target).weighted(w))
            .unwrap();
    }
    graph
}

#[test]
fn test_duplicate_ids_rejected() {
    let mut graph = Graph::new();
    graph.add_node(Node::new("a")).unwrap();
    let err = graph.add_node(Node::new("a")).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateId { ref id } if id == "a"));

    graph.add_node(Node::new("b")).unwrap();
    let err = graph.add_edge(Edge::new("b", "a", "b")).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateId { .. }));
}

#[test]
fn test_dangling_edge_rejected() {
    let mut graph = Graph::new();
    graph.add_node(Node::new("a")).unwrap();
    let err = graph.add_edge(Edge::new("ax", "a", "x")).unwrap_err();
    assert!(matches!(
        err,
        GraphError::DanglingEdge { ref edge, ref node } if edge == "ax" && node == "x"
    ));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_incident_edges_in_edge_order() {
    let graph = five_node_graph();
    let eles = graph.elements();

    let ids: Vec<&str> = eles.edges_incident_to("e", false).iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec!["ae", "be", "ce", "de"]);

    let outgoing: Vec<&str> = eles.edges_incident_to("b", true).iter().map(|e| e.id()).collect();
    assert_eq!(outgoing, vec!["be", "bc"]);

    assert!(eles.edges_incident_to("e", true).is_empty());
    assert!(eles.edges_incident_to("zz", false).is_empty());
}

#[test]
fn test_self_loop_listed_once() {
    let mut graph = Graph::new();
    graph.add_node(Node::new("a")).unwrap();
    graph.add_edge(Edge::new("aa", "a", "a")).unwrap();
    assert_eq!(graph.elements().edges_incident_to("a", false).len(), 1);
}

#[test]
fn test_filter_builds_sub_collection() {
    let graph = five_node_graph();
    let eles = graph.elements();

    let heavy = eles.filter("edge[weight >= 5]").unwrap();
    assert_eq!(heavy.ids(), vec!["bc", "ce", "de"]);

    let nodes = eles.filter("node").unwrap();
    assert_eq!(nodes.node_count(), 5);
    assert!(nodes.edges().is_empty());
    assert!(nodes.same(&eles.nodes_only()));
}

#[test]
fn test_sub_collection_hides_outside_elements() {
    let graph = five_node_graph();
    let sub = graph.collection(["a", "b"], ["ab", "bc"]);

    assert!(sub.node("c").is_none());
    assert!(sub.edge("ae").is_none());
    assert!(sub.edge("bc").is_some());
    let ids: Vec<&str> = sub.edges_incident_to("a", false).iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec!["ab"]);
    assert!(sub.edges_incident_to("c", false).is_empty());
}

#[test]
fn test_restrict_to_forest() {
    let graph = five_node_graph();
    let eles = graph.elements();
    let forest = SpanningForest {
        nodes: vec!["a".to_string(), "e".to_string()],
        edges: vec!["ae".to_string(), "missing".to_string()],
        total_weight: 1.0,
    };
    let tree = eles.restrict_to(&forest);
    assert_eq!(tree.ids(), vec!["a", "e", "ae"]);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_load_json_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.json");
    fs::write(
        &path,
        r#"{
            "nodes": [{ "data": { "id": "a" } }, { "data": { "id": "b", "label": "B" } }],
            "edges": [{ "data": { "id": "ab", "source": "a", "target": "b", "weight": 2.5 } }]
        }"#,
    )
    .unwrap();

    let graph = Graph::load(&path).unwrap();
    assert_eq!(graph.node_count(), 2);
    let eles = graph.elements();
    assert_eq!(eles.edge("ab").unwrap().number("weight"), Some(2.5));
    assert_eq!(
        eles.node("b").unwrap().data("label"),
        Some(&serde_json::Value::from("B"))
    );
}

#[test]
fn test_load_yaml_and_toml_documents() {
    let dir = tempdir().unwrap();

    let yaml = dir.path().join("graph.yaml");
    fs::write(
        &yaml,
        "nodes:\n  - data: { id: a }\n  - data: { id: b }\nedges:\n  - data: { source: a, target: b }\n",
    )
    .unwrap();
    let graph = Graph::load(&yaml).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.elements().edge("e0").is_some());

    let toml_path = dir.path().join("graph.toml");
    fs::write(
        &toml_path,
        "[[nodes]]\ndata = { id = \"a\" }\n\n[[nodes]]\ndata = { id = \"b\" }\n\n[[edges]]\ndata = { id = \"ab\", source = \"a\", target = \"b\", weight = 4 }\n",
    )
    .unwrap();
    let graph = Graph::load(&toml_path).unwrap();
    assert_eq!(graph.elements().edge("ab").unwrap().number("weight"), Some(4.0));
}

#[test]
fn test_load_rejects_unknown_extension_and_missing_file() {
    let dir = tempdir().unwrap();
    let err = Graph::load(&dir.path().join("graph.csv")).unwrap_err();
    assert!(matches!(err, GraphError::Unsupported { .. }));

    let err = Graph::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, GraphError::ReadFile { .. }));
}

#[test]
fn test_document_requires_ids_and_endpoints() {
    let doc = GraphDocument::parse(r#"{"nodes": [{"data": {}}]}"#, DocumentFormat::Json).unwrap();
    let err = Graph::from_document(doc).unwrap_err();
    assert!(matches!(err, GraphError::InvalidValue { .. }));

    let doc = GraphDocument::parse(
        r#"{"nodes": [{"data": {"id": "a"}}], "edges": [{"data": {"id": "x", "source": "a"}}]}"#,
        DocumentFormat::Json,
    )
    .unwrap();
    let err = Graph::from_document(doc).unwrap_err();
    assert!(matches!(err, GraphError::InvalidValue { .. }));
}

#[test]
fn test_numeric_ids_are_stringified() {
    let doc = GraphDocument::parse(
        r#"{"nodes": [{"data": {"id": 1}}, {"data": {"id": 2}}], "edges": [{"data": {"id": 12, "source": 1, "target": 2}}]}"#,
        DocumentFormat::Json,
    )
    .unwrap();
    let graph = Graph::from_document(doc).unwrap();
    let edge = graph.elements().edge("12").unwrap().clone();
    assert_eq!(edge.endpoints(), ("1", "2"));
}
