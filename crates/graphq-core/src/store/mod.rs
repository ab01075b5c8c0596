//! In-memory element store
//!
//! [`Graph`] owns nodes and edges and keeps per-node incident edge lists.
//! [`Collection`] is an ordered subset view over a graph and is what the
//! algorithms query through [`ElementCollection`].

pub mod document;

use std::collections::HashMap;
use std::path::Path;

use crate::element::{Edge, Element, Node};
use crate::error::{GraphError, Result};
use crate::graph::types::SpanningForest;
use crate::graph::ElementCollection;
pub use document::{DocumentFormat, ElementDefinition, GraphDocument};

/// The element store
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_lookup: HashMap<String, usize>,
    edge_lookup: HashMap<String, usize>,
    /// Incident edge positions per node, in edge insertion order
    incident: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a graph document from disk (format chosen by extension)
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let document = GraphDocument::from_path(path)?;
        let graph = Self::from_document(document)?;
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph_loaded"
        );
        Ok(graph)
    }

    /// Build a graph from a parsed document, validating ids and endpoints
    pub fn from_document(document: GraphDocument) -> Result<Self> {
        let mut graph = Graph::new();
        for definition in document.nodes {
            graph.add_node(definition.into_node()?)?;
        }
        for (position, definition) in document.edges.into_iter().enumerate() {
            graph.add_edge(definition.into_edge(position)?)?;
        }
        Ok(graph)
    }

    /// Add a node; ids are unique across nodes and edges
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        self.ensure_unique(node.id())?;
        self.node_lookup
            .insert(node.id().to_string(), self.nodes.len());
        self.nodes.push(node);
        self.incident.push(Vec::new());
        Ok(())
    }

    /// Add an edge between two existing nodes
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        self.ensure_unique(edge.id())?;
        let (source, target) = edge.endpoints();
        let source_pos = self.node_position(edge.id(), source)?;
        let target_pos = self.node_position(edge.id(), target)?;

        let position = self.edges.len();
        self.incident[source_pos].push(position);
        if target_pos != source_pos {
            self.incident[target_pos].push(position);
        }
        self.edge_lookup.insert(edge.id().to_string(), position);
        self.edges.push(edge);
        Ok(())
    }

    fn ensure_unique(&self, id: &str) -> Result<()> {
        if self.node_lookup.contains_key(id) || self.edge_lookup.contains_key(id) {
            return Err(GraphError::DuplicateId { id: id.to_string() });
        }
        Ok(())
    }

    fn node_position(&self, edge_id: &str, node_id: &str) -> Result<usize> {
        self.node_lookup
            .get(node_id)
            .copied()
            .ok_or_else(|| GraphError::DanglingEdge {
                edge: edge_id.to_string(),
                node: node_id.to_string(),
            })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// A collection over every element of the graph
    pub fn elements(&self) -> Collection<'_> {
        Collection::from_positions(
            self,
            (0..self.nodes.len()).collect(),
            (0..self.edges.len()).collect(),
        )
    }

    /// A collection over the given node and edge ids; unknown ids are skipped
    pub fn collection<'g, I, J>(&'g self, node_ids: I, edge_ids: J) -> Collection<'g>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
    {
        let nodes = node_ids
            .into_iter()
            .filter_map(|id| self.node_lookup.get(id.as_ref()).copied())
            .collect();
        let edges = edge_ids
            .into_iter()
            .filter_map(|id| self.edge_lookup.get(id.as_ref()).copied())
            .collect();
        Collection::from_positions(self, nodes, edges)
    }
}

/// An ordered subset of a graph's elements
#[derive(Debug, Clone)]
pub struct Collection<'g> {
    graph: &'g Graph,
    nodes: Vec<usize>,
    edges: Vec<usize>,
    node_member: Vec<bool>,
    edge_member: Vec<bool>,
}

impl<'g> Collection<'g> {
    fn from_positions(graph: &'g Graph, mut nodes: Vec<usize>, mut edges: Vec<usize>) -> Self {
        let mut node_member = vec![false; graph.nodes.len()];
        let mut edge_member = vec![false; graph.edges.len()];
        nodes.retain(|&pos| !std::mem::replace(&mut node_member[pos], true));
        edges.retain(|&pos| !std::mem::replace(&mut edge_member[pos], true));
        nodes.sort_unstable();
        edges.sort_unstable();

        Self {
            graph,
            nodes,
            edges,
            node_member,
            edge_member,
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Number of elements (nodes and edges)
    pub fn len(&self) -> usize {
        self.nodes.len() + self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Sub-collection of the elements matching `selector`
    pub fn filter(&self, selector: &str) -> Result<Collection<'g>> {
        let (nodes, edges) = self.split_positions(self.filter_by_selector(selector)?);
        Ok(Collection::from_positions(self.graph, nodes, edges))
    }

    /// Sub-collection holding only this collection's nodes
    pub fn nodes_only(&self) -> Collection<'g> {
        Collection::from_positions(self.graph, self.nodes.clone(), Vec::new())
    }

    /// Sub-collection holding exactly the elements of a spanning forest
    pub fn restrict_to(&self, forest: &SpanningForest) -> Collection<'g> {
        let nodes = forest
            .nodes
            .iter()
            .filter_map(|id| self.graph.node_lookup.get(id).copied())
            .filter(|&pos| self.node_member[pos])
            .collect();
        let edges = forest
            .edges
            .iter()
            .filter_map(|id| self.graph.edge_lookup.get(id).copied())
            .filter(|&pos| self.edge_member[pos])
            .collect();
        Collection::from_positions(self.graph, nodes, edges)
    }

    /// Same nodes and edges, regardless of order
    pub fn same(&self, other: &Collection<'_>) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }

    /// Ids of every element: nodes first, then edges
    pub fn ids(&self) -> Vec<&'g str> {
        let nodes = self.nodes.iter().map(|&pos| self.graph.nodes[pos].id());
        let edges = self.edges.iter().map(|&pos| self.graph.edges[pos].id());
        nodes.chain(edges).collect()
    }

    fn split_positions(&self, elements: Vec<Element<'_>>) -> (Vec<usize>, Vec<usize>) {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        for element in elements {
            match element {
                Element::Node(node) => nodes.extend(self.graph.node_lookup.get(node.id())),
                Element::Edge(edge) => edges.extend(self.graph.edge_lookup.get(edge.id())),
            }
        }
        (nodes, edges)
    }
}

impl ElementCollection for Collection<'_> {
    fn nodes(&self) -> Vec<&Node> {
        self.nodes.iter().map(|&pos| &self.graph.nodes[pos]).collect()
    }

    fn edges(&self) -> Vec<&Edge> {
        self.edges.iter().map(|&pos| &self.graph.edges[pos]).collect()
    }

    fn node(&self, id: &str) -> Option<&Node> {
        self.graph
            .node_lookup
            .get(id)
            .filter(|&&pos| self.node_member[pos])
            .map(|&pos| &self.graph.nodes[pos])
    }

    fn edge(&self, id: &str) -> Option<&Edge> {
        self.graph
            .edge_lookup
            .get(id)
            .filter(|&&pos| self.edge_member[pos])
            .map(|&pos| &self.graph.edges[pos])
    }

    fn edges_incident_to(&self, node_id: &str, only_outgoing: bool) -> Vec<&Edge> {
        let Some(&node_pos) = self.graph.node_lookup.get(node_id) else {
            return Vec::new();
        };
        if !self.node_member[node_pos] {
            return Vec::new();
        }

        self.graph.incident[node_pos]
            .iter()
            .filter(|&&pos| self.edge_member[pos])
            .map(|&pos| &self.graph.edges[pos])
            .filter(|edge| !only_outgoing || edge.source() == node_id)
            .collect()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests;
