use std::collections::HashMap;

use crate::element::{Edge, Element, ElementRef, Node};
use crate::error::{GraphError, Result};
use crate::graph::collection::resolve_node;
use crate::graph::types::{Path, PathElement, SearchOptions};
use crate::graph::ElementCollection;
use crate::selector::Selector;

/// Dense zero-based positions for the nodes of one query.
///
/// Rebuilt on every call; positions follow collection node order. Keeps a
/// snapshot of each node so results can resolve ids and selectors after
/// the collection borrow has ended.
#[derive(Debug, Clone, Default)]
pub struct NodeIndex {
    nodes: Vec<Node>,
    positions: HashMap<String, usize>,
}

impl NodeIndex {
    pub fn build<C>(collection: &C) -> Self
    where
        C: ElementCollection + ?Sized,
    {
        let nodes: Vec<Node> = collection.nodes().into_iter().cloned().collect();
        let positions = nodes
            .iter()
            .enumerate()
            .map(|(pos, node)| (node.id().to_string(), pos))
            .collect();
        Self { nodes, positions }
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn id(&self, position: usize) -> &str {
        self.nodes[position].id()
    }

    /// Position of the node a reference names; a selector takes its first
    /// matching node in index order
    pub fn resolve(&self, reference: &ElementRef) -> Result<usize> {
        let position = match reference {
            ElementRef::ByHandle(node) => self.position(node.id()),
            ElementRef::ById(id) => self.position(id),
            ElementRef::BySelector(selector) => {
                let selector = Selector::parse(selector)?;
                self.nodes
                    .iter()
                    .position(|node| selector.matches(&Element::Node(node)))
            }
        };
        position.ok_or_else(|| GraphError::unresolvable(reference.to_string()))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// How a node was reached: the previous node and the edge taken from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predecessor {
    pub node: usize,
    pub edge: String,
}

/// Resolve the mandatory `root` option against the queried collection
pub fn resolve_root<'c, C>(collection: &'c C, opts: &SearchOptions<'_>) -> Result<&'c Node>
where
    C: ElementCollection + ?Sized,
{
    let root = crate::require_param!(opts.root.as_ref(), "root");
    resolve_node(collection, root)
}

/// Evaluate the weight callback for one edge, rejecting non-finite results
pub fn checked_weight(opts: &SearchOptions<'_>, edge: &Edge) -> Result<f64> {
    let weight = opts.weight_of(edge);
    if !weight.is_finite() {
        return Err(GraphError::InvalidWeight {
            edge: edge.id().to_string(),
            weight,
        });
    }
    Ok(weight)
}

/// Weight of every usable edge, keyed by edge id.
///
/// Evaluated before a search starts so an invalid weight fails the query
/// even when the search would never reach that edge.
pub fn weight_table<'c, C>(collection: &'c C, opts: &SearchOptions<'_>) -> Result<HashMap<&'c str, f64>>
where
    C: ElementCollection + ?Sized,
{
    usable_edges(collection)
        .into_iter()
        .map(|edge| Ok((edge.id(), checked_weight(opts, edge)?)))
        .collect()
}

/// Looked-up weight for an edge, evaluating it when the table lacks it
pub fn table_weight(
    weights: &HashMap<&str, f64>,
    opts: &SearchOptions<'_>,
    edge: &Edge,
) -> Result<f64> {
    match weights.get(edge.id()) {
        Some(&weight) => Ok(weight),
        None => checked_weight(opts, edge),
    }
}

/// Edges an algorithm may use: no self-loops, both endpoints in the collection
pub fn usable_edges<C>(collection: &C) -> Vec<&Edge>
where
    C: ElementCollection + ?Sized,
{
    collection
        .edges()
        .into_iter()
        .filter(|edge| {
            !edge.is_loop()
                && collection.contains_node(edge.source())
                && collection.contains_node(edge.target())
        })
        .collect()
}

/// Edges leaving `node_id` paired with the neighbor each one leads to.
///
/// Undirected queries follow every incident edge; directed queries only
/// those whose source is `node_id`. Self-loops and edges leading outside the
/// collection are skipped.
pub fn neighbor_edges<'c, C>(
    collection: &'c C,
    node_id: &str,
    directed: bool,
) -> Vec<(&'c Edge, &'c str)>
where
    C: ElementCollection + ?Sized,
{
    collection
        .edges_incident_to(node_id, directed)
        .into_iter()
        .filter(|edge| !edge.is_loop())
        .filter_map(|edge| {
            let neighbor = collection.node(edge.opposite(node_id))?;
            Some((edge, neighbor.id()))
        })
        .collect()
}

/// Walk a predecessor table from `target` back to `source`.
///
/// Returns `None` when the chain breaks (no path) or does not terminate.
pub fn walk_predecessors(
    index: &NodeIndex,
    predecessors: &[Option<Predecessor>],
    source: usize,
    target: usize,
) -> Option<Path> {
    let mut elements = vec![PathElement::Node(index.id(target).to_string())];
    let mut current = target;
    let mut remaining = predecessors.len();

    while current != source {
        let step = predecessors[current].as_ref()?;
        remaining = remaining.checked_sub(1)?;
        elements.push(PathElement::Edge(step.edge.clone()));
        elements.push(PathElement::Node(index.id(step.node).to_string()));
        current = step.node;
    }

    elements.reverse();
    Some(Path::from_elements(elements))
}

/// Single-source result shared by Dijkstra and Bellman-Ford: distance and
/// predecessor tables over a [`NodeIndex`].
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    root: usize,
    index: NodeIndex,
    distances: Vec<f64>,
    predecessors: Vec<Option<Predecessor>>,
}

impl ShortestPaths {
    pub(crate) fn new(
        root: usize,
        index: NodeIndex,
        distances: Vec<f64>,
        predecessors: Vec<Option<Predecessor>>,
    ) -> Self {
        Self {
            root,
            index,
            distances,
            predecessors,
        }
    }

    pub fn root(&self) -> &str {
        self.index.id(self.root)
    }

    /// Shortest distance from the root to a node named by id, handle or
    /// selector; `INFINITY` when unreachable
    pub fn distance_to(&self, target: impl Into<ElementRef>) -> Result<f64> {
        let target = self.index.resolve(&target.into())?;
        Ok(self.distances[target])
    }

    /// Shortest path from the root as alternating nodes and edges; `None`
    /// when unreachable
    pub fn path_to(&self, target: impl Into<ElementRef>) -> Result<Option<Path>> {
        let target = self.index.resolve(&target.into())?;
        if !self.distances[target].is_finite() {
            return Ok(None);
        }
        Ok(walk_predecessors(
            &self.index,
            &self.predecessors,
            self.root,
            target,
        ))
    }

    /// Every node with its distance, in collection order
    pub fn distances(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        (0..self.index.len()).map(|pos| (self.index.id(pos), self.distances[pos]))
    }

    /// Nodes with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }
}
