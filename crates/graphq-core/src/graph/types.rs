use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::element::{Edge, ElementRef, Node};

/// Edge cost callback
pub type WeightFn<'a> = Box<dyn Fn(&Edge) -> f64 + 'a>;

/// Node heuristic callback (estimated remaining cost to the goal)
pub type HeuristicFn<'a> = Box<dyn Fn(&Node) -> f64 + 'a>;

/// Default weight: every edge costs 1
pub fn unit_weight(_edge: &Edge) -> f64 {
    1.0
}

/// Default heuristic: constant zero, which reduces A* to Dijkstra
pub fn zero_heuristic(_node: &Node) -> f64 {
    0.0
}

/// Weight read from a numeric data attribute.
///
/// Edges without the attribute (or with a non-numeric value) weigh `NaN`,
/// which the algorithms reject as an invalid weight.
pub fn attribute_weight<'a>(attribute: impl Into<String>) -> WeightFn<'a> {
    let attribute = attribute.into();
    Box::new(move |edge: &Edge| edge.number(&attribute).unwrap_or(f64::NAN))
}

/// Heuristic read from a numeric node data attribute; missing values count as 0
pub fn attribute_heuristic<'a>(attribute: impl Into<String>) -> HeuristicFn<'a> {
    let attribute = attribute.into();
    Box::new(move |node: &Node| node.number(&attribute).unwrap_or(0.0))
}

/// Options shared by the shortest-path and spanning-tree algorithms
#[derive(Default)]
pub struct SearchOptions<'a> {
    /// Starting node (single-source algorithms)
    pub root: Option<ElementRef>,
    /// Target node (required by A*)
    pub goal: Option<ElementRef>,
    /// Edge cost; `unit_weight` when absent
    pub weight: Option<WeightFn<'a>>,
    /// Node heuristic for A*; `zero_heuristic` when absent
    pub heuristic: Option<HeuristicFn<'a>>,
    /// Follow edges only from source to target
    pub directed: bool,
    /// Emit step-by-step debug events
    pub debug: bool,
}

impl<'a> SearchOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_root(root: impl Into<ElementRef>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::default()
        }
    }

    pub fn root(mut self, root: impl Into<ElementRef>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn goal(mut self, goal: impl Into<ElementRef>) -> Self {
        self.goal = Some(goal.into());
        self
    }

    pub fn weight(mut self, weight: impl Fn(&Edge) -> f64 + 'a) -> Self {
        self.weight = Some(Box::new(weight));
        self
    }

    pub fn heuristic(mut self, heuristic: impl Fn(&Node) -> f64 + 'a) -> Self {
        self.heuristic = Some(Box::new(heuristic));
        self
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Evaluate the configured weight (or the unit default) for one edge
    pub fn weight_of(&self, edge: &Edge) -> f64 {
        match &self.weight {
            Some(weight) => weight(edge),
            None => unit_weight(edge),
        }
    }

    /// Evaluate the configured heuristic (or the zero default) for one node
    pub fn heuristic_of(&self, node: &Node) -> f64 {
        match &self.heuristic {
            Some(heuristic) => heuristic(node),
            None => zero_heuristic(node),
        }
    }
}

impl fmt::Debug for SearchOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchOptions")
            .field("root", &self.root)
            .field("goal", &self.goal)
            .field("weight", &self.weight.as_ref().map(|_| "<fn>"))
            .field("heuristic", &self.heuristic.as_ref().map(|_| "<fn>"))
            .field("directed", &self.directed)
            .field("debug", &self.debug)
            .finish()
    }
}

/// Options for BFS / DFS traversal
#[derive(Debug, Clone, Default)]
pub struct TraversalOptions {
    pub root: Option<ElementRef>,
    pub directed: bool,
    pub debug: bool,
}

impl TraversalOptions {
    pub fn from_root(root: impl Into<ElementRef>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::default()
        }
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Position information handed to a traversal visit callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    /// Zero-based visit order
    pub index: usize,
    /// Hop count from the root (BFS only)
    pub depth: Option<usize>,
}

/// What a traversal should do after visiting a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitAction {
    #[default]
    Continue,
    /// Stop immediately
    Stop,
    /// Stop immediately and report the visited node as `found`
    Found,
}

/// One step of a path: a node, or the edge leading to the next node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "group", content = "id", rename_all = "lowercase")]
pub enum PathElement {
    Node(String),
    Edge(String),
}

impl PathElement {
    pub fn id(&self) -> &str {
        match self {
            PathElement::Node(id) | PathElement::Edge(id) => id,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, PathElement::Node(_))
    }
}

/// Alternating node/edge sequence, starting and ending with a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    pub(crate) fn from_elements(elements: Vec<PathElement>) -> Self {
        Self { elements }
    }

    /// Single-node path
    pub(crate) fn singleton(node: &str) -> Self {
        Self {
            elements: vec![PathElement::Node(node.to_string())],
        }
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Node ids in path order
    pub fn node_ids(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|e| e.is_node())
            .map(PathElement::id)
            .collect()
    }

    /// Edge ids in path order
    pub fn edge_ids(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|e| !e.is_node())
            .map(PathElement::id)
            .collect()
    }

    /// Number of elements (nodes and edges)
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.elements.len() / 2
    }
}

/// BFS / DFS outcome
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TraversalResult {
    pub root: String,
    /// Visited nodes interleaved with the edges that discovered them
    pub path: Path,
    /// Hop count from the root per node id (BFS only)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub depths: BTreeMap<String, usize>,
    /// Node for which the visit callback returned [`VisitAction::Found`]
    pub found: Option<String>,
}

impl TraversalResult {
    pub fn depth_of(&self, node_id: &str) -> Option<usize> {
        self.depths.get(node_id).copied()
    }
}

/// A* outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AStarResult {
    pub found: bool,
    pub distance: Option<f64>,
    pub path: Option<Path>,
    /// Main-loop iterations performed
    pub steps: usize,
}

/// Kruskal outcome: the ids making up a minimum spanning forest
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpanningForest {
    pub nodes: Vec<String>,
    pub edges: Vec<String>,
    pub total_weight: f64,
}
