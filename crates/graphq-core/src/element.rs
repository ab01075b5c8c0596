//! Graph elements: nodes, edges, and the references callers use to name them

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A graph node: an identity plus free-form data attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    data: Map<String, Value>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: Map::new(),
        }
    }

    pub fn with_data(id: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn data(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Numeric data attribute, if present and numeric
    pub fn number(&self, key: &str) -> Option<f64> {
        self.data.get(key).and_then(Value::as_f64)
    }
}

/// A graph edge: identity, structural direction (source -> target), data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    id: String,
    source: String,
    target: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    data: Map<String, Value>,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            data: Map::new(),
        }
    }

    /// Builder-style helper for attaching a `weight` data attribute
    pub fn weighted(mut self, weight: f64) -> Self {
        self.data.insert("weight".to_string(), Value::from(weight));
        self
    }

    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// `(source, target)` node ids
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.source, &self.target)
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// The endpoint opposite `node_id`
    pub fn opposite(&self, node_id: &str) -> &str {
        if self.source == node_id {
            &self.target
        } else {
            &self.source
        }
    }

    pub fn data(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Numeric data attribute, if present and numeric
    pub fn number(&self, key: &str) -> Option<f64> {
        self.data.get(key).and_then(Value::as_f64)
    }
}

/// A borrowed node or edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element<'a> {
    Node(&'a Node),
    Edge(&'a Edge),
}

impl<'a> Element<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Element::Node(node) => node.id(),
            Element::Edge(edge) => edge.id(),
        }
    }

    pub fn as_node(&self) -> Option<&'a Node> {
        match self {
            Element::Node(node) => Some(node),
            Element::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&'a Edge> {
        match self {
            Element::Edge(edge) => Some(edge),
            Element::Node(_) => None,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Element::Node(_))
    }

    /// Attribute lookup used by selectors; `id`, `source` and `target`
    /// resolve to the element's structural fields.
    pub fn attribute(&self, key: &str) -> Option<Value> {
        match (self, key) {
            (_, "id") => Some(Value::String(self.id().to_string())),
            (Element::Edge(edge), "source") => Some(Value::String(edge.source().to_string())),
            (Element::Edge(edge), "target") => Some(Value::String(edge.target().to_string())),
            (Element::Node(node), _) => node.data(key).cloned(),
            (Element::Edge(edge), _) => edge.data(key).cloned(),
        }
    }
}

/// How a caller names a root, goal, or endpoint node
#[derive(Debug, Clone, PartialEq)]
pub enum ElementRef {
    /// A node handle, matched by id against the queried collection
    ByHandle(Node),
    /// A bare node id
    ById(String),
    /// A selector string; the first matching node is used
    BySelector(String),
}

impl ElementRef {
    /// Interpret a user-supplied string as either a selector or a bare id.
    ///
    /// Strings that start with `#`, `[`, `:` or an element kind keyword
    /// followed by a selector clause are selectors; everything else is an id.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let looks_like_selector = trimmed.starts_with(['#', '[', ':', '*'])
            || trimmed.contains(',')
            || ["node", "edge"].iter().any(|kind| {
                trimmed == *kind
                    || trimmed
                        .strip_prefix(kind)
                        .is_some_and(|rest| rest.starts_with(['#', '[', ':']))
            });

        if looks_like_selector {
            ElementRef::BySelector(trimmed.to_string())
        } else {
            ElementRef::ById(trimmed.to_string())
        }
    }
}

impl From<&str> for ElementRef {
    fn from(value: &str) -> Self {
        ElementRef::parse(value)
    }
}

impl From<String> for ElementRef {
    fn from(value: String) -> Self {
        ElementRef::parse(&value)
    }
}

impl From<&Node> for ElementRef {
    fn from(node: &Node) -> Self {
        ElementRef::ByHandle(node.clone())
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRef::ByHandle(node) => write!(f, "{}", node.id()),
            ElementRef::ById(id) => write!(f, "{id}"),
            ElementRef::BySelector(selector) => write!(f, "{selector}"),
        }
    }
}
