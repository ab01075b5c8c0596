//! Graph documents: the on-disk element lists a [`Graph`](super::Graph) is built from
//!
//! Documents follow the familiar elements layout:
//!
//! ```json
//! {
//!   "nodes": [{ "data": { "id": "a" } }],
//!   "edges": [{ "data": { "id": "ab", "source": "a", "target": "b", "weight": 3 } }]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::element::{Edge, Node};
use crate::error::{GraphError, Result};

/// Serialized graph description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<ElementDefinition>,
    #[serde(default)]
    pub edges: Vec<ElementDefinition>,
}

/// One node or edge entry: a `data` map holding `id` (plus `source` and
/// `target` for edges) and arbitrary attributes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementDefinition {
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// Supported document encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "toml" => Ok(DocumentFormat::Toml),
            other => crate::bail_unsupported!(
                "graph document extension",
                other,
                "json, yaml, yml, toml"
            ),
        }
    }
}

impl GraphDocument {
    /// Read and parse a document from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|source| GraphError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, format)
    }

    /// Parse document text in the given format
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        let document: Self = match format {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
            DocumentFormat::Toml => toml::from_str(content)?,
        };
        Ok(document)
    }
}

impl ElementDefinition {
    fn take_id(data: &mut Map<String, Value>, key: &str) -> Option<String> {
        match data.remove(key)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Convert to a node; `data.id` is required
    pub fn into_node(self) -> Result<Node> {
        let mut data = self.data;
        let Some(id) = Self::take_id(&mut data, "id") else {
            crate::bail_invalid!("node definition", "missing data.id");
        };
        Ok(Node::with_data(id, data))
    }

    /// Convert to an edge; `data.source` and `data.target` are required and a
    /// missing `data.id` defaults to `e{position}`
    pub fn into_edge(self, position: usize) -> Result<Edge> {
        let mut data = self.data;
        let id = Self::take_id(&mut data, "id").unwrap_or_else(|| format!("e{position}"));
        let Some(source) = Self::take_id(&mut data, "source") else {
            crate::bail_invalid!("edge definition", format!("{id} is missing data.source"));
        };
        let Some(target) = Self::take_id(&mut data, "target") else {
            crate::bail_invalid!("edge definition", format!("{id} is missing data.target"));
        };
        Ok(Edge::new(id, source, target).with_data(data))
    }
}
