//! Selector strings for filtering element collections
//!
//! Grammar (comma-separated groups, an element matches if any group does):
//! - optional kind: `node`, `edge`, or `*`
//! - optional `#id`
//! - any number of attribute clauses: `[attr]`, `[attr = value]`, with
//!   operators `=`, `!=`, `>`, `>=`, `<`, `<=`
//! - pseudo-classes `:loop` and `:simple` (edges only)

use regex::Regex;
use serde_json::Value;

use crate::element::Element;
use crate::error::{GraphError, Result};
use crate::graph::ElementCollection;

const ATTRIBUTE_CLAUSE: &str =
    r#"^\[\s*([A-Za-z_][\w.-]*)\s*(?:(!=|>=|<=|=|>|<)\s*("[^"]*"|'[^']*'|[^\]]*?))?\s*\]"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Node,
    Edge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Eq,
    NotEq,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Operator {
    fn parse(op: &str) -> Option<Self> {
        match op {
            "=" => Some(Operator::Eq),
            "!=" => Some(Operator::NotEq),
            ">" => Some(Operator::Gt),
            ">=" => Some(Operator::Ge),
            "<" => Some(Operator::Lt),
            "<=" => Some(Operator::Le),
            _ => None,
        }
    }

    fn holds(self, ordering: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::*;
        match self {
            Operator::Eq => ordering == Equal,
            Operator::NotEq => ordering != Equal,
            Operator::Gt => ordering == Greater,
            Operator::Ge => ordering != Less,
            Operator::Lt => ordering == Less,
            Operator::Le => ordering != Greater,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct AttributeClause {
    name: String,
    comparison: Option<(Operator, String)>,
}

impl AttributeClause {
    fn matches(&self, element: &Element<'_>) -> bool {
        let value = element.attribute(&self.name).filter(|v| !v.is_null());
        let Some((op, literal)) = &self.comparison else {
            return value.is_some();
        };
        let Some(value) = value else {
            return *op == Operator::NotEq;
        };

        let ordering = match (&value, literal.parse::<f64>()) {
            (Value::Number(number), Ok(expected)) => match number.as_f64() {
                Some(actual) => actual.partial_cmp(&expected),
                None => None,
            },
            (Value::String(actual), _) => Some(actual.as_str().cmp(literal.as_str())),
            (other, _) => Some(other.to_string().as_str().cmp(literal.as_str())),
        };

        ordering.is_some_and(|ordering| op.holds(ordering))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pseudo {
    Loop,
    Simple,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Group {
    kind: Option<Kind>,
    id: Option<String>,
    attributes: Vec<AttributeClause>,
    pseudo: Vec<Pseudo>,
}

impl Group {
    fn matches(&self, element: &Element<'_>) -> bool {
        let kind_ok = match (self.kind, element) {
            (None, _) => true,
            (Some(Kind::Node), Element::Node(_)) | (Some(Kind::Edge), Element::Edge(_)) => true,
            _ => false,
        };
        if !kind_ok {
            return false;
        }
        if self.id.as_deref().is_some_and(|id| id != element.id()) {
            return false;
        }
        let pseudo_ok = self.pseudo.iter().all(|pseudo| match (pseudo, element) {
            (Pseudo::Loop, Element::Edge(edge)) => edge.is_loop(),
            (Pseudo::Simple, Element::Edge(edge)) => !edge.is_loop(),
            (_, Element::Node(_)) => false,
        });
        pseudo_ok && self.attributes.iter().all(|clause| clause.matches(element))
    }
}

/// A parsed selector
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    source: String,
    groups: Vec<Group>,
}

impl Selector {
    /// Parse a selector string
    pub fn parse(selector: &str) -> Result<Self> {
        let attribute_re = Regex::new(ATTRIBUTE_CLAUSE)
            .map_err(|e| GraphError::Other(format!("failed to compile selector regex: {e}")))?;

        let mut groups = Vec::new();
        for raw in selector.split(',') {
            groups.push(parse_group(selector, raw.trim(), &attribute_re)?);
        }

        Ok(Self {
            source: selector.to_string(),
            groups,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, element: &Element<'_>) -> bool {
        self.groups.iter().any(|group| group.matches(element))
    }

    /// Select matching elements of a collection: nodes first, then edges,
    /// each in collection order.
    pub fn filter<'a, C>(&self, collection: &'a C) -> Vec<Element<'a>>
    where
        C: ElementCollection + ?Sized,
    {
        let nodes = collection.nodes().into_iter().map(Element::Node);
        let edges = collection.edges().into_iter().map(Element::Edge);
        nodes
            .chain(edges)
            .filter(|element| self.matches(element))
            .collect()
    }
}

fn parse_group(selector: &str, raw: &str, attribute_re: &Regex) -> Result<Group> {
    if raw.is_empty() {
        return Err(GraphError::invalid_selector(selector, "empty selector group"));
    }

    let mut group = Group::default();
    let mut rest = raw;

    if let Some(after) = rest.strip_prefix('*') {
        rest = after;
    } else if let Some(after) = rest.strip_prefix("node") {
        group.kind = Some(Kind::Node);
        rest = after;
    } else if let Some(after) = rest.strip_prefix("edge") {
        group.kind = Some(Kind::Edge);
        rest = after;
    }

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('#') {
            let end = after
                .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '-' || c == '.'))
                .unwrap_or(after.len());
            if end == 0 {
                return Err(GraphError::invalid_selector(selector, "empty #id"));
            }
            group.id = Some(after[..end].to_string());
            rest = &after[end..];
        } else if rest.starts_with('[') {
            let Some(caps) = attribute_re.captures(rest) else {
                return Err(GraphError::invalid_selector(
                    selector,
                    format!("malformed attribute clause near `{rest}`"),
                ));
            };
            let comparison = match (caps.get(2), caps.get(3)) {
                (Some(op), Some(value)) => {
                    let op = Operator::parse(op.as_str()).ok_or_else(|| {
                        GraphError::invalid_selector(selector, "unknown operator")
                    })?;
                    Some((op, unquote(value.as_str().trim())))
                }
                _ => None,
            };
            group.attributes.push(AttributeClause {
                name: caps[1].to_string(),
                comparison,
            });
            rest = &rest[caps[0].len()..];
        } else if let Some(after) = rest.strip_prefix(':') {
            let end = after
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(after.len());
            let pseudo = match &after[..end] {
                "loop" => Pseudo::Loop,
                "simple" => Pseudo::Simple,
                other => {
                    return Err(GraphError::invalid_selector(
                        selector,
                        format!("unknown pseudo-class `:{other}`"),
                    ))
                }
            };
            group.pseudo.push(pseudo);
            rest = &after[end..];
        } else {
            return Err(GraphError::invalid_selector(
                selector,
                format!("unexpected input `{rest}`"),
            ));
        }
    }

    Ok(group)
}

fn unquote(value: &str) -> String {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        value[1..value.len() - 1].to_string()
    } else {
        value.to_string()
    }
}
