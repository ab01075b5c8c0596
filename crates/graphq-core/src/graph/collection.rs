use crate::element::{Edge, Element, ElementRef, Node};
use crate::error::{GraphError, Result};
use crate::selector::Selector;

/// Read-only view of the nodes and edges a query runs over.
///
/// Implementations own identity, attributes and adjacency; the algorithms
/// only read through this trait and never mutate the graph.
pub trait ElementCollection {
    /// All nodes, in collection order
    fn nodes(&self) -> Vec<&Node>;

    /// All edges, in collection order
    fn edges(&self) -> Vec<&Edge>;

    fn node(&self, id: &str) -> Option<&Node>;

    fn edge(&self, id: &str) -> Option<&Edge>;

    /// Edges touching `node_id`, in collection order. With `only_outgoing`,
    /// only edges whose structural source is `node_id`.
    fn edges_incident_to(&self, node_id: &str, only_outgoing: bool) -> Vec<&Edge>;

    /// Elements matching a selector string
    fn filter_by_selector(&self, selector: &str) -> Result<Vec<Element<'_>>> {
        let selector = Selector::parse(selector)?;
        Ok(selector.filter(self))
    }

    /// The element with the given id, if it belongs to this collection
    fn filter_by_id(&self, id: &str) -> Option<Element<'_>> {
        self.node(id)
            .map(Element::Node)
            .or_else(|| self.edge(id).map(Element::Edge))
    }

    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }
}

/// Resolve a root/goal/endpoint reference to a node of `collection`.
///
/// Fails with [`GraphError::UnresolvableSelector`] when nothing matches, or
/// when the only matches are edges.
pub fn resolve_node<'a, C>(collection: &'a C, reference: &ElementRef) -> Result<&'a Node>
where
    C: ElementCollection + ?Sized,
{
    let resolved = match reference {
        ElementRef::ByHandle(node) => collection.node(node.id()),
        ElementRef::ById(id) => collection.filter_by_id(id).and_then(|e| e.as_node()),
        ElementRef::BySelector(selector) => collection
            .filter_by_selector(selector)?
            .into_iter()
            .find_map(|element| element.as_node()),
    };

    resolved.ok_or_else(|| GraphError::unresolvable(reference.to_string()))
}
