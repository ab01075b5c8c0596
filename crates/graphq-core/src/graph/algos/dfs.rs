use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::algos::bfs::{traversal_root, VisitFn};
use crate::graph::algos::shared::{neighbor_edges, NodeIndex};
use crate::graph::types::{
    Path, PathElement, TraversalOptions, TraversalResult, Visit, VisitAction,
};
use crate::graph::ElementCollection;
use crate::logging::StepTracer;

/// Depth-first traversal from `opts.root` using an explicit stack.
///
/// A node is visited when first popped; its unvisited neighbors are pushed
/// so that the most recently discovered branch is explored first. The edge
/// recorded for a node is the last one that pushed it.
#[tracing::instrument(skip(collection, opts, visit), fields(root = ?opts.root, directed = opts.directed))]
pub fn dfs<C>(
    collection: &C,
    opts: &TraversalOptions,
    mut visit: Option<&mut VisitFn<'_>>,
) -> Result<TraversalResult>
where
    C: ElementCollection + ?Sized,
{
    let start = Instant::now();
    let root = traversal_root(collection, opts)?;
    let tracer = StepTracer::new("dfs", opts.debug);

    let nodes = collection.nodes();
    let index = NodeIndex::build(collection);
    let Some(root_pos) = index.position(root.id()) else {
        return Err(GraphError::unresolvable(root.id()));
    };

    let mut discovered = vec![false; index.len()];
    let mut connected_by: Vec<Option<&str>> = vec![None; index.len()];
    let mut stack = vec![root_pos];
    let mut path = Vec::new();
    let mut found = None;
    let mut visit_index = 0;

    while let Some(current) = stack.pop() {
        if discovered[current] {
            continue;
        }
        discovered[current] = true;

        let node = nodes[current];
        if let Some(edge) = connected_by[current] {
            path.push(PathElement::Edge(edge.to_string()));
        }
        path.push(PathElement::Node(node.id().to_string()));
        tracer.visit(visit_index, node.id());

        let action = match visit.as_mut() {
            Some(callback) => callback(
                node,
                Visit {
                    index: visit_index,
                    depth: None,
                },
            ),
            None => VisitAction::Continue,
        };
        visit_index += 1;

        match action {
            VisitAction::Continue => {}
            VisitAction::Stop => break,
            VisitAction::Found => {
                found = Some(node.id().to_string());
                break;
            }
        }

        for (edge, neighbor) in neighbor_edges(collection, node.id(), opts.directed) {
            let Some(next) = index.position(neighbor) else {
                continue;
            };
            if !discovered[next] {
                connected_by[next] = Some(edge.id());
                stack.push(next);
            }
        }
    }

    crate::trace_time!(start, "dfs", visited = visit_index);

    Ok(TraversalResult {
        root: root.id().to_string(),
        path: Path::from_elements(path),
        depths: Default::default(),
        found,
    })
}
