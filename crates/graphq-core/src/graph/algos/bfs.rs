use std::collections::{BTreeMap, VecDeque};
use std::time::Instant;

use crate::element::{ElementRef, Node};
use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{neighbor_edges, NodeIndex};
use crate::graph::collection::resolve_node;
use crate::graph::types::{
    Path, PathElement, TraversalOptions, TraversalResult, Visit, VisitAction,
};
use crate::graph::ElementCollection;
use crate::logging::StepTracer;

/// Per-node visit callback for traversals
pub type VisitFn<'a> = dyn FnMut(&Node, Visit) -> VisitAction + 'a;

/// Resolve the traversal root, which is mandatory
pub(crate) fn traversal_root<'c, C>(collection: &'c C, opts: &TraversalOptions) -> Result<&'c Node>
where
    C: ElementCollection + ?Sized,
{
    let root: &ElementRef = crate::require_param!(opts.root.as_ref(), "root");
    resolve_node(collection, root)
}

/// State tracked during BFS traversal
struct BfsState<'c> {
    visited: Vec<bool>,
    queue: VecDeque<(usize, usize)>,
    /// Edge that discovered each node
    discovered_by: Vec<Option<&'c str>>,
    path: Vec<PathElement>,
    depths: BTreeMap<String, usize>,
    found: Option<String>,
}

/// Breadth-first traversal from `opts.root`.
///
/// Each dequeued node is appended to the path (preceded by the edge that
/// discovered it) and passed to `visit` with its visit index and depth.
#[tracing::instrument(skip(collection, opts, visit), fields(root = ?opts.root, directed = opts.directed))]
pub fn bfs<C>(
    collection: &C,
    opts: &TraversalOptions,
    mut visit: Option<&mut VisitFn<'_>>,
) -> Result<TraversalResult>
where
    C: ElementCollection + ?Sized,
{
    let start = Instant::now();
    let root = traversal_root(collection, opts)?;
    let tracer = StepTracer::new("bfs", opts.debug);

    let nodes = collection.nodes();
    let index = NodeIndex::build(collection);
    let Some(root_pos) = index.position(root.id()) else {
        return Err(GraphError::unresolvable(root.id()));
    };

    let mut state = BfsState {
        visited: vec![false; index.len()],
        queue: VecDeque::new(),
        discovered_by: vec![None; index.len()],
        path: Vec::new(),
        depths: BTreeMap::new(),
        found: None,
    };

    state.visited[root_pos] = true;
    state.queue.push_back((root_pos, 0));

    let mut visit_index = 0;
    while let Some((current, depth)) = state.queue.pop_front() {
        let node = nodes[current];
        if let Some(edge) = state.discovered_by[current] {
            state.path.push(PathElement::Edge(edge.to_string()));
        }
        state.path.push(PathElement::Node(node.id().to_string()));
        state.depths.insert(node.id().to_string(), depth);
        tracer.settle(visit_index, node.id(), depth as f64);

        let action = match visit.as_mut() {
            Some(callback) => callback(
                node,
                Visit {
                    index: visit_index,
                    depth: Some(depth),
                },
            ),
            None => VisitAction::Continue,
        };
        visit_index += 1;

        match action {
            VisitAction::Continue => {}
            VisitAction::Stop => break,
            VisitAction::Found => {
                state.found = Some(node.id().to_string());
                break;
            }
        }

        for (edge, neighbor) in neighbor_edges(collection, node.id(), opts.directed) {
            let Some(next) = index.position(neighbor) else {
                continue;
            };
            if state.visited[next] {
                continue;
            }
            state.visited[next] = true;
            state.discovered_by[next] = Some(edge.id());
            state.queue.push_back((next, depth + 1));
        }
    }

    crate::trace_time!(start, "bfs", visited = visit_index);

    Ok(TraversalResult {
        root: root.id().to_string(),
        path: Path::from_elements(state.path),
        depths: state.depths,
        found: state.found,
    })
}
