use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

use crate::error::Result;
use crate::graph::algos::shared::{
    neighbor_edges, resolve_root, table_weight, weight_table, NodeIndex, Predecessor,
    ShortestPaths,
};
use crate::graph::types::SearchOptions;
use crate::graph::ElementCollection;
use crate::logging::StepTracer;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node: usize,
    pub distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// State tracked during a Dijkstra run
struct DijkstraState {
    distances: Vec<f64>,
    predecessors: Vec<Option<Predecessor>>,
    settled: Vec<bool>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(len: usize, root: usize) -> Self {
        let mut distances = vec![f64::INFINITY; len];
        distances[root] = 0.0;
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            node: root,
            distance: 0.0,
        }));
        Self {
            distances,
            predecessors: vec![None; len],
            settled: vec![false; len],
            heap,
        }
    }
}

/// Single-source shortest paths from `opts.root`.
///
/// Weights come from `opts.weight` (unit weight by default) and must be
/// finite on every edge of the collection, reachable or not. Negative
/// weights are not detected and give undefined results.
#[tracing::instrument(skip(collection, opts), fields(root = ?opts.root, directed = opts.directed))]
pub fn dijkstra<C>(collection: &C, opts: &SearchOptions<'_>) -> Result<ShortestPaths>
where
    C: ElementCollection + ?Sized,
{
    let start = Instant::now();
    let root = resolve_root(collection, opts)?;
    let tracer = StepTracer::new("dijkstra", opts.debug);

    let index = NodeIndex::build(collection);
    let Some(root_pos) = index.position(root.id()) else {
        return Err(crate::error::GraphError::unresolvable(root.id()));
    };

    let weights = weight_table(collection, opts)?;
    let mut state = DijkstraState::new(index.len(), root_pos);
    let mut step = 0;

    while let Some(Reverse(HeapEntry { node, distance })) = state.heap.pop() {
        // Skip stale entries
        if state.settled[node] || distance > state.distances[node] {
            continue;
        }
        state.settled[node] = true;
        tracer.settle(step, index.id(node), distance);
        step += 1;

        for (edge, neighbor) in neighbor_edges(collection, index.id(node), opts.directed) {
            let Some(next) = index.position(neighbor) else {
                continue;
            };
            if state.settled[next] {
                continue;
            }

            let candidate = distance + table_weight(&weights, opts, edge)?;
            if candidate < state.distances[next] {
                state.distances[next] = candidate;
                state.predecessors[next] = Some(Predecessor {
                    node,
                    edge: edge.id().to_string(),
                });
                tracer.relax(edge.id(), neighbor, candidate);
                state.heap.push(Reverse(HeapEntry {
                    node: next,
                    distance: candidate,
                }));
            }
        }
    }

    crate::trace_time!(start, "dijkstra", settled = step);

    Ok(ShortestPaths::new(
        root_pos,
        index,
        state.distances,
        state.predecessors,
    ))
}
