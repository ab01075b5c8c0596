use std::time::Instant;

use crate::element::ElementRef;
use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{
    neighbor_edges, resolve_root, table_weight, walk_predecessors, weight_table, NodeIndex,
    Predecessor,
};
use crate::graph::collection::resolve_node;
use crate::graph::types::{AStarResult, SearchOptions};
use crate::graph::ElementCollection;
use crate::logging::StepTracer;

/// Score tables for one A* run, indexed by node position
struct AStarState {
    /// Frontier in insertion order
    open: Vec<usize>,
    in_open: Vec<bool>,
    closed: Vec<bool>,
    g_score: Vec<f64>,
    f_score: Vec<f64>,
    came_from: Vec<Option<Predecessor>>,
}

impl AStarState {
    fn new(len: usize) -> Self {
        Self {
            open: Vec::new(),
            in_open: vec![false; len],
            closed: vec![false; len],
            g_score: vec![f64::INFINITY; len],
            f_score: vec![f64::INFINITY; len],
            came_from: vec![None; len],
        }
    }

    /// Position in `open` of the lowest f-score; the earliest entry wins ties
    fn min_open(&self) -> Option<usize> {
        let (mut best, first) = self.open.first().map(|&node| (0, node))?;
        let mut best_score = self.f_score[first];
        for (pos, &node) in self.open.iter().enumerate().skip(1) {
            if self.f_score[node] < best_score {
                best_score = self.f_score[node];
                best = pos;
            }
        }
        Some(best)
    }
}

/// Shortest path from `opts.root` to `opts.goal` guided by `opts.heuristic`.
///
/// Every edge weight is validated before the search starts. The heuristic
/// is evaluated once per discovered node and is not checked for
/// admissibility. Without one the search behaves like Dijkstra.
#[tracing::instrument(skip(collection, opts), fields(root = ?opts.root, goal = ?opts.goal, directed = opts.directed))]
pub fn a_star<C>(collection: &C, opts: &SearchOptions<'_>) -> Result<AStarResult>
where
    C: ElementCollection + ?Sized,
{
    let start = Instant::now();
    let source = resolve_root(collection, opts)?;
    let goal: &ElementRef = crate::require_param!(opts.goal.as_ref(), "goal");
    let target = resolve_node(collection, goal)?;
    let tracer = StepTracer::new("a_star", opts.debug);

    let nodes = collection.nodes();
    let index = NodeIndex::build(collection);
    let (Some(source_pos), Some(target_pos)) =
        (index.position(source.id()), index.position(target.id()))
    else {
        return Err(GraphError::unresolvable(source.id()));
    };

    let weights = weight_table(collection, opts)?;
    let mut state = AStarState::new(index.len());
    state.g_score[source_pos] = 0.0;
    state.f_score[source_pos] = opts.heuristic_of(source);
    state.open.push(source_pos);
    state.in_open[source_pos] = true;

    let mut steps = 0;
    while let Some(min_pos) = state.min_open() {
        let current = state.open[min_pos];
        steps += 1;
        tracer.settle(steps, index.id(current), state.g_score[current]);

        if current == target_pos {
            crate::trace_time!(start, "a_star", steps = steps);
            return Ok(AStarResult {
                found: true,
                distance: Some(state.g_score[current]),
                path: walk_predecessors(&index, &state.came_from, source_pos, target_pos),
                steps,
            });
        }

        state.open.remove(min_pos);
        state.in_open[current] = false;
        state.closed[current] = true;

        for (edge, neighbor) in neighbor_edges(collection, index.id(current), opts.directed) {
            let Some(next) = index.position(neighbor) else {
                continue;
            };
            if state.closed[next] {
                continue;
            }

            let tentative = state.g_score[current] + table_weight(&weights, opts, edge)?;
            if state.in_open[next] && tentative >= state.g_score[next] {
                continue;
            }

            state.g_score[next] = tentative;
            state.f_score[next] = tentative + opts.heuristic_of(nodes[next]);
            state.came_from[next] = Some(Predecessor {
                node: current,
                edge: edge.id().to_string(),
            });
            tracer.relax(edge.id(), neighbor, tentative);
            if !state.in_open[next] {
                state.open.push(next);
                state.in_open[next] = true;
            }
        }
    }

    crate::trace_time!(start, "a_star", steps = steps);

    Ok(AStarResult {
        found: false,
        distance: None,
        path: None,
        steps,
    })
}
