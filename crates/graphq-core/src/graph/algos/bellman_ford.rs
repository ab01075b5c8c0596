use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{
    checked_weight, resolve_root, usable_edges, NodeIndex, Predecessor, ShortestPaths,
};
use crate::graph::types::SearchOptions;
use crate::graph::ElementCollection;
use crate::logging::StepTracer;

/// One relaxable hop; undirected edges contribute one hop per direction
struct Hop<'c> {
    from: usize,
    to: usize,
    weight: f64,
    edge: &'c str,
}

fn collect_hops<'c, C>(
    collection: &'c C,
    index: &NodeIndex,
    opts: &SearchOptions<'_>,
) -> Result<Vec<Hop<'c>>>
where
    C: ElementCollection + ?Sized,
{
    let mut hops = Vec::new();
    for edge in usable_edges(collection) {
        let (Some(source), Some(target)) =
            (index.position(edge.source()), index.position(edge.target()))
        else {
            continue;
        };
        let weight = checked_weight(opts, edge)?;
        hops.push(Hop {
            from: source,
            to: target,
            weight,
            edge: edge.id(),
        });
        if !opts.directed {
            hops.push(Hop {
                from: target,
                to: source,
                weight,
                edge: edge.id(),
            });
        }
    }
    Ok(hops)
}

/// Single-source shortest paths that tolerate negative weights.
///
/// Runs at most N-1 relaxation passes, stopping early once a pass changes
/// nothing, then one more pass to detect a negative cycle reachable from the
/// root. In undirected mode any reachable negative edge forms such a cycle.
#[tracing::instrument(skip(collection, opts), fields(root = ?opts.root, directed = opts.directed))]
pub fn bellman_ford<C>(collection: &C, opts: &SearchOptions<'_>) -> Result<ShortestPaths>
where
    C: ElementCollection + ?Sized,
{
    let start = Instant::now();
    let root = resolve_root(collection, opts)?;
    let tracer = StepTracer::new("bellman_ford", opts.debug);

    let index = NodeIndex::build(collection);
    let Some(root_pos) = index.position(root.id()) else {
        return Err(GraphError::unresolvable(root.id()));
    };
    let hops = collect_hops(collection, &index, opts)?;

    let mut distances = vec![f64::INFINITY; index.len()];
    let mut predecessors: Vec<Option<Predecessor>> = vec![None; index.len()];
    distances[root_pos] = 0.0;

    let mut passes = 0;
    for pass in 1..index.len() {
        passes = pass;
        let mut changed = false;
        for hop in &hops {
            let candidate = distances[hop.from] + hop.weight;
            if candidate < distances[hop.to] {
                distances[hop.to] = candidate;
                predecessors[hop.to] = Some(Predecessor {
                    node: hop.from,
                    edge: hop.edge.to_string(),
                });
                tracer.relax(hop.edge, index.id(hop.to), candidate);
                changed = true;
            }
        }
        if !changed {
            tracer.note("no relaxation in pass, stopping early");
            break;
        }
    }

    if let Some(hop) = hops
        .iter()
        .find(|hop| distances[hop.from] + hop.weight < distances[hop.to])
    {
        tracing::debug!(edge = hop.edge, root = root.id(), "negative cycle detected");
        return Err(GraphError::NegativeCycleDetected {
            root: root.id().to_string(),
        });
    }

    crate::trace_time!(start, "bellman_ford", passes = passes);

    Ok(ShortestPaths::new(root_pos, index, distances, predecessors))
}
