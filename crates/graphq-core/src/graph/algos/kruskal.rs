use std::time::Instant;

use crate::element::Edge;
use crate::error::Result;
use crate::graph::algos::disjoint_set::DisjointSet;
use crate::graph::algos::shared::{checked_weight, usable_edges, NodeIndex};
use crate::graph::types::{SearchOptions, SpanningForest};
use crate::graph::ElementCollection;
use crate::logging::StepTracer;

/// Minimum spanning forest of the collection, one tree per component.
///
/// Edge direction is ignored. Equal weights keep collection edge order, and
/// every node of the collection is part of the forest, isolated nodes
/// forming single-node trees. Edges are listed in acceptance order.
#[tracing::instrument(skip(collection, opts))]
pub fn kruskal<C>(collection: &C, opts: &SearchOptions<'_>) -> Result<SpanningForest>
where
    C: ElementCollection + ?Sized,
{
    let start = Instant::now();
    let tracer = StepTracer::new("kruskal", opts.debug);
    let index = NodeIndex::build(collection);

    let mut weighted: Vec<(f64, &Edge)> = usable_edges(collection)
        .into_iter()
        .map(|edge| Ok((checked_weight(opts, edge)?, edge)))
        .collect::<Result<_>>()?;
    weighted.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    let mut sets = DisjointSet::new(index.len());
    let mut forest = SpanningForest {
        nodes: (0..index.len()).map(|pos| index.id(pos).to_string()).collect(),
        edges: Vec::new(),
        total_weight: 0.0,
    };

    for (weight, edge) in weighted {
        if sets.set_count() <= 1 {
            break;
        }
        let (Some(source), Some(target)) =
            (index.position(edge.source()), index.position(edge.target()))
        else {
            continue;
        };
        if sets.union(source, target) {
            tracer.relax(edge.id(), edge.target(), weight);
            forest.edges.push(edge.id().to_string());
            forest.total_weight += weight;
        }
    }

    crate::trace_time!(
        start,
        "kruskal",
        edges = forest.edges.len(),
        components = sets.set_count()
    );

    Ok(forest)
}
