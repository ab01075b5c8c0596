use std::time::Instant;

use crate::element::ElementRef;
use crate::error::Result;
use crate::graph::algos::shared::{checked_weight, usable_edges, NodeIndex};
use crate::graph::types::{Path, PathElement, SearchOptions};
use crate::graph::ElementCollection;
use crate::logging::StepTracer;

/// All-pairs result: N x N distance and next-hop matrices in row-major order.
///
/// `direct[i * n + j]` is the cheapest edge from `i` straight to `j`, used
/// to label each hop when a path is rebuilt.
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths {
    index: NodeIndex,
    distances: Vec<f64>,
    next: Vec<Option<usize>>,
    direct: Vec<Option<usize>>,
    edge_ids: Vec<String>,
}

impl AllPairsShortestPaths {
    fn cell(&self, from: usize, to: usize) -> usize {
        from * self.index.len() + to
    }

    /// Shortest distance between two nodes named by id, handle or selector;
    /// `INFINITY` when unreachable
    pub fn distance(&self, from: impl Into<ElementRef>, to: impl Into<ElementRef>) -> Result<f64> {
        let source = self.index.resolve(&from.into())?;
        let target = self.index.resolve(&to.into())?;
        Ok(self.distances[self.cell(source, target)])
    }

    /// Shortest path between two nodes by following next hops; `None` when
    /// unreachable
    pub fn path(
        &self,
        from: impl Into<ElementRef>,
        to: impl Into<ElementRef>,
    ) -> Result<Option<Path>> {
        let source = self.index.resolve(&from.into())?;
        let target = self.index.resolve(&to.into())?;
        Ok(self.walk(source, target))
    }

    fn walk(&self, source: usize, target: usize) -> Option<Path> {
        if source == target {
            return Some(Path::singleton(self.index.id(source)));
        }
        self.next[self.cell(source, target)]?;

        let mut elements = vec![PathElement::Node(self.index.id(source).to_string())];
        let mut current = source;
        // A simple path never has more hops than nodes
        for _ in 0..self.index.len() {
            let hop = self.next[self.cell(current, target)]?;
            let edge = self.direct[self.cell(current, hop)]?;
            elements.push(PathElement::Edge(self.edge_ids[edge].clone()));
            elements.push(PathElement::Node(self.index.id(hop).to_string()));
            current = hop;
            if current == target {
                return Some(Path::from_elements(elements));
            }
        }
        None
    }

    /// Node ids in matrix order
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.index.len()).map(|pos| self.index.id(pos))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// All-pairs shortest paths.
///
/// Parallel edges keep the cheapest weight. Negative weights are accepted
/// but negative cycles are not detected: distances on such a cycle are
/// meaningless.
#[tracing::instrument(skip(collection, opts), fields(directed = opts.directed))]
pub fn floyd_warshall<C>(collection: &C, opts: &SearchOptions<'_>) -> Result<AllPairsShortestPaths>
where
    C: ElementCollection + ?Sized,
{
    let start = Instant::now();
    let tracer = StepTracer::new("floyd_warshall", opts.debug);
    let index = NodeIndex::build(collection);
    let n = index.len();

    let mut distances = vec![f64::INFINITY; n * n];
    let mut next: Vec<Option<usize>> = vec![None; n * n];
    let mut direct: Vec<Option<usize>> = vec![None; n * n];
    let mut edge_ids = Vec::new();

    for i in 0..n {
        distances[i * n + i] = 0.0;
    }

    for edge in usable_edges(collection) {
        let (Some(source), Some(target)) =
            (index.position(edge.source()), index.position(edge.target()))
        else {
            continue;
        };
        let weight = checked_weight(opts, edge)?;
        let edge_pos = edge_ids.len();
        edge_ids.push(edge.id().to_string());

        let mut seed = |from: usize, to: usize| {
            let cell = from * n + to;
            if weight < distances[cell] {
                distances[cell] = weight;
                next[cell] = Some(to);
                direct[cell] = Some(edge_pos);
            }
        };
        seed(source, target);
        if !opts.directed {
            seed(target, source);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let through = distances[i * n + k];
            if !through.is_finite() {
                continue;
            }
            for j in 0..n {
                let candidate = through + distances[k * n + j];
                if candidate < distances[i * n + j] {
                    distances[i * n + j] = candidate;
                    next[i * n + j] = next[i * n + k];
                }
            }
        }
        tracer.visit(k, index.id(k));
    }

    crate::trace_time!(start, "floyd_warshall", nodes = n);

    Ok(AllPairsShortestPaths {
        index,
        distances,
        next,
        direct,
        edge_ids,
    })
}
