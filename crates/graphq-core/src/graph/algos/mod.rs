//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs` / `dfs`: Breadth- and depth-first traversal with visit callbacks
//! - `dijkstra`: Weighted single-source shortest paths
//! - `astar`: Goal-directed shortest path with a node heuristic
//! - `bellman_ford`: Single-source shortest paths with negative-cycle detection
//! - `floyd_warshall`: All-pairs shortest paths
//! - `kruskal`: Minimum spanning forest over a `disjoint_set`
//! - `shared`: Common utilities used by multiple algorithms

pub mod astar;
pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod disjoint_set;
pub mod floyd_warshall;
pub mod kruskal;
pub mod shared;

pub use astar::a_star;
pub use bellman_ford::bellman_ford;
pub use bfs::{bfs, VisitFn};
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use disjoint_set::DisjointSet;
pub use floyd_warshall::{floyd_warshall, AllPairsShortestPaths};
pub use kruskal::kruskal;
pub use shared::{NodeIndex, ShortestPaths};

use crate::error::Result;
use crate::graph::types::{
    AStarResult, SearchOptions, SpanningForest, TraversalOptions, TraversalResult,
};
use crate::graph::ElementCollection;

/// Method-call access to every algorithm on any element collection
pub trait GraphAlgorithms: ElementCollection {
    fn bfs(
        &self,
        opts: &TraversalOptions,
        visit: Option<&mut VisitFn<'_>>,
    ) -> Result<TraversalResult> {
        bfs::bfs(self, opts, visit)
    }

    fn dfs(
        &self,
        opts: &TraversalOptions,
        visit: Option<&mut VisitFn<'_>>,
    ) -> Result<TraversalResult> {
        dfs::dfs(self, opts, visit)
    }

    fn dijkstra(&self, opts: &SearchOptions<'_>) -> Result<ShortestPaths> {
        dijkstra::dijkstra(self, opts)
    }

    fn a_star(&self, opts: &SearchOptions<'_>) -> Result<AStarResult> {
        astar::a_star(self, opts)
    }

    fn bellman_ford(&self, opts: &SearchOptions<'_>) -> Result<ShortestPaths> {
        bellman_ford::bellman_ford(self, opts)
    }

    fn floyd_warshall(&self, opts: &SearchOptions<'_>) -> Result<AllPairsShortestPaths> {
        floyd_warshall::floyd_warshall(self, opts)
    }

    fn kruskal(&self, opts: &SearchOptions<'_>) -> Result<SpanningForest> {
        kruskal::kruskal(self, opts)
    }
}

impl<C: ElementCollection + ?Sized> GraphAlgorithms for C {}
