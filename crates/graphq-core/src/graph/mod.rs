//! Graph traversal and path-finding operations
//!
//! Provides graph algorithms over any element collection:
//! - BFS / DFS traversal with per-node visit callbacks
//! - Dijkstra, A* and Bellman-Ford single-source shortest paths
//! - Floyd-Warshall all-pairs shortest paths
//! - Kruskal minimum spanning forest
//! - Element collection trait for pluggable graph hosts

pub mod algos;
pub mod collection;
pub mod types;

pub use algos::{
    a_star, bellman_ford, bfs, dfs, dijkstra, floyd_warshall, kruskal, AllPairsShortestPaths,
    GraphAlgorithms, ShortestPaths, VisitFn,
};
pub use collection::{resolve_node, ElementCollection};
pub use types::{
    attribute_heuristic, attribute_weight, unit_weight, zero_heuristic, AStarResult, Path,
    PathElement, SearchOptions, SpanningForest, TraversalOptions, TraversalResult, Visit,
    VisitAction,
};
