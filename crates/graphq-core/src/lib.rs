//! Graphq Core Library
//!
//! Graph algorithm engine for graphq: traversal, shortest paths and
//! minimum spanning trees over any [`graph::ElementCollection`], plus an
//! in-memory graph store, a selector engine and configuration loading.

pub mod config;
pub mod element;
pub mod error;
pub mod graph;
pub mod logging;
pub mod selector;
pub mod store;

pub use element::{Edge, Element, ElementRef, Node};
pub use error::{GraphError, Result};
pub use graph::{ElementCollection, GraphAlgorithms};
pub use store::{Collection, Graph};
