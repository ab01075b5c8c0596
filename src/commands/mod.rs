//! CLI commands for graphq

pub mod all_pairs;
pub mod dispatch;
pub mod format;
pub mod shortest;
pub mod spanning;
pub mod traverse;

use std::time::Instant;

use graphq_core::config::GraphqConfig;
use graphq_core::error::Result;
use graphq_core::graph::{attribute_heuristic, attribute_weight, resolve_node, SearchOptions};
use graphq_core::{Collection, ElementRef, Graph, Node};

use crate::cli::{Cli, QueryArgs};

/// Query flags merged with the `[defaults]` table of the config file.
///
/// Flags win; a boolean flag can only switch a setting on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySettings {
    pub directed: bool,
    pub weight: Option<String>,
    pub heuristic: Option<String>,
    pub debug: bool,
}

impl QuerySettings {
    pub fn resolve(args: &QueryArgs, config: &GraphqConfig) -> Self {
        let defaults = &config.defaults;
        Self {
            directed: args.directed || defaults.directed,
            weight: args.weight.clone().or_else(|| defaults.weight_attribute.clone()),
            heuristic: defaults.heuristic_attribute.clone(),
            debug: args.debug || defaults.debug,
        }
    }

    /// Override the configured heuristic attribute
    pub fn with_heuristic(mut self, heuristic: Option<&str>) -> Self {
        if let Some(attribute) = heuristic {
            self.heuristic = Some(attribute.to_string());
        }
        self
    }

    /// Algorithm options without a root; callers add root/goal
    pub fn search_options(&self) -> SearchOptions<'static> {
        let mut opts = SearchOptions::new()
            .directed(self.directed)
            .debug(self.debug);
        if let Some(attribute) = &self.weight {
            opts.weight = Some(attribute_weight(attribute.clone()));
        }
        if let Some(attribute) = &self.heuristic {
            opts.heuristic = Some(attribute_heuristic(attribute.clone()));
        }
        opts
    }
}

/// Load the graph document named by `--graph`
pub fn load_graph(cli: &Cli, start: Instant) -> Result<Graph> {
    let Some(path) = cli.graph.as_deref() else {
        graphq_core::bail_usage!("no graph document given (use --graph or GRAPHQ_GRAPH)");
    };
    let graph = Graph::load(path)?;

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        elapsed = ?start.elapsed(),
        "load_graph"
    );
    Ok(graph)
}

/// Reference an already-resolved node by id, never as a selector
pub fn by_id(id: &str) -> ElementRef {
    ElementRef::ById(id.to_string())
}

/// Resolve a command-line node argument (id or selector) to a node
pub fn resolve_argument<'g>(elements: &'g Collection<'_>, argument: &str) -> Result<&'g Node> {
    resolve_node(elements, &ElementRef::parse(argument))
}
