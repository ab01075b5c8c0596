//! kruskal command
use graphq_core::error::Result;
use graphq_core::graph::SpanningForest;
use graphq_core::{Collection, ElementCollection, Graph, GraphAlgorithms};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{format_distance, print_json};
use crate::commands::QuerySettings;

/// Execute the kruskal command
pub fn execute(cli: &Cli, graph: &Graph, settings: &QuerySettings) -> Result<()> {
    let elements = graph.elements();
    let forest = elements.kruskal(&settings.search_options())?;
    let trees = forest.nodes.len() - forest.edges.len();

    match cli.format {
        OutputFormat::Json => output_json(&elements, settings, &forest, trees),
        OutputFormat::Human => {
            output_human(cli, &elements, &forest, trees);
            Ok(())
        }
    }
}

fn output_json(
    elements: &Collection<'_>,
    settings: &QuerySettings,
    forest: &SpanningForest,
    trees: usize,
) -> Result<()> {
    let edges: Vec<serde_json::Value> = forest
        .edges
        .iter()
        .filter_map(|id| elements.edge(id))
        .map(|edge| {
            serde_json::json!({
                "id": edge.id(),
                "source": edge.source(),
                "target": edge.target(),
            })
        })
        .collect();

    print_json(&serde_json::json!({
        "algorithm": "kruskal",
        "weight": settings.weight,
        "nodes": forest.nodes,
        "edges": edges,
        "total_weight": forest.total_weight,
        "trees": trees,
    }))
}

fn output_human(cli: &Cli, elements: &Collection<'_>, forest: &SpanningForest, trees: usize) {
    for edge in forest.edges.iter().filter_map(|id| elements.edge(id)) {
        println!("{}  {} - {}", edge.id(), edge.source(), edge.target());
    }
    println!("total weight: {}", format_distance(forest.total_weight));
    if !cli.quiet {
        println!(
            "{} nodes, {} edges, {} tree{}",
            forest.nodes.len(),
            forest.edges.len(),
            trees,
            if trees == 1 { "" } else { "s" }
        );
    }
}
