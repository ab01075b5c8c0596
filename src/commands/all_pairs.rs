//! floyd-warshall command
use graphq_core::error::Result;
use graphq_core::graph::AllPairsShortestPaths;
use graphq_core::{Graph, GraphAlgorithms};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{distance_json, format_distance, format_path, print_json};
use crate::commands::{by_id, resolve_argument, QuerySettings};

/// Execute the floyd-warshall command
pub fn execute(
    cli: &Cli,
    graph: &Graph,
    from: Option<&str>,
    to: Option<&str>,
    settings: &QuerySettings,
) -> Result<()> {
    let elements = graph.elements();
    let result = elements.floyd_warshall(&settings.search_options())?;

    let select = |argument: Option<&str>| -> Result<Vec<String>> {
        match argument {
            Some(argument) => Ok(vec![resolve_argument(&elements, argument)?.id().to_string()]),
            None => Ok(result.node_ids().map(str::to_string).collect()),
        }
    };
    let sources = select(from)?;
    let targets = select(to)?;

    match cli.format {
        OutputFormat::Json => output_json(settings, &result, &sources, &targets),
        OutputFormat::Human => output_human(cli, &result, &sources, &targets),
    }
}

fn output_json(
    settings: &QuerySettings,
    result: &AllPairsShortestPaths,
    sources: &[String],
    targets: &[String],
) -> Result<()> {
    let mut pairs = Vec::with_capacity(sources.len() * targets.len());
    for source in sources {
        for target in targets {
            pairs.push(serde_json::json!({
                "from": source,
                "to": target,
                "distance": distance_json(result.distance(by_id(source), by_id(target))?),
                "path": result.path(by_id(source), by_id(target))?,
            }));
        }
    }

    print_json(&serde_json::json!({
        "algorithm": "floyd-warshall",
        "directed": settings.directed,
        "weight": settings.weight,
        "nodes": result.len(),
        "pairs": pairs,
    }))
}

fn output_human(
    cli: &Cli,
    result: &AllPairsShortestPaths,
    sources: &[String],
    targets: &[String],
) -> Result<()> {
    // A single pair gets its path; anything wider prints a distance matrix
    if let ([source], [target]) = (sources, targets) {
        println!(
            "distance: {}",
            format_distance(result.distance(by_id(source), by_id(target))?)
        );
        match result.path(by_id(source), by_id(target))? {
            Some(path) => println!("path: {}", format_path(&path)),
            None => println!("no path from {} to {}", source, target),
        }
        return Ok(());
    }

    let width = sources
        .iter()
        .chain(targets)
        .map(|id| id.len())
        .chain(std::iter::once(3))
        .max()
        .unwrap_or(3);

    if !cli.quiet {
        let header: Vec<String> = targets
            .iter()
            .map(|id| format!("{:>width$}", id, width = width))
            .collect();
        println!("{:width$}  {}", "", header.join(" "), width = width);
    }

    for source in sources {
        let row = targets
            .iter()
            .map(|target| {
                let distance = result.distance(by_id(source), by_id(target))?;
                let cell = if distance.is_finite() {
                    format!("{}", distance)
                } else {
                    "-".to_string()
                };
                Ok(format!("{:>width$}", cell, width = width))
            })
            .collect::<Result<Vec<_>>>()?;
        println!("{:<width$}  {}", source, row.join(" "), width = width);
    }
    Ok(())
}
