//! dijkstra / bellman-ford / astar commands
use graphq_core::error::Result;
use graphq_core::graph::{AStarResult, ShortestPaths};
use graphq_core::{ElementCollection, ElementRef, Graph, GraphAlgorithms};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{distance_json, format_distance, format_path, print_json};
use crate::commands::{by_id, resolve_argument, QuerySettings};

/// Single-source engine to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Dijkstra,
    BellmanFord,
}

impl Engine {
    fn name(self) -> &'static str {
        match self {
            Engine::Dijkstra => "dijkstra",
            Engine::BellmanFord => "bellman-ford",
        }
    }
}

/// Execute a single-source shortest path command
pub fn execute_single_source(
    cli: &Cli,
    graph: &Graph,
    engine: Engine,
    root: &str,
    to: Option<&str>,
    settings: &QuerySettings,
) -> Result<()> {
    let elements = graph.elements();
    let opts = settings.search_options().root(ElementRef::parse(root));

    let result = match engine {
        Engine::Dijkstra => elements.dijkstra(&opts)?,
        Engine::BellmanFord => elements.bellman_ford(&opts)?,
    };

    let targets: Vec<&str> = match to {
        Some(argument) => vec![resolve_argument(&elements, argument)?.id()],
        None => elements.nodes().into_iter().map(|node| node.id()).collect(),
    };

    match cli.format {
        OutputFormat::Json => output_json(engine, settings, &result, &targets),
        OutputFormat::Human => output_human(cli, engine, &result, &targets),
    }
}

fn output_json(
    engine: Engine,
    settings: &QuerySettings,
    result: &ShortestPaths,
    targets: &[&str],
) -> Result<()> {
    let entries = targets
        .iter()
        .map(|&id| {
            Ok(serde_json::json!({
                "node": id,
                "distance": distance_json(result.distance_to(by_id(id))?),
                "path": result.path_to(by_id(id))?,
            }))
        })
        .collect::<Result<Vec<_>>>()?;

    print_json(&serde_json::json!({
        "algorithm": engine.name(),
        "root": result.root(),
        "directed": settings.directed,
        "weight": settings.weight,
        "reachable": result.reachable_count(),
        "distances": entries,
    }))
}

fn output_human(
    cli: &Cli,
    engine: Engine,
    result: &ShortestPaths,
    targets: &[&str],
) -> Result<()> {
    if !cli.quiet {
        println!("{} from {}", engine.name(), result.root());
    }

    let width = targets.iter().map(|id| id.len()).max().unwrap_or(0);
    for &id in targets {
        let distance = result.distance_to(by_id(id))?;
        match result.path_to(by_id(id))? {
            Some(path) => println!(
                "{:<width$}  {:>8}  {}",
                id,
                format_distance(distance),
                format_path(&path),
                width = width
            ),
            None => println!(
                "{:<width$}  {:>8}",
                id,
                format_distance(distance),
                width = width
            ),
        }
    }
    Ok(())
}

/// Execute the astar command
pub fn execute_a_star(
    cli: &Cli,
    graph: &Graph,
    root: &str,
    goal: &str,
    settings: &QuerySettings,
) -> Result<()> {
    let elements = graph.elements();
    let opts = settings
        .search_options()
        .root(ElementRef::parse(root))
        .goal(ElementRef::parse(goal));
    let result = elements.a_star(&opts)?;

    let source = resolve_argument(&elements, root)?.id();
    let target = resolve_argument(&elements, goal)?.id();

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "algorithm": "astar",
            "root": source,
            "goal": target,
            "directed": settings.directed,
            "weight": settings.weight,
            "heuristic": settings.heuristic,
            "found": result.found,
            "distance": result.distance,
            "path": result.path,
            "steps": result.steps,
        })),
        OutputFormat::Human => {
            output_a_star_human(cli, source, target, &result);
            Ok(())
        }
    }
}

fn output_a_star_human(cli: &Cli, source: &str, target: &str, result: &AStarResult) {
    match (&result.path, result.distance) {
        (Some(path), Some(distance)) if result.found => {
            println!("path: {}", format_path(path));
            println!("distance: {}", format_distance(distance));
        }
        _ => println!("no path from {} to {}", source, target),
    }
    if !cli.quiet {
        println!("steps: {}", result.steps);
    }
}
