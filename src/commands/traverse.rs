//! bfs / dfs commands
use graphq_core::error::Result;
use graphq_core::graph::{TraversalOptions, TraversalResult, Visit, VisitAction};
use graphq_core::selector::Selector;
use graphq_core::{Element, ElementRef, Graph, GraphAlgorithms, Node};

use crate::cli::{Cli, OutputFormat, TraverseArgs};
use crate::commands::format::{format_path, print_json};

/// Which frontier the traversal uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Breadth,
    Depth,
}

impl Order {
    fn name(self) -> &'static str {
        match self {
            Order::Breadth => "bfs",
            Order::Depth => "dfs",
        }
    }
}

/// Execute a traversal command
pub fn execute(
    cli: &Cli,
    graph: &Graph,
    order: Order,
    args: &TraverseArgs,
    default_directed: bool,
    default_debug: bool,
) -> Result<()> {
    let elements = graph.elements();
    let opts = TraversalOptions {
        root: Some(ElementRef::parse(&args.root)),
        directed: args.directed || default_directed,
        debug: args.debug || default_debug,
    };

    let target = args.find.as_deref().map(Selector::parse).transpose()?;
    let mut stop_at_target = |node: &Node, _: Visit| match &target {
        Some(selector) if selector.matches(&Element::Node(node)) => VisitAction::Found,
        _ => VisitAction::Continue,
    };

    let result = match order {
        Order::Breadth => elements.bfs(&opts, Some(&mut stop_at_target))?,
        Order::Depth => elements.dfs(&opts, Some(&mut stop_at_target))?,
    };

    match cli.format {
        OutputFormat::Json => output_json(order, opts.directed, &result),
        OutputFormat::Human => {
            output_human(cli, order, &result, args.find.as_deref());
            Ok(())
        }
    }
}

fn output_json(order: Order, directed: bool, result: &TraversalResult) -> Result<()> {
    let visited: Vec<serde_json::Value> = result
        .path
        .node_ids()
        .into_iter()
        .map(|id| match result.depth_of(id) {
            Some(depth) => serde_json::json!({ "node": id, "depth": depth }),
            None => serde_json::json!({ "node": id }),
        })
        .collect();

    print_json(&serde_json::json!({
        "algorithm": order.name(),
        "root": result.root,
        "directed": directed,
        "path": result.path,
        "visited": visited,
        "found": result.found,
    }))
}

fn output_human(cli: &Cli, order: Order, result: &TraversalResult, find: Option<&str>) {
    if !cli.quiet {
        println!("{} from {}", order.name(), result.root);
    }

    for (index, id) in result.path.node_ids().into_iter().enumerate() {
        match result.depth_of(id) {
            Some(depth) => println!("{:>3}  {}  (depth {})", index, id, depth),
            None => println!("{:>3}  {}", index, id),
        }
    }
    println!("path: {}", format_path(&result.path));

    if let Some(selector) = find {
        match &result.found {
            Some(id) => println!("found: {}", id),
            None => {
                if !cli.quiet {
                    println!("no node matching {} reached", selector);
                }
            }
        }
    }
}
