//! Command dispatch logic for graphq
use std::time::Instant;

use clap::CommandFactory;
use graphq_core::config::GraphqConfig;
use graphq_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands::{self, QuerySettings};

pub fn run(cli: &Cli, config: &GraphqConfig, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        return handle_no_command();
    };

    let graph = commands::load_graph(cli, start)?;

    match command {
        Commands::Bfs(args) => commands::traverse::execute(
            cli,
            &graph,
            commands::traverse::Order::Breadth,
            args,
            config.defaults.directed,
            config.defaults.debug,
        ),

        Commands::Dfs(args) => commands::traverse::execute(
            cli,
            &graph,
            commands::traverse::Order::Depth,
            args,
            config.defaults.directed,
            config.defaults.debug,
        ),

        Commands::Dijkstra { root, to, query } => commands::shortest::execute_single_source(
            cli,
            &graph,
            commands::shortest::Engine::Dijkstra,
            root,
            to.as_deref(),
            &QuerySettings::resolve(query, config),
        ),

        Commands::BellmanFord { root, to, query } => commands::shortest::execute_single_source(
            cli,
            &graph,
            commands::shortest::Engine::BellmanFord,
            root,
            to.as_deref(),
            &QuerySettings::resolve(query, config),
        ),

        Commands::Astar {
            root,
            goal,
            heuristic,
            query,
        } => commands::shortest::execute_a_star(
            cli,
            &graph,
            root,
            goal,
            &QuerySettings::resolve(query, config).with_heuristic(heuristic.as_deref()),
        ),

        Commands::FloydWarshall { from, to, query } => commands::all_pairs::execute(
            cli,
            &graph,
            from.as_deref(),
            to.as_deref(),
            &QuerySettings::resolve(query, config),
        ),

        Commands::Kruskal { query } => {
            commands::spanning::execute(cli, &graph, &QuerySettings::resolve(query, config))
        }
    }
}

fn handle_no_command() -> Result<()> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}
