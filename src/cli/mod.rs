//! CLI argument parsing for graphq
//!
//! Uses clap for argument parsing.
//! Supports global flags: --graph, --config, --format, --quiet, --verbose

pub mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Graphq - graph traversal, shortest paths and spanning trees
#[derive(Parser, Debug)]
#[command(name = "graphq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph document to query (.json, .yaml, .yml or .toml)
    #[arg(long, short, global = true, env = "GRAPHQ_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Configuration file (default: graphq.toml discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether the selected command asked for per-step tracing
    pub fn step_debug(&self) -> bool {
        match &self.command {
            Some(Commands::Bfs(args)) | Some(Commands::Dfs(args)) => args.debug,
            Some(Commands::Dijkstra { query, .. })
            | Some(Commands::BellmanFord { query, .. })
            | Some(Commands::Astar { query, .. })
            | Some(Commands::FloydWarshall { query, .. })
            | Some(Commands::Kruskal { query }) => query.debug,
            None => false,
        }
    }
}

/// Arguments shared by the traversal commands
#[derive(Args, Debug, Clone)]
pub struct TraverseArgs {
    /// Root node id or selector
    pub root: String,

    /// Stop at the first visited node matching this selector
    #[arg(long, value_name = "SELECTOR")]
    pub find: Option<String>,

    /// Follow edges only from source to target
    #[arg(long)]
    pub directed: bool,

    /// Log each visited node
    #[arg(long)]
    pub debug: bool,
}

/// Arguments shared by the weighted commands
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Follow edges only from source to target
    #[arg(long)]
    pub directed: bool,

    /// Edge data attribute holding the weight (default: every edge weighs 1)
    #[arg(long, value_name = "ATTR")]
    pub weight: Option<String>,

    /// Log each algorithm step
    #[arg(long)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first traversal from a root node
    Bfs(TraverseArgs),

    /// Depth-first traversal from a root node
    Dfs(TraverseArgs),

    /// Single-source shortest paths (non-negative weights)
    Dijkstra {
        /// Root node id or selector
        root: String,

        /// Only report the path to this node
        #[arg(long)]
        to: Option<String>,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Shortest path between two nodes guided by a heuristic
    Astar {
        /// Start node id or selector
        root: String,

        /// Goal node id or selector
        goal: String,

        /// Node data attribute holding the heuristic estimate (default: 0)
        #[arg(long, value_name = "ATTR")]
        heuristic: Option<String>,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Single-source shortest paths allowing negative weights
    BellmanFord {
        /// Root node id or selector
        root: String,

        /// Only report the path to this node
        #[arg(long)]
        to: Option<String>,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Shortest paths between every pair of nodes
    FloydWarshall {
        /// Restrict output to paths starting at this node
        #[arg(long)]
        from: Option<String>,

        /// Restrict output to paths ending at this node
        #[arg(long)]
        to: Option<String>,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Minimum spanning forest
    Kruskal {
        #[command(flatten)]
        query: QueryArgs,
    },
}
