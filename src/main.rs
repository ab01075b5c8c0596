//! Graphq - graph query CLI
//!
//! Loads a graph document and runs one traversal, shortest-path or
//! spanning-tree algorithm over it per invocation.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use graphq_core::config::GraphqConfig;
use graphq_core::error::{ExitCode as GraphqExitCode, GraphError};
use graphq_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();
    let wants_json = json_format_in_argv(env::args().skip(1));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if wants_json => match parse_failure(&err) {
            // clap still owns help and version output
            None => err.exit(),
            Some(error) => {
                eprintln!("{}", error.to_json());
                return exit_with(&error);
            }
        },
        Err(err) => err.exit(),
    };

    // Logging settings can come from the config file
    let config = GraphqConfig::discover(cli.config.as_deref());
    let file_logging = config
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();

    if let Err(e) = logging::init_tracing(
        cli.verbose || cli.step_debug(),
        cli.log_level.as_deref().or(file_logging.level.as_deref()),
        cli.log_json || file_logging.json,
    ) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "cli_ready");

    match config.and_then(|config| commands::dispatch::run(&cli, &config, start)) {
        Ok(()) => ExitCode::from(GraphqExitCode::Success as u8),
        Err(error) => {
            match cli.format {
                OutputFormat::Json => eprintln!("{}", error.to_json()),
                OutputFormat::Human if !cli.quiet => eprintln!("error: {}", error),
                OutputFormat::Human => {}
            }
            exit_with(&error)
        }
    }
}

fn exit_with(error: &GraphError) -> ExitCode {
    ExitCode::from(error.exit_code() as u8)
}

/// Map a clap failure onto the JSON error envelope; `None` for help/version
fn parse_failure(err: &clap::Error) -> Option<GraphError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => Some(GraphError::UsageError(err.to_string())),
        _ => Some(GraphError::Other(err.to_string())),
    }
}

/// Whether raw argv asks for `--format json`.
///
/// `Cli.format` is unavailable when clap rejects the command line, so the
/// error envelope decision has to be made from the raw arguments.
fn json_format_in_argv(mut args: impl Iterator<Item = String>) -> bool {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" => {
                if args.next().as_deref() == Some("json") {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}
