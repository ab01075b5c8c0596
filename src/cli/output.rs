use clap::ValueEnum;

/// Output format for command results and errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for terminals
    #[default]
    Human,
    /// One JSON document on stdout; errors as a JSON envelope on stderr
    Json,
}
