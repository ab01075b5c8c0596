//! Configuration type definitions

use serde::Deserialize;

/// Log levels accepted in `[logging] level`
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Contents of `graphq.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphqConfig {
    /// Defaults applied to every query unless a flag overrides them
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[defaults]` table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Honour edge direction
    #[serde(default)]
    pub directed: bool,

    /// Edge data attribute holding the weight (unit weight when unset)
    pub weight_attribute: Option<String>,

    /// Node data attribute holding the A* heuristic (zero when unset)
    pub heuristic_attribute: Option<String>,

    /// Emit per-step debug events
    #[serde(default)]
    pub debug: bool,
}

/// `[logging]` table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of [`LOG_LEVELS`]
    pub level: Option<String>,

    /// Emit JSON log lines instead of compact text
    #[serde(default)]
    pub json: bool,
}
