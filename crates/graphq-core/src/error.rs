//! Error types and exit codes for graphq
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, parse errors, negative cycles)
//! - 2: Usage error (missing parameters, bad selectors, bad values)
//! - 3: Data error (unresolvable elements, malformed graph documents)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the graphq CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unresolvable element, malformed document (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading graphs or running queries
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("missing required parameter: {parameter}")]
    MissingRequiredParameter { parameter: String },

    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("selector `{selector}` did not resolve to any node")]
    UnresolvableSelector { selector: String },

    #[error("duplicate element id: {id}")]
    DuplicateId { id: String },

    #[error("edge {edge} references unknown node {node}")]
    DanglingEdge { edge: String, node: String },

    #[error("edge {edge} has non-finite weight {weight}")]
    InvalidWeight { edge: String, weight: f64 },

    // Generic failures (exit code 1)
    #[error("negative-weight cycle reachable from {root}")]
    NegativeCycleDetected { root: String },

    #[error("failed to read {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a parameter the caller did not supply
    pub fn missing(parameter: &str) -> Self {
        GraphError::MissingRequiredParameter {
            parameter: parameter.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        GraphError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a selector (or bare id) that matched nothing
    pub fn unresolvable(selector: impl Into<String>) -> Self {
        GraphError::UnresolvableSelector {
            selector: selector.into(),
        }
    }

    /// Create an error for malformed selector syntax
    pub fn invalid_selector(selector: &str, reason: impl Into<String>) -> Self {
        GraphError::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::MissingRequiredParameter { .. }
            | GraphError::InvalidSelector { .. }
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. }
            | GraphError::Unsupported { .. } => ExitCode::Usage,

            GraphError::UnresolvableSelector { .. }
            | GraphError::DuplicateId { .. }
            | GraphError::DanglingEdge { .. }
            | GraphError::InvalidWeight { .. } => ExitCode::Data,

            GraphError::NegativeCycleDetected { .. }
            | GraphError::ReadFile { .. }
            | GraphError::Io(_)
            | GraphError::Yaml(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::MissingRequiredParameter { .. } => "missing_required_parameter",
            GraphError::InvalidSelector { .. } => "invalid_selector",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Unsupported { .. } => "unsupported",
            GraphError::UnresolvableSelector { .. } => "unresolvable_selector",
            GraphError::DuplicateId { .. } => "duplicate_id",
            GraphError::DanglingEdge { .. } => "dangling_edge",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::NegativeCycleDetected { .. } => "negative_cycle_detected",
            GraphError::ReadFile { .. } => "read_file",
            GraphError::Io(_) => "io_error",
            GraphError::Yaml(_) => "yaml_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphq operations
pub type Result<T> = std::result::Result<T, GraphError>;
