//! Configuration for graphq
//!
//! Settings live in `graphq.toml`. The file is looked up, in order, at the
//! path given on the command line, at `$GRAPHQ_CONFIG`, in the working
//! directory, and in the user config directory (`~/.config/graphq/`).
//! No file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};

pub use types::{DefaultsConfig, GraphqConfig, LoggingConfig, LOG_LEVELS};

pub const CONFIG_FILE: &str = "graphq.toml";
pub const CONFIG_ENV_VAR: &str = "GRAPHQ_CONFIG";
const CONFIG_DIR: &str = "graphq";

impl GraphqConfig {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| GraphError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GraphqConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Find and load the configuration file, falling back to defaults.
    ///
    /// An explicit path (flag or environment variable) must exist; the
    /// implicit locations are skipped when absent.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        let cwd = std::env::current_dir().ok();
        match Self::locate(explicit, env_path.as_deref(), cwd.as_deref(), dirs::config_dir()) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Resolve which file to load given each candidate source
    pub fn locate(
        explicit: Option<&Path>,
        env_path: Option<&Path>,
        cwd: Option<&Path>,
        user_config_dir: Option<PathBuf>,
    ) -> Option<PathBuf> {
        if let Some(path) = explicit.or(env_path) {
            return Some(path.to_path_buf());
        }

        let local = cwd.map(|dir| dir.join(CONFIG_FILE));
        let global = user_config_dir.map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE));
        [local, global].into_iter().flatten().find(|path| path.is_file())
    }

    fn validate(&self) -> Result<()> {
        if let Some(level) = &self.logging.level {
            if !LOG_LEVELS.contains(&level.as_str()) {
                crate::bail_unsupported!("logging.level", level, LOG_LEVELS.join(", "));
            }
        }
        for (key, value) in [
            ("defaults.weight_attribute", &self.defaults.weight_attribute),
            ("defaults.heuristic_attribute", &self.defaults.heuristic_attribute),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                crate::bail_invalid!(key, "empty attribute name");
            }
        }
        Ok(())
    }
}
