//! Designer configuration.
//!
//! Settings come from an optional TOML file. Its location is, in order: an
//! explicit path (the `--config` flag), `$FSM_DESIGNER_CONFIG`, then
//! `~/.fsm-designer/config.toml`. A missing file means defaults.

use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "FSM_DESIGNER_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DesignerConfig {
    /// Prompt printed before each statement.
    pub prompt: String,
    /// Print the startup banner.
    pub banner: bool,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// How deeply `LOAD`ed scripts may load further scripts.
    pub max_script_depth: usize,
    /// Transcript file to start logging to at launch.
    pub default_transcript: Option<PathBuf>,
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            prompt: "? ".to_string(),
            banner: true,
            log_level: "warn".to_string(),
            max_script_depth: 8,
            default_transcript: None,
        }
    }
}

impl DesignerConfig {
    /// Load configuration, falling back to defaults when no file exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match config_path(explicit) {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".fsm-designer").join("config.toml"))
}
