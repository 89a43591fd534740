//! Settings module - Optional TOML settings file
//!
//! ```toml
//! [configure]
//! target = "virtualized"
//! base_dir = "/proj"
//! require_base_dir = false
//! emit_base_dir = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ConfigureError;
use super::paths::TargetMode;

/// Top-level settings file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub configure: ConfigureSettings,
}

/// `[configure]` table
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigureSettings {
    pub target: Option<TargetMode>,
    pub base_dir: Option<PathBuf>,
    #[serde(default)]
    pub require_base_dir: bool,
    #[serde(default)]
    pub emit_base_dir: bool,
}

impl Settings {
    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigureError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigureError::Settings {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content).map_err(|reason| ConfigureError::Settings {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigureError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.message().to_string())
    }
}
