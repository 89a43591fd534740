//! Paths module - Resolves the source tree locations baked into `config.h`
//!
//! Resolution is a pure function of an [`Environment`] snapshot and a
//! [`TargetMode`]; nothing here touches the filesystem.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use xshell::Shell;

use super::config::{env_vars, header, layout};
use super::error::ConfigureError;

/// Which path set the generated header carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TargetMode {
    /// Absolute host paths only
    #[default]
    Native,
    /// Root-relative paths for runtimes that mount the tree at `/`, plus the
    /// native set as fallback
    Virtualized,
}

impl fmt::Display for TargetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetMode::Native => write!(f, "native"),
            TargetMode::Virtualized => write!(f, "virtualized"),
        }
    }
}

/// What to do when no base directory override is present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BaseDirPolicy {
    /// Use the working directory
    #[default]
    FallbackToCwd,
    /// Fail with [`ConfigureError::MissingEnvironment`]
    Required,
}

/// Where the resolved base directory came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseDirSource {
    Override,
    WorkingDirectory,
}

/// Process inputs the generator depends on, captured once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub base_dir_override: Option<PathBuf>,
    pub current_dir: PathBuf,
}

impl Environment {
    /// Snapshot `NAT_BASE_DIR` and the working directory from a shell.
    ///
    /// An empty `NAT_BASE_DIR` counts as unset.
    pub fn capture(sh: &Shell) -> Self {
        let base_dir_override = sh
            .var_os(env_vars::BASE_DIR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            base_dir_override,
            current_dir: sh.current_dir(),
        }
    }

    /// Replace the override when `base_dir` is `Some`.
    pub fn with_base_dir(mut self, base_dir: Option<PathBuf>) -> Self {
        if base_dir.is_some() {
            self.base_dir_override = base_dir;
        }
        self
    }

    /// Fill the override only if nothing set it yet.
    pub fn or_base_dir(mut self, base_dir: Option<PathBuf>) -> Self {
        if self.base_dir_override.is_none() {
            self.base_dir_override = base_dir;
        }
        self
    }
}

/// Macro values for one branch of the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroSet {
    pub base_dir: String,
    pub core_loc: String,
    pub system_loc: String,
}

/// Resolved project layout.
///
/// Only the base directory is stored; every other location is derived from it
/// so the core index and system module always sit under `src/core`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPathConfig {
    base_dir: PathBuf,
    source: BaseDirSource,
    target: TargetMode,
}

impl BuildPathConfig {
    /// Resolve the layout from an environment snapshot.
    ///
    /// A relative override is joined onto the working directory.
    pub fn resolve(
        env: &Environment,
        target: TargetMode,
        policy: BaseDirPolicy,
    ) -> Result<Self, ConfigureError> {
        let (base_dir, source) = match &env.base_dir_override {
            Some(dir) => (env.current_dir.join(dir), BaseDirSource::Override),
            None => match policy {
                BaseDirPolicy::FallbackToCwd => {
                    (env.current_dir.clone(), BaseDirSource::WorkingDirectory)
                }
                BaseDirPolicy::Required => {
                    return Err(ConfigureError::MissingEnvironment {
                        var: env_vars::BASE_DIR,
                    });
                }
            },
        };

        tracing::debug!(base_dir = %base_dir.display(), ?source, %target, "resolved base directory");

        Ok(Self {
            base_dir,
            source,
            target,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn source(&self) -> BaseDirSource {
        self.source
    }

    pub fn target(&self) -> TargetMode {
        self.target
    }

    /// `<base>/src`
    pub fn src_dir(&self) -> PathBuf {
        self.base_dir.join(layout::SRC)
    }

    /// `<base>/src/core/index`
    pub fn core_index_loc(&self) -> PathBuf {
        self.core_dir().join(layout::INDEX_NAME)
    }

    /// `<base>/src/core/system`
    pub fn system_loc(&self) -> PathBuf {
        self.core_dir().join(layout::SYSTEM)
    }

    /// `<base>/src/config.h`
    pub fn output_path(&self) -> PathBuf {
        self.src_dir().join(layout::CONFIG_HEADER)
    }

    fn core_dir(&self) -> PathBuf {
        self.src_dir().join(layout::CORE)
    }

    /// Absolute host paths.
    pub fn native_macros(&self) -> Result<MacroSet, ConfigureError> {
        Ok(MacroSet {
            base_dir: path_str(&self.base_dir)?,
            core_loc: path_str(&self.core_index_loc())?,
            system_loc: path_str(&self.system_loc())?,
        })
    }

    /// Root-relative paths, independent of the base directory.
    ///
    /// Always `/`-separated, whatever the host uses.
    pub fn virtual_macros(&self) -> MacroSet {
        MacroSet {
            base_dir: header::VIRTUAL_ROOT.to_string(),
            core_loc: virtual_path(&[layout::SRC, layout::CORE, layout::INDEX_NAME]),
            system_loc: virtual_path(&[layout::SRC, layout::CORE, layout::SYSTEM]),
        }
    }
}

fn path_str(path: &Path) -> Result<String, ConfigureError> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| ConfigureError::NonUtf8Path(path.to_path_buf()))
}

fn virtual_path(components: &[&str]) -> String {
    format!("{}{}", header::VIRTUAL_ROOT, components.join("/"))
}
