//! Error module - Failures of the configure step

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving paths or writing `config.h`.
#[derive(Debug, Error)]
pub enum ConfigureError {
    /// The base directory was made mandatory but nothing supplied it.
    #[error("{var} is not set and a base directory is required")]
    MissingEnvironment { var: &'static str },

    /// The header could not be written.
    #[error("Failed to write {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A path cannot be emitted as a C string literal.
    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),

    /// The settings file could not be read or parsed.
    #[error("Invalid settings file {path}: {reason}")]
    Settings { path: PathBuf, reason: String },
}
