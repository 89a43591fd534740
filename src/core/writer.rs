//! Writer module - Replaces the generated header atomically
//!
//! The text goes to a temporary file next to the destination which is then
//! renamed over it. A failed run leaves any previous header untouched and
//! never creates the destination directory. The replacement keeps the mode of
//! the header it replaces; a new header gets `0644`.

use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use super::error::ConfigureError;

/// Write `contents` to `dest`, replacing it if present.
pub fn write_atomic(dest: &Path, contents: &str) -> Result<(), ConfigureError> {
    let fail = |source: std::io::Error| ConfigureError::WriteFailure {
        path: dest.to_path_buf(),
        source,
    };

    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(fail)?;
    if let Some(permissions) = target_permissions(dest) {
        tmp.as_file().set_permissions(permissions).map_err(fail)?;
    }
    tmp.write_all(contents.as_bytes()).map_err(fail)?;
    tmp.as_file().sync_all().map_err(fail)?;
    tmp.persist(dest).map_err(|e| fail(e.error))?;

    tracing::debug!(path = %dest.display(), bytes = contents.len(), "header written");
    Ok(())
}

/// Mode of the existing header, or the default for a new one.
fn target_permissions(dest: &Path) -> Option<Permissions> {
    match fs::metadata(dest) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}
