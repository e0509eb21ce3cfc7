//! Whole-file replacement.
//!
//! Content is written to a temporary file next to the destination, then persisted over it.
//! The destination is either the old file or the complete new one, never a partial write.
//! Replaced files keep their permissions. New files are created `rw-r--r--` on unix.
use std::fs::Permissions;
use std::io::{self, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::Error;

/// Replace the content of `path` with `bytes`.
///
/// The parent folder of `path` has to exist.
/// If `path` already exists, its permissions are carried over to the new content.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::fs(dir, e))?;
    tmp.write_all(bytes).map_err(|e| Error::fs(path, e))?;
    tmp.flush().map_err(|e| Error::fs(path, e))?;

    if let Some(permissions) = target_permissions(path)? {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::fs(path, e))?;
    }

    debug!("persisting {} bytes to {:?}", bytes.len(), path);
    tmp.persist(path).map_err(|e| Error::fs(path, e.error))?;

    Ok(())
}

/// Permissions the persisted file should have.
///
/// Temporary files are created owner-only, so they have to be widened
/// to match either the replaced file or the usual default.
fn target_permissions(path: &Path) -> Result<Option<Permissions>, Error> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(default_permissions()),
        Err(e) => Err(Error::fs(path, e)),
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
