// src/output/writer.rs

//! Writes the finished output to its destination.
//!
//! The content goes to a temporary file next to the destination, which is then
//! renamed over it. A failed run therefore never leaves a truncated output file,
//! and an existing file at the destination is kept intact.

use crate::errors::{Error, Result};
use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically replaces `path` with `contents`.
///
/// # Errors
/// Returns `Error::OutputWrite` naming `path` if the directory is missing or
/// unwritable, or if the rename fails (e.g. `path` is a directory).
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    write_via_temp(path, contents).map_err(|source| Error::OutputWrite {
        path: path.display().to_string(),
        source,
    })
}

fn write_via_temp(path: &Path, contents: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(contents.as_bytes())?;
    temp.flush()?;
    copy_permissions(path, temp.as_file())?;

    debug!(
        "Persisting {} bytes from '{}' to '{}'",
        contents.len(),
        temp.path().display(),
        path.display()
    );
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Gives the temporary file the permissions the output would normally have.
///
/// Temporary files are created owner-only; a replaced file keeps its mode and a
/// new one gets the usual `0644`.
fn copy_permissions(path: &Path, temp: &fs::File) -> io::Result<()> {
    match fs::metadata(path) {
        Ok(existing) => temp.set_permissions(existing.permissions()),
        Err(_) => set_default_permissions(temp),
    }
}

#[cfg(unix)]
fn set_default_permissions(temp: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    temp.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_temp: &fs::File) -> io::Result<()> {
    Ok(())
}
