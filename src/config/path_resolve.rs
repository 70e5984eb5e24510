// src/config/path_resolve.rs

use crate::errors::{io_error_with_path, Error, Result};
use std::path::{Component, Path, PathBuf};

/// Resolves the project directory argument to an absolute path.
///
/// The directory must exist. The result is made absolute against the current
/// directory and cleaned of `.` and `..` components, without resolving symlinks,
/// so the header shows the path the user asked for.
pub fn resolve_project_dir(project_dir: &str) -> Result<PathBuf> {
    let path = Path::new(project_dir);
    if !path.is_dir() {
        return Err(Error::InvalidProjectDir(project_dir.to_string()));
    }
    absolutize(path)
}

/// Makes `path` absolute and lexically normalized.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|e| io_error_with_path(e, path))?;
    Ok(normalize_lexically(&absolute))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` refuses to remove the root, so "/.." stays "/".
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
