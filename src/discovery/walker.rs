// src/discovery/walker.rs

use crate::config::Config;
use log::trace;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use walkdir::{DirEntry, WalkDir};

/// Returns `true` if a directory with this name must not be descended into.
///
/// Matching is by exact name only; patterns are not interpreted.
///
/// # Examples
///
/// ```
/// use projcat::discovery::is_excluded_dir;
/// use std::collections::BTreeSet;
///
/// let excluded: BTreeSet<String> = ["node_modules", ".git"].map(String::from).into();
/// assert!(is_excluded_dir("node_modules", &excluded));
/// assert!(!is_excluded_dir("node_modules_backup", &excluded));
/// assert!(!is_excluded_dir("src", &excluded));
/// ```
pub fn is_excluded_dir(name: &str, exclude_dirs: &BTreeSet<String>) -> bool {
    exclude_dirs.contains(name)
}

/// Builds the top-down walk over the project directory.
///
/// Within each directory the files come first, sorted by name, followed by the
/// subdirectories, sorted by name. Excluded subdirectories are cut from the walk
/// before it enters them. Symbolic links are reported but never followed.
pub(super) fn build_walker(
    config: &Config,
) -> impl Iterator<Item = walkdir::Result<DirEntry>> + '_ {
    WalkDir::new(&config.project_dir)
        .follow_links(false)
        .sort_by(files_before_dirs)
        .into_iter()
        .filter_entry(move |entry| !is_pruned(entry, &config.exclude_dirs))
}

fn files_before_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_pruned(entry: &DirEntry, exclude_dirs: &BTreeSet<String>) -> bool {
    // The walk root is never pruned, whatever its name.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    let pruned = is_excluded_dir(&name, exclude_dirs);
    if pruned {
        trace!("Pruning excluded directory: {}", entry.path().display());
    }
    pruned
}
