//! Walks the project directory and yields candidate files.
//!
//! Excluded directories are pruned during the walk, so nothing beneath them is
//! ever a candidate. Every non-directory entry that remains is a
//! candidate, in deterministic order; the filter chain decides what happens to it.

use crate::config::Config;
use crate::core_types::CandidateFile;
use crate::filtering::split_extension;
use log::{trace, warn};
use std::path::Path;
use walkdir::DirEntry;

mod walker;

pub use walker::is_excluded_dir;
use walker::build_walker;

/// Returns the candidate files under `config.project_dir`, lazily, in walk order.
///
/// Errors reading a directory or an entry are logged and the entry is skipped,
/// the rest of the walk continues.
///
/// # Examples
///
/// ```
/// use projcat::config::Config;
/// use projcat::discovery::discover_candidates;
/// # use std::fs;
/// # use tempfile::tempdir;
/// # fn main() -> std::io::Result<()> {
/// # let temp = tempdir()?;
/// fs::create_dir(temp.path().join("src"))?;
/// fs::write(temp.path().join("src").join("lib.py"), "x = 1\n")?;
/// fs::write(temp.path().join("README.md"), "# readme\n")?;
///
/// let config = Config::new_for_test(temp.path());
/// let paths: Vec<String> = discover_candidates(&config)
///     .map(|c| c.relative_path)
///     .collect();
/// assert_eq!(paths, vec!["README.md", "src/lib.py"]);
/// # Ok(())
/// # }
/// ```
pub fn discover_candidates(config: &Config) -> impl Iterator<Item = CandidateFile> + '_ {
    build_walker(config).filter_map(move |entry_result| match entry_result {
        Ok(entry) => to_candidate(&entry, &config.project_dir),
        Err(e) => {
            warn!("Walker error: {}", e);
            None
        }
    })
}

fn to_candidate(entry: &DirEntry, root: &Path) -> Option<CandidateFile> {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return None;
    }
    // Links to directories are neither descended into nor scanned. Special
    // files (FIFOs, sockets) are candidates; the filter chain skips them.
    if file_type.is_symlink() && entry.path().is_dir() {
        trace!("Skipping symlinked directory: {}", entry.path().display());
        return None;
    }

    let absolute_path = entry.path().to_path_buf();
    let relative_path = relative_display_path(&absolute_path, root);
    let name = entry.file_name().to_string_lossy().into_owned();
    let extension = split_extension(&name).map(str::to_string);

    Some(CandidateFile {
        absolute_path,
        relative_path,
        name,
        extension,
    })
}

/// Path relative to the project root, joined with `/` on every platform.
fn relative_display_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or_else(|err| {
        warn!(
            "Failed to strip prefix '{}' from '{}': {}. Using absolute path.",
            root.display(),
            path.display(),
            err
        );
        path
    });
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
