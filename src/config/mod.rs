//! Defines the `Config` struct used by every stage of the pipeline.
//!
//! A `Config` is produced by [`ConfigBuilder`] (directly, or from the parsed
//! command line) and is immutable for the duration of a run.

use glob::Pattern;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
pub use parsing::normalize_extensions;
mod builder;
mod parsing;
pub mod path_resolve;
mod validation;

/// Settings for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute, lexically normalized project directory. The walk root.
    pub project_dir: PathBuf,
    /// Where `run` writes the result. `concatenate` does not need it.
    pub output_path: Option<PathBuf>,
    /// Normalized extensions (with leading dot) and literal filenames to include.
    pub extensions: BTreeSet<String>,
    /// Directory names that are never descended into.
    pub exclude_dirs: BTreeSet<String>,
    /// Filename patterns as given by the user.
    pub exclude_files: Vec<String>,
    /// Compiled form of `exclude_files`, in the same order.
    pub exclude_patterns: Vec<Pattern>,
    /// Per-file ceiling as given, in megabytes.
    pub max_file_size_mb: f64,
    /// Per-file ceiling in bytes. A file of exactly this size is still included.
    pub max_file_size_bytes: u64,
    /// Skip zero-byte files instead of including them with empty content.
    pub skip_empty_files: bool,
    /// Emit the three-line project banner before the first file.
    pub header: bool,
    /// Report the configuration and every decision on the console.
    pub verbose: bool,
}

impl Config {
    /// Creates a `Config` rooted at `project_dir` with all defaults, for tests.
    ///
    /// Performs no validation of `project_dir`.
    #[doc(hidden)]
    pub fn new_for_test(project_dir: impl Into<PathBuf>) -> Self {
        use crate::constants::{
            DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_FILES, DEFAULT_EXTENSIONS,
            DEFAULT_MAX_FILE_SIZE_MB,
        };
        let exclude_files: Vec<String> =
            DEFAULT_EXCLUDE_FILES.iter().map(|s| s.to_string()).collect();
        Self {
            project_dir: project_dir.into(),
            output_path: None,
            extensions: normalize_extensions(DEFAULT_EXTENSIONS.iter().map(|s| s.to_string())),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
            exclude_patterns: parsing::compile_exclusion_patterns(&exclude_files),
            exclude_files,
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
            max_file_size_bytes: parsing::max_size_in_bytes(DEFAULT_MAX_FILE_SIZE_MB),
            skip_empty_files: false,
            header: true,
            verbose: false,
        }
    }
}

impl fmt::Display for Config {
    /// One-line summary for logs. Patterns are shown as given, not compiled.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "project_dir={} output={:?} extensions={:?} exclude_dirs={:?} exclude_files={:?} \
             max_file_size={}MB ({} bytes) skip_empty={} header={} verbose={}",
            self.project_dir.display(),
            self.output_path,
            self.extensions,
            self.exclude_dirs,
            self.exclude_files,
            self.max_file_size_mb,
            self.max_file_size_bytes,
            self.skip_empty_files,
            self.header,
            self.verbose
        )
    }
}
