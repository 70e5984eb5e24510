// src/config/builder.rs

use super::parsing::{compile_exclusion_patterns, max_size_in_bytes, normalize_extensions};
use super::path_resolve::resolve_project_dir;
use super::validation::validate_max_file_size;
use super::Config;
use crate::cli::Cli;
use crate::constants::{
    DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_FILES, DEFAULT_EXTENSIONS, DEFAULT_MAX_FILE_SIZE_MB,
};
use crate::errors::{ConfigError, Result};
use std::path::PathBuf;

/// A builder for creating a [`Config`] programmatically.
///
/// Every setting except the project directory has a default matching the
/// command line defaults.
///
/// # Examples
///
/// ```
/// use projcat::ConfigBuilder;
/// # use tempfile::tempdir;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let temp = tempdir()?;
/// # let project = temp.path().to_str().unwrap();
/// let config = ConfigBuilder::new()
///     .project_dir(project)
///     .output_file("context.txt")
///     .extensions(vec!["py".to_string(), "Dockerfile".to_string()])
///     .max_file_size(1.5)
///     .no_header(true)
///     .build()?;
///
/// assert!(config.extensions.contains(".py"));
/// assert!(config.extensions.contains("Dockerfile"));
/// assert_eq!(config.max_file_size_bytes, 1_572_864);
/// assert!(!config.header);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    project_dir: Option<String>,
    output_file: Option<String>,
    extensions: Option<Vec<String>>,
    exclude_dirs: Option<Vec<String>>,
    exclude_files: Option<Vec<String>>,
    max_file_size: Option<f64>,
    no_header: Option<bool>,
    skip_empty: Option<bool>,
    verbose: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            project_dir: Some(cli.project_dir),
            output_file: Some(cli.output_file),
            extensions: Some(cli.extensions),
            exclude_dirs: Some(cli.exclude_dirs),
            exclude_files: Some(cli.exclude_files),
            max_file_size: Some(cli.max_file_size),
            no_header: Some(cli.no_header),
            skip_empty: Some(cli.skip_empty),
            verbose: Some(cli.verbose),
        }
    }

    /// Sets the directory to scan. It must exist when `build` is called.
    pub fn project_dir(mut self, path: impl Into<String>) -> Self {
        self.project_dir = Some(path.into());
        self
    }

    /// Sets the file `run` writes to.
    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Sets the extension/filename tokens to include. They are normalized on `build`.
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    /// Sets the directory names to prune from the walk.
    pub fn exclude_dirs(mut self, dirs: Vec<String>) -> Self {
        self.exclude_dirs = Some(dirs);
        self
    }

    /// Sets the filename glob patterns to exclude.
    pub fn exclude_files(mut self, patterns: Vec<String>) -> Self {
        self.exclude_files = Some(patterns);
        self
    }

    /// Sets the per-file ceiling in megabytes.
    pub fn max_file_size(mut self, mb: f64) -> Self {
        self.max_file_size = Some(mb);
        self
    }

    pub fn no_header(mut self, no_header: bool) -> Self {
        self.no_header = Some(no_header);
        self
    }

    pub fn skip_empty(mut self, skip_empty: bool) -> Self {
        self.skip_empty = Some(skip_empty);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Validates the settings and builds the final `Config`.
    ///
    /// # Errors
    /// Returns a configuration error for a missing project directory or an
    /// invalid size ceiling, and `Error::InvalidProjectDir` if the project
    /// directory does not exist or is not a directory.
    pub fn build(self) -> Result<Config> {
        let max_file_size_mb = self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE_MB);
        validate_max_file_size(max_file_size_mb)?;

        let project_dir_arg = self
            .project_dir
            .ok_or_else(|| ConfigError::Missing("project directory".to_string()))?;
        let project_dir = resolve_project_dir(&project_dir_arg)?;

        let extensions = self
            .extensions
            .unwrap_or_else(|| to_owned_vec(DEFAULT_EXTENSIONS));
        let exclude_dirs = self
            .exclude_dirs
            .unwrap_or_else(|| to_owned_vec(DEFAULT_EXCLUDE_DIRS));
        let exclude_files = self
            .exclude_files
            .unwrap_or_else(|| to_owned_vec(DEFAULT_EXCLUDE_FILES));

        let config = Config {
            project_dir,
            output_path: self.output_file.map(PathBuf::from),
            extensions: normalize_extensions(extensions),
            exclude_dirs: exclude_dirs.into_iter().collect(),
            exclude_patterns: compile_exclusion_patterns(&exclude_files),
            exclude_files,
            max_file_size_mb,
            max_file_size_bytes: max_size_in_bytes(max_file_size_mb),
            skip_empty_files: self.skip_empty.unwrap_or(false),
            header: !self.no_header.unwrap_or(false),
            verbose: self.verbose.unwrap_or(false),
        };
        log::debug!("Built configuration: {}", config);
        Ok(config)
    }
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
