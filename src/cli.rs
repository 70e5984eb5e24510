// src/cli.rs

use crate::constants::{
    DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_FILES, DEFAULT_EXTENSIONS, DEFAULT_MAX_FILE_SIZE_MB,
};
use clap::Parser;

/// Concatenate project files into a single file for LLM input.
///
/// projcat walks PROJECT_DIR top-down, keeps files whose extension or name is
/// in the include list, drops excluded directories, excluded name patterns,
/// oversized and undecodable files, and writes everything that remains into
/// OUTPUT_FILE, each file wrapped in START/END marker lines.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The root directory of the project to scan.
    pub project_dir: String,

    /// The path to the output file where concatenated content will be saved.
    pub output_file: String,

    /// File extensions/names to include (e.g., .py js Dockerfile). Short lowercase
    /// words like "py" are treated as extensions.
    #[arg(
        long,
        value_name = "EXT",
        num_args = 0..,
        default_values_t = DEFAULT_EXTENSIONS.iter().map(|s| s.to_string())
    )]
    pub extensions: Vec<String>,

    /// Directory names to exclude (exact name match; their whole subtree is skipped).
    #[arg(
        long,
        value_name = "DIR",
        num_args = 0..,
        default_values_t = DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string())
    )]
    pub exclude_dirs: Vec<String>,

    /// File names/patterns to exclude (supports wildcards like *.log).
    #[arg(
        long,
        value_name = "GLOB",
        num_args = 0..,
        default_values_t = DEFAULT_EXCLUDE_FILES.iter().map(|s| s.to_string())
    )]
    pub exclude_files: Vec<String>,

    /// Maximum size (in MB) for individual files to be included.
    #[arg(
        long,
        value_name = "MB",
        allow_negative_numbers = true,
        default_value_t = DEFAULT_MAX_FILE_SIZE_MB
    )]
    pub max_file_size: f64,

    /// Do not include the overall project header in the output.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_header: bool,

    /// Skip zero-byte files instead of including them with empty content.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub skip_empty: bool,

    /// Print the configuration and which files are being skipped or included.
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}
