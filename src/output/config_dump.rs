// src/output/config_dump.rs

use crate::config::Config;
use std::io::{self, Write};

/// Writes the effective configuration, shown in verbose mode before scanning.
pub fn write_config_dump(writer: &mut dyn Write, config: &Config) -> io::Result<()> {
    let output = config
        .output_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    writeln!(writer, "--- Configuration ---")?;
    writeln!(writer, "Project Directory: {}", config.project_dir.display())?;
    writeln!(writer, "Output File: {}", output)?;
    writeln!(writer, "Included Extensions/Files: {:?}", config.extensions)?;
    writeln!(writer, "Excluded Directories: {:?}", config.exclude_dirs)?;
    writeln!(writer, "Excluded Files/Patterns: {:?}", config.exclude_files)?;
    writeln!(writer, "Max File Size: {} MB", config.max_file_size_mb)?;
    writeln!(writer, "No Header: {}", !config.header)?;
    writeln!(writer, "Skip Empty Files: {}", config.skip_empty_files)?;
    writeln!(writer, "---------------------\n")
}
