// src/output/header.rs

use crate::constants::{HEADER_PROJECT_PREFIX, HEADER_RULE, HEADER_TITLE};
use std::fmt::{self, Write};
use std::path::Path;

/// Writes the project banner, followed by a blank line.
pub fn write_header(writer: &mut dyn Write, project_dir: &Path) -> fmt::Result {
    writeln!(writer, "{}{}", HEADER_PROJECT_PREFIX, project_dir.display())?;
    writeln!(writer, "{}", HEADER_TITLE)?;
    writeln!(writer, "{}", HEADER_RULE)?;
    writeln!(writer)
}
