// src/output/file_block.rs

use crate::constants::{END_MARKER_PREFIX, MARKER_SUFFIX, START_MARKER_PREFIX};
use std::fmt::{self, Write};

/// Writes one included file wrapped in its start and end markers.
///
/// The content is written verbatim. A newline always precedes the end marker,
/// so content that already ends with one leaves a blank line before it.
///
/// # Examples
///
/// ```
/// use projcat::output::write_file_block;
///
/// let mut out = String::new();
/// write_file_block(&mut out, "src/a.py", "x = 1\n").unwrap();
/// assert_eq!(
///     out,
///     "--- START FILE: src/a.py ---\nx = 1\n\n--- END FILE: src/a.py ---\n\n"
/// );
/// ```
pub fn write_file_block(writer: &mut dyn Write, relative_path: &str, content: &str) -> fmt::Result {
    writeln!(writer, "{START_MARKER_PREFIX}{relative_path}{MARKER_SUFFIX}")?;
    writer.write_str(content)?;
    writeln!(writer)?;
    writeln!(writer, "{END_MARKER_PREFIX}{relative_path}{MARKER_SUFFIX}")?;
    writeln!(writer)
}
