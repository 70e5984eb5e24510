// src/output/summary.rs

use crate::core_types::RunSummary;
use log::debug;
use std::io::{self, Write};
use std::path::Path;

const LARGE_OUTPUT_WARNING: &str =
    "Warning: The output is large. LLMs have context window limits. Consider refining your includes/excludes.";
const LARGE_OUTPUT_HINT: &str =
    "         For very large projects, consider processing specific subdirectories or features.";

/// Writes the post-run console report, plus the advisory when the output is large.
pub fn write_report(writer: &mut dyn Write, summary: &RunSummary, output_path: &Path) -> io::Result<()> {
    debug!(
        "Run summary: {} scanned, {} included ({} source bytes), {} skipped {:?}",
        summary.files_scanned,
        summary.files_included,
        summary.bytes_included,
        summary.skipped.total(),
        summary.skipped
    );
    writeln!(
        writer,
        "\nSuccessfully concatenated {} files out of {} scanned.",
        summary.files_included, summary.files_scanned
    )?;
    writeln!(writer, "Output written to: {}", output_path.display())?;
    writeln!(writer, "Total output string size: {:.2} MB", summary.output_megabytes())?;
    writeln!(
        writer,
        "Estimated token count (rough): {}",
        group_thousands(summary.estimated_tokens)
    )?;

    if summary.is_large() {
        writeln!(writer, "{LARGE_OUTPUT_WARNING}")?;
        writeln!(writer, "{LARGE_OUTPUT_HINT}")?;
    }
    writer.flush()
}

/// Formats a count with `,` between groups of three digits.
pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
