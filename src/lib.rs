//! `projcat` is a library and command-line tool that concatenates the text files
//! of a project into a single file, ready to be pasted into a large-language-model
//! prompt.
//!
//! The pipeline has three stages:
//! 1.  **Discover**: walk the project top-down in sorted order, pruning excluded
//!     directories.
//! 2.  **Filter**: decide for each candidate file whether it is included, checking
//!     extension, exclusion patterns, size and decodability, in that order.
//! 3.  **Concatenate**: wrap every included file in start/end markers, behind an
//!     optional project header, and measure the result.
//!
//! [`concatenate`] runs the pipeline in memory; [`run`] also writes the result to
//! the configured output file.
//!
//! # Example: Library Usage
//!
//! ```
//! use projcat::{concatenate, CancellationToken, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("app.py"), "print('hello')\n").unwrap();
//! fs::write(temp_dir.path().join("logo.png"), b"\x89PNG").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .project_dir(temp_dir.path().to_str().unwrap())
//!     .no_header(true)
//!     .build()
//!     .unwrap();
//!
//! let token = CancellationToken::new();
//! let result = concatenate(&config, &token, None).unwrap();
//!
//! assert_eq!(
//!     result.output,
//!     "--- START FILE: app.py ---\nprint('hello')\n\n--- END FILE: app.py ---\n\n"
//! );
//! assert_eq!(result.summary.files_scanned, 2);
//! assert_eq!(result.summary.files_included, 1);
//! ```

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod reporter;
pub mod signal;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder};
pub use core_types::{CandidateFile, FileDecision, RunSummary, SkipReason, Verdict};
pub use errors::{Error, Result};
pub use reporter::DecisionReporter;

use crate::errors::ConfigError;
use log::{debug, info};

/// The in-memory result of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Concatenation {
    /// The complete output text, header included.
    pub output: String,
    pub summary: RunSummary,
}

/// Runs discovery, filtering and concatenation without writing anything to disk.
///
/// Every candidate file produces exactly one decision, which is passed to
/// `reporter` (if any) and recorded in the returned summary. Files that cannot
/// be read are skipped, never fatal.
///
/// # Errors
/// Returns `Error::Interrupted` if `token` is cancelled before the walk
/// finishes, and `Error::Format` if building the output string fails.
pub fn concatenate(
    config: &Config,
    token: &CancellationToken,
    mut reporter: Option<&mut dyn DecisionReporter>,
) -> Result<Concatenation> {
    info!("Scanning '{}'", config.project_dir.display());
    let mut output = String::new();
    let mut summary = RunSummary::default();

    if config.header {
        output::write_header(&mut output, &config.project_dir)?;
    }

    for candidate in discovery::discover_candidates(config) {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }
        let evaluation = filtering::evaluate(&candidate, config);
        if let Some(content) = &evaluation.content {
            output::write_file_block(&mut output, &candidate.relative_path, content)?;
        }
        summary.record(&evaluation.decision);
        if let Some(reporter) = reporter.as_deref_mut() {
            reporter.report(&evaluation.decision);
        }
    }
    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }

    summary.finish(&output);
    debug!(
        "Concatenated {} of {} files into {} bytes",
        summary.files_included, summary.files_scanned, summary.output_bytes
    );
    Ok(Concatenation { output, summary })
}

/// Executes the complete pipeline and writes the result to `config.output_path`.
///
/// This mirrors the command-line run. The output is written atomically and
/// only once the whole project has been scanned, even when no file was included.
///
/// # Errors
/// Returns `ConfigError::Missing` (before scanning) if no output path is
/// configured, `Error::Interrupted` on cancellation, and `Error::OutputWrite`
/// if the output cannot be written.
pub fn run(
    config: &Config,
    token: &CancellationToken,
    reporter: Option<&mut dyn DecisionReporter>,
) -> Result<RunSummary> {
    let output_path = config
        .output_path
        .as_deref()
        .ok_or_else(|| ConfigError::Missing("output file".to_string()))?;

    let Concatenation { output, summary } = concatenate(config, token, reporter)?;
    output::write_atomically(output_path, &output)?;
    info!("Wrote {} bytes to '{}'", summary.output_bytes, output_path.display());
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_project() -> anyhow::Result<tempfile::TempDir> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.py"), "print('a')\n")?;
        fs::create_dir(temp.path().join("b"))?;
        fs::write(temp.path().join("b").join("secret.lock"), "locked")?;
        fs::write(temp.path().join("b").join("c.py"), "print('c')\n")?;
        Ok(temp)
    }

    #[test]
    fn test_concatenate_basic_scenario() -> anyhow::Result<()> {
        let temp = sample_project()?;
        let config = ConfigBuilder::new()
            .project_dir(temp.path().to_str().unwrap())
            .build()?;

        let result = concatenate(&config, &CancellationToken::new(), None)?;

        let expected = format!(
            "# Project: {}\n# Concatenated Files Output\n# --------------------------------------------------\n\n\
             --- START FILE: a.py ---\nprint('a')\n\n--- END FILE: a.py ---\n\n\
             --- START FILE: b/c.py ---\nprint('c')\n\n--- END FILE: b/c.py ---\n\n",
            config.project_dir.display()
        );
        assert_eq!(result.output, expected);
        assert_eq!(result.summary.files_scanned, 3);
        assert_eq!(result.summary.files_included, 2);
        // "secret.lock" fails the extension check before the exclusion patterns.
        assert_eq!(result.summary.skipped.extension_mismatch, 1);
        assert_eq!(result.summary.output_bytes, expected.len());
        Ok(())
    }

    #[test]
    fn test_reporter_sees_every_decision_in_order() -> anyhow::Result<()> {
        let temp = sample_project()?;
        let config = ConfigBuilder::new()
            .project_dir(temp.path().to_str().unwrap())
            .build()?;

        let mut decisions: Vec<FileDecision> = Vec::new();
        concatenate(&config, &CancellationToken::new(), Some(&mut decisions))?;

        let paths: Vec<_> = decisions.iter().map(|d| d.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["a.py", "b/c.py", "b/secret.lock"]);
        assert_eq!(
            decisions[2].verdict,
            Verdict::Skip(SkipReason::ExtensionMismatch)
        );
        Ok(())
    }

    #[test]
    fn test_cancelled_token_stops_the_run() -> anyhow::Result<()> {
        let temp = sample_project()?;
        let out = temp.path().join("out.txt");
        let config = ConfigBuilder::new()
            .project_dir(temp.path().to_str().unwrap())
            .output_file(out.to_str().unwrap())
            .build()?;

        let token = CancellationToken::new();
        token.cancel();

        assert!(matches!(run(&config, &token, None), Err(Error::Interrupted)));
        assert!(!out.exists());
        Ok(())
    }

    #[test]
    fn test_run_requires_output_path() -> anyhow::Result<()> {
        let temp = sample_project()?;
        let config = ConfigBuilder::new()
            .project_dir(temp.path().to_str().unwrap())
            .build()?;
        assert!(matches!(
            run(&config, &CancellationToken::new(), None),
            Err(Error::Config(ConfigError::Missing(_)))
        ));
        Ok(())
    }

    #[test]
    fn test_run_writes_output_even_when_nothing_matches() -> anyhow::Result<()> {
        let temp = sample_project()?;
        let out_dir = tempdir()?;
        let out = out_dir.path().join("out.txt");
        let config = ConfigBuilder::new()
            .project_dir(temp.path().to_str().unwrap())
            .output_file(out.to_str().unwrap())
            .extensions(vec!["rs".to_string()])
            .no_header(true)
            .build()?;

        let summary = run(&config, &CancellationToken::new(), None)?;
        assert_eq!(summary.files_included, 0);
        assert_eq!(summary.files_scanned, 3);
        assert_eq!(fs::read_to_string(&out)?, "");
        Ok(())
    }
}
