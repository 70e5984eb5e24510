//! Defines core data structures used throughout the pipeline.
//!
//! A [`CandidateFile`] is produced by the walk, judged by the filter chain into a
//! [`FileDecision`], and every decision is folded into the [`RunSummary`].

use crate::constants::{BYTES_PER_MB, CHARS_PER_TOKEN, LARGE_OUTPUT_MB, LARGE_OUTPUT_TOKENS};
use std::fmt;
use std::path::PathBuf;

/// A file visited during traversal, before any inclusion filtering.
///
/// # Examples
///
/// ```
/// use projcat::core_types::CandidateFile;
/// use std::path::PathBuf;
///
/// let candidate = CandidateFile {
///     absolute_path: PathBuf::from("/project/src/main.py"),
///     relative_path: "src/main.py".to_string(),
///     name: "main.py".to_string(),
///     extension: Some(".py".to_string()),
/// };
/// assert_eq!(candidate.name, "main.py");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Path on disk, rooted at the absolute project directory.
    pub absolute_path: PathBuf,
    /// Path relative to the project directory, always `/`-separated.
    pub relative_path: String,
    /// The file name (last path component).
    pub name: String,
    /// The extension including its leading dot, as written on disk (not lower-cased).
    pub extension: Option<String>,
}

/// Why a candidate file was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Neither the extension nor the full name is in the configured set.
    ExtensionMismatch,
    /// The name matched an exclusion pattern.
    ExcludedName,
    /// Larger than the configured ceiling.
    TooLarge {
        /// Size of the file in bytes.
        size: u64,
    },
    /// A zero-byte file, skipped because empty files were configured to be skipped.
    Empty,
    /// The file had bytes but none of them decoded to visible text.
    DecodeEmpty,
    /// The reader reported the data as undecodable.
    DecodeError(String),
    /// Metadata or content could not be read.
    ReadError(String),
}

impl SkipReason {
    /// Short stable identifier for the reason, used for grouping in the summary.
    pub fn kind(&self) -> &'static str {
        match self {
            SkipReason::ExtensionMismatch => "extension-mismatch",
            SkipReason::ExcludedName => "excluded-name",
            SkipReason::TooLarge { .. } => "too-large",
            SkipReason::Empty => "empty",
            SkipReason::DecodeEmpty => "decode-empty",
            SkipReason::DecodeError(_) => "decode-error",
            SkipReason::ReadError(_) => "read-error",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::ExtensionMismatch => write!(f, "extension mismatch"),
            SkipReason::ExcludedName => write!(f, "excluded file"),
            SkipReason::TooLarge { size } => {
                write!(f, "too large: {:.2}MB", *size as f64 / BYTES_PER_MB)
            }
            SkipReason::Empty => write!(f, "empty file"),
            SkipReason::DecodeEmpty => write!(f, "content became empty after decode"),
            SkipReason::DecodeError(msg) => write!(f, "decode error: {msg}. Likely a binary file"),
            SkipReason::ReadError(msg) => write!(f, "read error: {msg}"),
        }
    }
}

/// The outcome assigned to a candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Include,
    Skip(SkipReason),
}

/// A candidate file together with its verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDecision {
    /// Path relative to the project directory, `/`-separated.
    pub relative_path: String,
    /// Size in bytes, if the size check was reached and succeeded.
    pub size: Option<u64>,
    /// Set for zero-byte files, whether or not they were skipped.
    pub empty: bool,
    pub verdict: Verdict,
}

impl FileDecision {
    pub fn is_included(&self) -> bool {
        self.verdict == Verdict::Include
    }
}

impl fmt::Display for FileDecision {
    /// Renders the verbose trace line for this decision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Verdict::Include => {
                let kb = self.size.unwrap_or(0) as f64 / 1024.0;
                if self.empty {
                    write!(f, "Including (empty file): {} ({:.2} KB)", self.relative_path, kb)
                } else {
                    write!(f, "Including: {} ({:.2} KB)", self.relative_path, kb)
                }
            }
            Verdict::Skip(reason) => write!(f, "Skipping ({}): {}", reason, self.relative_path),
        }
    }
}

/// Per-reason skip counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    pub extension_mismatch: usize,
    pub excluded_name: usize,
    pub too_large: usize,
    pub empty: usize,
    pub decode_empty: usize,
    pub decode_error: usize,
    pub read_error: usize,
}

impl SkipCounts {
    fn record(&mut self, reason: &SkipReason) {
        let slot = match reason {
            SkipReason::ExtensionMismatch => &mut self.extension_mismatch,
            SkipReason::ExcludedName => &mut self.excluded_name,
            SkipReason::TooLarge { .. } => &mut self.too_large,
            SkipReason::Empty => &mut self.empty,
            SkipReason::DecodeEmpty => &mut self.decode_empty,
            SkipReason::DecodeError(_) => &mut self.decode_error,
            SkipReason::ReadError(_) => &mut self.read_error,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        self.extension_mismatch
            + self.excluded_name
            + self.too_large
            + self.empty
            + self.decode_empty
            + self.decode_error
            + self.read_error
    }
}

/// Aggregate statistics for one run.
///
/// Counters are filled in with [`RunSummary::record`] as decisions are made and
/// the output measurements are taken once by [`RunSummary::finish`].
///
/// # Examples
///
/// ```
/// use projcat::core_types::{FileDecision, RunSummary, SkipReason, Verdict};
///
/// let mut summary = RunSummary::default();
/// summary.record(&FileDecision {
///     relative_path: "a.py".to_string(),
///     size: Some(9),
///     empty: false,
///     verdict: Verdict::Include,
/// });
/// summary.record(&FileDecision {
///     relative_path: "logo.png".to_string(),
///     size: None,
///     empty: false,
///     verdict: Verdict::Skip(SkipReason::ExtensionMismatch),
/// });
/// summary.finish("12345678");
///
/// assert_eq!(summary.files_scanned, 2);
/// assert_eq!(summary.files_included, 1);
/// assert_eq!(summary.bytes_included, 9);
/// assert_eq!(summary.estimated_tokens, 2);
/// assert!(!summary.is_large());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Every candidate seen, regardless of its decision.
    pub files_scanned: usize,
    pub files_included: usize,
    /// Sum of the on-disk sizes of the included files.
    pub bytes_included: u64,
    pub skipped: SkipCounts,
    /// UTF-8 length of the final output.
    pub output_bytes: usize,
    /// Number of characters (Unicode scalar values) in the final output.
    pub output_chars: usize,
    /// `output_chars / 4`, truncated.
    pub estimated_tokens: usize,
}

impl RunSummary {
    pub fn record(&mut self, decision: &FileDecision) {
        self.files_scanned += 1;
        match &decision.verdict {
            Verdict::Include => {
                self.files_included += 1;
                self.bytes_included += decision.size.unwrap_or(0);
            }
            Verdict::Skip(reason) => self.skipped.record(reason),
        }
    }

    pub fn finish(&mut self, output: &str) {
        self.output_bytes = output.len();
        self.output_chars = output.chars().count();
        self.estimated_tokens = self.output_chars / CHARS_PER_TOKEN;
    }

    pub fn output_megabytes(&self) -> f64 {
        self.output_bytes as f64 / BYTES_PER_MB
    }

    /// Whether the output is big enough to warrant the context-window advisory.
    pub fn is_large(&self) -> bool {
        let token_ratio = self.output_chars as f64 / CHARS_PER_TOKEN as f64;
        self.output_megabytes() > LARGE_OUTPUT_MB || token_ratio > LARGE_OUTPUT_TOKENS
    }
}
