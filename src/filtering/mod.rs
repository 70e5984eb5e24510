// src/filtering/mod.rs

//! The per-file filter chain.
//!
//! Each candidate goes through the checks in a fixed order and the first one
//! that rejects it decides the skip reason:
//!
//! 1. extension or full-name membership
//! 2. exclusion patterns on the filename
//! 3. size ceiling (and, optionally, zero-byte files)
//! 4. read and decode
//!
//! The individual checks are exposed so they can be used on their own.

mod decode;
mod exclusion;
mod extension;
mod size;

pub use decode::{decode_ignoring_invalid, is_blank, read_text, translate_newlines};
pub use exclusion::matches_exclusion;
pub use extension::{passes_extension_filter, split_extension};
pub use size::passes_size_filter;

use crate::config::Config;
use crate::core_types::{CandidateFile, FileDecision, SkipReason, Verdict};
use std::{fs, io};
use tracing::instrument;

/// The result of running one candidate through the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub decision: FileDecision,
    /// Decoded text, present only for included files.
    pub content: Option<String>,
}

impl Evaluation {
    fn skip(candidate: &CandidateFile, size: Option<u64>, reason: SkipReason) -> Self {
        log::debug!("{} [{}]", candidate.relative_path, reason.kind());
        Self {
            decision: FileDecision {
                relative_path: candidate.relative_path.clone(),
                size,
                empty: size == Some(0),
                verdict: Verdict::Skip(reason),
            },
            content: None,
        }
    }
}

/// Runs a candidate through every filter and, if it survives, reads its text.
///
/// Never fails: problems reading the file become a [`SkipReason`].
///
/// # Examples
///
/// ```
/// use projcat::config::Config;
/// use projcat::discovery::discover_candidates;
/// use projcat::filtering::evaluate;
/// # use std::fs;
/// # use tempfile::tempdir;
/// # fn main() -> std::io::Result<()> {
/// # let temp = tempdir()?;
/// fs::write(temp.path().join("app.py"), "print('hi')\r\n")?;
/// fs::write(temp.path().join("logo.png"), b"\x89\x50")?;
///
/// let config = Config::new_for_test(temp.path());
/// let results: Vec<_> = discover_candidates(&config)
///     .map(|c| evaluate(&c, &config))
///     .collect();
///
/// assert!(results[0].decision.is_included());
/// assert_eq!(results[0].content.as_deref(), Some("print('hi')\n"));
/// assert!(!results[1].decision.is_included());
/// # Ok(())
/// # }
/// ```
#[instrument(level = "debug", skip(candidate, config), fields(path = %candidate.relative_path))]
pub fn evaluate(candidate: &CandidateFile, config: &Config) -> Evaluation {
    if !passes_extension_filter(candidate, &config.extensions) {
        return Evaluation::skip(candidate, None, SkipReason::ExtensionMismatch);
    }

    if matches_exclusion(&candidate.name, &config.exclude_patterns) {
        return Evaluation::skip(candidate, None, SkipReason::ExcludedName);
    }

    // Follows symlinks, so a link is measured by its target.
    let size = match fs::metadata(&candidate.absolute_path) {
        // Only regular files are read.
        Ok(metadata) if !metadata.is_file() => {
            return Evaluation::skip(
                candidate,
                None,
                SkipReason::ReadError("not a regular file".to_string()),
            )
        }
        Ok(metadata) => metadata.len(),
        Err(e) => {
            return Evaluation::skip(
                candidate,
                None,
                SkipReason::ReadError(format!("cannot get size: {e}")),
            )
        }
    };
    if !passes_size_filter(size, config.max_file_size_bytes) {
        return Evaluation::skip(candidate, Some(size), SkipReason::TooLarge { size });
    }
    if size == 0 && config.skip_empty_files {
        return Evaluation::skip(candidate, Some(size), SkipReason::Empty);
    }

    let content = match read_text(&candidate.absolute_path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Evaluation::skip(candidate, Some(size), SkipReason::DecodeError(e.to_string()))
        }
        Err(e) => {
            return Evaluation::skip(candidate, Some(size), SkipReason::ReadError(e.to_string()))
        }
    };

    // Bytes that decode to nothing visible (pure binary, whitespace-only) carry
    // no useful context.
    if size > 0 && is_blank(&content) {
        return Evaluation::skip(candidate, Some(size), SkipReason::DecodeEmpty);
    }

    log::debug!("{} [included]", candidate.relative_path);
    Evaluation {
        decision: FileDecision {
            relative_path: candidate.relative_path.clone(),
            size: Some(size),
            empty: size == 0,
            verdict: Verdict::Include,
        },
        content: Some(content),
    }
}
