// src/reporter.rs

//! Defines a trait for reporting per-file decisions as the pipeline makes them.

use crate::core_types::FileDecision;
use std::io::Write;

/// Receives every inclusion decision, in walk order.
///
/// # Examples
///
/// ```
/// use projcat::core_types::{FileDecision, Verdict};
/// use projcat::reporter::DecisionReporter;
///
/// // A reporter that only counts included files.
/// struct IncludedCounter(usize);
/// impl DecisionReporter for IncludedCounter {
///     fn report(&mut self, decision: &FileDecision) {
///         if decision.is_included() {
///             self.0 += 1;
///         }
///     }
/// }
///
/// let mut counter = IncludedCounter(0);
/// counter.report(&FileDecision {
///     relative_path: "a.py".to_string(),
///     size: Some(1),
///     empty: false,
///     verdict: Verdict::Include,
/// });
/// assert_eq!(counter.0, 1);
/// ```
pub trait DecisionReporter {
    fn report(&mut self, decision: &FileDecision);
}

/// Prints one trace line per decision, as shown in verbose mode.
pub struct TraceReporter<W: Write> {
    writer: W,
}

impl<W: Write> TraceReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DecisionReporter for TraceReporter<W> {
    fn report(&mut self, decision: &FileDecision) {
        if let Err(e) = writeln!(self.writer, "{decision}") {
            log::warn!("Failed to write trace line for '{}': {}", decision.relative_path, e);
        }
    }
}

/// Collects decisions in memory.
impl DecisionReporter for Vec<FileDecision> {
    fn report(&mut self, decision: &FileDecision) {
        self.push(decision.clone());
    }
}
