//! The `projcat` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use projcat::prelude::*;
//! # fn main() -> Result<()> {
//! # let temp = tempfile::tempdir().unwrap();
//! # let dir = temp.path().to_str().unwrap();
//! let config = ConfigBuilder::new().project_dir(dir).build()?;
//! let token = CancellationToken::new();
//! let result = concatenate(&config, &token, None)?;
//! assert_eq!(result.summary.files_scanned, 0);
//! # Ok(())
//! # }
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::config::{Config, ConfigBuilder};
pub use crate::core_types::{CandidateFile, FileDecision, RunSummary, SkipReason, Verdict};
pub use crate::errors::{Error, Result};
pub use crate::reporter::{DecisionReporter, TraceReporter};
pub use crate::{concatenate, run, Concatenation};
