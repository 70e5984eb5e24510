//! Defines application-specific error types.
//!
//! Only run-level failures are errors. Problems with an individual file (an
//! unreadable size, a failed read) are turned into a skip decision by the
//! filter chain and never surface here.

use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that abort a `projcat` run.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access outside the per-file filter chain.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The project directory does not exist or is not a directory.
    #[error("Project directory '{0}' not found or is not a directory.")]
    InvalidProjectDir(String),

    /// Invalid configuration values or combinations.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The output file could not be written. Nothing was left at the destination.
    #[error("Could not write to output file '{path}'. Reason: {source}")]
    OutputWrite {
        /// The requested output path.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Building the in-memory output failed.
    #[error("Failed to format output: {0}")]
    Format(#[from] std::fmt::Error),

    /// Error indicating that the operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

/// Configuration errors detected while building a [`Config`](crate::config::Config).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option was given a value it cannot accept.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        /// The offending option, as spelled on the command line.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A required setting was not provided to the builder.
    #[error("Missing required setting: {0}")]
    Missing(String),
}

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.txt");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = io_error_with_path(source_error, &path);

        match error {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Error::Io"),
        }
    }

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = Error::InvalidProjectDir("missing_dir".to_string());
        assert_eq!(
            err.to_string(),
            "Project directory 'missing_dir' not found or is not a directory."
        );

        let err: Error = ConfigError::InvalidValue {
            option: "--max-file-size".to_string(),
            reason: "must be a finite, non-negative number".to_string(),
        }
        .into();
        assert!(err.to_string().contains("--max-file-size"));

        let err = Error::OutputWrite {
            path: "out/result.txt".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("out/result.txt"));
        assert!(msg.contains("Access denied"));
    }
}
