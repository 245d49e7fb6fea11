//! Error types for the pplv application.
//!
//! A small hierarchical taxonomy using `thiserror`. Errors compose via
//! `From` conversions so the startup path can use `?` end to end.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all failure modes
//!   - [`DatasetError`] - Dataset loading failures (read, parse, validation)
//!   - `ConfigError` - Config file read/parse failures
//!   - `LoggingError` - Tracing subscriber initialization failures
//!   - `std::io::Error` - Terminal/TUI failures
//!
//! The pure core (filter, sort, selection) is total and has no error
//! surface; everything here belongs to the startup path or the shell.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All failures in pplv are fatal: the dataset is a single document read
/// once at startup, so there is nothing to skip-and-continue past.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load or validate the person dataset.
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Failed to load or parse the configuration file.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to initialize file-based logging.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal IO error during TUI operations.
    #[error("Terminal IO error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors that can occur while loading the person dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Failed to read the dataset file.
    #[error("Failed to read dataset at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Dataset contains invalid JSON or records with invalid fields.
    #[error("Invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Dataset records failed store validation (e.g., duplicate slugs).
    #[error(transparent)]
    Invalid(#[from] crate::model::StoreError),
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_read_error_names_the_path() {
        let err = DatasetError::Read {
            path: PathBuf::from("/missing/people.json"),
            reason: "No such file".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/missing/people.json"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn dataset_error_converts_to_app_error() {
        let err = DatasetError::Read {
            path: PathBuf::from("x.json"),
            reason: "denied".to_string(),
        };
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Dataset(_)));
    }

    #[test]
    fn io_error_converts_to_terminal_variant() {
        let io = std::io::Error::other("boom");
        let app: AppError = io.into();
        assert!(matches!(app, AppError::Terminal(_)));
    }
}
