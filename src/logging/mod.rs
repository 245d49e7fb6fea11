//! File-based tracing setup.
//!
//! The TUI owns the terminal, so log output goes to a file that can be
//! followed with `tail -f` from another terminal. Verbosity comes from
//! `RUST_LOG`; the default level is info.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Failures while setting up the tracing subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("Failed to create log directory {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The log path has no usable file name or parent directory.
    #[error("Unusable log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// A global tracing subscriber is already installed.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Split a log path into its directory and file name components.
fn split_log_path(log_path: &Path) -> Result<(&Path, &str), LoggingError> {
    let directory = log_path.parent();
    let file_name = log_path.file_name().and_then(|n| n.to_str());
    match (directory, file_name) {
        (Some(directory), Some(file_name)) => Ok((directory, file_name)),
        _ => Err(LoggingError::InvalidPath(log_path.to_path_buf())),
    }
}

/// Install the global tracing subscriber writing to `log_path`.
///
/// Creates the parent directory if missing. ANSI escapes are disabled so
/// the file stays readable.
///
/// # Errors
///
/// Fails if the directory cannot be created, the path has no file name,
/// or a subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let (directory, file_name) = split_log_path(log_path)?;

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
