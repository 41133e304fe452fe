//! Tracing subscriber initialization.
//!
//! Diagnostics never go to stdout, which belongs to the hook response.
//! By default they go to stderr; a configured diagnostics file replaces it.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create the diagnostics directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid diagnostics file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// The file appender could not be built
    #[error("Failed to open diagnostics file: {0}")]
    Appender(#[from] InitError),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize the tracing subscriber.
///
/// Respects `RUST_LOG`, otherwise uses `level`.
///
/// # Arguments
///
/// * `diagnostics_file` - Write to this file instead of stderr
/// * `level` - Filter directive used when `RUST_LOG` is unset
///
/// # Errors
///
/// Returns `LoggingError` if the subscriber was already initialized or the
/// diagnostics file location is unusable.
pub fn init(diagnostics_file: Option<&Path>, level: &str) -> Result<(), LoggingError> {
    let writer = match diagnostics_file {
        Some(path) => file_writer(path)?,
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

fn file_writer(log_path: &Path) -> Result<BoxMakeWriter, LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)?;
    Ok(BoxMakeWriter::new(file_appender))
}
