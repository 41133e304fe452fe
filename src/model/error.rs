//! Error types for devlog-capture.
//!
//! Errors follow the same layering as the rest of the crate: domain-specific
//! enums built with `thiserror`, composed into [`CaptureError`] via `From`.
//!
//! # Error Hierarchy
//!
//! - [`CaptureError`] - Top-level capture failure
//!   - [`InputError`] - Event stream could not be read
//!   - [`SinkError`] - Record could not be appended to its JSONL file
//!
//! # Containment
//!
//! None of these errors ever leaves the handler. The gate folds them into a
//! [`CaptureOutcome`](crate::model::CaptureOutcome) and the binary reports them
//! on the diagnostic channel before acknowledging the host event as usual.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level capture error.
///
/// Only write failures are surfaced through this type; input problems degrade
/// to fallbacks instead (see [`Fallback`](crate::model::Fallback)).
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The record could not be appended to its log file.
    #[error("{0}")]
    Sink(#[from] SinkError),
}

/// Errors encountered when draining the event stream.
#[derive(Debug, Error)]
pub enum InputError {
    /// Generic I/O error while reading the stream.
    ///
    /// The decoder treats this the same as an unparseable payload: the event
    /// is recorded with an empty mapping.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when appending a record to a JSONL log file.
///
/// Every variant carries the path involved so the diagnostic line is
/// actionable on its own.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The log directory did not exist and could not be created.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The log file could not be opened for appending.
    #[error("Failed to open {path:?} for append: {source}")]
    Open {
        /// Log file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The line could not be written (disk full, broken file, ...).
    #[error("Failed to append to {path:?}: {source}")]
    Write {
        /// Log file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The record could not be serialized to JSON.
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn input_error_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let input_err: InputError = io_err.into();
        let msg = input_err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("pipe closed"));
    }

    #[test]
    fn sink_error_open_display_includes_path() {
        let err = SinkError::Open {
            path: PathBuf::from("/logs/tool-uses.jsonl"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("tool-uses.jsonl"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn sink_error_directory_creation_display() {
        let err = SinkError::DirectoryCreation {
            path: PathBuf::from("/readonly/logs"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to create log directory"));
        assert!(msg.contains("/readonly/logs"));
    }

    #[test]
    fn capture_error_from_sink_error_keeps_message() {
        let sink = SinkError::Write {
            path: PathBuf::from("/logs/user-prompts.jsonl"),
            source: io::Error::other("disk full"),
        };
        let err: CaptureError = sink.into();
        let msg = err.to_string();
        assert!(msg.contains("Failed to append"));
        assert!(msg.contains("disk full"));
    }
}
