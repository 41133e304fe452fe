//! Result of one capture attempt.
//!
//! Capture never fails from the host's point of view, but the handler still
//! distinguishes how it got there so callers (and tests) can tell a clean
//! capture from one that fell back to defaults or lost its write.

use crate::model::error::CaptureError;
use std::fmt;
use std::path::PathBuf;

/// Why capture was not attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No home directory and no explicit log directory.
    NoLogDir,
    /// The developer-mode marker file is absent.
    Disabled {
        /// Marker path that was checked.
        marker: PathBuf,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoLogDir => write!(f, "log directory could not be determined"),
            SkipReason::Disabled { marker } => {
                write!(f, "dev mode disabled (no marker at {})", marker.display())
            }
        }
    }
}

/// A place where malformed input was replaced by a fallback value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// The stream could not be read; recorded as an empty mapping.
    UnreadableStream {
        /// I/O error text.
        message: String,
    },
    /// The stream was not valid JSON; recorded as an empty mapping.
    InvalidJson {
        /// Parser error text.
        message: String,
    },
    /// The stream was valid JSON but not an object; recorded as an empty mapping.
    NonObjectPayload,
    /// A JSON-bearing variable failed to parse; kept as `{"raw": ...}`.
    RawVariable {
        /// Variable name.
        variable: &'static str,
    },
    /// A field expected to hold an object held something else; defaulted to `{}`.
    NonObjectField {
        /// Field name in the event payload.
        field: &'static str,
    },
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::UnreadableStream { message } => write!(f, "unreadable stream: {message}"),
            Fallback::InvalidJson { message } => write!(f, "invalid JSON payload: {message}"),
            Fallback::NonObjectPayload => write!(f, "payload is not a JSON object"),
            Fallback::RawVariable { variable } => write!(f, "{variable} kept as raw text"),
            Fallback::NonObjectField { field } => write!(f, "{field} is not an object"),
        }
    }
}

/// Outcome of a single handler invocation.
#[derive(Debug)]
pub enum CaptureOutcome {
    /// Capture was not attempted.
    Skipped(SkipReason),
    /// The record was appended from well-formed input.
    Captured {
        /// Log file that received the line.
        path: PathBuf,
    },
    /// The record was appended, but some input fell back to defaults.
    Degraded {
        /// Log file that received the line.
        path: PathBuf,
        /// What was substituted.
        fallbacks: Vec<Fallback>,
    },
    /// The append failed; the error was contained.
    Contained {
        /// The write failure.
        error: CaptureError,
        /// Fallbacks applied before the failed write.
        fallbacks: Vec<Fallback>,
    },
}

impl CaptureOutcome {
    /// True when a line reached the log file.
    pub fn is_written(&self) -> bool {
        matches!(
            self,
            CaptureOutcome::Captured { .. } | CaptureOutcome::Degraded { .. }
        )
    }

    /// Fallbacks applied during this capture (empty when skipped).
    pub fn fallbacks(&self) -> &[Fallback] {
        match self {
            CaptureOutcome::Degraded { fallbacks, .. }
            | CaptureOutcome::Contained { fallbacks, .. } => fallbacks,
            CaptureOutcome::Skipped(_) | CaptureOutcome::Captured { .. } => &[],
        }
    }
}
