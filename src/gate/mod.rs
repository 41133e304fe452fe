//! Gate & responder.
//!
//! Decides whether a handler captures anything, drives the pipeline when it
//! does, and always finishes with the same acknowledgment to the host.
//!
//! Ambient state (home directory, marker file) is resolved once into a
//! [`Gate`] value so the pipeline itself only sees explicit inputs.

use crate::model::{CaptureOutcome, EventKind, HookResponse, SkipReason};
use crate::parser;
use crate::sink::JsonlSink;
use crate::source::EventSource;
use chrono::{DateTime, Utc};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

pub mod marker;

pub use marker::{path_exists, MARKER_FILE_NAME};

/// Capture decision for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Capture is off.
    Closed(SkipReason),
    /// Capture is on; logs go under `log_dir`.
    Open {
        /// Log directory holding the marker and the JSONL files.
        log_dir: PathBuf,
    },
}

impl Gate {
    /// Evaluate the gate for a resolved log directory.
    ///
    /// # Behavior:
    /// - `None`: closed, `NoLogDir`
    /// - marker missing: closed, `Disabled`
    /// - marker present: open
    pub fn evaluate(log_dir: Option<PathBuf>) -> Self {
        let Some(log_dir) = log_dir else {
            return Gate::Closed(SkipReason::NoLogDir);
        };

        let marker = log_dir.join(MARKER_FILE_NAME);
        if path_exists(&marker) {
            Gate::Open { log_dir }
        } else {
            Gate::Closed(SkipReason::Disabled { marker })
        }
    }

    /// Log directory, when open.
    pub fn log_dir(&self) -> Option<&Path> {
        match self {
            Gate::Open { log_dir } => Some(log_dir),
            Gate::Closed(_) => None,
        }
    }
}

/// Run the capture pipeline for one event.
///
/// Does not touch `source` when the gate is closed. Never fails; every
/// problem ends up in the returned outcome.
pub fn capture<R: Read>(
    gate: &Gate,
    kind: EventKind,
    source: EventSource<R>,
    now: DateTime<Utc>,
) -> CaptureOutcome {
    let log_dir = match gate {
        Gate::Closed(reason) => return CaptureOutcome::Skipped(reason.clone()),
        Gate::Open { log_dir } => log_dir,
    };

    let decoded = parser::decode(source.acquire());
    let (record, mut fallbacks) = parser::build_record(kind, &decoded.event, now);
    let mut all_fallbacks = decoded.fallbacks;
    all_fallbacks.append(&mut fallbacks);

    let sink = JsonlSink::new(log_dir.join(kind.log_file_name()));
    match sink.append(&record) {
        Ok(()) if all_fallbacks.is_empty() => CaptureOutcome::Captured {
            path: sink.path().to_path_buf(),
        },
        Ok(()) => CaptureOutcome::Degraded {
            path: sink.path().to_path_buf(),
            fallbacks: all_fallbacks,
        },
        Err(e) => CaptureOutcome::Contained {
            error: e.into(),
            fallbacks: all_fallbacks,
        },
    }
}

/// Emit the outcome on the diagnostic channel.
///
/// Only write failures are loud; everything else is debug-level.
pub fn report(kind: EventKind, outcome: &CaptureOutcome) {
    match outcome {
        CaptureOutcome::Skipped(reason) => {
            debug!(event = %kind, %reason, "Capture skipped");
        }
        CaptureOutcome::Captured { path } => {
            debug!(event = %kind, path = %path.display(), "Event captured");
        }
        CaptureOutcome::Degraded { path, fallbacks } => {
            for fallback in fallbacks {
                debug!(event = %kind, %fallback, "Input fell back to default");
            }
            debug!(event = %kind, path = %path.display(), "Event captured with fallbacks");
        }
        CaptureOutcome::Contained { error, .. } => {
            error!(event = %kind, "Failed to write {} log: {}", kind.label(), error);
        }
    }
}

/// Capture, report, then acknowledge.
///
/// The acknowledgment is written exactly once, last, whatever happened
/// before it. A failure to write the acknowledgment itself is reported but
/// not returned.
pub fn run<R: Read, W: Write>(
    gate: &Gate,
    kind: EventKind,
    source: EventSource<R>,
    out: W,
) -> CaptureOutcome {
    let outcome = capture(gate, kind, source, Utc::now());
    report(kind, &outcome);

    if let Err(e) = HookResponse::ACKNOWLEDGE.write_to(out) {
        error!(event = %kind, "Failed to write hook response: {}", e);
    }

    outcome
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
