//! Domain model types (pure).
//!
//! Everything here is plain data: events, records, outcomes and errors.

pub mod error;
pub mod event;
pub mod outcome;
pub mod record;
pub mod response;

// Re-export for convenience
pub use error::{CaptureError, InputError, SinkError};
pub use event::{EventKind, RawEvent};
pub use outcome::{CaptureOutcome, Fallback, SkipReason};
pub use record::{LogRecord, PromptRecord, ToolUseRecord, UNKNOWN_SESSION_ID, UNKNOWN_TOOL};
pub use response::HookResponse;
