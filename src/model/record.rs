//! On-disk record shapes, one per event category.
//!
//! Field order here is the key order written to the JSONL files.

use serde::Serialize;
use serde_json::{Map, Value};

/// Session id recorded when the host did not supply one.
pub const UNKNOWN_SESSION_ID: &str = "unknown";

/// Tool name recorded when the host did not supply one.
pub const UNKNOWN_TOOL: &str = "unknown";

/// One captured tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolUseRecord {
    /// Capture instant, ISO-8601 UTC.
    pub timestamp: String,
    /// Host session, `"unknown"` if missing.
    pub session_id: String,
    /// Tool name, `"unknown"` if missing.
    pub tool: String,
    /// Host-assigned tool call id.
    pub tool_use_id: Option<String>,
    /// Tool arguments.
    pub input: Map<String, Value>,
    /// Tool response.
    pub output: Map<String, Value>,
    /// `true` exactly when `error` is `None`.
    pub success: bool,
    /// Error text reported by the host for a failed call.
    pub error: Option<String>,
}

/// One captured prompt submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    /// Capture instant, ISO-8601 UTC.
    pub timestamp: String,
    /// Host session, `"unknown"` if missing.
    pub session_id: String,
    /// Working directory of the session.
    pub cwd: Option<String>,
    /// Prompt text, empty if missing.
    pub prompt: String,
    /// Length of `prompt` in UTF-16 code units.
    pub prompt_length: usize,
}

impl PromptRecord {
    /// Build a prompt record, deriving `prompt_length` from `prompt`.
    pub fn new(
        timestamp: String,
        session_id: String,
        cwd: Option<String>,
        prompt: String,
    ) -> Self {
        let prompt_length = prompt.encode_utf16().count();
        Self {
            timestamp,
            session_id,
            cwd,
            prompt,
            prompt_length,
        }
    }
}

/// A record of either category, ready for the append logger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LogRecord {
    /// Tool-use record.
    ToolUse(ToolUseRecord),
    /// Prompt record.
    Prompt(PromptRecord),
}

impl From<ToolUseRecord> for LogRecord {
    fn from(record: ToolUseRecord) -> Self {
        LogRecord::ToolUse(record)
    }
}

impl From<PromptRecord> for LogRecord {
    fn from(record: PromptRecord) -> Self {
        LogRecord::Prompt(record)
    }
}
