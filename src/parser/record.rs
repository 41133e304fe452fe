//! Record builder: decoded event in, log record out.
//!
//! Pure and total. Every field has a default, and the timestamp is supplied
//! by the caller rather than read from the event.

use crate::model::{
    EventKind, Fallback, LogRecord, PromptRecord, RawEvent, ToolUseRecord, UNKNOWN_SESSION_ID,
    UNKNOWN_TOOL,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

// Payload field names
const FIELD_SESSION_ID: &str = "session_id";
const FIELD_TOOL_NAME: &str = "tool_name";
const FIELD_TOOL_INPUT: &str = "tool_input";
const FIELD_TOOL_RESPONSE: &str = "tool_response";
const FIELD_TOOL_USE_ID: &str = "tool_use_id";
const FIELD_TOOL_USE_ERROR: &str = "tool_use_error";
const FIELD_PROMPT: &str = "prompt";
const FIELD_CWD: &str = "cwd";

/// Format an instant as ISO-8601 UTC with millisecond precision.
///
/// Example: `2026-10-19T08:15:30.123Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Build the record for `kind`, returning any fallbacks applied.
pub fn build_record(
    kind: EventKind,
    event: &RawEvent,
    at: DateTime<Utc>,
) -> (LogRecord, Vec<Fallback>) {
    match kind {
        EventKind::ToolUse => {
            let (record, fallbacks) = build_tool_use(event, at);
            (record.into(), fallbacks)
        }
        EventKind::UserPrompt => (build_prompt(event, at).into(), Vec::new()),
    }
}

/// Build a tool-use record.
///
/// `input`/`output` that are present but not objects default to `{}` and
/// are reported as fallbacks.
pub fn build_tool_use(event: &RawEvent, at: DateTime<Utc>) -> (ToolUseRecord, Vec<Fallback>) {
    let mut fallbacks = Vec::new();
    let input = object_or_default(event, FIELD_TOOL_INPUT, &mut fallbacks);
    let output = object_or_default(event, FIELD_TOOL_RESPONSE, &mut fallbacks);
    let error = owned_text(event, FIELD_TOOL_USE_ERROR);

    let record = ToolUseRecord {
        timestamp: format_timestamp(at),
        session_id: session_id(event),
        tool: event.text(FIELD_TOOL_NAME).unwrap_or(UNKNOWN_TOOL).to_string(),
        tool_use_id: owned_text(event, FIELD_TOOL_USE_ID),
        input,
        output,
        success: error.is_none(),
        error,
    };

    (record, fallbacks)
}

/// Build a prompt record.
pub fn build_prompt(event: &RawEvent, at: DateTime<Utc>) -> PromptRecord {
    PromptRecord::new(
        format_timestamp(at),
        session_id(event),
        owned_text(event, FIELD_CWD),
        owned_text(event, FIELD_PROMPT).unwrap_or_default(),
    )
}

fn session_id(event: &RawEvent) -> String {
    event
        .text(FIELD_SESSION_ID)
        .unwrap_or(UNKNOWN_SESSION_ID)
        .to_string()
}

fn owned_text(event: &RawEvent, field: &str) -> Option<String> {
    event.text(field).map(str::to_string)
}

fn object_or_default(
    event: &RawEvent,
    field: &'static str,
    fallbacks: &mut Vec<Fallback>,
) -> Map<String, Value> {
    match event.get(field) {
        Some(Value::Object(map)) => map.clone(),
        None | Some(Value::Null) => Map::new(),
        Some(_) => {
            fallbacks.push(Fallback::NonObjectField { field });
            Map::new()
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
