//! Hook event categories and the as-received payload.

use serde_json::{Map, Value};
use std::fmt;

/// Category of lifecycle event observed by a handler.
///
/// Each category owns one log file under the log directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A tool call finished (post-tool-use hook).
    ToolUse,
    /// The user submitted a prompt.
    UserPrompt,
}

impl EventKind {
    /// File name of the JSONL log this category appends to.
    pub fn log_file_name(self) -> &'static str {
        match self {
            EventKind::ToolUse => "tool-uses.jsonl",
            EventKind::UserPrompt => "user-prompts.jsonl",
        }
    }

    /// Short noun used in diagnostics ("Failed to write tool log").
    pub fn label(self) -> &'static str {
        match self {
            EventKind::ToolUse => "tool",
            EventKind::UserPrompt => "prompt",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::ToolUse => write!(f, "tool-use"),
            EventKind::UserPrompt => write!(f, "user-prompt"),
        }
    }
}

/// The decoded payload of a single event, before defaults are applied.
///
/// Keys use the host's stream field names (`session_id`, `tool_name`, ...)
/// regardless of which transport delivered them. Values are left untouched;
/// the record builder decides what counts as present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEvent {
    fields: Map<String, Value>,
}

impl RawEvent {
    /// Wrap an already-decoded JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// A field as a non-empty string.
    ///
    /// Absent, null, empty and non-string values all read as `None`.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// True when no fields were decoded at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
