//! Variable-based event source.
//!
//! Some deployments pass each event field as its own environment variable
//! instead of a JSON document on stdin. Each variable is read independently.

use crate::model::EventKind;
use std::fmt;

/// A named out-of-band variable and the payload field it feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableSpec {
    /// Variable name as set by the host.
    pub name: &'static str,
    /// Payload field name (stream transport naming).
    pub field: &'static str,
    /// Whether the value carries JSON text to be decoded.
    pub json: bool,
}

impl VariableSpec {
    const fn text(name: &'static str, field: &'static str) -> Self {
        Self {
            name,
            field,
            json: false,
        }
    }

    const fn json(name: &'static str, field: &'static str) -> Self {
        Self {
            name,
            field,
            json: true,
        }
    }
}

/// Variables read for tool-use events.
pub const TOOL_USE_VARIABLES: &[VariableSpec] = &[
    VariableSpec::text("CLAUDE_SESSION_ID", "session_id"),
    VariableSpec::text("TOOL_NAME", "tool_name"),
    VariableSpec::json("TOOL_INPUT", "tool_input"),
    VariableSpec::json("TOOL_OUTPUT", "tool_response"),
    VariableSpec::text("TOOL_USE_ERROR", "tool_use_error"),
];

/// Variables read for prompt events.
///
/// The host exposes no prompt or cwd variable, so only the session is known.
pub const USER_PROMPT_VARIABLES: &[VariableSpec] =
    &[VariableSpec::text("CLAUDE_SESSION_ID", "session_id")];

/// Variable set for an event category.
pub fn variables_for(kind: EventKind) -> &'static [VariableSpec] {
    match kind {
        EventKind::ToolUse => TOOL_USE_VARIABLES,
        EventKind::UserPrompt => USER_PROMPT_VARIABLES,
    }
}

/// The value found (or not) for one variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableValue {
    /// Which variable this is.
    pub spec: VariableSpec,
    /// Raw value; `None` when unset.
    pub value: Option<String>,
}

type Lookup = Box<dyn Fn(&str) -> Option<String>>;

/// Reads a fixed set of named variables through a lookup function.
pub struct VariableSource {
    specs: &'static [VariableSpec],
    lookup: Lookup,
}

impl VariableSource {
    /// Variable source over the process environment.
    ///
    /// Non-UTF-8 values are converted lossily.
    pub fn from_env(kind: EventKind) -> Self {
        Self::from_lookup(kind, |name| {
            std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
        })
    }

    /// Variable source over an arbitrary lookup (for tests and embedding).
    pub fn from_lookup(
        kind: EventKind,
        lookup: impl Fn(&str) -> Option<String> + 'static,
    ) -> Self {
        Self {
            specs: variables_for(kind),
            lookup: Box::new(lookup),
        }
    }

    /// Read every variable once, in declaration order.
    pub fn read(&self) -> Vec<VariableValue> {
        self.specs
            .iter()
            .map(|spec| VariableValue {
                spec: *spec,
                value: (self.lookup)(spec.name),
            })
            .collect()
    }
}

impl fmt::Debug for VariableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableSource")
            .field("specs", &self.specs)
            .finish_non_exhaustive()
    }
}
