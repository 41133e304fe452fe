//! Tolerant decoding of acquired event data.
//!
//! Nothing here returns an error. Stream payloads are all-or-nothing: a bad
//! document becomes an empty mapping. Variables degrade one at a time: a bad
//! JSON value is kept verbatim under a `raw` key so the rest of the event
//! survives.

use crate::model::error::InputError;
use crate::model::{Fallback, RawEvent};
use crate::source::{Acquired, VariableValue};
use serde_json::{Map, Value};

/// Key holding the unparsed text of a malformed variable.
pub const RAW_KEY: &str = "raw";

/// Decoded event plus any fallbacks applied on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoded {
    /// The event payload.
    pub event: RawEvent,
    /// Substitutions made for malformed input.
    pub fallbacks: Vec<Fallback>,
}

impl Decoded {
    fn clean(event: RawEvent) -> Self {
        Self {
            event,
            fallbacks: Vec::new(),
        }
    }

    fn empty_with(fallback: Fallback) -> Self {
        Self {
            event: RawEvent::default(),
            fallbacks: vec![fallback],
        }
    }
}

/// Decode whatever the source produced, including a failed read.
pub fn decode(acquired: Result<Acquired, InputError>) -> Decoded {
    match acquired {
        Ok(Acquired::Text(text)) => decode_stream(&text),
        Ok(Acquired::Variables(values)) => decode_variables(&values),
        Err(e) => Decoded::empty_with(Fallback::UnreadableStream {
            message: e.to_string(),
        }),
    }
}

/// Decode a whole-stream JSON document.
///
/// # Behavior:
/// - Empty or whitespace-only text: empty mapping, no fallback
/// - Invalid JSON: empty mapping, `InvalidJson` fallback
/// - Valid JSON that is not an object: empty mapping, `NonObjectPayload` fallback
pub fn decode_stream(text: &str) -> Decoded {
    if text.trim().is_empty() {
        return Decoded::default();
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Decoded::clean(RawEvent::new(map)),
        Ok(_) => Decoded::empty_with(Fallback::NonObjectPayload),
        Err(e) => Decoded::empty_with(Fallback::InvalidJson {
            message: e.to_string(),
        }),
    }
}

/// Decode a set of independently-read variables.
///
/// Unset variables are left out of the event. Blank JSON-bearing variables
/// count as unset.
pub fn decode_variables(values: &[VariableValue]) -> Decoded {
    let mut decoded = Decoded::default();

    for VariableValue { spec, value } in values {
        let Some(raw) = value else {
            continue;
        };

        if !spec.json {
            decoded.event.insert(spec.field, Value::String(raw.clone()));
            continue;
        }

        if raw.trim().is_empty() {
            continue;
        }

        match decode_variable(raw) {
            Ok(value) => decoded.event.insert(spec.field, value),
            Err(fallback) => {
                decoded.event.insert(spec.field, fallback);
                decoded.fallbacks.push(Fallback::RawVariable {
                    variable: spec.name,
                });
            }
        }
    }

    decoded
}

/// Parse one JSON-bearing variable.
///
/// # Errors
///
/// Returns `{"raw": <text>}` when `raw` is not valid JSON.
pub fn decode_variable(raw: &str) -> Result<Value, Value> {
    serde_json::from_str(raw).map_err(|_| {
        let mut map = Map::new();
        map.insert(RAW_KEY.to_string(), Value::String(raw.to_string()));
        Value::Object(map)
    })
}
