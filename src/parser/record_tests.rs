//! Tests for the record builder.

use super::*;
use chrono::TimeZone;
use proptest::prelude::*;
use serde_json::json;

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap()
}

fn event(value: Value) -> RawEvent {
    match value {
        Value::Object(map) => RawEvent::new(map),
        other => panic!("fixture must be an object, got {other}"),
    }
}

#[test]
fn timestamp_is_iso8601_utc_with_millis() {
    assert_eq!(format_timestamp(at()), "2026-10-19T08:15:30.000Z");
}

#[test]
fn tool_use_with_all_fields_reproduces_input() {
    let raw = event(json!({
        "session_id": "s1",
        "tool_name": "Bash",
        "tool_input": {"cmd": "ls"},
        "tool_response": {"code": 0},
        "tool_use_id": "t1"
    }));

    let (record, fallbacks) = build_tool_use(&raw, at());

    assert!(fallbacks.is_empty());
    assert_eq!(record.timestamp, "2026-10-19T08:15:30.000Z");
    assert_eq!(record.session_id, "s1");
    assert_eq!(record.tool, "Bash");
    assert_eq!(record.tool_use_id.as_deref(), Some("t1"));
    assert_eq!(Value::Object(record.input), json!({"cmd": "ls"}));
    assert_eq!(Value::Object(record.output), json!({"code": 0}));
    assert!(record.success);
    assert_eq!(record.error, None);
}

#[test]
fn tool_use_defaults_for_empty_event() {
    let (record, fallbacks) = build_tool_use(&RawEvent::default(), at());

    assert!(fallbacks.is_empty());
    assert_eq!(record.session_id, "unknown");
    assert_eq!(record.tool, "unknown");
    assert_eq!(record.tool_use_id, None);
    assert!(record.input.is_empty());
    assert!(record.output.is_empty());
    assert!(record.success);
    assert_eq!(record.error, None);
}

#[test]
fn tool_use_treats_null_and_empty_as_missing() {
    let raw = event(json!({
        "session_id": "",
        "tool_name": null,
        "tool_input": null,
        "tool_use_id": ""
    }));

    let (record, fallbacks) = build_tool_use(&raw, at());

    assert!(fallbacks.is_empty(), "null is a plain default, not a fallback");
    assert_eq!(record.session_id, "unknown");
    assert_eq!(record.tool, "unknown");
    assert_eq!(record.tool_use_id, None);
    assert!(record.input.is_empty());
}

#[test]
fn tool_use_wrongly_typed_fields_default_and_degrade() {
    let raw = event(json!({
        "session_id": 17,
        "tool_name": ["Bash"],
        "tool_input": "ls -la",
        "tool_response": [1, 2, 3]
    }));

    let (record, fallbacks) = build_tool_use(&raw, at());

    assert_eq!(record.session_id, "unknown");
    assert_eq!(record.tool, "unknown");
    assert!(record.input.is_empty());
    assert!(record.output.is_empty());
    assert_eq!(
        fallbacks,
        vec![
            Fallback::NonObjectField {
                field: "tool_input"
            },
            Fallback::NonObjectField {
                field: "tool_response"
            },
        ]
    );
}

#[test]
fn tool_use_error_marks_failure() {
    let raw = event(json!({
        "tool_name": "Bash",
        "tool_use_error": "command not found"
    }));

    let (record, _) = build_tool_use(&raw, at());

    assert!(!record.success);
    assert_eq!(record.error.as_deref(), Some("command not found"));
}

#[test]
fn tool_use_keeps_raw_variable_fallback_object() {
    let raw = event(json!({
        "tool_input": {"raw": "{broken"}
    }));

    let (record, fallbacks) = build_tool_use(&raw, at());

    assert!(fallbacks.is_empty());
    assert_eq!(Value::Object(record.input), json!({"raw": "{broken"}));
}

#[test]
fn prompt_with_all_fields() {
    let raw = event(json!({
        "session_id": "s2",
        "prompt": "hello",
        "cwd": "/work/deno"
    }));

    let record = build_prompt(&raw, at());

    assert_eq!(record.session_id, "s2");
    assert_eq!(record.cwd.as_deref(), Some("/work/deno"));
    assert_eq!(record.prompt, "hello");
    assert_eq!(record.prompt_length, 5);
}

#[test]
fn prompt_scenario_without_cwd() {
    let raw = event(json!({"session_id": "s2", "prompt": "hello"}));

    let record = build_prompt(&raw, at());
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(
        value,
        json!({
            "timestamp": "2026-10-19T08:15:30.000Z",
            "sessionId": "s2",
            "cwd": null,
            "prompt": "hello",
            "promptLength": 5
        })
    );
}

#[test]
fn prompt_defaults_for_empty_event() {
    let record = build_prompt(&RawEvent::default(), at());

    assert_eq!(record.session_id, "unknown");
    assert_eq!(record.cwd, None);
    assert_eq!(record.prompt, "");
    assert_eq!(record.prompt_length, 0);
}

#[test]
fn prompt_non_string_prompt_defaults_to_empty() {
    let raw = event(json!({"prompt": {"text": "hi"}, "cwd": 3}));

    let record = build_prompt(&raw, at());

    assert_eq!(record.prompt, "");
    assert_eq!(record.prompt_length, 0);
    assert_eq!(record.cwd, None);
}

#[test]
fn build_record_dispatches_on_kind() {
    let raw = event(json!({"prompt": "hi", "tool_name": "Read"}));

    let (tool, _) = build_record(EventKind::ToolUse, &raw, at());
    let (prompt, _) = build_record(EventKind::UserPrompt, &raw, at());

    assert!(matches!(tool, LogRecord::ToolUse(ref r) if r.tool == "Read"));
    assert!(matches!(prompt, LogRecord::Prompt(ref r) if r.prompt == "hi"));
}

proptest! {
    #[test]
    fn prompt_length_always_matches_prompt(prompt in ".*") {
        let mut map = Map::new();
        map.insert("prompt".to_string(), Value::String(prompt.clone()));
        let record = build_prompt(&RawEvent::new(map), at());
        prop_assert_eq!(record.prompt_length, record.prompt.encode_utf16().count());
        if !prompt.is_empty() {
            prop_assert_eq!(record.prompt, prompt);
        }
    }

    #[test]
    fn tool_use_builder_never_panics_on_arbitrary_fields(
        session in proptest::option::of(".*"),
        tool in proptest::option::of(".*"),
        input in proptest::option::of(any::<i64>()),
    ) {
        let mut map = Map::new();
        if let Some(s) = session {
            map.insert("session_id".to_string(), Value::String(s));
        }
        if let Some(t) = tool {
            map.insert("tool_name".to_string(), Value::String(t));
        }
        if let Some(i) = input {
            map.insert("tool_input".to_string(), json!(i));
        }
        let (record, _) = build_tool_use(&RawEvent::new(map), at());
        prop_assert!(!record.session_id.is_empty());
        prop_assert!(!record.tool.is_empty());
        prop_assert!(record.input.is_empty());
    }
}
