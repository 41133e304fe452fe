//! Event parsing: tolerant decoding and record building.
//!
//! This module provides pure functions for turning acquired event data into
//! log records. Neither stage can fail; malformed input is reported as
//! [`Fallback`](crate::model::Fallback) values alongside the result.

pub mod decode;
pub mod record;

pub use decode::{decode, decode_stream, decode_variable, decode_variables, Decoded, RAW_KEY};
pub use record::{build_prompt, build_record, build_tool_use, format_timestamp};
