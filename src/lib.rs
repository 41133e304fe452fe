//! Dev-mode event capture (devlog-capture)
//!
//! Hook handlers for a command-execution agent. When the developer-mode
//! marker `~/.claude/denoland-dev-logs/.enabled` exists, each observed tool
//! call or prompt submission is appended as one JSON line to
//! `tool-uses.jsonl` or `user-prompts.jsonl`. The host event is always
//! acknowledged unchanged, whatever happens during capture.
//!
//! Pipeline: [`gate`] → [`source`] → [`parser`] → [`sink`].

pub mod config;
pub mod gate;
pub mod logging;
pub mod model;
pub mod parser;
pub mod sink;
pub mod source;
