//! Event input sources.
//!
//! This module provides the two ways an event reaches a handler:
//! - A JSON document on a byte stream (stdin)
//! - A fixed set of named environment variables
//!
//! Both are wrapped in the unified [`EventSource`] enum so the decoder and
//! everything after it never care which transport was used.

use crate::model::error::InputError;
use crate::model::EventKind;
use std::io::{self, Read};

pub mod stream;
pub mod variables;

pub use stream::StreamSource;
pub use variables::{VariableSource, VariableSpec, VariableValue};

/// Transport chosen for a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Transport {
    /// JSON document on stdin.
    #[default]
    Stdin,
    /// Named environment variables.
    Env,
}

/// What an event source produced, before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquired {
    /// The whole stream as text.
    Text(String),
    /// One entry per expected variable.
    Variables(Vec<VariableValue>),
}

/// Unified event source.
///
/// Sum type enforces exactly one transport per invocation.
#[derive(Debug)]
pub enum EventSource<R: Read = io::Stdin> {
    /// Stream transport.
    Stream(StreamSource<R>),
    /// Variable transport.
    Variables(VariableSource),
}

impl EventSource<io::Stdin> {
    /// Source for the given transport over the real process inputs.
    pub fn for_transport(transport: Transport, kind: EventKind) -> Self {
        match transport {
            Transport::Stdin => EventSource::Stream(StreamSource::stdin()),
            Transport::Env => EventSource::Variables(VariableSource::from_env(kind)),
        }
    }
}

impl<R: Read> EventSource<R> {
    /// Acquire the raw event data.
    ///
    /// # Behavior:
    /// - Stream: blocks until EOF, then returns the full text
    /// - Variables: reads each variable immediately
    ///
    /// # Errors
    ///
    /// Returns `InputError` only if the stream cannot be read.
    pub fn acquire(self) -> Result<Acquired, InputError> {
        match self {
            EventSource::Stream(s) => s.drain().map(Acquired::Text),
            EventSource::Variables(v) => Ok(Acquired::Variables(v.read())),
        }
    }
}
