//! Append-only JSONL sink.
//!
//! Each record becomes exactly one line. The file is opened in append mode
//! and the serialized line, newline included, goes out in a single
//! `write_all` on an unbuffered handle, so concurrent handlers appending to
//! the same file interleave whole lines.

use crate::model::error::SinkError;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A JSONL file that only ever grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    /// Sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a JSON line.
    ///
    /// Creates the parent directory and the file if needed. Nothing is
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if serialization, directory creation, opening or
    /// writing fails. The file is left untouched when serialization fails.
    pub fn append<T: Serialize>(&self, record: &T) -> Result<(), SinkError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SinkError::DirectoryCreation {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| SinkError::Open {
                path: self.path.clone(),
                source,
            })?;

        file.write_all(&line).map_err(|source| SinkError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
