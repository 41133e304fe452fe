//! The acknowledgment written back to the host on stdout.

use serde::Serialize;
use std::io::{self, Write};

/// Hook response telling the host to carry on untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookResponse {
    /// Let the observed event proceed.
    #[serde(rename = "continue")]
    pub continue_: bool,
    /// Hide this handler's output from the host UI.
    pub suppress_output: bool,
}

impl HookResponse {
    /// The only response this crate ever sends.
    pub const ACKNOWLEDGE: HookResponse = HookResponse {
        continue_: true,
        suppress_output: true,
    };

    /// Write the response as a single JSON line.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the writer fails.
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}
