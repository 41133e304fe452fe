//! Stream-based event source.
//!
//! The host writes one JSON document to the handler's stdin and closes the
//! pipe. There is no framing: the whole stream is the payload.

use crate::model::error::InputError;
use std::io::{self, Read};

/// Drains a byte stream to EOF and hands it over as text.
#[derive(Debug)]
pub struct StreamSource<R: Read> {
    reader: R,
}

impl StreamSource<io::Stdin> {
    /// Stream source over the process's stdin.
    pub fn stdin() -> Self {
        Self {
            reader: io::stdin(),
        }
    }
}

impl<R: Read> StreamSource<R> {
    /// Create a StreamSource from any reader.
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Read until the producer closes the stream.
    ///
    /// Blocks with no timeout; the host bounds the handler's lifetime.
    /// Invalid UTF-8 sequences are replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the read itself fails.
    pub fn drain(mut self) -> Result<String, InputError> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reader that hands out its data in fixed-size chunks.
    struct Chunked<'a> {
        data: &'a [u8],
        chunk: usize,
    }

    impl Read for Chunked<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.chunk.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn drain_returns_whole_stream() {
        let data = b"{\"session_id\":\"s1\"}";
        let source = StreamSource::from_reader(&data[..]);
        assert_eq!(source.drain().unwrap(), "{\"session_id\":\"s1\"}");
    }

    #[test]
    fn drain_concatenates_chunks_in_order() {
        let data = "{\"prompt\":\"héllo wörld\"}".as_bytes();
        let source = StreamSource::from_reader(Chunked { data, chunk: 3 });
        assert_eq!(source.drain().unwrap(), "{\"prompt\":\"héllo wörld\"}");
    }

    #[test]
    fn drain_of_empty_stream_is_empty_text() {
        let source = StreamSource::from_reader(&b""[..]);
        assert_eq!(source.drain().unwrap(), "");
    }

    #[test]
    fn drain_replaces_invalid_utf8() {
        let data = b"ab\xffcd";
        let source = StreamSource::from_reader(&data[..]);
        assert_eq!(source.drain().unwrap(), "ab\u{FFFD}cd");
    }

    #[test]
    fn drain_surfaces_read_errors() {
        let source = StreamSource::from_reader(Failing);
        assert!(matches!(source.drain(), Err(InputError::Io(_))));
    }
}
