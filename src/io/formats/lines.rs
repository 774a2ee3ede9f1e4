//! Physical line reading shared by the line-oriented formats.
//!
//! Lines are read as raw bytes so that one badly encoded line is reported on
//! its own instead of failing the whole read.

use crate::io::traits::LineError;
use crate::{Error, Result};
use std::io::BufRead;

/// Splits a reader into numbered physical lines.
pub struct PhysicalLines<R: BufRead> {
    reader: R,
    line: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> PhysicalLines<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: Vec::new(),
        }
    }

    /// Returns the next line number and its text without the line ending.
    ///
    /// A line that is not valid UTF-8 comes back as a [`LineError`]. `Err` is
    /// reserved for failures of the reader itself.
    pub fn next_line(
        &mut self,
        operation: &str,
    ) -> Result<Option<(usize, std::result::Result<String, LineError>)>> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| Error::failed(operation, e))?;
        if read == 0 {
            return Ok(None);
        }
        self.line += 1;

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }

        let line = self.line;
        let text = match std::str::from_utf8(&self.buf) {
            Ok(text) => Ok(text.to_string()),
            Err(e) => Err(LineError {
                line,
                content: String::from_utf8_lossy(&self.buf).into_owned(),
                reason: format!("invalid UTF-8: {e}"),
            }),
        };
        Ok(Some((line, text)))
    }
}
