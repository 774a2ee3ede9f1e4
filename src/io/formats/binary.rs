//! Binary snapshot format.
//!
//! The whole collection is written in one go: an 8-byte magic followed by a
//! `bitcode` encoding of a versioned envelope. Only round-trips through this
//! crate are supported.

use crate::io::traits::{ExportSink, ImportSource, SourceItem};
use crate::models::{Employee, IdAllocator};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// File signature.
const MAGIC: &[u8; 8] = b"ROSTER\0\x01";

/// Envelope layout version.
const FORMAT_VERSION: u16 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u16,
    employees: &'a [Employee],
}

#[derive(Deserialize)]
struct Snapshot {
    version: u16,
    employees: Vec<Employee>,
}

/// Binary import source.
///
/// Decodes the full snapshot on construction and then yields its records.
pub struct BinaryImportSource {
    employees: std::vec::IntoIter<Employee>,
}

impl BinaryImportSource {
    /// Reads and decodes a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails, the signature or version is wrong,
    /// or the payload does not decode.
    pub fn new<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Error::failed("read_binary", e))?;

        let payload = bytes
            .strip_prefix(MAGIC.as_slice())
            .ok_or_else(|| Error::InvalidInput("not a roster binary file".to_string()))?;

        let snapshot: Snapshot =
            bitcode::deserialize(payload).map_err(|e| Error::failed("decode_binary", e))?;
        if snapshot.version != FORMAT_VERSION {
            return Err(Error::InvalidInput(format!(
                "unsupported binary format version {} (expected {FORMAT_VERSION})",
                snapshot.version
            )));
        }

        Ok(Self {
            employees: snapshot.employees.into_iter(),
        })
    }
}

impl ImportSource for BinaryImportSource {
    fn next(&mut self, ids: &IdAllocator) -> Result<Option<SourceItem>> {
        Ok(self.employees.next().map(|employee| {
            ids.observe(employee.id());
            SourceItem::Record(employee)
        }))
    }
}

/// Binary export sink.
///
/// Buffers records and writes the snapshot on [`finalize`](ExportSink::finalize).
pub struct BinaryExportSink<W: Write> {
    writer: W,
    employees: Vec<Employee>,
}

impl<W: Write> BinaryExportSink<W> {
    /// Creates a new binary export sink.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            employees: Vec::new(),
        }
    }
}

impl<W: Write> ExportSink for BinaryExportSink<W> {
    fn write(&mut self, employee: &Employee) -> Result<()> {
        self.employees.push(employee.clone());
        Ok(())
    }

    fn finalize(mut self: Box<Self>) -> Result<()> {
        let payload = bitcode::serialize(&SnapshotRef {
            version: FORMAT_VERSION,
            employees: &self.employees,
        })
        .map_err(|e| Error::failed("encode_binary", e))?;

        write_snapshot(&mut self.writer, &payload).map_err(|e| Error::failed("write_binary", e))
    }
}

fn write_snapshot<W: Write>(writer: &mut W, payload: &[u8]) -> std::io::Result<()> {
    writer.write_all(MAGIC)?;
    writer.write_all(payload)?;
    writer.flush()
}
