//! CSV format adapter for import/export.
//!
//! Columns are positional: `ID,Name,Department,Salary,HireDate,Email`. The
//! first line is a header and is discarded on import. Every physical line is
//! one record: quoting applies within a line and never spans a line break, so
//! a stray quote only affects the line it is on.

use crate::io::traits::{ExportSink, ImportSource, LineError, SourceItem};
use crate::models::{DATE_FORMAT, Employee, EmployeeId, IdAllocator};
use crate::{Error, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

use super::lines::PhysicalLines;

/// Header row written on export.
pub const HEADER: [&str; 6] = ["ID", "Name", "Department", "Salary", "HireDate", "Email"];

/// Rows with fewer fields than this are skipped.
const FIELD_COUNT: usize = HEADER.len();

/// CSV import source.
pub struct CsvImportSource<R: BufRead> {
    lines: PhysicalLines<R>,
    header_read: bool,
}

impl<R: BufRead> CsvImportSource<R> {
    /// Creates a new CSV import source.
    pub const fn new(reader: R) -> Self {
        Self {
            lines: PhysicalLines::new(reader),
            header_read: false,
        }
    }
}

impl<R: BufRead> ImportSource for CsvImportSource<R> {
    fn next(&mut self, ids: &IdAllocator) -> Result<Option<SourceItem>> {
        loop {
            let Some((line, text)) = self.lines.next_line("read_csv")? else {
                return Ok(None);
            };
            if !self.header_read {
                self.header_read = true;
                continue;
            }

            let content = match text {
                Ok(content) => content,
                Err(error) => return Ok(Some(SourceItem::Invalid(error))),
            };
            if content.trim().is_empty() {
                continue;
            }

            let record = match split_line(&content) {
                Ok(record) => record,
                Err(reason) => {
                    return Ok(Some(SourceItem::Invalid(LineError {
                        line,
                        content,
                        reason,
                    })));
                },
            };
            if record.len() < FIELD_COUNT {
                return Ok(Some(SourceItem::Skipped { line }));
            }

            return Ok(Some(match parse_record(&record, ids) {
                Ok(employee) => SourceItem::Record(employee),
                Err(reason) => SourceItem::Invalid(LineError {
                    line,
                    content,
                    reason,
                }),
            }));
        }
    }
}

/// Splits one line into trimmed fields.
fn split_line(line: &str) -> std::result::Result<csv::StringRecord, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    reader
        .read_record(&mut record)
        .map_err(|e| format!("malformed CSV: {e}"))?;
    Ok(record)
}

/// Parses the first six fields of a row.
fn parse_record(
    record: &csv::StringRecord,
    ids: &IdAllocator,
) -> std::result::Result<Employee, String> {
    let field = |i: usize| record.get(i).unwrap_or_default();

    let id = field(0)
        .parse::<u32>()
        .map_err(|e| format!("invalid id '{}': {e}", field(0)))?;
    let salary = field(3)
        .parse::<f64>()
        .map_err(|e| format!("invalid salary '{}': {e}", field(3)))?;
    let hire_date = NaiveDate::parse_from_str(field(4), DATE_FORMAT)
        .map_err(|e| format!("invalid hire date '{}': {e}", field(4)))?;

    Ok(Employee::reconstruct(
        ids,
        EmployeeId::new(id),
        field(1),
        field(2),
        salary,
        hire_date,
        field(5),
    ))
}

/// CSV export sink.
///
/// Writes the header on creation, then one row per employee using the
/// record's canonical fields. Fields containing commas or quotes are quoted.
pub struct CsvExportSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvExportSink<W> {
    /// Creates a new CSV export sink and writes the header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn new(writer: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false) // We write headers manually
            .from_writer(writer);
        writer
            .write_record(HEADER)
            .map_err(|e| Error::failed("write_csv_headers", e))?;
        Ok(Self { writer })
    }
}

impl<W: Write> ExportSink for CsvExportSink<W> {
    fn write(&mut self, employee: &Employee) -> Result<()> {
        self.writer
            .write_record(&employee.csv_fields())
            .map_err(|e| Error::failed("write_csv", e))
    }

    fn finalize(mut self: Box<Self>) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::failed("flush_csv", e))
    }
}
