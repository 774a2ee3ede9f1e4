//! Core traits for import/export operations.
//!
//! Defines the [`ImportSource`] and [`ExportSink`] traits that format adapters
//! implement, plus the per-line failure and load summary types they report.

use thiserror::Error as ThisError;

use super::formats::Format;
use crate::Result;
use crate::models::{Employee, IdAllocator};

/// A single input line that could not be turned into an employee.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("line {line}: {reason} (input: {content:?})")]
pub struct LineError {
    /// 1-based line number in the source file.
    pub line: usize,
    /// The offending line as read.
    pub content: String,
    /// Why parsing failed.
    pub reason: String,
}

/// One step of an import.
#[derive(Debug)]
pub enum SourceItem {
    /// A parsed employee.
    Record(Employee),
    /// A line with too few fields, ignored.
    Skipped {
        /// 1-based line number.
        line: usize,
    },
    /// A line whose fields failed to parse.
    Invalid(LineError),
}

/// Source of imported employees.
///
/// Implementations read one format and yield items one at a time. An `Err`
/// from [`next`](Self::next) means the underlying read failed and the whole
/// import must be abandoned; malformed lines come back as
/// [`SourceItem::Invalid`] instead.
pub trait ImportSource {
    /// Returns the next item, or `None` at end of input.
    ///
    /// Sources that mint new ids draw them from `ids`; sources that carry ids
    /// advance it past each one.
    fn next(&mut self, ids: &IdAllocator) -> Result<Option<SourceItem>>;
}

/// Sink for exported employees.
pub trait ExportSink {
    /// Writes one employee.
    fn write(&mut self, employee: &Employee) -> Result<()>;

    /// Completes the export and flushes buffered output.
    fn finalize(self: Box<Self>) -> Result<()>;
}

/// Outcome of a bulk load.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Format that was read.
    pub format: Format,
    /// Employees now in the roster.
    pub loaded: usize,
    /// Lines ignored for having too few fields.
    pub skipped: usize,
    /// Lines that failed to parse.
    pub errors: Vec<LineError>,
    /// Source path, for file loads.
    pub path: Option<String>,
}

impl LoadReport {
    /// Creates an empty report for `format`.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self {
            format,
            loaded: 0,
            skipped: 0,
            errors: Vec::new(),
            path: None,
        }
    }

    /// Returns whether any line failed to parse.
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Outcome of a bulk save.
#[derive(Debug, Clone)]
pub struct SaveReport {
    /// Format that was written.
    pub format: Format,
    /// Employees written.
    pub written: usize,
    /// Destination path, for file saves.
    pub path: Option<String>,
}
