//! Format adapters for import/export.
//!
//! Each format implements [`ImportSource`] and [`ExportSink`].

pub mod binary;
pub mod csv;
mod lines;
pub mod text;

use crate::{Error, Result};
use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use super::traits::{ExportSink, ImportSource};

/// Supported file formats for import/export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Opaque binary snapshot of the whole collection.
    Binary,
    /// `ID,Name,Department,Salary,HireDate,Email` with a header line.
    Csv,
    /// `name|department|salary|email`, `#` comments allowed.
    Text,
}

impl Format {
    /// Returns the preferred file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Binary => "dat",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }

    /// Detects format from file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not recognized.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("dat" | "bin") => Ok(Self::Binary),
            Some("csv") => Ok(Self::Csv),
            Some("txt" | "psv") => Ok(Self::Text),
            Some(ext) => Err(Error::InvalidInput(format!(
                "Unsupported file extension: .{ext}"
            ))),
            None => Err(Error::InvalidInput(
                "Cannot determine format: file has no extension".to_string(),
            )),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "binary" | "bin" | "dat" => Ok(Self::Binary),
            "csv" => Ok(Self::Csv),
            "text" | "txt" | "pipe" => Ok(Self::Text),
            _ => Err(Error::InvalidInput(format!("Unknown format: {s}"))),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary => write!(f, "binary"),
            Self::Csv => write!(f, "csv"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Creates an import source for the given format and reader.
///
/// # Errors
///
/// Returns an error if the source cannot be initialised. The binary source
/// reads and decodes the whole input here.
pub fn create_import_source<'r, R: BufRead + 'r>(
    reader: R,
    format: Format,
) -> Result<Box<dyn ImportSource + 'r>> {
    match format {
        Format::Binary => Ok(Box::new(binary::BinaryImportSource::new(reader)?)),
        Format::Csv => Ok(Box::new(csv::CsvImportSource::new(reader))),
        Format::Text => Ok(Box::new(text::TextImportSource::new(reader))),
    }
}

/// Creates an export sink for the given format and writer.
///
/// # Errors
///
/// Returns an error if sink creation fails.
pub fn create_export_sink<'w, W: Write + 'w>(
    writer: W,
    format: Format,
) -> Result<Box<dyn ExportSink + 'w>> {
    match format {
        Format::Binary => Ok(Box::new(binary::BinaryExportSink::new(writer))),
        Format::Csv => Ok(Box::new(csv::CsvExportSink::new(writer)?)),
        Format::Text => Ok(Box::new(text::TextExportSink::new(writer)?)),
    }
}
