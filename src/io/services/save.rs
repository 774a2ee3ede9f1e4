//! Bulk roster saving.
//!
//! Writes are not atomic: a crash part-way through leaves a truncated file.

use crate::io::formats::{Format, create_export_sink};
use crate::io::traits::SaveReport;
use crate::store::Roster;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Service for writing a roster's contents to an external sink.
pub struct SaveService<'a> {
    roster: &'a Roster,
}

impl<'a> SaveService<'a> {
    /// Creates a save service reading from `roster`.
    pub const fn new(roster: &'a Roster) -> Self {
        Self { roster }
    }

    /// Saves to a file, detecting the format from its extension unless `format` is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the format cannot be determined or the file cannot
    /// be created or written.
    pub fn save_file(&self, path: &Path, format: Option<Format>) -> Result<SaveReport> {
        let format = match format {
            Some(format) => format,
            None => Format::from_path(path)?,
        };

        let file = File::create(path)
            .map_err(|e| Error::failed("create_data_file", format!("{}: {e}", path.display())))?;

        let mut report = self.save_writer(BufWriter::new(file), format)?;
        report.path = Some(path.display().to_string());
        Ok(report)
    }

    /// Writes every employee, in collection order, to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn save_writer<W: Write>(&self, writer: W, format: Format) -> Result<SaveReport> {
        let mut sink = create_export_sink(writer, format)?;
        for employee in self.roster.employees() {
            sink.write(employee)?;
        }
        sink.finalize()?;

        let written = self.roster.len();
        tracing::info!(%format, written, "roster saved");
        Ok(SaveReport {
            format,
            written,
            path: None,
        })
    }
}
