//! Bulk roster loading.
//!
//! Orchestrates reading a whole file into the roster, replacing its contents.

use crate::io::formats::{Format, create_import_source};
use crate::io::traits::{ImportSource, LoadReport, SourceItem};
use crate::models::IdAllocator;
use crate::store::Roster;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Service for replacing a roster's contents from an external source.
pub struct LoadService<'a> {
    roster: &'a mut Roster,
}

impl<'a> LoadService<'a> {
    /// Creates a load service targeting `roster`.
    pub const fn new(roster: &'a mut Roster) -> Self {
        Self { roster }
    }

    /// Loads a file, detecting the format from its extension unless `format` is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the format cannot be determined, or the file cannot
    /// be opened, read or decoded. The roster is unchanged in that case.
    pub fn load_file(&mut self, path: &Path, format: Option<Format>) -> Result<LoadReport> {
        let format = match format {
            Some(format) => format,
            None => Format::from_path(path)?,
        };

        let file = File::open(path)
            .map_err(|e| Error::failed("open_data_file", format!("{}: {e}", path.display())))?;

        let mut report = self.load_reader(BufReader::new(file), format)?;
        report.path = Some(path.display().to_string());
        Ok(report)
    }

    /// Loads from a reader in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails. The roster is unchanged
    /// in that case.
    pub fn load_reader<R: BufRead>(&mut self, reader: R, format: Format) -> Result<LoadReport> {
        let mut source = create_import_source(reader, format)?;
        self.load_from_source(source.as_mut(), format)
    }

    /// Drains `source` into a staging area, then swaps it into the roster.
    ///
    /// Ids are drawn from a scratch allocator that continues the roster's
    /// sequence; the roster's own counter only moves once the swap happens.
    ///
    /// # Errors
    ///
    /// Returns the first read error from `source`. The roster, including its
    /// id counter, is unchanged in that case.
    pub fn load_from_source(
        &mut self,
        source: &mut (dyn ImportSource + '_),
        format: Format,
    ) -> Result<LoadReport> {
        let mut report = LoadReport::new(format);
        let mut staged = Vec::new();
        let scratch = IdAllocator::starting_at(self.roster.ids().peek());

        while let Some(item) = source.next(&scratch)? {
            match item {
                SourceItem::Record(employee) => staged.push(employee),
                SourceItem::Skipped { line } => {
                    tracing::debug!(line, "skipping line with too few fields");
                    report.skipped += 1;
                },
                SourceItem::Invalid(error) => {
                    tracing::warn!(
                        line = error.line,
                        reason = %error.reason,
                        "skipping unparseable line"
                    );
                    report.errors.push(error);
                },
            }
        }

        report.loaded = staged.len();
        self.roster.replace_all(staged);

        tracing::info!(
            %format,
            loaded = report.loaded,
            skipped = report.skipped,
            errors = report.errors.len(),
            "roster loaded"
        );
        Ok(report)
    }
}
