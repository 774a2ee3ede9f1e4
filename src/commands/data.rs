//! Data file access and conversion.

use std::path::{Path, PathBuf};

use roster::{Format, LoadReport, LoadService, Result, Roster, SaveService};

use super::MAX_REPORTED_ERRORS;

/// Where a command reads its roster from and writes it back to.
#[derive(Debug, Clone)]
pub struct DataSource {
    /// Data file path.
    pub path: PathBuf,
    /// Explicit format, or `None` to detect from the extension.
    pub format: Option<Format>,
    /// Start from the sample employees when the file does not exist.
    pub seed_sample_data: bool,
}

impl DataSource {
    /// Loads the roster from the data file.
    ///
    /// A missing file yields the sample roster or an empty one.
    pub fn open(&self) -> Result<Roster> {
        if !self.path.exists() {
            tracing::info!(
                path = %self.path.display(),
                seed = self.seed_sample_data,
                "data file not found, starting a new roster"
            );
            return Ok(if self.seed_sample_data {
                Roster::with_sample_data()
            } else {
                Roster::new()
            });
        }

        let mut roster = Roster::new();
        let report = LoadService::new(&mut roster).load_file(&self.path, self.format)?;
        print_load_problems(&report);
        Ok(roster)
    }

    /// Writes the roster back to the data file.
    pub fn save(&self, roster: &Roster) -> Result<()> {
        SaveService::new(roster).save_file(&self.path, self.format)?;
        Ok(())
    }
}

/// Reports skipped and malformed lines on stderr.
fn print_load_problems(report: &LoadReport) {
    if report.skipped > 0 {
        eprintln!("Skipped {} line(s) with too few fields", report.skipped);
    }
    if !report.has_errors() {
        return;
    }

    eprintln!("Errors ({}):", report.errors.len());
    for error in report.errors.iter().take(MAX_REPORTED_ERRORS) {
        eprintln!("  - {error}");
    }
    if report.errors.len() > MAX_REPORTED_ERRORS {
        eprintln!("  ... and {} more", report.errors.len() - MAX_REPORTED_ERRORS);
    }
}

/// Executes the convert command.
pub fn cmd_convert(
    input: &Path,
    output: &Path,
    from: Option<String>,
    to: Option<String>,
) -> Result<()> {
    let from = from.map(|f| f.parse::<Format>()).transpose()?;
    let to = to.map(|f| f.parse::<Format>()).transpose()?;

    let mut roster = Roster::new();
    let loaded = LoadService::new(&mut roster).load_file(input, from)?;
    print_load_problems(&loaded);

    let saved = SaveService::new(&roster).save_file(output, to)?;

    println!("Conversion completed:");
    println!("  Read ({}):    {}", loaded.format, loaded.loaded);
    println!("  Written ({}): {}", saved.format, saved.written);
    println!("  Output:       {}", output.display());

    Ok(())
}
