//! Import/Export I/O subsystem.
//!
//! Bulk loading and saving of the whole roster in three file formats.
//!
//! # Architecture
//!
//! - **Format adapters** implement [`ImportSource`] and [`ExportSink`]
//! - **Services** open files, drive the adapters and swap the result into the
//!   [`Roster`](crate::Roster)
//!
//! # Supported Formats
//!
//! | Format | Extensions | Carries ids and hire dates |
//! |--------|------------|----------------------------|
//! | Binary | `.dat`, `.bin` | yes |
//! | CSV | `.csv` | yes |
//! | Text | `.txt`, `.psv` | no, each line is a new hire |
//!
//! # Load semantics
//!
//! A load replaces the roster's contents; it never merges. Records are staged
//! first and only swapped in once the whole input has been read, so a file
//! that cannot be opened or read leaves the roster as it was. Malformed lines
//! are reported in the [`LoadReport`] and do not fail the load.
//!
//! # Examples
//!
//! ```rust,no_run
//! use roster::{LoadService, Roster, SaveService};
//! use std::path::Path;
//!
//! let mut roster = Roster::new();
//! let report = LoadService::new(&mut roster).load_file(Path::new("employees.csv"), None)?;
//! println!("loaded {} employees, {} bad lines", report.loaded, report.errors.len());
//!
//! SaveService::new(&roster).save_file(Path::new("backup.dat"), None)?;
//! # Ok::<(), roster::Error>(())
//! ```

pub mod formats;
pub mod services;
pub mod traits;

// Re-exports for convenience
pub use formats::Format;
pub use services::load::LoadService;
pub use services::save::SaveService;
pub use traits::{ExportSink, ImportSource, LineError, LoadReport, SaveReport, SourceItem};
