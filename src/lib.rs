//! # Roster
//!
//! An in-memory employee roster with bulk import/export.
//!
//! The crate is organised leaf to root:
//!
//! - [`models`]: the [`Employee`] record and the [`IdAllocator`] that hands out ids
//! - [`store`]: the [`Roster`], a record collection plus a derived department index
//! - [`io`]: binary, CSV and pipe-text codecs with load/save services
//! - [`config`] and [`observability`]: configuration file and logging setup
//!
//! ## Example
//!
//! ```rust
//! use roster::{Employee, Roster};
//!
//! let mut roster = Roster::new();
//! let alice = Employee::new(roster.ids(), "Alice", "Engineering", 75_000.0, "alice@company.com");
//! let id = alice.id();
//! roster.add(alice);
//!
//! assert_eq!(roster.find_by_id(id).map(Employee::name).ok(), Some("Alice"));
//! assert_eq!(roster.by_department("Engineering").len(), 1);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

pub mod config;
pub mod connection;
pub mod io;
pub mod models;
pub mod observability;
pub mod store;

pub use config::RosterConfig;
pub use connection::Connection;
pub use io::{Format, LineError, LoadReport, LoadService, SaveService};
pub use models::{Employee, EmployeeId, IdAllocator};
pub use store::{DepartmentStats, Roster, RosterReport};

/// Error type for roster operations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `NotFound` | Lookup, salary update or edit by an id that is not in the roster |
/// | `InvalidInput` | Unknown format name or extension, corrupt binary header |
/// | `OperationFailed` | File open/read/write failures, encode/decode failures |
///
/// Malformed lines inside CSV and text files are not errors of this type; they
/// are collected as [`LineError`]s in the [`LoadReport`].
#[derive(Debug, ThisError)]
pub enum Error {
    /// No employee carries the requested id.
    #[error("employee with id {0} not found")]
    NotFound(EmployeeId),

    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - A data file cannot be opened, read, created or flushed
    /// - A binary payload fails to encode or decode
    /// - Logging cannot be initialised
    /// - A configuration file cannot be read or parsed
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

impl Error {
    /// Builds an [`Error::OperationFailed`] from an operation name and any displayable cause.
    pub(crate) fn failed(operation: &str, cause: impl std::fmt::Display) -> Self {
        Self::OperationFailed {
            operation: operation.to_string(),
            cause: cause.to_string(),
        }
    }
}

/// Result type alias for roster operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotFound(EmployeeId::new(42));
        assert_eq!(err.to_string(), "employee with id 42 not found");

        let err = Error::InvalidInput("test error".to_string());
        assert_eq!(err.to_string(), "invalid input: test error");

        let err = Error::failed("read_csv", "permission denied");
        assert_eq!(
            err.to_string(),
            "operation 'read_csv' failed: permission denied"
        );
    }
}
