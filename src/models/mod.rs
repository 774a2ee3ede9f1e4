//! Data models for the roster.
//!
//! This module contains the employee record and the id allocator that numbers
//! new records.

mod employee;
mod ids;

pub(crate) use employee::DATE_FORMAT;
pub use employee::{Employee, EmployeeId};
pub use ids::IdAllocator;
