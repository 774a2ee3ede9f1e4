//! Aggregate roster metrics.

use crate::models::Employee;

/// Head count and mean salary of one department.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentStats {
    /// Department name.
    pub department: String,
    /// Number of employees in the department.
    pub head_count: usize,
    /// Arithmetic mean of their salaries.
    pub average_salary: f64,
}

/// Snapshot of the roster's aggregate metrics.
#[derive(Debug, Clone)]
pub struct RosterReport<'a> {
    /// Number of employees.
    pub total_employees: usize,
    /// Sum of all salaries.
    pub total_salary: f64,
    /// Mean salary, `0.0` for an empty roster.
    pub average_salary: f64,
    /// Highest salary; the earliest such employee on ties.
    pub highest_paid: Option<&'a Employee>,
    /// Per-department statistics, sorted by department name.
    pub departments: Vec<DepartmentStats>,
}

impl RosterReport<'_> {
    /// Returns whether the report covers no employees.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_employees == 0
    }
}
