//! Employee record and identifier.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::IdAllocator;

/// Date format used by every textual representation of a hire date.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Unique identifier for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u32);

impl EmployeeId {
    /// Creates an id from its numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EmployeeId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// One employee entry.
///
/// Identity is the id alone: equality and hashing ignore every other field.
/// `id` and `hire_date` are fixed at construction, the remaining fields have
/// setters.
///
/// Not `Ord`: sort listings with [`Employee::cmp_by_name`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    department: String,
    salary: f64,
    hire_date: NaiveDate,
    email: String,
}

impl Employee {
    /// Creates a new hire: next id from `ids`, hire date today.
    pub fn new(
        ids: &IdAllocator,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: ids.allocate(),
            name: name.into(),
            department: department.into(),
            salary,
            hire_date: today(),
            email: email.into(),
        }
    }

    /// Rebuilds a record that already has an id, e.g. one read from a file.
    ///
    /// `ids` is advanced past `id` so later hires cannot collide with it.
    pub fn reconstruct(
        ids: &IdAllocator,
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
        hire_date: NaiveDate,
        email: impl Into<String>,
    ) -> Self {
        ids.observe(id);
        Self {
            id,
            name: name.into(),
            department: department.into(),
            salary,
            hire_date,
            email: email.into(),
        }
    }

    /// Returns the id.
    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the department.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Sets the department.
    ///
    /// For a record held by a [`Roster`](crate::Roster), go through
    /// [`Roster::modify`](crate::Roster::modify) so the department index follows.
    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
    }

    /// Returns the salary.
    #[must_use]
    pub const fn salary(&self) -> f64 {
        self.salary
    }

    /// Sets the salary.
    pub const fn set_salary(&mut self, salary: f64) {
        self.salary = salary;
    }

    /// Returns the hire date.
    #[must_use]
    pub const fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Sets the email address.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Calendar years between the hire year and the current year.
    ///
    /// Month and day are ignored: someone hired on 31 December has one year of
    /// service on 1 January.
    #[must_use]
    pub fn years_of_service(&self) -> i32 {
        self.years_of_service_on(today())
    }

    /// Same as [`years_of_service`](Self::years_of_service), measured on `date`.
    #[must_use]
    pub fn years_of_service_on(&self, date: NaiveDate) -> i32 {
        date.year() - self.hire_date.year()
    }

    /// Case-insensitive ordering on the name.
    #[must_use]
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name.to_lowercase().cmp(&other.name.to_lowercase())
    }

    /// The six canonical fields: id, name, department, salary with two
    /// decimals, ISO-8601 hire date and email.
    #[must_use]
    pub fn csv_fields(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.department.clone(),
            format!("{:.2}", self.salary),
            self.hire_date.format(DATE_FORMAT).to_string(),
            self.email.clone(),
        ]
    }

    /// The canonical comma-joined representation,
    /// `id,name,department,salary,hireDate,email`.
    #[must_use]
    pub fn to_csv_line(&self) -> String {
        self.csv_fields().join(",")
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee{{id={}, name='{}', dept='{}', salary={:.2}, hireDate={}, email='{}'}}",
            self.id,
            self.name,
            self.department,
            self.salary,
            self.hire_date.format(DATE_FORMAT),
            self.email
        )
    }
}

/// Today's date in the local time zone.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_assigns_sequential_ids_and_today() {
        let ids = IdAllocator::new();
        let a = Employee::new(&ids, "A", "Eng", 1.0, "a@x.com");
        let b = Employee::new(&ids, "B", "Eng", 1.0, "b@x.com");
        assert_eq!(a.id(), EmployeeId::new(1));
        assert_eq!(b.id(), EmployeeId::new(2));
        assert_eq!(a.hire_date(), today());
    }

    #[test]
    fn test_reconstruct_advances_allocator() {
        let ids = IdAllocator::new();
        let loaded = Employee::reconstruct(
            &ids,
            EmployeeId::new(7),
            "A",
            "Eng",
            1.0,
            date(2020, 1, 1),
            "a@x.com",
        );
        assert_eq!(loaded.id(), EmployeeId::new(7));
        let fresh = Employee::new(&ids, "B", "Eng", 1.0, "b@x.com");
        assert_eq!(fresh.id(), EmployeeId::new(8));
    }

    #[test]
    fn test_identity_is_id_only() {
        let ids = IdAllocator::new();
        let a = Employee::reconstruct(
            &ids,
            EmployeeId::new(3),
            "A",
            "Eng",
            1.0,
            date(2020, 1, 1),
            "a@x.com",
        );
        let mut b = a.clone();
        b.set_name("Someone Else");
        b.set_salary(99.0);
        assert_eq!(a, b);

        let set: HashSet<Employee> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_years_of_service_ignores_month_and_day() {
        let ids = IdAllocator::new();
        let e = Employee::reconstruct(
            &ids,
            EmployeeId::new(1),
            "A",
            "Eng",
            1.0,
            date(2020, 12, 31),
            "a@x.com",
        );
        assert_eq!(e.years_of_service_on(date(2021, 1, 1)), 1);
        assert_eq!(e.years_of_service_on(date(2020, 12, 31)), 0);
    }

    #[test]
    fn test_cmp_by_name_is_case_insensitive() {
        let ids = IdAllocator::new();
        let a = Employee::new(&ids, "alice", "Eng", 1.0, "");
        let b = Employee::new(&ids, "Bob", "Eng", 1.0, "");
        let c = Employee::new(&ids, "ALICE", "Eng", 1.0, "");
        assert_eq!(a.cmp_by_name(&b), Ordering::Less);
        assert_eq!(a.cmp_by_name(&c), Ordering::Equal);
    }

    #[test]
    fn test_csv_line_format() {
        let ids = IdAllocator::new();
        let e = Employee::reconstruct(
            &ids,
            EmployeeId::new(12),
            "John Doe",
            "Engineering",
            75000.0,
            date(2023, 4, 5),
            "john.doe@company.com",
        );
        assert_eq!(
            e.to_csv_line(),
            "12,John Doe,Engineering,75000.00,2023-04-05,john.doe@company.com"
        );
    }

    #[test]
    fn test_display() {
        let ids = IdAllocator::new();
        let e = Employee::reconstruct(
            &ids,
            EmployeeId::new(1),
            "Jane",
            "HR",
            60000.5,
            date(2022, 2, 3),
            "jane@x.com",
        );
        assert_eq!(
            e.to_string(),
            concat!(
                "Employee{id=1, name='Jane', dept='HR', salary=60000.50, ",
                "hireDate=2022-02-03, email='jane@x.com'}",
            )
        );
    }
}
