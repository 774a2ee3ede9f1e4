//! In-memory employee store.
//!
//! A [`Roster`] owns the employee collection, a derived department index and
//! the [`IdAllocator`] used for new hires. The index maps each department to
//! the positions of its members in the collection, in collection order, and is
//! kept in step with every mutation:
//!
//! - [`Roster::add`] appends to the collection and to the bucket
//! - [`Roster::remove_by_id`] drops the position and shifts later ones down
//! - [`Roster::replace_all`] and [`Roster::modify`] rebuild the index
//!
//! Nothing here is synchronised. Callers sharing a roster across threads must
//! wrap the whole value in one lock so the collection and the index are never
//! observed apart.

mod report;

pub use report::{DepartmentStats, RosterReport};

use std::collections::BTreeMap;

use crate::models::{Employee, EmployeeId, IdAllocator};
use crate::{Error, Result};

/// The employee collection plus its department index.
#[derive(Debug, Default)]
pub struct Roster {
    employees: Vec<Employee>,
    departments: BTreeMap<String, Vec<usize>>,
    ids: IdAllocator,
}

impl Roster {
    /// Creates an empty roster with a fresh id allocator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster seeded with the built-in sample employees.
    #[must_use]
    pub fn with_sample_data() -> Self {
        let mut roster = Self::new();
        for employee in sample_employees(&roster.ids) {
            roster.add(employee);
        }
        roster
    }

    /// The allocator new hires should draw their ids from.
    #[must_use]
    pub const fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    /// Number of employees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// All employees in collection order.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Department names that currently have at least one member, sorted.
    pub fn departments(&self) -> impl Iterator<Item = &str> {
        self.departments.keys().map(String::as_str)
    }

    /// Appends an employee and files it under its department.
    ///
    /// Ids are not checked for duplicates.
    pub fn add(&mut self, employee: Employee) {
        tracing::debug!(
            id = %employee.id(),
            name = employee.name(),
            department = employee.department(),
            "added employee"
        );
        let position = self.employees.len();
        self.departments
            .entry(employee.department().to_string())
            .or_default()
            .push(position);
        self.employees.push(employee);
    }

    /// Finds the first employee with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no employee has that id.
    pub fn find_by_id(&self, id: EmployeeId) -> Result<&Employee> {
        self.employees
            .iter()
            .find(|employee| employee.id() == id)
            .ok_or(Error::NotFound(id))
    }

    /// Sets the salary of employee `id`, returning the previous salary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no employee has that id.
    pub fn update_salary(&mut self, id: EmployeeId, salary: f64) -> Result<f64> {
        let employee = self.find_mut(id)?;
        let previous = employee.salary();
        employee.set_salary(salary);
        tracing::debug!(%id, previous, salary, "updated salary");
        Ok(previous)
    }

    /// Applies `edit` to employee `id`.
    ///
    /// The department index is rebuilt if the edit moved the employee to a
    /// different department.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no employee has that id.
    pub fn modify<F>(&mut self, id: EmployeeId, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Employee),
    {
        let employee = self.find_mut(id)?;
        let department = employee.department().to_string();
        edit(employee);
        if employee.department() != department {
            self.rebuild_department_index();
        }
        Ok(())
    }

    /// Removes the first employee with `id` from the collection and its bucket.
    ///
    /// Returns whether an employee was removed. A record missing from its
    /// department bucket is logged and otherwise ignored; the collection
    /// removal still happens.
    pub fn remove_by_id(&mut self, id: EmployeeId) -> bool {
        let Some(position) = self.employees.iter().position(|e| e.id() == id) else {
            return false;
        };
        let removed = self.employees.remove(position);

        let emptied = match self.departments.get_mut(removed.department()) {
            Some(bucket) => {
                if let Some(slot) = bucket.iter().position(|&p| p == position) {
                    bucket.remove(slot);
                } else {
                    tracing::warn!(
                        %id,
                        department = removed.department(),
                        "employee missing from its department bucket"
                    );
                }
                bucket.is_empty()
            },
            None => {
                tracing::warn!(
                    %id,
                    department = removed.department(),
                    "department bucket missing for removed employee"
                );
                false
            },
        };
        if emptied {
            self.departments.remove(removed.department());
        }

        for bucket in self.departments.values_mut() {
            for p in bucket.iter_mut().filter(|p| **p > position) {
                *p -= 1;
            }
        }

        tracing::debug!(%id, name = removed.name(), "removed employee");
        true
    }

    /// Members of `department` in collection order; empty if the department is unknown.
    #[must_use]
    pub fn by_department(&self, department: &str) -> Vec<&Employee> {
        self.departments
            .get(department)
            .map(|bucket| {
                bucket
                    .iter()
                    .filter_map(|&position| self.employees.get(position))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All employees, stably sorted by name ignoring case.
    #[must_use]
    pub fn all_sorted_by_name(&self) -> Vec<&Employee> {
        let mut sorted: Vec<&Employee> = self.employees.iter().collect();
        sorted.sort_by(|a, b| a.cmp_by_name(b));
        sorted
    }

    /// Mean salary per department.
    #[must_use]
    pub fn average_salary_by_department(&self) -> BTreeMap<String, f64> {
        self.department_totals()
            .into_iter()
            .map(|(department, (count, total))| (department.to_string(), mean(total, count)))
            .collect()
    }

    /// Head count and mean salary per department, sorted by department name.
    #[must_use]
    pub fn department_stats(&self) -> Vec<DepartmentStats> {
        self.department_totals()
            .into_iter()
            .map(|(department, (count, total))| DepartmentStats {
                department: department.to_string(),
                head_count: count,
                average_salary: mean(total, count),
            })
            .collect()
    }

    /// Employees earning strictly more than `threshold`, highest salary first.
    ///
    /// Equal salaries keep their collection order.
    #[must_use]
    pub fn high_earners(&self, threshold: f64) -> Vec<&Employee> {
        let mut earners: Vec<&Employee> = self
            .employees
            .iter()
            .filter(|employee| employee.salary() > threshold)
            .collect();
        earners.sort_by(|a, b| b.salary().total_cmp(&a.salary()));
        earners
    }

    /// Employees whose name contains `term`, ignoring case, in collection order.
    #[must_use]
    pub fn search_by_name(&self, term: &str) -> Vec<&Employee> {
        let needle = term.to_lowercase();
        self.employees
            .iter()
            .filter(|employee| employee.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Recomputes the department index from the collection.
    pub fn rebuild_department_index(&mut self) {
        self.departments.clear();
        for (position, employee) in self.employees.iter().enumerate() {
            self.departments
                .entry(employee.department().to_string())
                .or_default()
                .push(position);
        }
        tracing::debug!(
            departments = self.departments.len(),
            employees = self.employees.len(),
            "rebuilt department index"
        );
    }

    /// Replaces the whole collection and rebuilds the index.
    ///
    /// The id allocator is advanced past every incoming id.
    pub fn replace_all(&mut self, employees: Vec<Employee>) {
        for employee in &employees {
            self.ids.observe(employee.id());
        }
        self.employees = employees;
        self.rebuild_department_index();
    }

    /// Aggregate metrics over the whole roster.
    #[must_use]
    pub fn report(&self) -> RosterReport<'_> {
        let total_salary: f64 = self.employees.iter().map(Employee::salary).sum();
        let highest_paid = self.employees.iter().fold(None, |best: Option<&Employee>, e| {
            match best {
                Some(current) if current.salary() >= e.salary() => Some(current),
                _ => Some(e),
            }
        });

        RosterReport {
            total_employees: self.employees.len(),
            total_salary,
            average_salary: mean(total_salary, self.employees.len()),
            highest_paid,
            departments: self.department_stats(),
        }
    }

    fn find_mut(&mut self, id: EmployeeId) -> Result<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|employee| employee.id() == id)
            .ok_or(Error::NotFound(id))
    }

    /// `(count, salary total)` per department, summed in collection order.
    fn department_totals(&self) -> BTreeMap<&str, (usize, f64)> {
        let mut totals: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
        for employee in &self.employees {
            let entry = totals.entry(employee.department()).or_default();
            entry.0 += 1;
            entry.1 += employee.salary();
        }
        totals
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(total: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}

/// The six sample employees a fresh installation starts with.
pub fn sample_employees(ids: &IdAllocator) -> Vec<Employee> {
    [
        ("John Doe", "Engineering", 75_000.0, "john.doe@company.com"),
        ("Jane Smith", "Marketing", 65_000.0, "jane.smith@company.com"),
        ("Mike Johnson", "Engineering", 80_000.0, "mike.johnson@company.com"),
        ("Sarah Wilson", "HR", 60_000.0, "sarah.wilson@company.com"),
        ("David Brown", "Finance", 70_000.0, "david.brown@company.com"),
        ("Lisa Davis", "Engineering", 85_000.0, "lisa.davis@company.com"),
    ]
    .into_iter()
    .map(|(name, department, salary, email)| Employee::new(ids, name, department, salary, email))
    .collect()
}
