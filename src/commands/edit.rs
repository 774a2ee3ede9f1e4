//! Mutating command handlers.
//!
//! Each handler changes the roster and then writes it back to its data source.

use roster::{Employee, EmployeeId, Result};

use super::DataSource;

/// Executes the add command.
pub fn cmd_add(
    source: &DataSource,
    name: &str,
    department: &str,
    salary: f64,
    email: &str,
) -> Result<()> {
    let mut roster = source.open()?;
    let employee = Employee::new(roster.ids(), name, department, salary, email);
    let id = employee.id();
    roster.add(employee);
    source.save(&roster)?;

    println!("Employee added with ID: {id}");
    Ok(())
}

/// Executes the set-salary command.
pub fn cmd_set_salary(source: &DataSource, id: u32, salary: f64) -> Result<()> {
    let mut roster = source.open()?;
    let previous = roster.update_salary(EmployeeId::new(id), salary)?;
    source.save(&roster)?;

    println!("Updated salary for employee {id} from ${previous:.2} to ${salary:.2}");
    Ok(())
}

/// Executes the remove command.
pub fn cmd_remove(source: &DataSource, id: u32) -> Result<()> {
    let mut roster = source.open()?;
    let id = EmployeeId::new(id);
    if !roster.remove_by_id(id) {
        return Err(roster::Error::NotFound(id));
    }
    source.save(&roster)?;

    println!("Employee {id} removed");
    Ok(())
}
