//! Read-only command handlers.

use roster::{EmployeeId, Result, Roster};

use super::print_employees;

/// Executes the list command.
pub fn cmd_list(roster: &Roster, by_name: bool) -> Result<()> {
    if by_name {
        print_employees(roster.all_sorted_by_name(), "No employees found.");
    } else {
        print_employees(roster.employees(), "No employees found.");
    }
    Ok(())
}

/// Executes the show command.
pub fn cmd_show(roster: &Roster, id: u32) -> Result<()> {
    let employee = roster.find_by_id(EmployeeId::new(id))?;
    println!("{employee}");
    println!("Years of service: {}", employee.years_of_service());
    Ok(())
}

/// Executes the department command.
pub fn cmd_department(roster: &Roster, department: &str) -> Result<()> {
    println!("Employees in {department}:");
    print_employees(roster.by_department(department), "  (none)");
    Ok(())
}

/// Executes the search command.
pub fn cmd_search(roster: &Roster, term: &str) -> Result<()> {
    print_employees(
        roster.search_by_name(term),
        &format!("No employees matching '{term}'."),
    );
    Ok(())
}

/// Executes the high-earners command.
pub fn cmd_high_earners(roster: &Roster, threshold: f64) -> Result<()> {
    println!("Employees earning more than ${threshold:.2}:");
    for employee in roster.high_earners(threshold) {
        println!("  {} - ${:.2}", employee.name(), employee.salary());
    }
    Ok(())
}

/// Executes the report command.
pub fn cmd_report(roster: &Roster) -> Result<()> {
    let report = roster.report();

    println!("=== EMPLOYEE REPORT ===");
    if report.is_empty() {
        println!("No employees found.");
        return Ok(());
    }
    println!("Total Employees: {}", report.total_employees);
    println!("Total Salary Budget: ${:.2}", report.total_salary);
    println!("Average Salary: ${:.2}", report.average_salary);
    if let Some(top) = report.highest_paid {
        println!("Highest Paid: {} (${:.2})", top.name(), top.salary());
    }

    println!();
    println!("=== DEPARTMENT STATISTICS ===");
    for stats in &report.departments {
        println!(
            "{}: {} employee(s), average salary ${:.2}",
            stats.department, stats.head_count, stats.average_salary
        );
    }
    Ok(())
}
