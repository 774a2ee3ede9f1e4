//! Command handlers module.
//!
//! This module organizes the CLI command implementations into separate files:
//! - `data.rs`: Data file access and format conversion
//! - `query.rs`: Read-only commands (list, show, department, search, high-earners, report)
//! - `edit.rs`: Mutating commands (add, set-salary, remove)
//! - `demo.rs`: Walkthrough over the built-in sample roster

mod data;
mod demo;
mod edit;
mod query;

pub use data::{DataSource, cmd_convert};
pub use demo::cmd_demo;
pub use edit::{cmd_add, cmd_remove, cmd_set_salary};
pub use query::{cmd_department, cmd_high_earners, cmd_list, cmd_report, cmd_search, cmd_show};

use roster::Employee;

/// Maximum number of line errors echoed after a load.
const MAX_REPORTED_ERRORS: usize = 10;

/// Prints employees one per line, or a placeholder when there are none.
fn print_employees<'a>(employees: impl IntoIterator<Item = &'a Employee>, empty: &str) {
    let mut any = false;
    for employee in employees {
        println!("{employee}");
        any = true;
    }
    if !any {
        println!("{empty}");
    }
}
