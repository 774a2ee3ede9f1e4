//! Demo command.

use roster::{Format, Result, Roster};

use super::query::{cmd_high_earners, cmd_report};

/// Runs the read-only walkthrough over the sample roster. No files are touched.
pub fn cmd_demo(threshold: f64) -> Result<()> {
    let roster = Roster::with_sample_data();

    println!("=== DEMO MODE ===");
    println!();
    cmd_high_earners(&roster, threshold)?;
    println!();
    cmd_report(&roster)?;

    println!();
    println!("File formats supported:");
    for format in [Format::Csv, Format::Text, Format::Binary] {
        let layout = match format {
            Format::Csv => "ID,Name,Department,Salary,HireDate,Email",
            Format::Text => "Name|Department|Salary|Email (pipe-separated)",
            Format::Binary => "roster snapshot",
        };
        println!("- {format} (.{}): {layout}", format.extension());
    }
    Ok(())
}
