//! Binary entry point for roster.
//!
//! This binary provides the CLI interface for the employee roster.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow unnecessary_wraps for consistent command function signatures
#![allow(clippy::unnecessary_wraps)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

mod commands;

use clap::{Parser, Subcommand};
use commands::{
    DataSource, cmd_add, cmd_convert, cmd_demo, cmd_department, cmd_high_earners, cmd_list,
    cmd_remove, cmd_report, cmd_search, cmd_set_salary, cmd_show,
};
use roster::observability;
use roster::{Connection, Format, RosterConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Roster - manage an employee roster stored in binary, CSV or text files.
#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Data file to read and update (default from config).
    #[arg(short, long, global = true, env = "ROSTER_DATA")]
    data: Option<PathBuf>,

    /// Data file format: binary, csv or text (default: from extension).
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// List all employees.
    List {
        /// Sort by name instead of insertion order.
        #[arg(long)]
        by_name: bool,
    },

    /// Show one employee.
    Show {
        /// Employee id.
        id: u32,
    },

    /// Add an employee with a fresh id and today's hire date.
    Add {
        /// Full name.
        name: String,

        /// Department.
        department: String,

        /// Annual salary.
        #[arg(allow_negative_numbers = true)]
        salary: f64,

        /// Email address.
        email: String,
    },

    /// Change an employee's salary.
    SetSalary {
        /// Employee id.
        id: u32,

        /// New salary.
        #[arg(allow_negative_numbers = true)]
        salary: f64,
    },

    /// Remove an employee.
    Remove {
        /// Employee id.
        id: u32,
    },

    /// List the employees of one department.
    Department {
        /// Department name (exact match).
        name: String,
    },

    /// Find employees whose name contains a term (case-insensitive).
    Search {
        /// Search term.
        term: String,
    },

    /// List employees earning strictly more than a threshold, highest first.
    HighEarners {
        /// Salary threshold (default from config).
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Print totals, averages and per-department statistics.
    Report,

    /// Convert a data file to another format.
    Convert {
        /// Input file.
        input: PathBuf,

        /// Output file.
        output: PathBuf,

        /// Input format (default: from extension).
        #[arg(long)]
        from: Option<String>,

        /// Output format (default: from extension).
        #[arg(long)]
        to: Option<String>,
    },

    /// Run the demo over the built-in sample employees.
    Demo,
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init_from_config(&config.logging, cli.verbose) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    let mut connection = Connection::open();
    let result = run_command(cli, config);
    connection.close();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(cli: Cli, config: RosterConfig) -> roster::Result<()> {
    let config = match cli.data {
        Some(path) => config.with_data_file(path),
        None => config,
    };
    let source = DataSource {
        path: config.data_file.clone(),
        format: cli.format.map(|f| f.parse::<Format>()).transpose()?,
        seed_sample_data: config.seed_sample_data,
    };

    match cli.command {
        Commands::List { by_name } => cmd_list(&source.open()?, by_name),

        Commands::Show { id } => cmd_show(&source.open()?, id),

        Commands::Add {
            name,
            department,
            salary,
            email,
        } => cmd_add(&source, &name, &department, salary, &email),

        Commands::SetSalary { id, salary } => cmd_set_salary(&source, id, salary),

        Commands::Remove { id } => cmd_remove(&source, id),

        Commands::Department { name } => cmd_department(&source.open()?, &name),

        Commands::Search { term } => cmd_search(&source.open()?, &term),

        Commands::HighEarners { threshold } => cmd_high_earners(
            &source.open()?,
            threshold.unwrap_or(config.high_earner_threshold),
        ),

        Commands::Report => cmd_report(&source.open()?),

        Commands::Convert {
            input,
            output,
            from,
            to,
        } => cmd_convert(&input, &output, from, to),

        Commands::Demo => cmd_demo(config.high_earner_threshold),
    }
}

/// Loads configuration.
fn load_config(path: Option<&Path>) -> roster::Result<RosterConfig> {
    // If a path is provided, load from that file
    if let Some(config_path) = path {
        return RosterConfig::load_from_file(config_path);
    }

    // Environment override for config path
    if let Ok(config_path) = std::env::var("ROSTER_CONFIG_PATH")
        && !config_path.trim().is_empty()
    {
        return RosterConfig::load_from_file(Path::new(&config_path));
    }

    // Otherwise, load from default location
    Ok(RosterConfig::load_default())
}
