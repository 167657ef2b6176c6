use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rstaffhours
/// CLI application to track employee hours and pay with a CSV file
#[derive(Parser)]
#[command(
    name = "rstaffhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple staff hours CLI: track employees, worked hours, projects and pay due in a CSV file",
    long_about = None
)]
pub struct Cli {
    /// Override the employees file (useful for tests or a custom location)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the employees file
    Init {
        #[arg(long = "sample", help = "Seed an empty employees file with demo staff")]
        sample: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Add a new employee
    Add {
        /// Full name of the employee
        name: String,

        #[arg(long = "position", help = "Job title (default from config)")]
        position: Option<String>,

        #[arg(long = "salary", help = "Monthly salary, must be positive (default from config)")]
        salary: Option<f64>,

        #[arg(long = "project", help = "Project to assign")]
        project: Option<String>,
    },

    /// Add worked hours to an employee
    Hours {
        /// Employee number (as shown by `list`) or name
        employee: String,

        /// Hours to add, must be positive (default from config)
        #[arg(allow_negative_numbers = true)]
        hours: Option<f64>,
    },

    /// Reset worked hours (close the pay period)
    Reset {
        /// Employee number (as shown by `list`) or name
        employee: Option<String>,

        #[arg(long = "all", conflicts_with = "employee", help = "Reset every employee")]
        all: bool,
    },

    /// Assign an employee to a project
    Assign {
        /// Employee number (as shown by `list`) or name
        employee: String,

        /// Project name
        project: String,
    },

    /// Edit an employee; either every given field is applied or none
    Edit {
        /// Employee number (as shown by `list`) or name
        employee: String,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "position")]
        position: Option<String>,

        #[arg(long = "salary", allow_negative_numbers = true)]
        salary: Option<f64>,

        #[arg(long = "hours", allow_negative_numbers = true)]
        hours: Option<f64>,

        #[arg(long = "project")]
        project: Option<String>,
    },

    /// Delete an employee
    Del {
        /// Employee number (as shown by `list`) or name
        employee: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Remove the employees file
    Clear {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List employees with hours and pay due
    List {
        #[arg(long = "raw", help = "Print the employees file as stored")]
        raw: bool,
    },

    /// Show pay due and hours worked as bar charts
    Chart {
        #[arg(long = "width", help = "Length of the longest bar (default from config)")]
        width: Option<usize>,
    },

    /// Export employee data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Create a backup copy of the employees file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print the activity log
    Log {
        #[arg(long = "print", help = "Print every entry of the activity log")]
        print: bool,
    },
}
