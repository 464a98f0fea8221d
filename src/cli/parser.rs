use crate::core::stats::StatsView;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftledger
/// CLI application to track work shifts with SQLite
#[derive(Parser)]
#[command(
    name = "shiftledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A shift ledger CLI: track work shifts, employers and sites, with CSV import/export",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Profile owning the records (defaults to the configured one)
    #[arg(global = true, long = "profile")]
    pub profile: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a shift, or edit an existing one with --edit --id
    Add {
        /// Date of the shift (YYYY-MM-DD)
        date: String,

        #[arg(long, help = "Employer name (matched case-insensitively)")]
        employer: Option<String>,

        #[arg(long, help = "Site name (matched case-insensitively)")]
        site: Option<String>,

        #[arg(long = "postcode", help = "Postal code for a newly created site")]
        postal_code: Option<String>,

        #[arg(long = "start", help = "Scheduled start time (HH:MM)")]
        start: Option<String>,

        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Shift duration in decimal hours (e.g. 7.5)"
        )]
        hours: Option<f64>,

        #[arg(long, help = "Hourly rate")]
        rate: Option<f64>,

        #[arg(
            long = "update-rate",
            help = "Update the employer's default rate when it differs"
        )]
        update_rate: bool,

        #[arg(long, help = "Status override (edit mode only)")]
        status: Option<String>,

        /// Edit an existing shift instead of creating a new one
        #[arg(long = "edit", requires = "id", help = "Edit existing shift (requires --id)")]
        edit: bool,

        #[arg(long = "id", help = "Shift id to edit (used with --edit)")]
        id: Option<i64>,
    },

    /// List a month of shifts with filters and totals
    List {
        #[arg(long, help = "Month to list (YYYY-MM, default: current)")]
        month: Option<String>,

        #[arg(long, help = "Filter by employer name substring")]
        employer: Option<String>,

        #[arg(long, help = "Filter by site name substring")]
        site: Option<String>,

        #[arg(long, help = "Filter by status (pending | on site | completed)")]
        status: Option<String>,
    },

    /// Show the dashboard: monthly totals, active shift, recent shifts
    Status,

    /// Clock in or out of the active shift
    Clock {
        #[arg(long = "in", help = "Clock in (pending → on site)")]
        clock_in: bool,

        #[arg(long = "out", help = "Clock out (on site → completed)")]
        clock_out: bool,
    },

    /// Delete a shift by id
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Import shifts from a CSV file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export a month of shifts
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: Shifts_<month>.<ext>)")]
        file: Option<String>,

        #[arg(long, help = "Month to export (YYYY-MM, default: current)")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Earnings statistics grouped by week, month or year
    Stats {
        #[arg(long, value_enum, default_value = "month")]
        view: StatsView,

        #[arg(long, help = "Restrict to one month (YYYY-MM)")]
        month: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
