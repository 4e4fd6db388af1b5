use crate::export::{ExportData, ExportFormat};
use crate::models::punch_type::PunchType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time clock: punch in/out and track daily and weekly hours using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Clock in
    In {
        /// When: HH:MM (today), "YYYY-MM-DD HH:MM" or RFC 3339. Default: now
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Clock out
    Out {
        /// When: HH:MM (today), "YYYY-MM-DD HH:MM" or RFC 3339. Default: now
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Clock in or out, whichever is next
    Punch {
        /// When: HH:MM (today), "YYYY-MM-DD HH:MM" or RFC 3339. Default: now
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Show whether you are clocked in and today's hours
    Status,

    /// List punches, or daily / weekly totals
    List {
        #[arg(long = "daily", help = "Show per-day totals", conflicts_with = "weekly")]
        daily: bool,

        #[arg(long = "weekly", help = "Show per-week totals")]
        weekly: bool,
    },

    /// Change the time and/or type of a punch
    Edit {
        /// Stored timestamp of the punch (as shown by `list`)
        timestamp: String,

        #[arg(long = "at", help = "New time: HH:MM, \"YYYY-MM-DD HH:MM\" or RFC 3339")]
        at: Option<String>,

        #[arg(long = "kind", value_enum, help = "New punch type")]
        kind: Option<PunchType>,
    },

    /// Delete a punch
    Del {
        /// Stored timestamp of the punch (as shown by `list`)
        timestamp: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Delete every punch and clock out
    Reset {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Build the plain-text report (weekly, daily, detailed history)
    Report {
        #[arg(long, value_name = "FILE", help = "Write the report to FILE instead of stdout")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export punches or totals
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "punches")]
        data: ExportData,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
