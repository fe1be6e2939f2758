use clap::{Parser, Subcommand};

/// Command-line interface definition for timebook
/// CLI application to record clock-in/clock-out bookings with SQLite
#[derive(Parser)]
#[command(
    name = "timebook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record clock-in/clock-out bookings per employee and compute worked time using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the reference timezone ("local", "Z", "+01:00", ...)
    #[arg(global = true, long = "tz")]
    pub tz: Option<String>,

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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database schema
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a clock event (checkin or checkout) for an employee
    Book {
        /// Employee identifier
        employee: String,

        #[arg(
            long = "at",
            help = "Timestamp: RFC 3339, or 'YYYY-MM-DD HH:MM[:SS]' in the reference timezone (default: now)"
        )]
        at: Option<String>,
    },

    /// List bookings
    List {
        #[arg(long = "employee", short = 'e', help = "Only this employee, in chronological order")]
        employee: Option<String>,

        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// Show a single booking
    Show {
        id: i64,

        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// Change the employee and/or the timestamp of a booking
    Update {
        id: i64,

        #[arg(long = "employee", help = "New employee identifier")]
        employee: Option<String>,

        #[arg(long = "at", help = "New timestamp")]
        at: Option<String>,
    },

    /// Delete a booking by ID
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Total worked time of an employee over all valid days
    Worked {
        /// Employee identifier
        employee: String,

        #[arg(long = "details", help = "Show the per-day breakdown")]
        details: bool,
    },

    /// Whether an employee has any booking on a date
    Active {
        /// Employee identifier
        employee: String,

        /// Date (YYYY-MM-DD)
        date: String,
    },
}
