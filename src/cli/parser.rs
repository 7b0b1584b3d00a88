use clap::{Parser, Subcommand};

/// Command-line interface definition for rStreak
/// CLI application to track a no-contact streak with SQLite
#[derive(Parser)]
#[command(
    name = "rstreak",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small no-contact streak tracker: days, milestones and daily motivation, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend the current time is the given RFC 3339 timestamp
    #[arg(global = true, long = "at", hide = true, value_name = "TIMESTAMP")]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the current streak: days, badge, message and progress
    Status {
        #[arg(long = "json", help = "Print the streak summary as JSON")]
        json: bool,
    },

    /// Restart the streak from now
    Reset {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Personalize the tracker: your name and, optionally, the last contact date
    Edit {
        /// Your name (required, cannot be empty)
        #[arg(long = "name", help = "Your name")]
        name: String,

        /// Last contact date: YYYY-MM-DD (local midnight) or RFC 3339
        #[arg(
            long = "since",
            value_name = "DATE",
            help = "Last contact date (YYYY-MM-DD or RFC 3339), cannot be in the future"
        )]
        since: Option<String>,
    },

    /// Get a word of encouragement
    Motivate,

    /// Browse the motivational quotes
    Quote {
        #[arg(long = "next", value_name = "N", default_value_t = 0, help = "Move N quotes forward")]
        next: usize,

        #[arg(long = "prev", value_name = "N", default_value_t = 0, help = "Move N quotes back")]
        prev: usize,

        #[arg(long = "all", conflicts_with_all = ["next", "prev"], help = "Print every quote")]
        all: bool,
    },

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
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
}
