use crate::core::pipeline::SortOrder;
use crate::db::prefs::Theme;
use crate::models::EntityKind;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for alfahub
/// Campus directory backed by published spreadsheets
#[derive(Parser)]
#[command(
    name = "alfahub",
    version = env!("CARGO_PKG_VERSION"),
    about = "ALFA HUB campus directory: notifications, events, clubs, PG rooms, notes and more from published sheets",
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

/// Entities with a detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DetailKind {
    Events,
    PgRooms,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
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

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "op", help = "Only rows of this operation (e.g. fetch_failed)")]
        operation: Option<String>,
    },

    /// List the records of one sheet
    List {
        #[arg(value_enum)]
        entity: EntityKind,

        #[arg(long, short, help = "Case-insensitive text search")]
        search: Option<String>,

        #[arg(long, help = "Shorthand for --filter category=VALUE")]
        category: Option<String>,

        #[arg(
            long = "filter",
            value_name = "FACET=VALUE",
            help = "Facet filter, repeatable; VALUE 'All' disables it"
        )]
        filter: Vec<String>,

        #[arg(long, value_enum, help = "Chronological order for dated sheets (default: desc)")]
        sort: Option<SortOrder>,

        #[arg(long, help = "Fetch from this URL instead of the configured source")]
        url: Option<String>,

        #[arg(long, help = "Total fetch attempts (default from config)")]
        retries: Option<u32>,

        #[arg(long, help = "Print the displayed records as JSON")]
        json: bool,

        #[arg(long, help = "Print the selectable values of every facet")]
        facets: bool,

        #[arg(long, help = "Print raw rows keyed by normalized header")]
        raw: bool,
    },

    /// Show one event or PG room
    Show {
        #[arg(value_enum)]
        entity: DetailKind,

        /// Position in the freshly fetched list
        index: Option<String>,

        #[arg(long, conflicts_with = "index", help = "Content-derived record id")]
        id: Option<String>,

        #[arg(long)]
        url: Option<String>,
    },

    /// Export an event to a calendar
    Calendar {
        /// Position of the event in the freshly fetched list
        index: Option<String>,

        #[arg(long, conflicts_with = "index", help = "Content-derived event id")]
        id: Option<String>,

        #[arg(long, value_name = "FILE", help = "Write an .ics file (a directory gets the default name)")]
        ics: Option<String>,

        #[arg(long, help = "Print a calendar quick-add link")]
        google: bool,

        #[arg(long)]
        url: Option<String>,
    },

    /// Browse notes by subject
    Notes {
        #[arg(long, help = "List the notes of this subject")]
        subject: Option<String>,

        #[arg(long, short, help = "Search note names within the subject")]
        search: Option<String>,

        #[arg(long)]
        url: Option<String>,
    },

    /// Hostel and safety contacts
    Emergency {
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Poll the notification feed
    Watch {
        #[arg(long, help = "Stop after this many refreshes")]
        ticks: Option<u32>,

        #[arg(long, help = "Seconds between refreshes (default from config)")]
        interval: Option<u64>,

        #[arg(long)]
        url: Option<String>,
    },

    /// Latest notifications, upcoming events and a quote
    Home,

    /// Read or change preferences
    Prefs {
        #[arg(long, value_enum)]
        theme: Option<Theme>,

        #[arg(long, help = "Print stored preferences")]
        print: bool,
    },
}
