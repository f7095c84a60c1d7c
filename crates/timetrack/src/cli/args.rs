use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "timetrack", version)]
#[command(about = "Simple time tracking CLI", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data file to use instead of ~/.timetrack.json
    #[arg(long, global = true, env = "TIMETRACK_DATA", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a new task (auto-stops the current task)
    Start {
        /// Task title; read from piped stdin when omitted
        #[arg(num_args = 0.., trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// Stop the current running task
    Stop,

    /// Show the current running task
    Status,

    /// List time entries, most recent first
    #[command(alias = "ls")]
    List {
        /// Number of entries to show (0 for all)
        #[arg(short = 'n', long = "limit", value_name = "N")]
        limit: Option<usize>,
    },

    /// View full details of an entry
    View {
        /// Entry index as shown by `list`
        index: usize,
    },

    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Entry index as shown by `list`
        index: usize,
    },

    /// Edit an entry (--start -30 = started 30 mins earlier)
    Edit {
        /// New title for the entry
        #[arg(long)]
        title: Option<String>,

        /// Adjust start time by minutes (negative = earlier)
        #[arg(long, value_name = "MINS", allow_negative_numbers = true)]
        start: Option<i64>,

        /// Entry index as shown by `list`
        index: usize,
    },

    /// Add a note to an entry (appends if a note exists)
    Note {
        /// Entry index as shown by `list`
        index: usize,

        /// Note text
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Show a time summary
    Summary {
        /// Only today's entries
        #[arg(long, conflicts_with_all = ["week", "last"])]
        today: bool,

        /// Only this week's entries (since Monday)
        #[arg(long, conflicts_with = "last")]
        week: bool,

        /// Only the last day before today that has entries
        #[arg(long)]
        last: bool,
    },
}
