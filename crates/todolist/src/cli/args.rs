use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todo", version)]
#[command(about = "A first-in first-out to-do queue", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data file to use instead of ~/.todo.json
    #[arg(long, global = true, env = "TODO_DATA", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item to the back of the queue
    Add {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// List all items
    #[command(alias = "ls")]
    List,

    /// Remove an item
    Done {
        /// Item index as shown by `list`
        index: usize,
    },

    /// Output the next item title (for piping)
    Next,

    /// Edit an item's title
    Edit {
        /// Item index as shown by `list`
        index: usize,

        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        title: Vec<String>,
    },
}
