mod args;
mod render;

pub use args::{Cli, Commands};

use clap::error::ErrorKind;
use clap::Parser;
use daybook_core::clock::SystemClock;
use daybook_core::ids::RandomIds;
use daybook_core::store::fs::JsonFileStore;
use render::{print_entries, print_entry_details, print_messages, print_summary};
use daybook_core::StoreError;
use std::io::{BufRead, IsTerminal};
use thiserror::Error;
use timetrack::api::{CmdResult, EntryEdit, SummaryFilter, TimetrackApi};
use timetrack::config::{TimetrackConfig, PROFILE};
use timetrack::error::TimetrackError;
use timetrack::model::TimeData;
use tracing::debug;

/// Failures the binary reports: everything the library returns plus
/// argument checks clap cannot express and terminal I/O.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Timetrack(#[from] TimetrackError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

type Result<T> = std::result::Result<T, CliError>;

type Api = TimetrackApi<JsonFileStore<TimeData>, SystemClock, RandomIds>;

const START_USAGE: &str = "Usage: timetrack start <title>";
const EDIT_USAGE: &str = "Usage: timetrack edit [--title \"new title\"] [--start <mins>] <index>";

/// Parse the command line. Usage errors exit with status 1, help and version
/// with status 0.
pub fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                let _ = e.print();
                std::process::exit(1);
            }
            _ => {
                let rendered = e.render().to_string();
                eprintln!(
                    "Error: {}",
                    rendered.trim_start_matches("error: ").trim_end()
                );
                std::process::exit(1);
            }
        },
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config: TimetrackConfig = PROFILE.load_config()?;
    let data_file = PROFILE.resolve_data_file(cli.data.clone(), config.data_file.clone())?;
    debug!(path = %data_file.display(), "using data file");
    let mut api: Api = TimetrackApi::new(JsonFileStore::new(data_file), SystemClock, RandomIds);

    match cli.command {
        Commands::Start { title } => handle_start(&mut api, title),
        Commands::Stop => handle_messages(api.stop()?),
        Commands::Status => handle_messages(api.status()?),
        Commands::List { limit } => handle_list(&api, limit.unwrap_or(config.list_limit)),
        Commands::View { index } => handle_view(&api, index),
        Commands::Delete { index } => handle_messages(api.delete(index)?),
        Commands::Edit {
            title,
            start,
            index,
        } => handle_edit(&mut api, index, title, start),
        Commands::Note { index, text } => handle_messages(api.note(index, &text.join(" "))?),
        Commands::Summary { today, week, last } => handle_summary(&api, today, week, last),
    }
}

fn handle_messages(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn handle_start(api: &mut Api, words: Vec<String>) -> Result<()> {
    let mut title = words.join(" ");
    if title.trim().is_empty() && !std::io::stdin().is_terminal() {
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        title = line.trim().to_string();
    }
    if title.trim().is_empty() {
        return Err(CliError::Usage(format!(
            "missing task title\n{}",
            START_USAGE
        )));
    }

    handle_messages(api.start(&title)?)
}

fn handle_list(api: &Api, limit: usize) -> Result<()> {
    let result = api.list(limit)?;
    print_entries(&result.listed_entries);
    if !result.listed_entries.is_empty() && !result.messages.is_empty() {
        println!();
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &Api, index: usize) -> Result<()> {
    let result = api.view(index)?;
    print_entry_details(&result.listed_entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    api: &mut Api,
    index: usize,
    title: Option<String>,
    start: Option<i64>,
) -> Result<()> {
    let edit = EntryEdit {
        title,
        start_offset_minutes: start.filter(|m| *m != 0),
    };
    if edit.is_empty() {
        return Err(CliError::Usage(format!(
            "must specify --title or --start\n{}",
            EDIT_USAGE
        )));
    }

    handle_messages(api.edit(index, &edit)?)
}

fn handle_summary(api: &Api, today: bool, week: bool, last: bool) -> Result<()> {
    let filter = if today {
        SummaryFilter::Today
    } else if week {
        SummaryFilter::Week
    } else if last {
        SummaryFilter::Last
    } else {
        SummaryFilter::All
    };

    let result = api.summary(filter)?;
    if let Some(summary) = &result.summary {
        print_summary(summary);
    }
    print_messages(&result.messages);
    Ok(())
}
