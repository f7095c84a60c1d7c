mod args;
mod render;

pub use args::{Cli, Commands};

use clap::error::ErrorKind;
use clap::Parser;
use daybook_core::clock::SystemClock;
use daybook_core::ids::RandomIds;
use daybook_core::store::fs::JsonFileStore;
use render::{print_bare, print_items, print_messages};
use todolist::api::{CmdResult, TodoApi};
use todolist::config::{TodoConfig, PROFILE};
use todolist::error::{Result, TodoError};
use todolist::model::TodoData;
use tracing::debug;

type Api = TodoApi<JsonFileStore<TodoData>, SystemClock, RandomIds>;

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
    let config: TodoConfig = PROFILE.load_config()?;
    let data_file = PROFILE.resolve_data_file(cli.data.clone(), config.data_file)?;
    debug!(path = %data_file.display(), "using data file");
    let mut api: Api = TodoApi::new(JsonFileStore::new(data_file), SystemClock, RandomIds);

    match cli.command {
        Commands::Add { title } => handle_messages(api.add(&title.join(" "))?),
        Commands::List => handle_list(&api),
        Commands::Done { index } => handle_messages(api.done(index)?),
        Commands::Next => handle_next(&api),
        Commands::Edit { index, title } => handle_messages(api.edit(index, &title.join(" "))?),
    }
}

fn handle_messages(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &Api) -> Result<()> {
    let result = api.list()?;
    print_items(&result.listed_items);
    print_messages(&result.messages);
    Ok(())
}

fn handle_next(api: &Api) -> Result<()> {
    let result = api.next()?;
    let item = result.affected_items.first().ok_or(TodoError::NoItems)?;
    print_bare(&item.title)?;
    Ok(())
}
