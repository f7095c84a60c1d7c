use daybook_core::logging::init_logging;

mod cli;

fn main() {
    let cli = cli::parse_args();
    init_logging(cli.verbose);

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
