use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber for a binary.
///
/// Output goes to stderr only; stdout belongs to command output. `RUST_LOG`
/// wins when set, otherwise `verbosity` (the `-v` count) picks the level.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore a second init.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
