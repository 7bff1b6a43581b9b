//! Diagnostic logging setup.
//!
//! Everything goes to stderr so stdout stays clean for tables and JSON.

use tracing::Level;

fn parse_level(level: &str) -> Level {
    match level.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Install the global fmt subscriber. `verbose` forces debug level.
/// A second call is a no-op.
pub fn init(level: &str, verbose: bool) {
    let max_level = if verbose {
        Level::DEBUG
    } else {
        parse_level(level)
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(cfg!(debug_assertions))
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
