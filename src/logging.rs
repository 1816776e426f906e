// src/logging.rs
// =============================================================================
// Sets up `tracing` output for the binary.
//
// Everything goes to stderr: stdout is reserved for the JSON report so it can
// be piped straight into another tool.
//
// Level:
// - RUST_LOG, if set, wins (e.g. RUST_LOG=html_grader=debug)
// - otherwise -v flags pick it: none = warn, -v = info, -vv = debug, -vvv = trace
// =============================================================================

use tracing::Level;
use tracing_subscriber::EnvFilter;

// Maps the number of -v flags to a log level
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity).as_str().to_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
