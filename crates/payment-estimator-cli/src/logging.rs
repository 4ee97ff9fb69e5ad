use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Used when neither `--log-level` nor `RUST_LOG` is set. Quotes go to
/// stdout, so only problems are logged by default.
const DEFAULT_FILTER: &str = "warn";

fn make_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("invalid log level '{directive}': {e}; using '{DEFAULT_FILTER}'");
            EnvFilter::new(DEFAULT_FILTER)
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Initializes logging to stderr. Call once at startup.
///
/// - Level: `--log-level` if given (bare level or full `EnvFilter` directive),
///   else `RUST_LOG`, else warn.
/// - Colored when stderr is a terminal, plain when redirected.
pub fn init_logging(level: Option<&str>) {
    let stderr_is_tty = io::stderr().is_terminal();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(make_filter(level))
        .with_writer(io::stderr)
        .with_ansi(stderr_is_tty)
        .with_target(false)
        .try_init();
}
