use slog::Logger;
use sloggers::terminal::{Destination, TerminalLoggerBuilder};
use sloggers::types::Severity;
use sloggers::Build;

/// Parses a level name as accepted on the command line into a `Severity`.
pub fn parse_level(level: &str) -> Result<Severity, String> {
    match level {
        "info" => Ok(Severity::Info),
        "debug" => Ok(Severity::Debug),
        "trace" => Ok(Severity::Trace),
        "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        "crit" => Ok(Severity::Critical),
        unknown => Err(format!("Unknown debug-level: {}", unknown)),
    }
}

/// Builds a logger writing to stderr, dropping records below `level`.
pub fn build_logger(level: &str) -> Result<Logger, String> {
    let mut builder = TerminalLoggerBuilder::new();
    builder.level(parse_level(level)?);
    builder.destination(Destination::Stderr);

    builder
        .build()
        .map_err(|e| format!("Failed to start terminal logger: {:?}", e))
}

/// Return a logger suitable for test usage.
///
/// By default no logs will be printed, but they can be enabled via the `test_logger` feature:
///
/// ```bash
/// $ cargo test -p types execution_requests --features 'logging/test_logger'
/// ```
///
/// Without the feature `test_logger()` returns a logger backed by a `NullLoggerBuilder`.
pub fn test_logger() -> Logger {
    if cfg!(feature = "test_logger") {
        build_logger("debug").expect("Should build test_logger")
    } else {
        sloggers::null::NullLoggerBuilder
            .build()
            .expect("Should build null_logger")
    }
}
