//! Logging setup for the CLI.
//!
//! Logs go to stderr so stdout only carries the result line.

use tracing::warn;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;

/// Build the filter for `directive`, or the default filter plus the parse
/// error if it does not parse.
pub fn filter(directive: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(err)),
    }
}

/// Install the global fmt subscriber. Later calls are no-ops.
pub fn init(directive: &str) {
    let (env_filter, err) = filter(directive);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Some(err) = err {
        warn!(
            directive,
            "ignoring log filter ({}), using '{}'", err, DEFAULT_LOG_FILTER
        );
    }
}
