//! CLI configuration.
//!
//! Command-line flags win over environment variables, which win over the
//! defaults below.

use crate::env_utils::{env_bool_or, env_string_or};

/// Print JSON instead of the text line when set to a truthy value.
pub const JSON_ENV: &str = "MBTI_JSON";
/// `tracing` filter directive for stderr logging.
pub const LOG_ENV: &str = "MBTI_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Resolved settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub json: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Read `MBTI_JSON` and `MBTI_LOG`, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            json: env_bool_or(JSON_ENV, defaults.json),
            log_filter: env_string_or(LOG_ENV, &defaults.log_filter),
        }
    }

    /// Apply command-line flags on top of this config.
    ///
    /// A flag that is not given leaves the existing value alone.
    pub fn with_flags(mut self, json: bool, verbose: bool) -> Self {
        if json {
            self.json = true;
        }
        if verbose {
            self.log_filter = VERBOSE_LOG_FILTER.to_string();
        }
        self
    }
}
