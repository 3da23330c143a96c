//! Environment variable parsing utilities.
//!
//! Typed helpers that replace the repeated
//! `std::env::var(..).ok().and_then(..).unwrap_or(..)` pattern.
//!
//! # Example
//!
//! ```
//! use mbti::env_utils::{env_bool_or, env_string_or};
//!
//! let json = env_bool_or("MBTI_DOC_JSON", false);
//! let filter = env_string_or("MBTI_DOC_LOG", "warn");
//! assert!(!json);
//! assert_eq!(filter, "warn");
//! ```

use std::str::FromStr;

/// Parse an environment variable into a type that implements `FromStr`.
///
/// Returns `None` if the variable is not set or cannot be parsed.
pub fn env_var<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Check if an environment variable is set to a truthy value, with a default.
///
/// "1", "true", "yes" and "on" (case-insensitive) are truthy; any other set
/// value is false.
pub fn env_bool_or(key: &str, default: bool) -> bool {
    match env_var::<String>(key) {
        Some(v) => matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        None => default,
    }
}

/// Get an environment variable as a string with a default value.
pub fn env_string_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns its variable names so parallel tests don't interfere.

    #[test]
    fn test_env_var() {
        std::env::set_var("MBTI_TEST_ENV_VAR_NUM", " 42 ");
        assert_eq!(env_var::<u32>("MBTI_TEST_ENV_VAR_NUM"), Some(42));
        std::env::set_var("MBTI_TEST_ENV_VAR_BAD", "forty-two");
        assert_eq!(env_var::<u32>("MBTI_TEST_ENV_VAR_BAD"), None);
        assert_eq!(env_var::<u32>("MBTI_TEST_ENV_VAR_UNSET"), None);
    }

    #[test]
    fn test_env_bool_or() {
        assert!(env_bool_or("MBTI_TEST_BOOL_UNSET", true));
        assert!(!env_bool_or("MBTI_TEST_BOOL_UNSET", false));

        std::env::set_var("MBTI_TEST_BOOL_YES", "Yes");
        assert!(env_bool_or("MBTI_TEST_BOOL_YES", false));

        std::env::set_var("MBTI_TEST_BOOL_OFF", "off");
        assert!(!env_bool_or("MBTI_TEST_BOOL_OFF", true));
    }

    #[test]
    fn test_env_string_or() {
        assert_eq!(env_string_or("MBTI_TEST_STRING_UNSET", "warn"), "warn");
        std::env::set_var("MBTI_TEST_STRING_SET", "mbti=trace");
        assert_eq!(env_string_or("MBTI_TEST_STRING_SET", "warn"), "mbti=trace");
    }
}
