//! Myers-Briggs type tools
//!
//! Command-line support around the [`mbti_types`] core:
//!
//! - **Configuration**: flags layered over `MBTI_*` environment variables ([`config`])
//! - **Logging**: `tracing` output on stderr ([`logging`])
//! - **Output**: the text line and the JSON report ([`output`])
//!
//! The core value types are re-exported at the crate root.

pub mod config;
pub mod env_utils;
pub mod logging;
pub mod output;

pub use mbti_types::{
    Attitude, Dichotomy, Function, InvalidFunctionError, InvalidTypeError, Judgment, Kind,
    Lifestyle, Orientation, Perception, Type,
};
