//! Myers-Briggs types and their cognitive-function stacks.
//!
//! This crate provides the value types shared by the `mbti` binary and any
//! other consumer:
//!
//! - [`Function`] - a cognitive function such as `Ni` or `Te`
//! - [`Type`] - a four-letter type code such as `ENTJ`, with its primary and
//!   shadow stacks and its complement
//! - [`dichotomy`] - the fixed letter pairs both are built from
//!
//! All types are immutable `Copy` values and every operation is pure.

pub mod dichotomy;
pub mod error;
pub mod function;
pub mod mbti_type;

pub use dichotomy::{Attitude, Dichotomy, Judgment, Kind, Lifestyle, Orientation, Perception};
pub use error::{InvalidFunctionError, InvalidTypeError};
pub use function::Function;
pub use mbti_type::Type;
