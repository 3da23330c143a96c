//! Construction errors for functions and types.
//!
//! Both errors are raised by the validating constructors and carry the
//! offending input so the message is actionable on its own.

use std::fmt;

/// A function code was not a kind letter followed by an orientation letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidFunctionError {
    /// The code was not exactly two characters long.
    Length { code: String, len: usize },
    /// The first character was not one of `N`, `S`, `T`, `F`.
    Kind { code: String, found: char },
    /// The second character was not `i` or `e`.
    Orientation { code: String, found: char },
}

impl fmt::Display for InvalidFunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidFunctionError::Length { code, len } => write!(
                f,
                "invalid function '{}': expected 2 characters, got {}",
                code, len
            ),
            InvalidFunctionError::Kind { code, found } => write!(
                f,
                "invalid function '{}': '{}' is not one of N, S, T, F",
                code, found
            ),
            InvalidFunctionError::Orientation { code, found } => write!(
                f,
                "invalid function '{}': '{}' is not an orientation (i or e)",
                code, found
            ),
        }
    }
}

impl std::error::Error for InvalidFunctionError {}

/// A type could not be built from a code or from a function sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidTypeError {
    /// The code was not exactly four characters long.
    Length { code: String, len: usize },
    /// A character was outside `E I S N F T J P`.
    Letter { code: String, found: char },
    /// Two letters of the code belong to the same dichotomy.
    RepeatedDichotomy {
        code: String,
        first: char,
        second: char,
    },
    /// No letter of the code belongs to this dichotomy.
    MissingDichotomy { code: String, letters: [char; 2] },
    /// A function sequence did not hold exactly four functions.
    FunctionCount { count: usize },
    /// The kinds of the four functions were not exactly `N`, `S`, `T`, `F`.
    FunctionKinds { functions: String },
}

impl fmt::Display for InvalidTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidTypeError::Length { code, len } => write!(
                f,
                "invalid type '{}': types must contain four letters, got {}",
                code, len
            ),
            InvalidTypeError::Letter { code, found } => write!(
                f,
                "invalid type '{}': bad letter '{}' in type",
                code, found
            ),
            InvalidTypeError::RepeatedDichotomy {
                code,
                first,
                second,
            } => write!(
                f,
                "invalid type '{}': '{}' and '{}' belong to the same dichotomy",
                code, first, second
            ),
            InvalidTypeError::MissingDichotomy { code, letters } => write!(
                f,
                "invalid type '{}': needs one of '{}' or '{}'",
                code, letters[0], letters[1]
            ),
            InvalidTypeError::FunctionCount { count } => {
                write!(f, "a type needs exactly 4 functions, got {}", count)
            }
            InvalidTypeError::FunctionKinds { functions } => write!(
                f,
                "functions [{}] must cover N, S, T and F exactly once",
                functions
            ),
        }
    }
}

impl std::error::Error for InvalidTypeError {}
