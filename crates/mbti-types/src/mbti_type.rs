//! Four-letter MBTI types and their function stacks.
//!
//! A [`Type`] holds one letter per dichotomy. It can be parsed from a code in
//! any letter order and any case ([`Type::from_code`]) or rebuilt from an
//! ordered stack of four functions ([`Type::from_functions`]). The canonical
//! code always reads in `E/I`, `S/N`, `F/T`, `J/P` slot order.
//!
//! ```
//! use mbti_types::Type;
//!
//! let entj = Type::from_code("jtne").unwrap();
//! assert_eq!(entj.to_string(), "ENTJ -> [Te, Ni, Se, Fi]");
//! assert_eq!(entj.complement().code(), "ISFP");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::dichotomy::{Attitude, Dichotomy, Judgment, Kind, Lifestyle, Orientation, Perception};
use crate::error::InvalidTypeError;
use crate::function::{self, Function};

/// An MBTI personality type such as `ENTJ`.
///
/// Field order is slot order, so the derived `Ord` sorts types by canonical
/// code (`ESFJ` first, `INTP` last).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Type {
    attitude: Attitude,
    perception: Perception,
    judgment: Judgment,
    lifestyle: Lifestyle,
}

impl Type {
    pub const fn new(
        attitude: Attitude,
        perception: Perception,
        judgment: Judgment,
        lifestyle: Lifestyle,
    ) -> Self {
        Self {
            attitude,
            perception,
            judgment,
            lifestyle,
        }
    }

    /// All 16 types in canonical order.
    pub fn all() -> impl Iterator<Item = Type> {
        let attitudes = [Attitude::Extraversion, Attitude::Introversion];
        attitudes.into_iter().flat_map(|attitude| {
            [Perception::Sensing, Perception::Intuition]
                .into_iter()
                .flat_map(move |perception| {
                    [Judgment::Feeling, Judgment::Thinking]
                        .into_iter()
                        .flat_map(move |judgment| {
                            [Lifestyle::Judging, Lifestyle::Perceiving]
                                .into_iter()
                                .map(move |lifestyle| {
                                    Type::new(attitude, perception, judgment, lifestyle)
                                })
                        })
                })
        })
    }

    /// Parse a four-letter code.
    ///
    /// Letters are case-insensitive and may come in any order, but the code
    /// must hold exactly one letter from each dichotomy.
    pub fn from_code(code: &str) -> Result<Self, InvalidTypeError> {
        let len = code.chars().count();
        if len != 4 {
            return Err(InvalidTypeError::Length {
                code: code.to_string(),
                len,
            });
        }

        if let Some(found) = code.chars().find(|&c| !is_type_letter(c)) {
            return Err(InvalidTypeError::Letter {
                code: code.to_string(),
                found,
            });
        }

        let ty = Self::new(pick(code)?, pick(code)?, pick(code)?, pick(code)?);
        trace!(input = code, code = %ty.code(), "canonicalized type code");
        Ok(ty)
    }

    /// Rebuild a type from an ordered stack of four functions.
    ///
    /// The kinds of the functions must be exactly `N`, `S`, `T` and `F`. The
    /// letters are read from the leading functions:
    ///
    /// - attitude: orientation of the first function
    /// - perceiving/judging letter: the first function on that axis
    /// - lifestyle: `P` when the outward-facing function of the leading pair
    ///   perceives, `J` when it judges
    ///
    /// For a stack that is the primary stack of some type, the result is that
    /// type.
    pub fn from_functions(functions: &[Function]) -> Result<Self, InvalidTypeError> {
        if functions.len() != 4 {
            return Err(InvalidTypeError::FunctionCount {
                count: functions.len(),
            });
        }

        let mut kinds: Vec<Kind> = functions.iter().map(Function::kind).collect();
        kinds.sort();
        let kinds_err = || InvalidTypeError::FunctionKinds {
            functions: function::join(functions),
        };
        if kinds != Kind::ALL {
            return Err(kinds_err());
        }

        let (dominant, auxiliary) = (functions[0], functions[1]);
        let Some(perception) = functions.iter().find_map(|f| f.kind().perception()) else {
            return Err(kinds_err());
        };
        let Some(judgment) = functions.iter().find_map(|f| f.kind().judgment()) else {
            return Err(kinds_err());
        };

        // An extraverted dominant faces outward; otherwise the auxiliary does.
        let public = if dominant.is_extraverted() {
            dominant
        } else {
            auxiliary
        };
        let lifestyle = if public.kind() == Kind::from(perception) {
            Lifestyle::Perceiving
        } else {
            Lifestyle::Judging
        };

        let ty = Self::new(
            Attitude::from(dominant.orientation()),
            perception,
            judgment,
            lifestyle,
        );
        trace!(
            functions = %function::join(functions),
            code = %ty.code(),
            "derived type from functions"
        );
        Ok(ty)
    }

    pub fn attitude(&self) -> Attitude {
        self.attitude
    }

    pub fn perception(&self) -> Perception {
        self.perception
    }

    pub fn judgment(&self) -> Judgment {
        self.judgment
    }

    pub fn lifestyle(&self) -> Lifestyle {
        self.lifestyle
    }

    /// The four letters in slot order.
    pub fn letters(&self) -> [char; 4] {
        [
            self.attitude.letter(),
            self.perception.letter(),
            self.judgment.letter(),
            self.lifestyle.letter(),
        ]
    }

    /// The canonical four-letter code, e.g. `"INTJ"`.
    pub fn code(&self) -> String {
        self.letters().iter().collect()
    }

    /// Dominant, auxiliary, tertiary and inferior functions.
    ///
    /// The function shown to the outer world is the perceiving letter for `P`
    /// types and the judging letter for `J` types; it is extraverted and the
    /// other letter is introverted. Extraverts lead with the public function,
    /// introverts with the private one, and the last two are the inversions of
    /// the first two in reverse order.
    pub fn primary(&self) -> [Function; 4] {
        let perceiving = Kind::from(self.perception);
        let judging = Kind::from(self.judgment);
        let (public, private) = match self.lifestyle {
            Lifestyle::Perceiving => (perceiving, judging),
            Lifestyle::Judging => (judging, perceiving),
        };
        let public = Function::new(public, Orientation::Extraverted);
        let private = Function::new(private, Orientation::Introverted);

        match self.attitude {
            Attitude::Extraversion => [public, private, private.invert(), public.invert()],
            Attitude::Introversion => [private, public, public.invert(), private.invert()],
        }
    }

    /// The primary stack with every orientation flipped.
    pub fn shadow(&self) -> [Function; 4] {
        self.primary().map(Function::negate)
    }

    /// The type with every dichotomy letter flipped.
    ///
    /// Equals the type rebuilt from the inverted primary stack.
    pub fn complement(&self) -> Type {
        Self::new(
            self.attitude.opposite(),
            self.perception.opposite(),
            self.judgment.opposite(),
            self.lifestyle.opposite(),
        )
    }

    pub fn dominant(&self) -> Function {
        self.primary()[0]
    }

    pub fn auxiliary(&self) -> Function {
        self.primary()[1]
    }

    pub fn tertiary(&self) -> Function {
        self.primary()[2]
    }

    pub fn inferior(&self) -> Function {
        self.primary()[3]
    }
}

fn is_type_letter(c: char) -> bool {
    Attitude::from_letter(c).is_some()
        || Perception::from_letter(c).is_some()
        || Judgment::from_letter(c).is_some()
        || Lifestyle::from_letter(c).is_some()
}

/// The single letter of `code` that belongs to dichotomy `D`.
fn pick<D: Dichotomy>(code: &str) -> Result<D, InvalidTypeError> {
    let mut found = code.chars().filter_map(D::from_letter);
    match (found.next(), found.next()) {
        (Some(value), None) => Ok(value),
        (Some(first), Some(second)) => Err(InvalidTypeError::RepeatedDichotomy {
            code: code.to_string(),
            first: first.letter(),
            second: second.letter(),
        }),
        (None, _) => Err(InvalidTypeError::MissingDichotomy {
            code: code.to_string(),
            letters: D::LETTERS,
        }),
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> [{}]", self.code(), function::join(&self.primary()))
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type(\"{}\")", self.code())
    }
}

impl FromStr for Type {
    type Err = InvalidTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<[Function; 4]> for Type {
    type Error = InvalidTypeError;

    fn try_from(functions: [Function; 4]) -> Result<Self, Self::Error> {
        Self::from_functions(&functions)
    }
}

impl TryFrom<String> for Type {
    type Error = InvalidTypeError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_code(&code)
    }
}

impl From<Type> for String {
    fn from(ty: Type) -> Self {
        ty.code()
    }
}
