//! Cognitive functions.
//!
//! A [`Function`] is a kind letter (`N`, `S`, `T`, `F`) paired with an
//! orientation (`i` or `e`), written as two characters such as `Ni` or `Te`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dichotomy::{Dichotomy, Kind, Orientation};
use crate::error::InvalidFunctionError;

/// A single cognitive function, e.g. `Te`.
///
/// Serializes as its two-character code and deserializes through
/// [`Function::from_code`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Function {
    kind: Kind,
    orientation: Orientation,
}

impl Function {
    pub const fn new(kind: Kind, orientation: Orientation) -> Self {
        Self { kind, orientation }
    }

    /// Parse a two-character function code such as `"Ne"` or `"ti"`.
    ///
    /// The kind letter and the orientation letter are both case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use mbti_types::Function;
    ///
    /// let ni = Function::from_code("ni").unwrap();
    /// assert_eq!(ni.to_string(), "Ni");
    /// assert_eq!(ni.invert().to_string(), "Se");
    /// assert!(Function::from_code("Nx").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Self, InvalidFunctionError> {
        let mut chars = code.chars();
        let (Some(k), Some(o), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(InvalidFunctionError::Length {
                code: code.to_string(),
                len: code.chars().count(),
            });
        };

        let kind = Kind::from_letter(k).ok_or_else(|| InvalidFunctionError::Kind {
            code: code.to_string(),
            found: k,
        })?;
        let orientation =
            Orientation::from_letter(o).ok_or_else(|| InvalidFunctionError::Orientation {
                code: code.to_string(),
                found: o,
            })?;

        Ok(Self::new(kind, orientation))
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_extraverted(&self) -> bool {
        self.orientation == Orientation::Extraverted
    }

    /// Same kind, opposite orientation: `Ne` → `Ni`.
    pub fn negate(self) -> Self {
        Self::new(self.kind, self.orientation.opposite())
    }

    /// Axis partner with the opposite orientation: `Ne` → `Si`, `Te` → `Fi`.
    pub fn invert(self) -> Self {
        Self::new(self.kind.partner(), self.orientation.opposite())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.letter(), self.orientation.letter())
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function(\"{}\")", self)
    }
}

impl FromStr for Function {
    type Err = InvalidFunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for Function {
    type Error = InvalidFunctionError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_code(&code)
    }
}

impl From<Function> for String {
    fn from(function: Function) -> Self {
        function.to_string()
    }
}

/// Join functions as `"Te, Ni, Se, Fi"`.
pub(crate) fn join(functions: &[Function]) -> String {
    functions
        .iter()
        .map(Function::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_functions() -> Vec<Function> {
        Kind::ALL
            .iter()
            .flat_map(|&kind| {
                [Orientation::Introverted, Orientation::Extraverted]
                    .into_iter()
                    .map(move |o| Function::new(kind, o))
            })
            .collect()
    }

    #[test]
    fn test_from_code_normalizes_case() {
        let ni = Function::from_code("ni").unwrap();
        assert_eq!(ni.kind(), Kind::Intuition);
        assert_eq!(ni.orientation(), Orientation::Introverted);
        assert_eq!(ni.to_string(), "Ni");

        let te: Function = "tE".parse().unwrap();
        assert_eq!(te.to_string(), "Te");
        assert!(te.is_extraverted());
    }

    #[test]
    fn test_negate_and_invert() {
        let ni = Function::from_code("Ni").unwrap();
        assert_eq!(ni.invert().to_string(), "Se");
        assert_eq!(ni.negate().to_string(), "Ne");

        let ne = Function::from_code("Ne").unwrap();
        assert_eq!(ne.invert().to_string(), "Si");
    }

    #[test]
    fn test_negate_and_invert_are_involutions() {
        for f in all_functions() {
            assert_eq!(f.negate().negate(), f);
            assert_eq!(f.invert().invert(), f);
            assert_ne!(f.negate(), f);
            assert_ne!(f.invert(), f);
        }
    }

    #[test]
    fn test_invalid_codes() {
        assert!(matches!(
            Function::from_code("Nx"),
            Err(InvalidFunctionError::Orientation { found: 'x', .. })
        ));
        assert!(matches!(
            Function::from_code("Qe"),
            Err(InvalidFunctionError::Kind { found: 'Q', .. })
        ));
        assert!(matches!(
            Function::from_code("Nie"),
            Err(InvalidFunctionError::Length { len: 3, .. })
        ));
        assert!(matches!(
            Function::from_code(""),
            Err(InvalidFunctionError::Length { len: 0, .. })
        ));
        // Dichotomy letters that are not kinds.
        assert!(Function::from_code("Ee").is_err());
        assert!(Function::from_code("Ji").is_err());
    }

    #[test]
    fn test_debug_and_join() {
        let fs = [
            Function::from_code("Te").unwrap(),
            Function::from_code("Ni").unwrap(),
        ];
        assert_eq!(format!("{:?}", fs[0]), "Function(\"Te\")");
        assert_eq!(join(&fs), "Te, Ni");
    }

    #[test]
    fn test_serde_uses_code() {
        let fe = Function::from_code("Fe").unwrap();
        assert_eq!(serde_json::to_string(&fe).unwrap(), "\"Fe\"");
        let back: Function = serde_json::from_str("\"fe\"").unwrap();
        assert_eq!(back, fe);
        assert!(serde_json::from_str::<Function>("\"Xe\"").is_err());
    }
}
