//! Output formatting for the mbti CLI.
//!
//! Provides the human-readable line and the JSON report.

use anyhow::Result;
use serde::Serialize;

use mbti_types::{Function, Type};

/// Printed when the CLI is not given exactly one type.
pub const USAGE: &str = "Needs a Myers-Briggs type as a single argument.";

/// Everything derived from one type, for `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeReport {
    pub code: String,
    pub primary: [Function; 4],
    pub shadow: [Function; 4],
    pub complement: Type,
}

impl From<&Type> for TypeReport {
    fn from(ty: &Type) -> Self {
        Self {
            code: ty.code(),
            primary: ty.primary(),
            shadow: ty.shadow(),
            complement: ty.complement(),
        }
    }
}

/// `"ENTJ -> [Te, Ni, Se, Fi]"`
pub fn format_text(ty: &Type) -> String {
    ty.to_string()
}

pub fn format_json(ty: &Type) -> Result<String> {
    Ok(serde_json::to_string_pretty(&TypeReport::from(ty))?)
}

/// Render `ty` in the configured format.
pub fn render(ty: &Type, json: bool) -> Result<String> {
    if json {
        format_json(ty)
    } else {
        Ok(format_text(ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text() {
        let ty: Type = "ENTJ".parse().unwrap();
        assert_eq!(render(&ty, false).unwrap(), "ENTJ -> [Te, Ni, Se, Fi]");
    }

    #[test]
    fn test_format_json() {
        let ty: Type = "intj".parse().unwrap();
        let json: serde_json::Value = serde_json::from_str(&render(&ty, true).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "INTJ",
                "primary": ["Ni", "Te", "Fi", "Se"],
                "shadow": ["Ne", "Ti", "Fe", "Si"],
                "complement": "ESFP",
            })
        );
    }
}
