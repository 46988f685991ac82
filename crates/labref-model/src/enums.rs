//! Type-safe enumerations for laboratory result metadata.
//!
//! These enums replace the free-form strings the result entry forms and
//! test catalogs carry ("HIGH", "number", "Male", ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Clinical status of a measured value against its reference range.
///
/// - **Normal**: inside the range, or no basis for flagging
/// - **High**: strictly above the upper bound
/// - **Low**: strictly below the lower bound
/// - **Boundary**: exactly equal to either bound of a two-sided range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RangeStatus {
    Normal,
    High,
    Low,
    Boundary,
}

impl RangeStatus {
    /// Every status, in report order.
    pub const ALL: [RangeStatus; 4] = [
        RangeStatus::High,
        RangeStatus::Low,
        RangeStatus::Boundary,
        RangeStatus::Normal,
    ];

    /// Returns the upper-case label printed on reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeStatus::Normal => "NORMAL",
            RangeStatus::High => "HIGH",
            RangeStatus::Low => "LOW",
            RangeStatus::Boundary => "BOUNDARY",
        }
    }

    /// Returns true for any status that should draw the reader's attention.
    pub fn is_flagged(&self) -> bool {
        !matches!(self, RangeStatus::Normal)
    }
}

impl fmt::Display for RangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RangeStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NORMAL" => Ok(RangeStatus::Normal),
            "HIGH" | "H" => Ok(RangeStatus::High),
            "LOW" | "L" => Ok(RangeStatus::Low),
            "BOUNDARY" => Ok(RangeStatus::Boundary),
            _ => Err(ModelError::UnknownVariant {
                kind: "range status",
                value: s.to_string(),
            }),
        }
    }
}

/// Shape of a parsed reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeKind {
    /// Two-sided inclusive range (`13 - 17`).
    Bounded,
    /// Only an upper cutoff (`< 40`).
    UpperBounded,
    /// Only a lower cutoff (`> 100`).
    LowerBounded,
}

impl RangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeKind::Bounded => "bounded",
            RangeKind::UpperBounded => "upper_bounded",
            RangeKind::LowerBounded => "lower_bounded",
        }
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Patient sex, used to pick gender-specific reference ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[serde(alias = "m", alias = "M", alias = "Male", alias = "MALE")]
    Male,
    #[serde(alias = "f", alias = "F", alias = "Female", alias = "FEMALE")]
    Female,
    #[serde(alias = "o", alias = "O", alias = "Other", alias = "OTHER")]
    Other,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ModelError;

    /// Accepts single-letter codes and full names (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" => Ok(Sex::Male),
            "F" | "FEMALE" => Ok(Sex::Female),
            "O" | "OTHER" => Ok(Sex::Other),
            _ => Err(ModelError::UnknownVariant {
                kind: "sex",
                value: s.to_string(),
            }),
        }
    }
}

/// How a test's result is captured on the entry form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Free numeric entry; the only kind that is ever flagged.
    #[default]
    Number,
    /// Dropdown selection (`Nil`, `Trace`, `+`, ...).
    Select,
    /// Free text.
    Text,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Number => "number",
            InputType::Select => "select",
            InputType::Text => "text",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NUMBER" | "NUMERIC" => Ok(InputType::Number),
            "SELECT" | "DROPDOWN" => Ok(InputType::Select),
            "TEXT" => Ok(InputType::Text),
            _ => Err(ModelError::UnknownVariant {
                kind: "input type",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!("high".parse::<RangeStatus>().unwrap(), RangeStatus::High);
        assert_eq!(" Boundary ".parse::<RangeStatus>().unwrap(), RangeStatus::Boundary);
        assert_eq!("L".parse::<RangeStatus>().unwrap(), RangeStatus::Low);
        assert!("critical".parse::<RangeStatus>().is_err());
    }

    #[test]
    fn test_status_flagged() {
        assert!(RangeStatus::High.is_flagged());
        assert!(RangeStatus::Boundary.is_flagged());
        assert!(!RangeStatus::Normal.is_flagged());
    }

    #[test]
    fn test_sex_from_str() {
        assert_eq!("m".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("FEMALE".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(
            "x".parse::<Sex>(),
            Err(ModelError::UnknownVariant {
                kind: "sex",
                value: "x".to_string()
            })
        );
    }

    #[test]
    fn test_input_type_from_str() {
        assert_eq!("dropdown".parse::<InputType>().unwrap(), InputType::Select);
        assert_eq!("Number".parse::<InputType>().unwrap(), InputType::Number);
    }
}
