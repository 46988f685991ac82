//! Structured reference range descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::RangeKind;

/// A reference range recovered from free text.
///
/// Every variant keeps the text it was built from so reports can print the
/// range exactly as the catalog stores it. Descriptors are never edited in
/// place; a changed reference string produces a new descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RangeDescriptor {
    /// Inclusive two-sided range. `min <= max` always holds.
    Bounded { min: f64, max: f64, text: String },
    /// "Less than" cutoff.
    UpperBounded { max: f64, text: String },
    /// "Greater than" cutoff.
    LowerBounded { min: f64, text: String },
}

impl RangeDescriptor {
    /// Build a two-sided range, ordering the bounds.
    pub fn bounded(a: f64, b: f64, text: impl Into<String>) -> Self {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        RangeDescriptor::Bounded {
            min,
            max,
            text: text.into(),
        }
    }

    pub fn upper_bounded(max: f64, text: impl Into<String>) -> Self {
        RangeDescriptor::UpperBounded {
            max,
            text: text.into(),
        }
    }

    pub fn lower_bounded(min: f64, text: impl Into<String>) -> Self {
        RangeDescriptor::LowerBounded {
            min,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> RangeKind {
        match self {
            RangeDescriptor::Bounded { .. } => RangeKind::Bounded,
            RangeDescriptor::UpperBounded { .. } => RangeKind::UpperBounded,
            RangeDescriptor::LowerBounded { .. } => RangeKind::LowerBounded,
        }
    }

    /// Lower bound, if the range has one.
    pub fn min(&self) -> Option<f64> {
        match self {
            RangeDescriptor::Bounded { min, .. } | RangeDescriptor::LowerBounded { min, .. } => {
                Some(*min)
            }
            RangeDescriptor::UpperBounded { .. } => None,
        }
    }

    /// Upper bound, if the range has one.
    pub fn max(&self) -> Option<f64> {
        match self {
            RangeDescriptor::Bounded { max, .. } | RangeDescriptor::UpperBounded { max, .. } => {
                Some(*max)
            }
            RangeDescriptor::LowerBounded { .. } => None,
        }
    }

    /// The single cutoff of a one-sided range.
    pub fn cutoff(&self) -> Option<f64> {
        match self {
            RangeDescriptor::UpperBounded { max, .. } => Some(*max),
            RangeDescriptor::LowerBounded { min, .. } => Some(*min),
            RangeDescriptor::Bounded { .. } => None,
        }
    }

    /// The source text, verbatim.
    pub fn text(&self) -> &str {
        match self {
            RangeDescriptor::Bounded { text, .. }
            | RangeDescriptor::UpperBounded { text, .. }
            | RangeDescriptor::LowerBounded { text, .. } => text,
        }
    }
}

impl fmt::Display for RangeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeDescriptor::Bounded { min, max, .. } => write!(f, "{min} - {max}"),
            RangeDescriptor::UpperBounded { max, .. } => write!(f, "< {max}"),
            RangeDescriptor::LowerBounded { min, .. } => write!(f, "> {min}"),
        }
    }
}
