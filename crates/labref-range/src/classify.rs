//! Result status classification.

use labref_model::{RangeDescriptor, RangeStatus};

use crate::numeric::Measurement;

/// Classify an entered value against a parsed reference range.
///
/// Never fails: a missing descriptor or a non-numeric value ("Trace",
/// "Positive", blank) classifies as [`RangeStatus::Normal`]. For two-sided
/// ranges an exact match on either bound is [`RangeStatus::Boundary`],
/// which takes priority over High/Low.
pub fn classify<V>(value: &V, descriptor: Option<&RangeDescriptor>) -> RangeStatus
where
    V: Measurement + ?Sized,
{
    let Some(descriptor) = descriptor else {
        return RangeStatus::Normal;
    };
    let Some(value) = value.measurement() else {
        return RangeStatus::Normal;
    };

    match descriptor {
        RangeDescriptor::Bounded { min, max, .. } => {
            if value == *min || value == *max {
                RangeStatus::Boundary
            } else if value > *max {
                RangeStatus::High
            } else if value < *min {
                RangeStatus::Low
            } else {
                RangeStatus::Normal
            }
        }
        RangeDescriptor::UpperBounded { max, .. } => {
            if value > *max {
                RangeStatus::High
            } else {
                RangeStatus::Normal
            }
        }
        RangeDescriptor::LowerBounded { min, .. } => {
            if value < *min {
                RangeStatus::Low
            } else {
                RangeStatus::Normal
            }
        }
    }
}

/// Parse `reference` and classify `value` in one step.
pub fn classify_text<V>(value: &V, reference: &str) -> RangeStatus
where
    V: Measurement + ?Sized,
{
    classify(value, crate::parser::parse_range(reference).as_ref())
}
