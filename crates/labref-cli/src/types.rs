use serde::Serialize;

use labref_model::RangeStatus;
use labref_range::Presentation;

/// Outcome of classifying one command-line value.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedValue {
    pub value: String,
    /// Numeric reading of `value`, when it has one.
    pub measurement: Option<f64>,
    pub status: RangeStatus,
    pub presentation: Presentation,
}
