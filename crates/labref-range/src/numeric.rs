//! Numeric coercion of entered result values.
//!
//! Entry forms hand over strings ("25.5", "12 g/dL", "Trace") and
//! occasionally real numbers. Values are read the way the result entry form
//! reads them: the leading number wins, anything after it is ignored, and a
//! value with no leading number is not a measurement.

use std::sync::LazyLock;

use regex::Regex;

/// Leading signed decimal, with optional digit-grouping commas and exponent.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d{1,3}(?:,\d{2,3})+(?:\.\d*)?|\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("Invalid leading number regex")
});

/// Parse the leading number of an entered value.
///
/// Handles:
/// - Standard numbers: "123", "-45.67", ".5"
/// - Grouping separators: "150,000", "1,50,000"
/// - Trailing units or notes: "12.5 g/dL", "7.2 (repeat)"
/// - Whitespace: "  123  "
/// - Scientific notation: "1.23e5"
///
/// Returns None for text without a leading number and for non-finite
/// results.
pub fn parse_measurement(value: &str) -> Option<f64> {
    let trimmed = value.trim().trim_start_matches('\u{a0}');
    if trimmed.is_empty() {
        return None;
    }

    let token = LEADING_NUMBER.find(trimmed)?.as_str();
    let cleaned = token.replace(',', "");
    let parsed: f64 = cleaned.parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

/// Check if a value would be read as a measurement.
pub fn is_measurement(value: &str) -> bool {
    parse_measurement(value).is_some()
}

/// Anything that can stand in for an entered result value.
pub trait Measurement {
    /// The numeric reading, or None for categorical/blank values.
    fn measurement(&self) -> Option<f64>;
}

impl Measurement for str {
    fn measurement(&self) -> Option<f64> {
        parse_measurement(self)
    }
}

impl Measurement for String {
    fn measurement(&self) -> Option<f64> {
        parse_measurement(self)
    }
}

impl Measurement for f64 {
    fn measurement(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

impl Measurement for f32 {
    fn measurement(&self) -> Option<f64> {
        f64::from(*self).measurement()
    }
}

macro_rules! integer_measurement {
    ($($ty:ty),*) => {
        $(
            impl Measurement for $ty {
                fn measurement(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

integer_measurement!(i32, i64, u32, u64, usize);

impl<T: Measurement + ?Sized> Measurement for &T {
    fn measurement(&self) -> Option<f64> {
        (**self).measurement()
    }
}

impl<T: Measurement> Measurement for Option<T> {
    fn measurement(&self) -> Option<f64> {
        self.as_ref().and_then(Measurement::measurement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_integer() {
        assert_eq!(parse_measurement("123"), Some(123.0));
        assert_eq!(parse_measurement("-456"), Some(-456.0));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(parse_measurement("123.45"), Some(123.45));
        assert_eq!(parse_measurement("-0.5"), Some(-0.5));
        assert_eq!(parse_measurement(".5"), Some(0.5));
        assert_eq!(parse_measurement("5."), Some(5.0));
    }

    #[test]
    fn test_grouping_separator() {
        assert_eq!(parse_measurement("150,000"), Some(150000.0));
        assert_eq!(parse_measurement("1,50,000"), Some(150000.0));
        assert_eq!(parse_measurement("1,234.56"), Some(1234.56));
    }

    #[test]
    fn test_trailing_text() {
        assert_eq!(parse_measurement("12.5 g/dL"), Some(12.5));
        assert_eq!(parse_measurement("25.5mg"), Some(25.5));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(parse_measurement("  123  "), Some(123.0));
        assert_eq!(parse_measurement("  -45.67  "), Some(-45.67));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_measurement("1.23e5"), Some(123000.0));
        assert_eq!(parse_measurement("1.5E-3"), Some(0.0015));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_measurement(""), None);
        assert_eq!(parse_measurement("  "), None);
    }

    #[test]
    fn test_categorical() {
        assert_eq!(parse_measurement("Trace"), None);
        assert_eq!(parse_measurement("Nil"), None);
        assert_eq!(parse_measurement("+"), None);
        assert_eq!(parse_measurement("++"), None);
        assert_eq!(parse_measurement("nan"), None);
        assert_eq!(parse_measurement("inf"), None);
    }

    #[test]
    fn test_is_measurement() {
        assert!(is_measurement("123"));
        assert!(is_measurement("45.67"));
        assert!(!is_measurement("abc"));
        assert!(!is_measurement(""));
    }

    #[test]
    fn test_measurement_trait() {
        assert_eq!(25.5_f64.measurement(), Some(25.5));
        assert_eq!(f64::NAN.measurement(), None);
        assert_eq!(125_i32.measurement(), Some(125.0));
        assert_eq!("25.5".measurement(), Some(25.5));
        assert_eq!(String::from("Trace").measurement(), None);
        assert_eq!(Some(4.0_f64).measurement(), Some(4.0));
        assert_eq!(None::<f64>.measurement(), None);
    }
}
