//! Reference range parsing.
//!
//! Turns free-form reference text from the test catalog into a
//! [`RangeDescriptor`]. Rules are tried in order:
//!
//! 1. Whitespace is normalized (runs of spaces/tabs collapse, lines trimmed)
//! 2. `< N [unit]` (or `less than`, `below`, `up to`, `≤`) gives an upper bound
//! 3. `> N [unit]` (or `more than`, `greater than`, `above`, `≥`) gives a lower bound
//! 4. `A - B [unit]` with a hyphen, en-dash or em-dash gives a two-sided range
//! 5. Otherwise each line is tried with rule 4 after dropping a leading
//!    `Qualifier:` label; the first line that parses wins
//! 6. Anything else ("Negative", "Nil", "") has no structured range
//!
//! Unparseable text is an expected input, not an error: the caller prints
//! the reference as-is and does not flag the result.

use std::sync::LazyLock;

use labref_model::RangeDescriptor;
use regex::Regex;
use tracing::{debug, warn};

/// Integer or decimal, optionally digit-grouped (`150,000`, `1,50,000`).
const NUMBER: &str = r"(\d{1,3}(?:,\d{2,3})+(?:\.\d+)?|\d+(?:\.\d+)?|\.\d+)";

/// Optional trailing unit on the same line. Either it starts with a
/// non-numeric character (`mg/dL`, `%`), or it is separated by a space and
/// its leading digits run straight into a symbol (`10^3/µL`, `10x9/L`), so a
/// bare second number is never taken for a unit.
const UNIT: &str = r"(?:[ \t]*[^\d\s.\-–—][^\n]*|[ \t]+\d+[^\d\s.,\-–—][^\n]*)?";

static LESS_THAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(?:<=?|≤|less than|below|up to|upto)\s*{NUMBER}{UNIT}$"
    ))
    .expect("Invalid less-than regex")
});

static GREATER_THAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(?:>=?|≥|more than|greater than|above)\s*{NUMBER}{UNIT}$"
    ))
    .expect("Invalid greater-than regex")
});

static BOUNDED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{NUMBER}\s*[-–—]\s*{NUMBER}{UNIT}$")).expect("Invalid range regex")
});

/// Leading `Adult:` / `Male (18+):` style label.
static QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^:\n]*:\s*").expect("Invalid qualifier regex"));

static INLINE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\u{a0}\u{2009}\u{202f}]+").expect("Invalid space regex"));

/// Parse a reference range string.
///
/// Returns `None` when the text carries no numeric structure. The returned
/// descriptor keeps `text` verbatim.
pub fn parse_range(text: &str) -> Option<RangeDescriptor> {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return None;
    }

    if let Some(max) = capture_number(&LESS_THAN, &normalized) {
        return Some(RangeDescriptor::upper_bounded(max, text));
    }
    if let Some(min) = capture_number(&GREATER_THAN, &normalized) {
        return Some(RangeDescriptor::lower_bounded(min, text));
    }
    if let Some((min, max)) = match_bounded(&normalized) {
        return Some(build_bounded(min, max, text));
    }

    // First matching line wins; later qualifier lines (e.g. pediatric
    // ranges) are not considered.
    for line in normalized.lines() {
        if let Some((min, max)) = match_qualified_line(line) {
            debug!(line, "reference range resolved from qualified line");
            return Some(build_bounded(min, max, text));
        }
    }

    debug!(chars = text.len(), "reference text has no structured range");
    None
}

/// Collapse inline whitespace, trim every line and drop blank lines.
pub fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| INLINE_SPACE.replace_all(line, " ").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn match_qualified_line(line: &str) -> Option<(f64, f64)> {
    if let Some(bounds) = match_bounded(line) {
        return Some(bounds);
    }
    let stripped = QUALIFIER.replace(line, "");
    if stripped.len() == line.len() {
        return None;
    }
    match_bounded(&stripped)
}

fn match_bounded(text: &str) -> Option<(f64, f64)> {
    let captures = BOUNDED.captures(text)?;
    let min = parse_number(captures.get(1)?.as_str())?;
    let max = parse_number(captures.get(2)?.as_str())?;
    Some((min, max))
}

fn capture_number(pattern: &Regex, text: &str) -> Option<f64> {
    let captures = pattern.captures(text)?;
    parse_number(captures.get(1)?.as_str())
}

fn parse_number(token: &str) -> Option<f64> {
    token
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

fn build_bounded(first: f64, second: f64, text: &str) -> RangeDescriptor {
    if first > second {
        warn!(
            min = first,
            max = second,
            "reference range bounds are reversed; swapping"
        );
    }
    RangeDescriptor::bounded(first, second, text)
}
