//! End-to-end parse and classify scenarios from result entry.

use labref_model::{RangeDescriptor, RangeKind, RangeStatus};
use labref_range::{background_for, classify, color_for, is_bold, parse_range};

#[test]
fn high_value_in_standard_range() {
    let range = parse_range("7.94 - 20.07").expect("standard range");
    assert_eq!(range.min(), Some(7.94));
    assert_eq!(range.max(), Some(20.07));
    assert_eq!(classify(&25.5, Some(&range)), RangeStatus::High);
}

#[test]
fn value_on_compact_range_bound() {
    let range = parse_range("0.72-1.18");
    assert_eq!(classify("1.18", range.as_ref()), RangeStatus::Boundary);
}

#[test]
fn less_than_range_flags_high() {
    let range = parse_range("< 40").expect("less-than range");
    assert_eq!(range.kind(), RangeKind::UpperBounded);
    assert_eq!(classify(&125, Some(&range)), RangeStatus::High);
}

#[test]
fn greater_than_range_flags_low() {
    let range = parse_range("> 100").expect("greater-than range");
    assert_eq!(range.kind(), RangeKind::LowerBounded);
    assert_eq!(classify(&85, Some(&range)), RangeStatus::Low);
}

#[test]
fn multiline_reference_uses_first_line() {
    let range = parse_range("Adult: 13 - 17 g/dL\nChild: 11 - 15 g/dL").expect("adult range");
    assert!(matches!(
        range,
        RangeDescriptor::Bounded { min, max, .. } if min == 13.0 && max == 17.0
    ));
    assert_eq!(classify(&12, Some(&range)), RangeStatus::Low);
}

#[test]
fn textual_reference_is_never_flagged() {
    let range = parse_range("Negative");
    assert!(range.is_none());
    for value in ["0", "125", "Positive", ""] {
        assert_eq!(classify(value, range.as_ref()), RangeStatus::Normal);
    }
}

#[test]
fn styling_follows_status() {
    let range = parse_range("70 - 100 mg/dL");
    let status = classify("150", range.as_ref());
    assert_eq!(status, RangeStatus::High);
    assert_eq!(color_for(status).to_hex(), "#b00020");
    assert_eq!(background_for(status).map(|rgb| rgb.as_array()), Some([254, 242, 242]));
    assert!(is_bold(status));

    let status = classify("85", range.as_ref());
    assert_eq!(status, RangeStatus::Normal);
    assert_eq!(background_for(status), None);
    assert!(!is_bold(status));
}

#[test]
fn decimal_range_edges() {
    let range = parse_range("0.5 - 1.5");
    assert_eq!(classify(&0.75, range.as_ref()), RangeStatus::Normal);
    assert_eq!(classify(&1.8, range.as_ref()), RangeStatus::High);
}

#[test]
fn platelet_count_magnitudes() {
    let range = parse_range("150000 - 400000").expect("platelet range");
    assert_eq!(range.min(), Some(150000.0));
    assert_eq!(range.max(), Some(400000.0));
    assert_eq!(classify("95,000", Some(&range)), RangeStatus::Low);
}

#[test]
fn platelet_count_in_thousands_per_microlitre() {
    let range = parse_range("150 - 400 10^3/µL").expect("platelet range with unit");
    assert_eq!((range.min(), range.max()), (Some(150.0), Some(400.0)));
    assert_eq!(range.text(), "150 - 400 10^3/µL");
    assert_eq!(classify("450", Some(&range)), RangeStatus::High);
    assert_eq!(classify("400", Some(&range)), RangeStatus::Boundary);
}
