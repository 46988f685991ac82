//! Reference resolution from catalog fields.
//!
//! A catalog test may carry free reference text, structured low/high
//! bounds, and gender-specific range strings. This module decides which of
//! those a report uses for a given patient.

use labref_model::{InputType, RangeDescriptor, Sex, TestDefinition};

use crate::parser::parse_range;

/// Placeholder printed when a test has no reference information at all.
pub const NO_REFERENCE: &str = "—";

/// The reference text that applies to `test` for a patient of `sex`.
///
/// Preference order matches [`descriptor_for`]: the matching
/// gender-specific range, text synthesized from the structured bounds,
/// then the free reference text.
pub fn reference_text_for(test: &TestDefinition, sex: Option<Sex>) -> Option<String> {
    if let Some(range) = gender_range(test, sex) {
        return Some(range.to_string());
    }
    synthesize_reference(test.ref_low, test.ref_high, &test.unit)
        .or_else(|| test.reference_text.clone())
}

/// Render structured bounds as reference text (`0.6–1.2 mg/dL`).
pub fn synthesize_reference(low: Option<f64>, high: Option<f64>, unit: &str) -> Option<String> {
    let range = match (low, high) {
        (Some(low), Some(high)) => format!("{low}–{high}"),
        (None, Some(high)) => format!("< {high}"),
        (Some(low), None) => format!("> {low}"),
        (None, None) => return None,
    };
    let unit = unit.trim();
    if unit.is_empty() {
        Some(range)
    } else {
        Some(format!("{range} {unit}"))
    }
}

/// Build the descriptor used to classify results of `test`.
///
/// Only numeric tests are classified; select and text tests never get a
/// descriptor. Gender-specific ranges win when the patient's sex is known,
/// then structured bounds, then the free reference text.
pub fn descriptor_for(test: &TestDefinition, sex: Option<Sex>) -> Option<RangeDescriptor> {
    resolve_descriptor(test, sex, parse_range)
}

pub(crate) fn resolve_descriptor<F>(
    test: &TestDefinition,
    sex: Option<Sex>,
    mut parse: F,
) -> Option<RangeDescriptor>
where
    F: FnMut(&str) -> Option<RangeDescriptor>,
{
    if test.input_type != InputType::Number {
        return None;
    }
    if let Some(range) = gender_range(test, sex) {
        return parse(range);
    }
    if test.has_structured_bounds() {
        let text = synthesize_reference(test.ref_low, test.ref_high, &test.unit)?;
        return match (test.ref_low, test.ref_high) {
            (Some(low), Some(high)) => Some(RangeDescriptor::bounded(low, high, text)),
            (None, Some(high)) => Some(RangeDescriptor::upper_bounded(high, text)),
            (Some(low), None) => Some(RangeDescriptor::lower_bounded(low, text)),
            (None, None) => None,
        };
    }
    test.reference_text.as_deref().and_then(parse)
}

/// Multi-line reference cell for reports: the range followed by any note.
pub fn display_reference(test: &TestDefinition, sex: Option<Sex>) -> String {
    let mut parts = Vec::new();
    if let Some(text) = reference_text_for(test, sex) {
        parts.push(text);
    }
    if let Some(notes) = &test.notes {
        parts.push(notes.clone());
    }
    if parts.is_empty() {
        NO_REFERENCE.to_string()
    } else {
        parts.join("\n")
    }
}

fn gender_range(test: &TestDefinition, sex: Option<Sex>) -> Option<&str> {
    match sex? {
        Sex::Male => test.male_range.as_deref(),
        Sex::Female => test.female_range.as_deref(),
        Sex::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labref_model::RangeKind;

    fn haemoglobin() -> TestDefinition {
        TestDefinition::new("HB001", "Haemoglobin")
            .with_unit("g/dL")
            .with_reference("12 - 16")
            .with_gender_ranges("13 - 17", "12 - 16")
    }

    #[test]
    fn test_gender_specific_range() {
        let test = haemoglobin();
        assert_eq!(
            reference_text_for(&test, Some(Sex::Male)).as_deref(),
            Some("13 - 17")
        );
        assert_eq!(
            reference_text_for(&test, Some(Sex::Female)).as_deref(),
            Some("12 - 16")
        );
        assert_eq!(reference_text_for(&test, None).as_deref(), Some("12 - 16"));

        let male = descriptor_for(&test, Some(Sex::Male)).unwrap();
        assert_eq!((male.min(), male.max()), (Some(13.0), Some(17.0)));
    }

    #[test]
    fn test_structured_bounds() {
        let test = TestDefinition::new("CREAT", "Creatinine")
            .with_unit("mg/dL")
            .with_bounds(Some(0.6), Some(1.2));
        let range = descriptor_for(&test, None).unwrap();
        assert_eq!(range.kind(), RangeKind::Bounded);
        assert_eq!(range.text(), "0.6–1.2 mg/dL");
        assert_eq!(range.min(), Some(0.6));
    }

    #[test]
    fn test_zero_lower_bound_is_kept() {
        let test = TestDefinition::new("SGOT", "SGOT (AST)").with_bounds(Some(0.0), Some(40.0));
        let range = descriptor_for(&test, None).unwrap();
        assert_eq!(range.min(), Some(0.0));
        assert_eq!(range.max(), Some(40.0));
    }

    #[test]
    fn test_one_sided_structured_bounds() {
        let test = TestDefinition::new("HDL", "HDL").with_bounds(Some(40.0), None);
        assert_eq!(descriptor_for(&test, None).unwrap().kind(), RangeKind::LowerBounded);
        let test = TestDefinition::new("TG", "Triglycerides").with_bounds(None, Some(150.0));
        let range = descriptor_for(&test, None).unwrap();
        assert_eq!(range.kind(), RangeKind::UpperBounded);
        assert_eq!(range.text(), "< 150");
    }

    #[test]
    fn test_select_tests_are_not_classified() {
        let mut test = TestDefinition::new("U_PROT", "Protein").with_reference("0 - 10");
        test.input_type = InputType::Select;
        assert!(descriptor_for(&test, None).is_none());
    }

    #[test]
    fn test_bounds_win_over_free_text() {
        let test = TestDefinition::new("GLU", "Glucose")
            .with_unit("mg/dL")
            .with_reference("60 - 110")
            .with_bounds(Some(70.0), Some(100.0));
        assert_eq!(
            reference_text_for(&test, None).as_deref(),
            Some("70–100 mg/dL")
        );
        let range = descriptor_for(&test, None).unwrap();
        assert_eq!((range.min(), range.max()), (Some(70.0), Some(100.0)));
        assert_eq!(range.text(), "70–100 mg/dL");
    }

    #[test]
    fn test_display_reference() {
        let mut test = TestDefinition::new("KFT001", "Creatinine")
            .with_unit("mg/dL")
            .with_bounds(Some(0.6), Some(1.2));
        test.notes = Some("Normal kidney function".to_string());
        assert_eq!(
            display_reference(&test, None),
            "0.6–1.2 mg/dL\nNormal kidney function"
        );
        assert_eq!(
            display_reference(&TestDefinition::new("X", "Unknown"), None),
            NO_REFERENCE
        );
    }
}
