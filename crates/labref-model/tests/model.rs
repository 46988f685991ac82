//! Tests for labref-model types.

use labref_model::{
    InputType, PatientInfo, RangeDescriptor, RangeStatus, ResultSheet, Sex, TestDefinition,
};

#[test]
fn descriptor_serializes_with_type_tag() {
    let range = RangeDescriptor::bounded(13.0, 17.0, "13 - 17 g/dL");
    let json = serde_json::to_value(&range).expect("serialize descriptor");
    assert_eq!(json["type"], "bounded");
    assert_eq!(json["min"], 13.0);
    assert_eq!(json["max"], 17.0);
    assert_eq!(json["text"], "13 - 17 g/dL");

    let round: RangeDescriptor = serde_json::from_value(json).expect("deserialize descriptor");
    assert_eq!(round, range);
}

#[test]
fn one_sided_descriptor_tags() {
    let lt = serde_json::to_value(RangeDescriptor::upper_bounded(40.0, "< 40")).unwrap();
    assert_eq!(lt["type"], "upper_bounded");
    assert!(lt.get("min").is_none());

    let gt = serde_json::to_value(RangeDescriptor::lower_bounded(100.0, "> 100")).unwrap();
    assert_eq!(gt["type"], "lower_bounded");
    assert!(gt.get("max").is_none());
}

#[test]
fn status_serializes_upper_case() {
    let json = serde_json::to_string(&RangeStatus::Boundary).unwrap();
    assert_eq!(json, "\"BOUNDARY\"");
    let status: RangeStatus = serde_json::from_str("\"HIGH\"").unwrap();
    assert_eq!(status, RangeStatus::High);
}

#[test]
fn catalog_accepts_source_field_names() {
    let json = r#"{
        "testId": "KFT001",
        "name": "Creatinine",
        "unit": "mg/dL",
        "inputType": "number",
        "refLow": 0.6,
        "refHigh": "1.2",
        "refText": "Normal kidney function"
    }"#;
    let test: TestDefinition = serde_json::from_str(json).expect("deserialize test");
    assert_eq!(test.code, "KFT001");
    assert_eq!(test.input_type, InputType::Number);
    assert_eq!(test.ref_low, Some(0.6));
    assert_eq!(test.ref_high, Some(1.2));
    assert_eq!(test.notes.as_deref(), Some("Normal kidney function"));
    assert!(test.reference_text.is_none());
}

#[test]
fn catalog_blank_fields_are_absent() {
    let json = r#"{ "id": "HB001", "referenceRange": "", "refLow": "", "maleRange": "13 - 17" }"#;
    let test: TestDefinition = serde_json::from_str(json).unwrap();
    assert!(test.reference_text.is_none());
    assert!(test.ref_low.is_none());
    assert_eq!(test.male_range.as_deref(), Some("13 - 17"));
    assert!(test.is_gender_specific());
}

#[test]
fn sheet_accepts_numeric_values() {
    let json = r#"{
        "patient": { "name": "A. Patient", "gender": "F", "age": 34 },
        "tests": [
            { "code": "HB", "value": 12 },
            { "code": "U_PROT", "value": "Trace" },
            { "code": "GLU", "value": null }
        ]
    }"#;
    let sheet: ResultSheet = serde_json::from_str(json).expect("deserialize sheet");
    assert_eq!(sheet.sex(), Some(Sex::Female));
    assert_eq!(sheet.results[0].value, "12");
    assert_eq!(sheet.results[1].value, "Trace");
    assert!(!sheet.results[2].has_value());
}

#[test]
fn patient_defaults_are_empty() {
    let patient: PatientInfo = serde_json::from_str("{}").unwrap();
    assert_eq!(patient, PatientInfo::default());
}
