//! Accepted header spellings, in normalized form.

pub(crate) const CODE: &[&str] = &["code", "testcode", "testid", "id"];
pub(crate) const NAME: &[&str] = &["name", "test", "testname"];
pub(crate) const VALUE: &[&str] = &["value", "result"];
pub(crate) const UNIT: &[&str] = &["unit", "units"];
pub(crate) const REFERENCE: &[&str] = &[
    "reference",
    "range",
    "referencerange",
    "bioreference",
    "referencetext",
];
pub(crate) const LOW: &[&str] = &["low", "reflow"];
pub(crate) const HIGH: &[&str] = &["high", "refhigh"];
pub(crate) const INPUT_TYPE: &[&str] = &["inputtype", "type"];
pub(crate) const MALE_RANGE: &[&str] = &["malerange", "male"];
pub(crate) const FEMALE_RANGE: &[&str] = &["femalerange", "female"];
pub(crate) const NOTES: &[&str] = &["notes", "reftext"];
pub(crate) const OPTIONS: &[&str] = &["options", "dropdownoptions"];
