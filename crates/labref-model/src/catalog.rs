//! Test catalog definitions.

use serde::{Deserialize, Serialize};

use crate::de::{optional_number, optional_text};
use crate::enums::InputType;

/// One orderable test as stored in the test master.
///
/// A test may describe its reference range as free text, as structured
/// numeric bounds, or both; gender-specific tests carry separate male and
/// female range strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestDefinition {
    #[serde(alias = "testId", alias = "id")]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, alias = "inputType")]
    pub input_type: InputType,
    #[serde(
        default,
        alias = "referenceRange",
        alias = "bioReference",
        alias = "reference",
        deserialize_with = "optional_text"
    )]
    pub reference_text: Option<String>,
    #[serde(default, alias = "refLow", deserialize_with = "optional_number")]
    pub ref_low: Option<f64>,
    #[serde(default, alias = "refHigh", deserialize_with = "optional_number")]
    pub ref_high: Option<f64>,
    #[serde(default, alias = "maleRange", deserialize_with = "optional_text")]
    pub male_range: Option<String>,
    #[serde(default, alias = "femaleRange", deserialize_with = "optional_text")]
    pub female_range: Option<String>,
    /// Descriptive note printed under the range (`"Should be Nil"`).
    #[serde(default, alias = "refText", deserialize_with = "optional_text")]
    pub notes: Option<String>,
    #[serde(default, alias = "dropdownOptions")]
    pub options: Vec<String>,
}

impl TestDefinition {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    #[must_use]
    pub fn with_reference(mut self, text: impl Into<String>) -> Self {
        self.reference_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, low: Option<f64>, high: Option<f64>) -> Self {
        self.ref_low = low;
        self.ref_high = high;
        self
    }

    #[must_use]
    pub fn with_gender_ranges(
        mut self,
        male: impl Into<String>,
        female: impl Into<String>,
    ) -> Self {
        self.male_range = Some(male.into());
        self.female_range = Some(female.into());
        self
    }

    pub fn is_gender_specific(&self) -> bool {
        self.male_range.is_some() || self.female_range.is_some()
    }

    pub fn has_structured_bounds(&self) -> bool {
        self.ref_low.is_some() || self.ref_high.is_some()
    }
}

/// Case-insensitive lookup of a catalog entry by code.
pub fn find_test<'a>(catalog: &'a [TestDefinition], code: &str) -> Option<&'a TestDefinition> {
    let code = code.trim();
    catalog
        .iter()
        .find(|test| test.code.trim().eq_ignore_ascii_case(code))
}
