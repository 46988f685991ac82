//! Result sheets: the values entered for one patient visit.

use serde::{Deserialize, Serialize};

use crate::catalog::TestDefinition;
use crate::de::{optional_number, optional_text, string_or_number};
use crate::enums::{InputType, Sex};

/// Patient details relevant to range selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientInfo {
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, alias = "gender")]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub age: Option<u32>,
}

/// A single entered result, with whatever reference data travelled with it.
///
/// Fields left empty are filled from the catalog when the sheet is
/// evaluated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    #[serde(alias = "testId")]
    pub code: String,
    #[serde(default, alias = "test")]
    pub name: String,
    #[serde(default, alias = "result", deserialize_with = "string_or_number")]
    pub value: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, alias = "inputType")]
    pub input_type: Option<InputType>,
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
}

impl ResultEntry {
    pub fn new(code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_reference(mut self, text: impl Into<String>) -> Self {
        self.reference_text = Some(text.into());
        self
    }

    /// True when the operator has typed something into the field.
    pub fn has_value(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// Returns a copy of the catalog definition overlaid with this entry's
    /// own reference data.
    pub fn merged_definition(&self, catalog: Option<&TestDefinition>) -> TestDefinition {
        let mut test = catalog
            .cloned()
            .unwrap_or_else(|| TestDefinition::new(self.code.clone(), self.name.clone()));
        if !self.name.trim().is_empty() {
            test.name = self.name.clone();
        }
        if !self.unit.trim().is_empty() {
            test.unit = self.unit.clone();
        }
        if let Some(input_type) = self.input_type {
            test.input_type = input_type;
        }
        if self.reference_text.is_some() || self.ref_low.is_some() || self.ref_high.is_some() {
            test.reference_text = self.reference_text.clone();
            test.ref_low = self.ref_low;
            test.ref_high = self.ref_high;
            test.male_range = None;
            test.female_range = None;
        }
        test
    }
}

/// All results entered for one visit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSheet {
    #[serde(default)]
    pub patient: Option<PatientInfo>,
    #[serde(default, alias = "tests")]
    pub results: Vec<ResultEntry>,
}

impl ResultSheet {
    pub fn sex(&self) -> Option<Sex> {
        self.patient.as_ref().and_then(|patient| patient.sex)
    }
}
