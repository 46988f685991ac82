//! Whole-sheet evaluation for report rendering.

use labref_model::{
    RangeDescriptor, RangeStatus, ResultEntry, ResultSheet, Sex, TestDefinition, find_test,
};
use serde::Serialize;
use tracing::debug;

use crate::cache::RangeCache;
use crate::classify::classify;
use crate::presentation::{Presentation, presentation_for};
use crate::reference::{display_reference, resolve_descriptor};

/// One report row: the entered value, its reference and computed status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatedResult {
    pub code: String,
    pub name: String,
    pub value: String,
    pub unit: String,
    /// Reference cell text as printed on the report.
    pub reference: String,
    pub descriptor: Option<RangeDescriptor>,
    pub status: RangeStatus,
    /// False for blank entries; those rows carry no status badge.
    pub has_value: bool,
    pub presentation: Presentation,
}

/// Evaluate one entry, using `cache` for reference text parsing.
pub fn evaluate_entry(
    entry: &ResultEntry,
    definition: Option<&TestDefinition>,
    sex: Option<Sex>,
    cache: &mut RangeCache,
) -> EvaluatedResult {
    let test = entry.merged_definition(definition);
    let descriptor = resolve_descriptor(&test, sex, |text| cache.get_or_parse(text).cloned());
    let status = classify(entry.value.as_str(), descriptor.as_ref());

    EvaluatedResult {
        code: entry.code.clone(),
        name: test.name.clone(),
        value: entry.value.trim().to_string(),
        unit: test.unit.clone(),
        reference: display_reference(&test, sex),
        descriptor,
        status,
        has_value: entry.has_value(),
        presentation: presentation_for(status),
    }
}

/// Evaluate every entry of a sheet, filling missing reference data from
/// `catalog` by test code.
///
/// Rows are independent; output order follows the sheet.
pub fn evaluate_sheet(sheet: &ResultSheet, catalog: &[TestDefinition]) -> Vec<EvaluatedResult> {
    let sex = sheet.sex();
    let mut cache = RangeCache::new();
    let results: Vec<EvaluatedResult> = sheet
        .results
        .iter()
        .map(|entry| evaluate_entry(entry, find_test(catalog, &entry.code), sex, &mut cache))
        .collect();

    debug!(
        rows = results.len(),
        distinct_references = cache.len(),
        cache_hits = cache.hits(),
        "evaluated result sheet"
    );
    results
}

/// Row counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SheetSummary {
    pub total: usize,
    pub with_value: usize,
    pub normal: usize,
    pub high: usize,
    pub low: usize,
    pub boundary: usize,
}

impl SheetSummary {
    /// Count statuses of rows that have a value; blank rows only add to
    /// `total`.
    pub fn from_results(results: &[EvaluatedResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };
        for result in results.iter().filter(|result| result.has_value) {
            summary.with_value += 1;
            match result.status {
                RangeStatus::Normal => summary.normal += 1,
                RangeStatus::High => summary.high += 1,
                RangeStatus::Low => summary.low += 1,
                RangeStatus::Boundary => summary.boundary += 1,
            }
        }
        summary
    }

    pub fn count(&self, status: RangeStatus) -> usize {
        match status {
            RangeStatus::Normal => self.normal,
            RangeStatus::High => self.high,
            RangeStatus::Low => self.low,
            RangeStatus::Boundary => self.boundary,
        }
    }

    pub fn flagged(&self) -> usize {
        self.high + self.low + self.boundary
    }
}
