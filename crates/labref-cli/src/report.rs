//! Report assembly shared by the table and JSON renderers.

use serde::Serialize;

use labref_model::{PatientInfo, RangeStatus, ResultSheet, Sex, TestDefinition};
use labref_range::{EvaluatedResult, SheetSummary, evaluate_sheet};

/// Options for [`build_report`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Overrides the patient's sex recorded on the sheet.
    pub sex: Option<Sex>,
    /// Keep only rows with a HIGH, LOW or BOUNDARY status.
    pub flagged_only: bool,
}

/// One printable report line.
///
/// Blank entries have no `status`; they are listed but never badged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub code: String,
    pub name: String,
    pub value: String,
    pub unit: String,
    pub reference: String,
    pub status: Option<RangeStatus>,
    pub color: String,
    pub background: Option<String>,
    pub bold: bool,
}

impl From<&EvaluatedResult> for ReportRow {
    fn from(result: &EvaluatedResult) -> Self {
        let presentation = result.presentation;
        Self {
            code: result.code.clone(),
            name: result.name.clone(),
            value: result.value.clone(),
            unit: result.unit.clone(),
            reference: result.reference.clone(),
            status: result.has_value.then_some(result.status),
            color: presentation.foreground.to_hex(),
            background: presentation.background.map(|rgb| rgb.to_hex()),
            bold: presentation.bold,
        }
    }
}

impl ReportRow {
    pub fn is_flagged(&self) -> bool {
        self.status.is_some_and(|status| status.is_flagged())
    }
}

/// A fully evaluated sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub patient: Option<PatientInfo>,
    pub rows: Vec<ReportRow>,
    /// Totals over the whole sheet, including rows hidden by `flagged_only`.
    pub summary: SheetSummary,
}

/// Evaluates `sheet` against `catalog` and collects the printable rows.
pub fn build_report(
    sheet: &ResultSheet,
    catalog: &[TestDefinition],
    options: ReportOptions,
) -> Report {
    let mut patient = sheet.patient.clone();
    if let Some(sex) = options.sex {
        patient.get_or_insert_with(PatientInfo::default).sex = Some(sex);
    }
    let sheet = ResultSheet {
        patient: patient.clone(),
        results: sheet.results.clone(),
    };

    let results = evaluate_sheet(&sheet, catalog);
    let summary = SheetSummary::from_results(&results);
    let rows = results
        .iter()
        .map(ReportRow::from)
        .filter(|row| !options.flagged_only || row.is_flagged())
        .collect();

    Report {
        patient,
        rows,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labref_model::ResultEntry;

    fn sheet() -> ResultSheet {
        ResultSheet {
            patient: None,
            results: vec![
                ResultEntry::new("HB", "11.2"),
                ResultEntry::new("CHOL", "180").with_reference("< 200"),
                ResultEntry::new("CHOL2", "").with_reference("< 200"),
            ],
        }
    }

    fn catalog() -> Vec<TestDefinition> {
        vec![
            TestDefinition::new("HB", "Haemoglobin")
                .with_unit("g/dL")
                .with_gender_ranges("13 - 17", "12 - 16"),
        ]
    }

    #[test]
    fn sex_override_selects_gender_range() {
        let report = build_report(
            &sheet(),
            &catalog(),
            ReportOptions {
                sex: Some(Sex::Female),
                flagged_only: false,
            },
        );
        assert_eq!(report.rows[0].reference, "12 - 16");
        assert_eq!(report.rows[0].status, Some(RangeStatus::Low));
        assert_eq!(
            report.patient.and_then(|patient| patient.sex),
            Some(Sex::Female)
        );
    }

    #[test]
    fn blank_rows_have_no_status() {
        let report = build_report(&sheet(), &catalog(), ReportOptions::default());
        let blank = &report.rows[2];
        assert_eq!(blank.status, None);
        assert!(!blank.bold);
        assert!(!blank.is_flagged());
        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.with_value, 2);
    }

    #[test]
    fn flagged_only_keeps_summary_totals() {
        let report = build_report(
            &sheet(),
            &catalog(),
            ReportOptions {
                sex: Some(Sex::Male),
                flagged_only: true,
            },
        );
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].code, "HB");
        assert_eq!(report.rows[0].color, "#1d4ed8");
        assert_eq!(report.rows[0].background.as_deref(), Some("#eff6ff"));
        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.low, 1);
        assert_eq!(report.summary.normal, 1);
    }

    #[test]
    fn unknown_sex_falls_back_to_no_reference() {
        let report = build_report(&sheet(), &catalog(), ReportOptions::default());
        assert_eq!(report.rows[0].reference, "—");
        assert_eq!(report.rows[0].status, Some(RangeStatus::Normal));
    }
}
