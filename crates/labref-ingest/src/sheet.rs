//! Result sheet loading.

use std::path::Path;

use labref_model::{InputType, ResultEntry, ResultSheet};

use crate::columns;
use crate::csv_table::{CsvTable, optional_number, optional_text, parse_csv_table};
use crate::error::{IngestError, Result};
use crate::source::{SourceFormat, read_source};

/// Loads a result sheet from a `.json` or `.csv` file.
///
/// JSON input is either a full sheet object (`{"patient": .., "results": [..]}`)
/// or a bare array of entries. CSV input has one entry per row and carries
/// no patient details.
pub fn read_result_sheet(path: impl AsRef<Path>) -> Result<ResultSheet> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path)?;
    let content = read_source(path)?;
    let sheet = match format {
        SourceFormat::Json => sheet_from_json(&content, path)?,
        SourceFormat::Csv => sheet_from_csv(&content, path)?,
    };
    tracing::debug!(
        path = %path.display(),
        results = sheet.results.len(),
        has_patient = sheet.patient.is_some(),
        "Loaded result sheet"
    );
    Ok(sheet)
}

fn sheet_from_json(content: &str, path: &Path) -> Result<ResultSheet> {
    let json_error = |source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    };
    let document: serde_json::Value = serde_json::from_str(content).map_err(json_error)?;
    if document.is_array() {
        let results = serde_json::from_value(document).map_err(json_error)?;
        Ok(ResultSheet {
            patient: None,
            results,
        })
    } else {
        serde_json::from_value(document).map_err(json_error)
    }
}

fn sheet_from_csv(content: &str, path: &Path) -> Result<ResultSheet> {
    let table = parse_csv_table(content, path)?;
    if table.headers.is_empty() {
        return Ok(ResultSheet::default());
    }
    let columns = SheetColumns::locate(&table, path)?;

    let mut results = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let code = row.get(Some(columns.code));
        if code.is_empty() {
            tracing::warn!(path = %path.display(), line = row.line, "Skipping row without test code");
            continue;
        }
        let input_type = match optional_text(row.get(columns.input_type)) {
            Some(text) => Some(text.parse::<InputType>().map_err(|_| {
                IngestError::InvalidValue {
                    field: "input_type".to_string(),
                    value: text.clone(),
                    row: row.line,
                    path: path.to_path_buf(),
                }
            })?),
            None => None,
        };
        results.push(ResultEntry {
            code: code.to_string(),
            name: row.get(columns.name).to_string(),
            value: row.get(Some(columns.value)).to_string(),
            unit: row.get(columns.unit).to_string(),
            input_type,
            reference_text: optional_text(row.get(columns.reference)),
            ref_low: optional_number(row.get(columns.low), "low", row, path)?,
            ref_high: optional_number(row.get(columns.high), "high", row, path)?,
        });
    }
    Ok(ResultSheet {
        patient: None,
        results,
    })
}

struct SheetColumns {
    code: usize,
    value: usize,
    name: Option<usize>,
    unit: Option<usize>,
    input_type: Option<usize>,
    reference: Option<usize>,
    low: Option<usize>,
    high: Option<usize>,
}

impl SheetColumns {
    fn locate(table: &CsvTable, path: &Path) -> Result<Self> {
        Ok(Self {
            code: table.require("code", columns::CODE, path)?,
            value: table.require("value", columns::VALUE, path)?,
            name: table.column(columns::NAME),
            unit: table.column(columns::UNIT),
            input_type: table.column(columns::INPUT_TYPE),
            reference: table.column(columns::REFERENCE),
            low: table.column(columns::LOW),
            high: table.column(columns::HIGH),
        })
    }
}
