//! Test catalog loading.

use std::path::Path;

use labref_model::{InputType, TestDefinition};

use crate::columns;
use crate::csv_table::{CsvRow, optional_number, optional_text, parse_csv_table};
use crate::error::{IngestError, Result};
use crate::source::{SourceFormat, read_source};

/// Loads a test catalog from a `.json` array or a `.csv` table.
pub fn read_catalog(path: impl AsRef<Path>) -> Result<Vec<TestDefinition>> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path)?;
    let content = read_source(path)?;
    let catalog = match format {
        SourceFormat::Json => {
            serde_json::from_str(&content).map_err(|source| IngestError::JsonParse {
                path: path.to_path_buf(),
                source,
            })?
        }
        SourceFormat::Csv => catalog_from_csv(&content, path)?,
    };
    tracing::debug!(path = %path.display(), tests = catalog.len(), "Loaded test catalog");
    Ok(catalog)
}

fn catalog_from_csv(content: &str, path: &Path) -> Result<Vec<TestDefinition>> {
    let table = parse_csv_table(content, path)?;
    if table.headers.is_empty() {
        return Ok(Vec::new());
    }
    let code = table.require("code", columns::CODE, path)?;
    let name = table.column(columns::NAME);
    let unit = table.column(columns::UNIT);
    let input_type = table.column(columns::INPUT_TYPE);
    let reference = table.column(columns::REFERENCE);
    let low = table.column(columns::LOW);
    let high = table.column(columns::HIGH);
    let male = table.column(columns::MALE_RANGE);
    let female = table.column(columns::FEMALE_RANGE);
    let notes = table.column(columns::NOTES);
    let options = table.column(columns::OPTIONS);

    let mut catalog = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let test_code = row.get(Some(code));
        if test_code.is_empty() {
            tracing::warn!(path = %path.display(), line = row.line, "Skipping catalog row without code");
            continue;
        }
        catalog.push(TestDefinition {
            code: test_code.to_string(),
            name: row.get(name).to_string(),
            unit: row.get(unit).to_string(),
            input_type: parse_input_type(row.get(input_type), row, path)?,
            reference_text: optional_text(row.get(reference)),
            ref_low: optional_number(row.get(low), "low", row, path)?,
            ref_high: optional_number(row.get(high), "high", row, path)?,
            male_range: optional_text(row.get(male)),
            female_range: optional_text(row.get(female)),
            notes: optional_text(row.get(notes)),
            options: split_options(row.get(options)),
        });
    }
    Ok(catalog)
}

fn parse_input_type(value: &str, row: &CsvRow, path: &Path) -> Result<InputType> {
    if value.is_empty() {
        return Ok(InputType::default());
    }
    value
        .parse::<InputType>()
        .map_err(|_| IngestError::InvalidValue {
            field: "input_type".to_string(),
            value: value.to_string(),
            row: row.line,
            path: path.to_path_buf(),
        })
}

/// Dropdown options are stored as one cell separated by `|` or `;`.
fn split_options(value: &str) -> Vec<String> {
    value
        .split(['|', ';'])
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_options() {
        assert_eq!(
            split_options("Positive | Negative;Trace"),
            vec!["Positive", "Negative", "Trace"]
        );
        assert!(split_options("").is_empty());
    }
}
