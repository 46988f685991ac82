//! Header-mapped CSV tables.
//!
//! Headers are matched loosely: case, spaces, underscores and a leading
//! byte-order mark are ignored, so `Ref Low`, `ref_low` and `refLow` all
//! name the same column.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, Default)]
pub(crate) struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

/// One data record, padded to the header width.
#[derive(Debug, Clone)]
pub(crate) struct CsvRow {
    /// 1-based line number in the source file.
    pub line: usize,
    pub cells: Vec<String>,
}

impl CsvRow {
    pub fn get(&self, column: Option<usize>) -> &str {
        column
            .and_then(|idx| self.cells.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

impl CsvTable {
    /// Index of the first column whose header matches one of `aliases`.
    ///
    /// Aliases are given in normalized form (lower-case, alphanumeric only).
    pub fn column(&self, aliases: &[&str]) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| aliases.contains(&header.as_str()))
    }

    pub fn require(&self, name: &str, aliases: &[&str], path: &Path) -> Result<usize> {
        self.column(aliases).ok_or_else(|| IngestError::MissingColumn {
            column: name.to_string(),
            path: path.to_path_buf(),
        })
    }
}

pub(crate) fn parse_csv_table(content: &str, path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, |pos| pos.line() as usize);
        records.push(CsvRow { line, cells });
    }

    let mut records = records.into_iter();
    let Some(header_row) = records.next() else {
        return Ok(CsvTable::default());
    };
    let headers: Vec<String> = header_row
        .cells
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    let width = headers.len();
    let rows = records
        .map(|mut row| {
            row.cells.resize(width, String::new());
            row
        })
        .collect();
    Ok(CsvTable { headers, rows })
}

/// Blank cells become `None`.
pub(crate) fn optional_text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Parses a numeric bound cell; blank cells become `None`.
pub(crate) fn optional_number(
    value: &str,
    field: &str,
    row: &CsvRow,
    path: &Path,
) -> Result<Option<f64>> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .map(Some)
        .ok_or_else(|| IngestError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            row: row.line,
            path: path.to_path_buf(),
        })
}
