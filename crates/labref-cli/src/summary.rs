use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use serde::Serialize;

use labref_cli::report::{Report, ReportRow};
use labref_model::{RangeDescriptor, RangeStatus, Rgb};
use labref_range::presentation_for;

use crate::types::ClassifiedValue;

pub fn print_parse(text: &str, descriptor: Option<&RangeDescriptor>, json: bool) -> Result<()> {
    if json {
        return print_json(&descriptor);
    }
    let Some(range) = descriptor else {
        println!("no structured range in {text:?}");
        return Ok(());
    };
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Kind"),
        Cell::new(range.kind()).fg(Color::Blue),
    ]);
    table.add_row(vec![Cell::new("Min"), optional_number_cell(range.min())]);
    table.add_row(vec![Cell::new("Max"), optional_number_cell(range.max())]);
    table.add_row(vec![Cell::new("Canonical"), Cell::new(range)]);
    table.add_row(vec![Cell::new("Text"), Cell::new(range.text())]);
    println!("{table}");
    Ok(())
}

pub fn print_classifications(
    descriptor: Option<&RangeDescriptor>,
    values: &[ClassifiedValue],
    json: bool,
) -> Result<()> {
    if json {
        return print_json(&values);
    }
    match descriptor {
        Some(range) => println!("Reference: {range}"),
        None => println!("Reference: no structured range (all values NORMAL)"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Value"),
        header_cell("Number"),
        header_cell("Status"),
        header_cell("Colour"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for classified in values {
        table.add_row(vec![
            Cell::new(&classified.value),
            optional_number_cell(classified.measurement),
            status_cell(Some(classified.status)),
            dim_cell(classified.presentation.foreground.to_hex()),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn print_report(report: &Report, json: bool) -> Result<()> {
    if json {
        return print_json(report);
    }
    if let Some(patient) = &report.patient {
        let name = patient.name.as_deref().unwrap_or("-");
        let sex = patient
            .sex
            .map_or_else(|| "-".to_string(), |sex| sex.to_string());
        let age = patient
            .age
            .map_or_else(|| "-".to_string(), |age| age.to_string());
        println!("Patient: {name} (sex: {sex}, age: {age})");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Test"),
        header_cell("Result"),
        header_cell("Unit"),
        header_cell("Reference"),
        header_cell("Status"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for row in &report.rows {
        table.add_row(report_row_cells(row));
    }
    println!("{table}");
    print_totals(report);
    Ok(())
}

fn report_row_cells(row: &ReportRow) -> Vec<Cell> {
    let value = if row.value.is_empty() {
        dim_cell("-")
    } else {
        match row.status {
            Some(status) => styled_cell(&row.value, status),
            None => Cell::new(&row.value),
        }
    };
    vec![
        Cell::new(&row.code).fg(Color::Blue),
        Cell::new(&row.name),
        value,
        dim_cell(&row.unit),
        Cell::new(&row.reference),
        status_cell(row.status),
    ]
}

fn print_totals(report: &Report) {
    let summary = &report.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Status"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for status in RangeStatus::ALL {
        let count = summary.count(status);
        let count_cell = if count > 0 {
            styled_cell(count, status)
        } else {
            dim_cell(count)
        };
        table.add_row(vec![status_cell(Some(status)), count_cell]);
    }
    table.add_row(vec![
        Cell::new("BLANK").fg(Color::DarkGrey),
        dim_cell(summary.total - summary.with_value),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_statuses() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Status"),
        header_cell("Foreground"),
        header_cell("Background"),
        header_cell("Bold"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for status in RangeStatus::ALL {
        let presentation = presentation_for(status);
        let background = match presentation.background {
            Some(rgb) => Cell::new(rgb.to_hex()).bg(terminal_color(rgb)),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            status_cell(Some(status)),
            Cell::new(presentation.foreground.to_hex()).fg(terminal_color(presentation.foreground)),
            background,
            Cell::new(if presentation.bold { "yes" } else { "no" }),
        ]);
    }
    println!("{table}");
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{rendered}");
    Ok(())
}

fn terminal_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Cell coloured with the status palette, bold when flagged.
fn styled_cell<T: ToString>(content: T, status: RangeStatus) -> Cell {
    let presentation = presentation_for(status);
    let mut cell = Cell::new(content).fg(terminal_color(presentation.foreground));
    if let Some(background) = presentation.background {
        cell = cell.bg(terminal_color(background));
    }
    if presentation.bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

fn status_cell(status: Option<RangeStatus>) -> Cell {
    match status {
        Some(status) => styled_cell(status.as_str(), status),
        None => dim_cell("-"),
    }
}

fn optional_number_cell(value: Option<f64>) -> Cell {
    match value {
        Some(number) => Cell::new(number),
        None => dim_cell("-"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
