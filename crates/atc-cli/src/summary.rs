use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use atc_model::{FileOutcome, FileStatus};

use crate::types::BatchResult;

pub fn print_summary(result: &BatchResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Schema"),
        header_cell("Status"),
        header_cell("Findings"),
        header_cell("Report"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    let mut total_findings = 0usize;
    for outcome in &result.files {
        total_findings += outcome.findings;
        table.add_row(vec![
            file_cell(&outcome.path),
            schema_cell(outcome),
            status_cell(outcome.status),
            findings_cell(outcome),
            report_cell(outcome.report_path.as_deref()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} files", result.files.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} ok / {} failed / {} unknown",
            result.validated, result.failed, result.unknown
        ))
        .add_attribute(Attribute::Bold),
        count_cell(total_findings, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    let errors: Vec<&FileOutcome> = result
        .files
        .iter()
        .filter(|outcome| outcome.error.is_some())
        .collect();
    if !errors.is_empty() {
        eprintln!("Errors:");
        for outcome in errors {
            if let Some(error) = &outcome.error {
                eprintln!("- {error}");
            }
        }
    }
}

pub fn print_json(result: &BatchResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("serialize batch summary")?;
    println!("{json}");
    Ok(())
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::LowerBoundary(Width::Fixed(11)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
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

fn file_cell(path: &Path) -> Cell {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn schema_cell(outcome: &FileOutcome) -> Cell {
    match outcome.schema {
        Some(schema) => Cell::new(schema.as_str()),
        None => dim_cell("-"),
    }
}

fn status_cell(status: FileStatus) -> Cell {
    match status {
        FileStatus::Validated => Cell::new(status.as_str()).fg(Color::Green),
        FileStatus::Failed => Cell::new(status.as_str())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        FileStatus::UnknownType => Cell::new(status.as_str()).fg(Color::Yellow),
        FileStatus::Ready => dim_cell(status.as_str()),
    }
}

fn findings_cell(outcome: &FileOutcome) -> Cell {
    if outcome.status == FileStatus::Validated {
        count_cell(outcome.findings, Color::Yellow)
    } else {
        dim_cell("-")
    }
}

fn report_cell(path: Option<&Path>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
