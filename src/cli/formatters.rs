//! Rendering grids for the terminal.
//!
//! All renderers return plain strings; color is applied by the caller when
//! printing.

use anyhow::Result;
use clap::ValueEnum;
use serde_yaml::{Mapping, Value};

use crate::grid::{ColumnFilter, DisplayRecord, Grid};
use crate::transducer::cell_text;

/// Shown instead of a table when there is nothing to display.
pub const PLACEHOLDER: &str = "No data";

/// Widest a table cell may get before it is cut with `…`.
const MAX_CELL_WIDTH: usize = 40;

/// Marker standing in for line breaks inside table cells.
const LINE_BREAK: &str = "⏎";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// Grid payload accepted by `save --grid`
    Json,
    /// Display records as YAML
    Yaml,
}

/// A rendered table: the header line, the separator and the body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub header: String,
    pub separator: String,
    pub lines: Vec<String>,
    pub footer: String,
}

/// Render the rows of `grid` that pass `filter`, or `None` when there are no
/// columns or no rows at all.
#[must_use]
pub fn render_table(grid: &Grid, filter: &ColumnFilter) -> Option<RenderedTable> {
    if grid.columns().is_empty() || grid.is_empty() {
        return None;
    }

    let rows: Vec<(usize, Vec<String>)> = grid
        .filtered(filter)
        .map(|(index, record)| (index + 1, row_cells(grid, record)))
        .collect();

    let number_width = grid.len().to_string().len().max(1);
    let mut widths: Vec<usize> = grid.columns().iter().map(display_width).collect();
    for (_, cells) in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(display_width(cell));
        }
    }

    let header_cells: Vec<String> = grid.columns().iter().map(str::to_string).collect();
    let header = join_line("#", number_width, &header_cells, &widths);
    let separator = "-".repeat(display_width(&header));
    let lines = rows
        .iter()
        .map(|(number, cells)| join_line(&number.to_string(), number_width, cells, &widths))
        .collect();

    let footer = if filter.is_empty() {
        format!("{} rows", grid.len())
    } else {
        format!("{} of {} rows", rows.len(), grid.len())
    };

    Some(RenderedTable {
        header,
        separator,
        lines,
        footer,
    })
}

/// The full grid as a JSON payload. Filters never apply here, so the output
/// can be edited and saved back without losing rows.
pub fn render_json(grid: &Grid) -> Result<String> {
    Ok(grid.to_payload().to_json()?)
}

/// The rows passing `filter` as a YAML list of text records.
pub fn render_yaml(grid: &Grid, filter: &ColumnFilter) -> Result<String> {
    let records: Vec<Value> = grid
        .filtered(filter)
        .map(|(_, record)| {
            let mapping: Mapping = record
                .cells()
                .map(|(column, value)| (Value::from(column), Value::from(cell_text(value))))
                .collect();
            Value::Mapping(mapping)
        })
        .collect();
    Ok(serde_yaml::to_string(&records)?)
}

fn row_cells(grid: &Grid, record: &DisplayRecord) -> Vec<String> {
    grid.columns()
        .iter()
        .map(|column| one_line(&record.get(column).map(cell_text).unwrap_or_default()))
        .collect()
}

/// Flatten a cell onto one line and cut it to [`MAX_CELL_WIDTH`].
fn one_line(text: &str) -> String {
    let flat = text.replace("\r\n", LINE_BREAK).replace('\n', LINE_BREAK);
    if flat.chars().count() <= MAX_CELL_WIDTH {
        return flat;
    }
    let mut cut: String = flat.chars().take(MAX_CELL_WIDTH - 1).collect();
    cut.push('…');
    cut
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

fn join_line(number: &str, number_width: usize, cells: &[String], widths: &[usize]) -> String {
    let mut line = format!("{number:>number_width$}");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str("  ");
        line.push_str(cell);
        line.push_str(&" ".repeat(width - display_width(cell)));
    }
    line.trim_end().to_string()
}
