//! The editable grid.
//!
//! [`Grid`] plays the part of the spreadsheet widget: it holds the column list
//! and one [`DisplayRecord`] per row, supports per-cell text edits, appending
//! blank rows and header filters, and reads back every record for saving.
//!
//! Every record in a grid carries every column, in column order. Missing
//! cells are padded with an empty string, which the reconstructor treats as
//! absent, so padding never adds keys to the saved document.
//!
//! # Payload
//!
//! Grids travel as JSON between `yamlgrid show --format json` and
//! `yamlgrid save --grid`:
//!
//! ```json
//! { "columns": ["name", "tags"], "rows": [{ "name": "a", "tags": "- x\n- y" }] }
//! ```
//!
//! A bare array of records is accepted as well; columns are then derived from
//! the records.

pub mod filter;
mod record;

pub use filter::{ColumnFilter, FilterTerm};
pub use record::{Columns, DisplayRecord, column_name};

use crate::core::GridError;
use crate::transducer::Projection;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Wire form of a grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridPayload {
    #[serde(default)]
    pub columns: Columns,
    #[serde(default)]
    pub rows: Vec<DisplayRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PayloadShape {
    Grid(GridPayload),
    Records(Vec<DisplayRecord>),
}

impl GridPayload {
    /// Decode a payload; `source` names where the text came from in errors.
    pub fn from_json(text: &str, source: &str) -> Result<Self, GridError> {
        let shape: PayloadShape =
            serde_json::from_str(text).map_err(|e| GridError::GridPayloadError {
                path: source.to_string(),
                reason: e.to_string(),
            })?;
        Ok(match shape {
            PayloadShape::Grid(payload) => payload,
            PayloadShape::Records(rows) => Self {
                columns: Columns::new(),
                rows,
            },
        })
    }

    pub fn to_json(&self) -> Result<String, GridError> {
        serde_json::to_string_pretty(self).map_err(|e| GridError::Other {
            message: format!("Failed to encode grid payload: {e}"),
        })
    }
}

/// Columns plus padded records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    columns: Columns,
    records: Vec<DisplayRecord>,
}

impl Grid {
    /// Build a grid from the projector's output.
    #[must_use]
    pub fn from_projection(projection: Projection) -> Self {
        Self::build(projection.columns, projection.rows)
    }

    /// Build a grid from an edited payload.
    ///
    /// Columns listed in the payload come first; keys that only appear in
    /// records are appended in first-seen order.
    #[must_use]
    pub fn from_payload(payload: GridPayload) -> Self {
        Self::build(payload.columns, payload.rows)
    }

    fn build(mut columns: Columns, records: Vec<DisplayRecord>) -> Self {
        for record in &records {
            for (column, _) in record.cells() {
                columns.push(column);
            }
        }
        let mut grid = Self {
            columns,
            records,
        };
        grid.pad();
        grid
    }

    /// Rebuild every record in column order, filling gaps with `""`.
    fn pad(&mut self) {
        for record in &mut self.records {
            let mut padded = DisplayRecord::new();
            for column in self.columns.iter() {
                let value =
                    record.remove(column).unwrap_or_else(|| Value::String(String::new()));
                padded.set(column, value);
            }
            *record = padded;
        }
    }

    #[must_use]
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Every record, including those hidden by a filter.
    #[must_use]
    pub fn data(&self) -> &[DisplayRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record with every column empty. Returns its 0-based index.
    pub fn add_blank_row(&mut self) -> usize {
        let record: DisplayRecord = self.columns.iter().map(|column| (column, "")).collect();
        self.records.push(record);
        self.records.len() - 1
    }

    /// Replace the text of one cell (0-based row).
    ///
    /// An unknown column is added to the grid and padded into every record.
    pub fn set_cell(
        &mut self,
        row: usize,
        column: &str,
        text: impl Into<String>,
    ) -> Result<(), GridError> {
        if row >= self.records.len() {
            return Err(GridError::CellOutOfRange {
                row: row + 1,
                rows: self.records.len(),
            });
        }
        if self.columns.push(column) {
            for record in &mut self.records {
                record.set_text(column, "");
            }
        }
        self.records[row].set_text(column, text);
        Ok(())
    }

    /// Records passing `filter`, with their 0-based row index.
    pub fn filtered<'a>(
        &'a self,
        filter: &'a ColumnFilter,
    ) -> impl Iterator<Item = (usize, &'a DisplayRecord)> + 'a {
        self.records.iter().enumerate().filter(move |(_, record)| filter.matches(record))
    }

    #[must_use]
    pub fn to_payload(&self) -> GridPayload {
        GridPayload {
            columns: self.columns.clone(),
            rows: self.records.clone(),
        }
    }
}
