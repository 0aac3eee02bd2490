//! Edited display records back to typed rows.
//!
//! Each text cell is classified by an ordered list of checks, first match
//! wins:
//!
//! 1. [`CellKind::Empty`]: blank after trimming, the key is omitted
//! 2. [`CellKind::NestedParse`]: multi-line, or starts with `[`, `{`, `- `, `|`
//!    or `>`, parsed as YAML and kept as text if parsing fails
//! 3. [`CellKind::Boolean`]: exactly `true` or `false`
//! 4. [`CellKind::Numeric`]: `-?digits(.digits)?`
//! 5. [`CellKind::PlainString`]: everything else, trimmed
//!
//! The order matters. `true` never reaches the YAML parser, and `- 5` is a
//! one-element list rather than the number `-5`.
//!
//! This is a lossy reading that favours plain-text editing over exact types:
//! a string cell that reads `42` comes back as the integer 42, and a
//! multi-line plain string is re-read as YAML.

use super::Row;
use super::scalar::{looks_structured, parse_boolean, parse_numeric};
use crate::core::GridError;
use crate::grid::DisplayRecord;
use serde_yaml::Value;
use tracing::debug;

/// Classification of a text cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    NestedParse,
    Boolean,
    Numeric,
    PlainString,
}

impl CellKind {
    /// Classify cell text. Surrounding whitespace is ignored.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else if looks_structured(trimmed) {
            Self::NestedParse
        } else if parse_boolean(trimmed).is_some() {
            Self::Boolean
        } else if parse_numeric(trimmed).is_some() {
            Self::Numeric
        } else {
            Self::PlainString
        }
    }
}

/// Typed value for one text cell, or `None` when the key should be omitted.
#[must_use]
pub fn reconstruct_text(column: &str, text: &str) -> Option<Value> {
    let trimmed = text.trim();
    match CellKind::classify(trimmed) {
        CellKind::Empty => None,
        CellKind::NestedParse => match serde_yaml::from_str::<Value>(trimmed) {
            // A fragment of only comments carries no value.
            Ok(Value::Null) => None,
            Ok(value) => Some(value),
            Err(e) => {
                let error = GridError::CellReconstruction {
                    column: column.to_string(),
                    reason: e.to_string(),
                };
                debug!("{error}; keeping the text as a string");
                Some(Value::String(trimmed.to_string()))
            }
        },
        CellKind::Boolean => parse_boolean(trimmed).map(Value::Bool),
        CellKind::Numeric => parse_numeric(trimmed).map(Value::Number),
        CellKind::PlainString => Some(Value::String(trimmed.to_string())),
    }
}

/// Typed value for any cell. Non-text cells pass through; null is omitted.
#[must_use]
pub fn reconstruct_cell(column: &str, cell: &Value) -> Option<Value> {
    match cell {
        Value::String(text) => reconstruct_text(column, text),
        Value::Null => None,
        other => Some(other.clone()),
    }
}

/// Rebuild one row, keeping the record's column order.
#[must_use]
pub fn reconstruct_record(record: &DisplayRecord) -> Row {
    let mut row = Row::new();
    for (column, cell) in record.cells() {
        if let Some(value) = reconstruct_cell(column, cell) {
            row.insert(Value::String(column.to_string()), value);
        }
    }
    row
}

/// Rebuild every row. Never fails; bad cells fall back to their text.
#[must_use]
pub fn reconstruct(records: &[DisplayRecord]) -> Vec<Row> {
    records.iter().map(reconstruct_record).collect()
}
