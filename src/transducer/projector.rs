//! Typed rows to display records.

use super::scalar::{kind_name, scalar_text};
use crate::grid::{Columns, DisplayRecord, column_name};
use serde_yaml::Value;
use tracing::{debug, warn};

/// Display records plus the ordered union of their columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    pub columns: Columns,
    /// One record per row, holding only the keys that row has.
    pub rows: Vec<DisplayRecord>,
}

/// Project table rows into display records.
///
/// Never fails: a cell that cannot be rendered degrades to a best-effort
/// string so the rest of the table still renders.
#[must_use]
pub fn project_rows(rows: &[Value]) -> Projection {
    let mut projection = Projection::default();

    for (index, row) in rows.iter().enumerate() {
        let mut record = DisplayRecord::new();
        match row {
            Value::Mapping(mapping) => {
                for (key, value) in mapping {
                    let Some(column) = column_name(key) else {
                        warn!("Skipping non-scalar key in row {}", index + 1);
                        continue;
                    };
                    projection.columns.push(column.as_str());
                    record.set_text(column, cell_text(value));
                }
            }
            Value::Null => {}
            other => {
                warn!(
                    "Row {} is a {}, not a mapping; showing it as empty",
                    index + 1,
                    kind_name(other)
                );
            }
        }
        projection.rows.push(record);
    }

    debug!(
        "Projected {} rows into {} columns",
        projection.rows.len(),
        projection.columns.len()
    );
    projection
}

/// Render one cell value as editable text.
///
/// Scalars use their canonical text, null is empty, and collections are
/// dumped as block-style YAML with trailing whitespace trimmed.
#[must_use]
pub fn cell_text(value: &Value) -> String {
    if let Some(text) = scalar_text(value) {
        return text;
    }
    match serde_yaml::to_string(value) {
        Ok(dumped) => dumped.trim_end().to_string(),
        Err(e) => {
            debug!("Falling back to plain rendering for a cell: {e}");
            fallback_text(value)
        }
    }
}

fn fallback_text(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"))
}
