//! Round-trip conversion between typed YAML rows and editable text cells.
//!
//! - [`project_rows`] / [`project`]: rows to display records plus columns
//! - [`reconstruct`]: edited display records back to typed rows
//! - [`type_changes`]: which cells an unedited save would re-type
//!
//! Both directions share the scalar rules in [`scalar`].
//!
//! # Example
//!
//! ```rust,no_run
//! use yaml_grid::document::DocumentRoot;
//! use yaml_grid::grid::Grid;
//! use yaml_grid::transducer::{project, reconstruct};
//!
//! let root = DocumentRoot::parse("tables:\n- {name: a, tags: [x, y]}\n- {name: b}\n", "doc.yaml")?;
//! let grid = Grid::from_projection(project(&root, "tables"));
//! let rows = reconstruct(grid.data());
//! assert_eq!(rows.len(), 2);
//! # Ok::<(), yaml_grid::core::GridError>(())
//! ```

mod projector;
mod reconstructor;
pub mod scalar;

pub use projector::{Projection, cell_text, project_rows};
pub use reconstructor::{CellKind, reconstruct, reconstruct_cell, reconstruct_record, reconstruct_text};
pub use scalar::kind_name;

use crate::document::DocumentRoot;
use serde_yaml::{Mapping, Value};

/// One typed table row.
pub type Row = Mapping;

/// Project the table section of a document.
#[must_use]
pub fn project(root: &DocumentRoot, tables_key: &str) -> Projection {
    project_rows(root.table_rows(tables_key))
}

/// A cell whose value would differ after an unedited save.
#[derive(Debug, Clone, PartialEq)]
pub struct CellChange {
    /// 1-based row number
    pub row: usize,
    pub column: String,
    pub before: Value,
    /// `None` when the key would be dropped
    pub after: Option<Value>,
}

/// Compare rows with their own projection-then-reconstruction.
///
/// Scalar cells usually survive unchanged; strings that look like numbers,
/// booleans or YAML, null values and multi-line strings do not.
#[must_use]
pub fn type_changes(rows: &[Value]) -> Vec<CellChange> {
    let projection = project_rows(rows);
    let mut changes = Vec::new();

    for (index, (row, record)) in rows.iter().zip(&projection.rows).enumerate() {
        let Value::Mapping(original) = row else {
            continue;
        };
        let rebuilt = reconstruct_record(record);
        for (key, before) in original {
            let Some(column) = crate::grid::column_name(key) else {
                continue;
            };
            let after = rebuilt.get(column.as_str()).cloned();
            if after.as_ref() != Some(before) {
                changes.push(CellChange {
                    row: index + 1,
                    column,
                    before: before.clone(),
                    after,
                });
            }
        }
    }
    changes
}
