//! Putting reconstructed rows back into the document they came from.

use super::DocumentRoot;
use crate::config::UnparsableLatestPolicy;
use crate::core::GridError;
use crate::transducer::Row;
use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

/// Result of merging rows into the latest on-disk document.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub root: DocumentRoot,
    /// True when the latest document could not be read and its sibling keys
    /// were discarded.
    pub dropped_siblings: bool,
}

/// Replace the table section of `latest` with `rows`.
///
/// A sequence root is replaced wholesale. A mapping root keeps every key and
/// its order; the tables key is overwritten in place, or appended when absent.
#[must_use]
pub fn reassemble(latest: DocumentRoot, rows: Vec<Row>, tables_key: &str) -> DocumentRoot {
    let rows: Vec<Value> = rows.into_iter().map(Value::Mapping).collect();
    match latest {
        DocumentRoot::Sequence(_) => DocumentRoot::Sequence(rows),
        DocumentRoot::Mapping(mut mapping) => {
            let key = Value::String(tables_key.to_string());
            if let Some(slot) = mapping.get_mut(&key) {
                *slot = Value::Sequence(rows);
            } else {
                mapping.insert(key, Value::Sequence(rows));
            }
            DocumentRoot::Mapping(mapping)
        }
    }
}

/// Parse the latest document text and reassemble `rows` into it.
///
/// When the latest text cannot be used as a document root (invalid YAML or a
/// scalar root) `policy` decides: [`UnparsableLatestPolicy::Abort`] fails with
/// [`GridError::ShapeConflict`], [`UnparsableLatestPolicy::DropSiblings`]
/// writes the rows under the tables key of a fresh mapping.
pub fn merge_latest(
    latest_text: &str,
    path: &str,
    rows: Vec<Row>,
    tables_key: &str,
    policy: UnparsableLatestPolicy,
) -> Result<MergeOutcome, GridError> {
    match DocumentRoot::parse(latest_text, path) {
        Ok(latest) => {
            debug!(
                "Merging {} rows into {} root of {}",
                rows.len(),
                if latest.is_sequence() { "sequence" } else { "mapping" },
                path
            );
            Ok(MergeOutcome {
                root: reassemble(latest, rows, tables_key),
                dropped_siblings: false,
            })
        }
        Err(error) => match policy {
            UnparsableLatestPolicy::Abort => Err(GridError::ShapeConflict {
                path: path.to_string(),
                reason: error.to_string(),
            }),
            UnparsableLatestPolicy::DropSiblings => {
                warn!("{error}; saving the table without the other top-level keys");
                Ok(MergeOutcome {
                    root: reassemble(DocumentRoot::Mapping(Mapping::new()), rows, tables_key),
                    dropped_siblings: true,
                })
            }
        },
    }
}
