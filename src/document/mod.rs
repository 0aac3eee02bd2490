//! Parsed YAML documents and their table section.
//!
//! A document root is either a bare sequence of rows, or a mapping whose
//! tables key (`tables` unless configured otherwise) holds the rows next to
//! arbitrary sibling keys. The shape is preserved on every save: a bare
//! sequence is written back as a bare sequence, and a mapping keeps every
//! sibling key.
//!
//! Parsing and serialization go through `serde_yaml`, which emits block-style
//! collections (only empty collections are written inline) and does not wrap
//! long scalars.

mod reassemble;

pub use reassemble::{MergeOutcome, merge_latest, reassemble};

use crate::core::GridError;
use crate::transducer::kind_name;
use serde_yaml::{Mapping, Value};
use sha2::{Digest, Sha256};

/// Key holding the rows when the root is a mapping.
pub const DEFAULT_TABLES_KEY: &str = "tables";

/// Top-level value of a grid document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentRoot {
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl DocumentRoot {
    /// Parse document text. `path` is used in error messages.
    ///
    /// An empty document (or an explicit null) is an empty mapping. Scalar
    /// roots are rejected.
    pub fn parse(text: &str, path: &str) -> Result<Self, GridError> {
        let value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_yaml::from_str::<Value>(text).map_err(|e| GridError::ParseError {
                path: path.to_string(),
                reason: e.to_string(),
            })?
        };
        Self::from_value(value, path)
    }

    pub fn from_value(value: Value, path: &str) -> Result<Self, GridError> {
        match value {
            Value::Sequence(rows) => Ok(Self::Sequence(rows)),
            Value::Mapping(mapping) => Ok(Self::Mapping(mapping)),
            Value::Null => Ok(Self::Mapping(Mapping::new())),
            other => Err(GridError::UnsupportedRoot {
                path: path.to_string(),
                kind: kind_name(&other).to_string(),
            }),
        }
    }

    /// The rows shown in the grid.
    ///
    /// The root itself for a sequence, the tables key for a mapping when it
    /// holds a sequence, and nothing otherwise.
    #[must_use]
    pub fn table_rows(&self, tables_key: &str) -> &[Value] {
        match self {
            Self::Sequence(rows) => rows,
            Self::Mapping(mapping) => match mapping.get(tables_key) {
                Some(Value::Sequence(rows)) => rows,
                _ => &[],
            },
        }
    }

    /// Whether a mapping root has a tables key that is not a sequence.
    ///
    /// Such a value is replaced by the grid's rows on save.
    #[must_use]
    pub fn has_non_sequence_table(&self, tables_key: &str) -> bool {
        match self {
            Self::Sequence(_) => false,
            Self::Mapping(mapping) => {
                matches!(mapping.get(tables_key), Some(value) if !value.is_sequence() && !value.is_null())
            }
        }
    }

    /// 1-based numbers of table rows that are neither mappings nor null.
    ///
    /// Those rows project as empty records and come back as `{}` on save.
    #[must_use]
    pub fn non_mapping_rows(&self, tables_key: &str) -> Vec<usize> {
        self.table_rows(tables_key)
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.is_mapping() && !row.is_null())
            .map(|(index, _)| index + 1)
            .collect()
    }

    #[must_use]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Top-level keys other than the tables key.
    #[must_use]
    pub fn sibling_count(&self, tables_key: &str) -> usize {
        match self {
            Self::Sequence(_) => 0,
            Self::Mapping(mapping) => {
                mapping.keys().filter(|key| key.as_str() != Some(tables_key)).count()
            }
        }
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Sequence(rows) => Value::Sequence(rows),
            Self::Mapping(mapping) => Value::Mapping(mapping),
        }
    }

    /// Serialize as block-style YAML.
    pub fn to_yaml(&self) -> Result<String, GridError> {
        let result = match self {
            Self::Sequence(rows) => serde_yaml::to_string(rows),
            Self::Mapping(mapping) => serde_yaml::to_string(mapping),
        };
        result.map_err(|e| GridError::Other {
            message: format!("Failed to serialize YAML: {e}"),
        })
    }
}

/// SHA-256 of document text, as `sha256:<hex>`.
///
/// Used to tell whether the file changed on disk between load and save.
#[must_use]
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("sha256:{}", hex::encode(hasher.finalize()))
}
