//! Display records and the ordered column set.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;

/// Insertion-ordered set of column names.
///
/// Columns are the union of keys seen across all rows, in first-seen order.
/// Rows may have heterogeneous keys, so this is data-dependent rather than a
/// fixed schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Columns {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl Columns {
    /// Create an empty column set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` unless it is already present. Returns `true` when added.
    pub fn push(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.names.push(name);
        true
    }

    /// Whether `name` is a known column.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Column names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<Vec<String>> for Columns {
    fn from(names: Vec<String>) -> Self {
        let mut columns = Self::new();
        for name in names {
            columns.push(name);
        }
        columns
    }
}

impl From<Columns> for Vec<String> {
    fn from(columns: Columns) -> Self {
        columns.names
    }
}

impl<S: Into<String>> FromIterator<S> for Columns {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut columns = Self::new();
        for name in iter {
            columns.push(name);
        }
        columns
    }
}

/// Convert a YAML mapping key to a column name.
///
/// Scalar keys are stringified the way they read in the document (`1`,
/// `true`, `null`). Collection and tagged keys have no column form.
#[must_use]
pub fn column_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

/// One row of the grid as the user sees and edits it.
///
/// Keys are column names, kept in insertion order. Cells written by the
/// projector are strings. A grid may hand back native values (numbers,
/// booleans, nulls, nested JSON), which reconstruction passes through.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DisplayRecord(Mapping);

impl DisplayRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell to a text value, replacing any previous value in place.
    pub fn set_text(&mut self, column: impl Into<String>, text: impl Into<String>) {
        self.0.insert(Value::String(column.into()), Value::String(text.into()));
    }

    /// Set a cell to an arbitrary value.
    pub fn set(&mut self, column: impl Into<String>, value: Value) {
        self.0.insert(Value::String(column.into()), value);
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// The cell as text, if it holds a string.
    #[must_use]
    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(Value::as_str)
    }

    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.0.remove(column)
    }

    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    /// Cells in insertion order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().filter_map(|(key, value)| key.as_str().map(|key| (key, value)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for DisplayRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Normalize keys so every cell is addressable by column name.
        let raw = Mapping::deserialize(deserializer)?;
        let mut record = Self::new();
        for (key, value) in raw {
            if let Some(column) = column_name(&key) {
                record.set(column, value);
            }
        }
        Ok(record)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DisplayRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (column, text) in iter {
            record.set_text(column, text);
        }
        record
    }
}
