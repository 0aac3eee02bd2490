//! Per-column header filters.
//!
//! A filter term matches a record when the cell's text contains the needle,
//! compared case-insensitively. Terms combine with AND, and an empty needle
//! matches every record. Filtering only narrows what is displayed; saves
//! always see the full grid.

use crate::core::GridError;
use crate::grid::{Columns, DisplayRecord};
use crate::transducer::cell_text;
use std::str::FromStr;

/// One `column=text` filter term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTerm {
    pub column: String,
    needle: String,
}

impl FilterTerm {
    pub fn new(column: impl Into<String>, needle: &str) -> Self {
        Self {
            column: column.into(),
            needle: needle.to_lowercase(),
        }
    }

    fn matches(&self, record: &DisplayRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        record
            .get(&self.column)
            .map(|value| cell_text(value).to_lowercase().contains(&self.needle))
            .unwrap_or(false)
    }
}

impl FromStr for FilterTerm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((column, needle)) if !column.trim().is_empty() => {
                Ok(Self::new(column.trim(), needle))
            }
            _ => Err(format!("expected COLUMN=TEXT, got '{s}'")),
        }
    }
}

/// A set of filter terms applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilter {
    terms: Vec<FilterTerm>,
}

impl ColumnFilter {
    #[must_use]
    pub fn new(terms: Vec<FilterTerm>) -> Self {
        Self {
            terms,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Reject terms that name a column the grid does not have.
    pub fn validate(&self, columns: &Columns) -> Result<(), GridError> {
        match self.terms.iter().find(|term| !columns.contains(&term.column)) {
            Some(term) => Err(GridError::UnknownColumn {
                column: term.column.clone(),
            }),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn matches(&self, record: &DisplayRecord) -> bool {
        self.terms.iter().all(|term| term.matches(record))
    }
}
