//! Error handling for yaml-grid
//!
//! This module provides the error types and user-facing error reporting for the
//! grid editor. The error system follows two principles:
//! 1. **Strongly-typed errors** for the failure modes a caller can act on
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`GridError`] - Enumerated error types for every document-level failure
//! - [`ErrorContext`] - Wrapper that adds details and suggestions for display
//!
//! # Error Categories
//!
//! - **Loading**: [`GridError::ParseError`], [`GridError::UnsupportedRoot`]
//! - **Saving**: [`GridError::WriteError`], [`GridError::ShapeConflict`], [`GridError::NoColumns`]
//! - **Editing**: [`GridError::CellOutOfRange`], [`GridError::UnknownColumn`], [`GridError::GridPayloadError`]
//! - **Configuration**: [`GridError::ConfigError`]
//!
//! Per-cell reconstruction failures ([`GridError::CellReconstruction`]) are never
//! returned to callers. The reconstructor recovers from them by keeping the raw
//! text and only logs the error.
//!
//! # Examples
//!
//! ```rust,no_run
//! use yaml_grid::core::{GridError, user_friendly_error};
//!
//! let error = GridError::ParseError {
//!     path: "data.yaml".to_string(),
//!     reason: "did not find expected key".to_string(),
//! };
//! let context = user_friendly_error(anyhow::Error::from(error));
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for grid operations
///
/// Each variant names the document (or cell) involved so the message can be
/// shown to the user without further context.
#[derive(Error, Debug)]
pub enum GridError {
    /// The document text is not valid YAML
    ///
    /// Raised at load time, and at save time when re-reading the latest
    /// document. Aborts the action without touching the file.
    #[error("Invalid YAML in {path}: {reason}")]
    ParseError {
        /// Document path
        path: String,
        /// Parser message
        reason: String,
    },

    /// The document root is neither a sequence nor a mapping
    #[error("Unsupported document root in {path}: expected a sequence or a mapping, found {kind}")]
    UnsupportedRoot {
        /// Document path
        path: String,
        /// The kind of value found at the root
        kind: String,
    },

    /// A single cell failed structured parsing
    ///
    /// Recovered locally by keeping the trimmed text as a plain string.
    #[error("Cell '{column}' could not be parsed as YAML: {reason}")]
    CellReconstruction {
        /// Column of the failing cell
        column: String,
        /// Parser message
        reason: String,
    },

    /// Writing the reconstructed document failed
    #[error("Failed to write {path}: {reason}")]
    WriteError {
        /// Document path
        path: String,
        /// Underlying I/O message
        reason: String,
    },

    /// The latest on-disk document could not be used while merging sibling keys
    #[error("Cannot merge into {path}: the document on disk is unusable ({reason})")]
    ShapeConflict {
        /// Document path
        path: String,
        /// Parser message
        reason: String,
    },

    /// The edited grid payload could not be read
    #[error("Invalid grid payload in {path}: {reason}")]
    GridPayloadError {
        /// Payload path (`-` for stdin)
        path: String,
        /// Decoder message
        reason: String,
    },

    /// A save was requested for a grid without columns
    #[error("The grid has no columns, nothing to save")]
    NoColumns,

    /// A filter or lookup named a column the grid does not have
    #[error("Unknown column '{column}'")]
    UnknownColumn {
        /// Requested column
        column: String,
    },

    /// An edit addressed a row that does not exist
    #[error("Row {row} is out of range (the grid has {rows} rows)")]
    CellOutOfRange {
        /// 1-based row requested
        row: usize,
        /// Number of rows in the grid
        rows: usize,
    },

    /// Configuration file problems
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl Clone for GridError {
    fn clone(&self) -> Self {
        match self {
            Self::ParseError {
                path,
                reason,
            } => Self::ParseError {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::UnsupportedRoot {
                path,
                kind,
            } => Self::UnsupportedRoot {
                path: path.clone(),
                kind: kind.clone(),
            },
            Self::CellReconstruction {
                column,
                reason,
            } => Self::CellReconstruction {
                column: column.clone(),
                reason: reason.clone(),
            },
            Self::WriteError {
                path,
                reason,
            } => Self::WriteError {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::ShapeConflict {
                path,
                reason,
            } => Self::ShapeConflict {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::GridPayloadError {
                path,
                reason,
            } => Self::GridPayloadError {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::NoColumns => Self::NoColumns,
            Self::UnknownColumn {
                column,
            } => Self::UnknownColumn {
                column: column.clone(),
            },
            Self::CellOutOfRange {
                row,
                rows,
            } => Self::CellOutOfRange {
                row: *row,
                rows: *rows,
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            // io::Error is not Clone
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// When displayed, errors show:
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context about the error in yellow (optional)
/// 3. **Suggestion**: Actionable steps to resolve the issue in green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use yaml_grid::core::{GridError, ErrorContext};
///
/// let context = ErrorContext::new(GridError::NoColumns)
///     .with_suggestion("Add a column with 'yamlgrid set' before saving")
///     .with_details("An empty grid has no cells to write back");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: GridError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: GridError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`GridError`] anywhere in the error chain, then [`std::io::Error`],
/// and falls back to a generic message that includes the full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(grid_error) = error.chain().find_map(|e| e.downcast_ref::<GridError>()) {
        return create_error_context(grid_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(GridError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check the file permissions of the document and its directory")
                .with_details("yamlgrid needs read access to load and write access to save");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(GridError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check that the file exists and the path is correct");
            }
            _ => {}
        }
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(GridError::Other {
        message,
    })
}

/// Attach tailored suggestions to each [`GridError`] variant
fn create_error_context(error: GridError) -> ErrorContext {
    match &error {
        GridError::ParseError { path, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Fix the YAML syntax in {path}. Common issues: inconsistent indentation, tabs, unbalanced quotes or brackets"
            ))
            .with_details("The file was not modified"),

        GridError::UnsupportedRoot { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Use a document whose root is a list of rows, or a mapping with a 'tables' list")
            .with_details("The table key can be changed with 'tables_key' in the configuration file"),

        GridError::WriteError { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Check disk space and permissions, then run the save again")
            .with_details("Your edits were not lost: the grid payload is unchanged and can be saved again"),

        GridError::ShapeConflict { path, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Fix the YAML in {path} and save again, or set on_unparsable_latest = \"drop-siblings\" to overwrite it"
            ))
            .with_details("Saving now would discard every key next to the table, so the save was aborted"),

        GridError::GridPayloadError { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Provide JSON as produced by 'yamlgrid show --format json', or a JSON array of records")
            .with_details("Expected an object with 'columns' and 'rows', or an array of objects"),

        GridError::NoColumns => ErrorContext::new(error.clone())
            .with_suggestion("Add at least one column with 'yamlgrid set --column <name>'"),

        GridError::UnknownColumn { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Run 'yamlgrid show <file>' to list the available columns"),

        GridError::CellOutOfRange { rows, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!("Rows are numbered from 1 to {rows}. Use 'yamlgrid add-row' to append one")),

        GridError::ConfigError { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Check the configuration file with 'yamlgrid config show'"),

        _ => ErrorContext::new(error.clone()),
    }
}
