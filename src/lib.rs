//! yaml-grid - edit the table inside a YAML document as a grid
//!
//! A YAML document holds a list of records, either as its root sequence or
//! under a `tables` key of a root mapping. yaml-grid projects those records
//! into a rectangular grid of text cells, lets the grid be edited, and
//! reconstructs typed YAML values from the edited text on save, splicing the
//! rows back into the latest version of the file without touching any other
//! top-level key.
//!
//! # Pipeline
//!
//! ```text
//! document text ─parse─▶ DocumentRoot ─project─▶ Grid (text cells)
//!                                                   │ edits
//! document text ◀─write── DocumentRoot ◀─merge── rows ◀─reconstruct
//! ```
//!
//! # Core Modules
//!
//! - [`document`] - Parsing the root, locating the table, and reassembling
//!   edited rows into the latest document
//! - [`transducer`] - The projector (values to cell text) and the
//!   reconstructor (cell text back to typed values)
//! - [`grid`] - Column order, display records, filters and the JSON payload
//! - [`session`] - Load/edit/save lifecycle, save locking, status notices
//! - [`config`] - `~/.yamlgrid/config.toml` settings
//! - [`cli`] - The `yamlgrid` command-line interface
//! - [`core`] - Error types and user-facing error context
//! - [`utils`] - Atomic file writes and path handling
//!
//! # Typing Rules
//!
//! Edited cell text is read back in order:
//!
//! 1. Text that looks like a YAML list or mapping is parsed as YAML
//! 2. `true` and `false` become booleans
//! 3. Text of the form `-12` or `3.5` becomes a number
//! 4. Anything else stays a string, and an empty cell omits the key
//!
//! A cell that looks structured but fails to parse is kept as its raw text.
//! Typing is lossy for values whose text reads as another type: a quoted
//! `'42'` is saved as the number 42. `yamlgrid check` lists such cells.
//!
//! # Example
//!
//! ```rust,no_run
//! use yaml_grid::config::GridConfig;
//! use yaml_grid::session::{FsDocumentStore, PreviewSession, TerminalNotifier};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut session = PreviewSession::open(
//!     "inventory.yaml",
//!     FsDocumentStore,
//!     TerminalNotifier::new(false),
//!     GridConfig::default(),
//! )
//! .await?;
//!
//! session.grid_mut().set_cell(0, "count", "7")?;
//! let report = session.save().await?;
//! println!("saved {} rows", report.rows);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod document;
pub mod grid;
pub mod session;
pub mod transducer;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
