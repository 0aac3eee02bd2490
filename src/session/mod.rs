//! One document opened as an editable grid.
//!
//! A [`PreviewSession`] loads a document once, lets the caller edit the grid
//! any number of times, and writes the grid back on [`PreviewSession::save`].
//! A save never trusts the copy taken at load time for anything but the rows:
//! it re-reads the document, keeps whatever top-level keys are on disk right
//! now, and replaces only the table.
//!
//! ```text
//! open:  read -> parse -> project -> Grid
//! save:  Grid -> reconstruct -> lock -> re-read -> merge -> serialize -> write
//! ```
//!
//! Writes are last-writer-wins: a change on disk since load is logged and
//! reported in [`SaveReport::changed_on_disk`] but does not stop the save.

mod lock;
mod notify;
mod store;

pub use lock::{DocumentLock, SaveLocks};
pub use notify::{Notice, NoticeLevel, Notifier, RecordingNotifier, TerminalNotifier};
pub use store::{DocumentStore, FsDocumentStore};

use crate::config::GridConfig;
use crate::core::GridError;
use crate::document::{self, DocumentRoot, MergeOutcome, fingerprint};
use crate::grid::Grid;
use crate::transducer::{CellChange, project, reconstruct, type_changes};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What a successful save wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveReport {
    pub rows: usize,
    pub columns: usize,
    /// The document on disk was unusable and its other keys were discarded.
    pub dropped_siblings: bool,
    /// The document changed on disk after it was loaded.
    pub changed_on_disk: bool,
}

/// An open document and its editable grid.
pub struct PreviewSession<S, N> {
    path: PathBuf,
    store: S,
    notifier: N,
    config: GridConfig,
    root: DocumentRoot,
    grid: Grid,
    fingerprint: String,
}

impl<S: DocumentStore, N: Notifier> PreviewSession<S, N> {
    /// Load `path` and project its table into a grid.
    ///
    /// # Errors
    ///
    /// Fails when the document is missing or unreadable, is not valid YAML,
    /// or has a scalar root. Nothing is written.
    pub async fn open(
        path: impl Into<PathBuf>,
        store: S,
        notifier: N,
        config: GridConfig,
    ) -> Result<Self> {
        let path = path.into();
        let doc_path = path.display().to_string();

        let text = store.read_text(&path).await?.ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Document not found: {doc_path}"),
            )
        })?;
        let root = DocumentRoot::parse(&text, &doc_path)?;

        if root.has_non_sequence_table(&config.tables_key) {
            let message = format!(
                "'{}' in {doc_path} is not a list; it will be replaced by the table on save",
                config.tables_key
            );
            warn!("{message}");
            notifier.warn(&message);
        }

        let odd_rows = root.non_mapping_rows(&config.tables_key);
        if !odd_rows.is_empty() {
            let numbers: Vec<String> = odd_rows.iter().map(ToString::to_string).collect();
            notifier.warn(&format!(
                "Row(s) {} in {doc_path} are not mappings; they show as empty and save as {{}}",
                numbers.join(", ")
            ));
        }

        let grid = Grid::from_projection(project(&root, &config.tables_key));
        info!(
            "Loaded {} rows and {} columns from {doc_path}",
            grid.len(),
            grid.columns().len()
        );

        Ok(Self {
            path,
            store,
            notifier,
            config,
            root,
            grid,
            fingerprint: fingerprint(&text),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The document as it was at load (or at the last save).
    #[must_use]
    pub fn document(&self) -> &DocumentRoot {
        &self.root
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Replace the grid, e.g. with an externally edited payload.
    pub fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Cells whose type an unedited save would change.
    #[must_use]
    pub fn type_changes(&self) -> Vec<CellChange> {
        type_changes(self.root.table_rows(&self.config.tables_key))
    }

    /// Write the grid back into the document.
    ///
    /// The outcome is also sent to the notifier: `Saved <path>` on success,
    /// `Failed to save YAML: <reason>` on failure. The grid is left untouched
    /// either way, so a failed save can be retried.
    ///
    /// # Errors
    ///
    /// - [`GridError::NoColumns`] when the grid has no columns
    /// - [`GridError::ShapeConflict`] when the document on disk is unusable
    ///   and the configured policy is to abort
    /// - [`GridError::WriteError`] when locking, re-reading or writing fails
    pub async fn save(&mut self) -> Result<SaveReport, GridError> {
        match self.save_inner().await {
            Ok(report) => {
                if report.dropped_siblings {
                    self.notifier.alert(&format!(
                        "{} could not be parsed; only the table was saved",
                        self.path.display()
                    ));
                }
                self.notifier.info(&format!("Saved {}", self.path.display()));
                Ok(report)
            }
            Err(error) => {
                self.notifier.error(&format!("Failed to save YAML: {error}"));
                Err(error)
            }
        }
    }

    async fn save_inner(&mut self) -> Result<SaveReport, GridError> {
        if self.grid.columns().is_empty() {
            return Err(GridError::NoColumns);
        }
        let doc_path = self.path.display().to_string();
        let write_error = |e: anyhow::Error| GridError::WriteError {
            path: doc_path.clone(),
            reason: format!("{e:#}"),
        };

        let rows = reconstruct(self.grid.data());
        let row_count = rows.len();
        debug!("Reconstructed {row_count} rows for {doc_path}");

        let _guard = SaveLocks::global().acquire(&self.path).await;
        let _file_lock = if self.config.lock_saves {
            Some(DocumentLock::acquire(&self.path).await.map_err(write_error)?)
        } else {
            None
        };

        let latest = self.store.read_text(&self.path).await.map_err(write_error)?;
        let changed_on_disk = latest.as_deref().map(fingerprint) != Some(self.fingerprint.clone());
        if changed_on_disk {
            info!("{doc_path} changed on disk since it was loaded; keeping its current keys");
        }

        let MergeOutcome {
            root,
            dropped_siblings,
        } = match latest {
            Some(text) => document::merge_latest(
                &text,
                &doc_path,
                rows,
                &self.config.tables_key,
                self.config.on_unparsable_latest,
            )?,
            None => {
                warn!("{doc_path} no longer exists; writing it again with the loaded shape");
                MergeOutcome {
                    root: document::reassemble(self.root.clone(), rows, &self.config.tables_key),
                    dropped_siblings: false,
                }
            }
        };

        let text = root.to_yaml()?;
        self.store.write_text(&self.path, &text).await.map_err(write_error)?;

        info!("Saved {row_count} rows to {doc_path}");
        self.fingerprint = fingerprint(&text);
        self.root = root;

        Ok(SaveReport {
            rows: row_count,
            columns: self.grid.columns().len(),
            dropped_siblings,
            changed_on_disk,
        })
    }
}
