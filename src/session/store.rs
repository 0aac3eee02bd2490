//! Reading and writing document text.

use crate::utils::fs::safe_write;
use anyhow::{Context, Result};
use std::future::Future;
use std::path::{Path, PathBuf};

/// Access to the document text a session works on.
///
/// `read_text` returns `Ok(None)` when the document does not exist.
pub trait DocumentStore: Send + Sync {
    fn read_text(&self, path: &Path) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Replace the whole document. Readers see either the old or the new
    /// text, never a mix.
    fn write_text(&self, path: &Path, text: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Documents on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocumentStore;

impl DocumentStore for FsDocumentStore {
    async fn read_text(&self, path: &Path) -> Result<Option<String>> {
        match tokio::fs::read_to_string(path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    async fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        let path: PathBuf = path.to_path_buf();
        let text = text.to_string();
        tokio::task::spawn_blocking(move || safe_write(&path, &text))
            .await
            .context("Failed to spawn blocking task for document write")?
    }
}
