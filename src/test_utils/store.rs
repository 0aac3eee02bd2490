//! In-memory document store.

use crate::session::DocumentStore;
use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Documents held in memory. Clones share the same documents, so a test can
/// change the "disk" behind an open session.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocumentStore {
    documents: Arc<Mutex<HashMap<PathBuf, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(path: impl Into<PathBuf>, text: &str) -> Self {
        let store = Self::new();
        store.insert(path, text);
        store
    }

    pub fn insert(&self, path: impl Into<PathBuf>, text: &str) {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), text.to_string());
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        self.documents.lock().unwrap_or_else(PoisonError::into_inner).remove(path.as_ref());
    }

    pub fn document(&self, path: impl AsRef<Path>) -> Option<String> {
        self.documents.lock().unwrap_or_else(PoisonError::into_inner).get(path.as_ref()).cloned()
    }

    /// Make every following write fail until switched off again.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl DocumentStore for MemoryDocumentStore {
    async fn read_text(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.document(path))
    }

    async fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(std::io::Error::other("disk full").into());
        }
        self.insert(path, text);
        Ok(())
    }
}
