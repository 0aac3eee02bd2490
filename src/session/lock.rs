//! Serializing saves of the same document.
//!
//! Two layers are held across the read-merge-write window of a save:
//!
//! - [`SaveLocks`]: one async mutex per document path, shared by every session
//!   in the process
//! - [`DocumentLock`]: an exclusive `fs4` lock on `.<file name>.yamlgrid.lock`
//!   next to the document, shared with other processes
//!
//! Lock files are left in place after release.

use anyhow::{Context, Result};
use dashmap::DashMap;
use fs4::fs_std::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

/// In-process registry of per-document save mutexes.
#[derive(Debug, Default)]
pub struct SaveLocks {
    locks: DashMap<PathBuf, Arc<Mutex<()>>>,
}

impl SaveLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by the whole process.
    pub fn global() -> &'static Self {
        static REGISTRY: OnceLock<SaveLocks> = OnceLock::new();
        REGISTRY.get_or_init(Self::new)
    }

    /// Wait for exclusive use of `document` within this process.
    pub async fn acquire(&self, document: &Path) -> OwnedMutexGuard<()> {
        let key = lock_key(document).await;
        let mutex = self.locks.entry(key).or_default().clone();
        mutex.lock_owned().await
    }

    /// Number of documents seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

/// Canonical path when the document exists, so `./a.yaml` and `a.yaml` share
/// one mutex.
async fn lock_key(document: &Path) -> PathBuf {
    match tokio::fs::canonicalize(document).await {
        Ok(path) => path,
        Err(_) => std::path::absolute(document).unwrap_or_else(|_| document.to_path_buf()),
    }
}

/// Cross-process exclusive lock for one document, released on drop.
#[derive(Debug)]
pub struct DocumentLock {
    file: File,
    path: PathBuf,
}

impl DocumentLock {
    /// Lock file used for `document`: `dir/doc.yaml` -> `dir/.doc.yaml.yamlgrid.lock`.
    #[must_use]
    pub fn lock_path(document: &Path) -> PathBuf {
        let name = document.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
        document.with_file_name(format!(".{name}.yamlgrid.lock"))
    }

    /// Block (off the async runtime) until the lock is held.
    ///
    /// # Errors
    ///
    /// Fails when the lock file cannot be created or locked.
    pub async fn acquire(document: &Path) -> Result<Self> {
        let lock_path = Self::lock_path(document);
        let lock_path_clone = lock_path.clone();

        let file = tokio::task::spawn_blocking(move || -> Result<File> {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&lock_path_clone)
                .with_context(|| {
                    format!("Failed to open lock file: {}", lock_path_clone.display())
                })?;

            file.lock_exclusive()
                .with_context(|| format!("Failed to lock {}", lock_path_clone.display()))?;

            Ok(file)
        })
        .await
        .context("Failed to spawn blocking task for lock acquisition")??;

        debug!("Acquired save lock {}", lock_path.display());
        Ok(Self {
            file,
            path: lock_path,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for DocumentLock {
    fn drop(&mut self) {
        #[allow(unstable_name_collisions)]
        if let Err(e) = self.file.unlock() {
            debug!("Failed to unlock {}: {}", self.path.display(), e);
        }
    }
}
