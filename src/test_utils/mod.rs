//! Test utilities for yaml-grid
//!
//! - [`init_test_logging`]: one-time tracing setup that writes through the
//!   test harness
//! - [`DocumentFixture`]: sample YAML documents
//! - [`MemoryDocumentStore`]: a [`DocumentStore`](crate::session::DocumentStore)
//!   that never touches the filesystem and can be told to fail writes
//!
//! # Example
//!
//! ```rust,no_run
//! use yaml_grid::test_utils::{DocumentFixture, init_test_logging};
//!
//! init_test_logging(None);
//! let temp = tempfile::tempdir().unwrap();
//! let path = DocumentFixture::inventory().write_to(temp.path()).unwrap();
//! assert!(path.exists());
//! ```

pub mod fixtures;
pub mod store;

pub use fixtures::DocumentFixture;
pub use store::MemoryDocumentStore;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; without either, tests run
/// without a subscriber. Only the first call has an effect.
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
