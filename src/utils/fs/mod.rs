//! File system utilities.
//!
//! - [`atomic`]: temp-then-rename writes used for every document save
//! - [`dirs`]: directory creation helpers

pub mod atomic;
pub mod dirs;

pub use atomic::{atomic_write, safe_write};
pub use dirs::{ensure_dir, ensure_parent_dir};
