//! Cross-platform utilities
//!
//! - [`fs`] - Atomic writes and directory helpers
//! - [`platform`] - Home directory lookup and path expansion

pub mod fs;
pub mod platform;

pub use fs::{atomic_write, ensure_dir, safe_write};
pub use platform::{get_home_dir, is_windows, resolve_path};
