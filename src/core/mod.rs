//! Core types for yaml-grid
//!
//! This module holds the error taxonomy shared by every layer of the editor.
//! Document-level failures are [`GridError`] values; the CLI turns them into
//! an [`ErrorContext`] through [`user_friendly_error`] before printing.
//!
//! # Propagation Policy
//!
//! - Per-cell failures are swallowed with a safe fallback and only logged
//! - Document-level failures abort the current load or save and are surfaced
//!   to the user, leaving both the file and the in-memory grid intact

pub mod error;

pub use error::{ErrorContext, GridError, user_friendly_error};
