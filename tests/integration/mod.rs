//! Integration test suite for yamlgrid
//!
//! These tests drive the built `yamlgrid` binary against documents in a
//! temporary project directory.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **show**: Table, JSON and YAML rendering plus filters
//! - **save**: Saving grid payloads from files and stdin
//! - **edit**: `set` and `add-row`
//! - **check**: Type-change previews
//! - **config**: Configuration lookup and settings
//! - **error_scenarios**: Failures that must leave the document untouched

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod check;
mod config;
mod error_scenarios;
mod save;
mod show;
