//! Preview what an unedited save would change.
//!
//! Reconstruction reads cell text back with a few typing rules, so a save can
//! change values nobody edited: a quoted `'42'` becomes the number 42, a null
//! becomes an absent key. `check` lists those cells without writing anything.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde_yaml::Value;
use std::path::PathBuf;

use super::CliConfig;
use super::common::{CommandExecutor, open_session};
use crate::config::GridConfig;
use crate::transducer::{CellChange, kind_name};

/// Command to report cells whose type would change on save.
#[derive(Args)]
pub struct CheckCommand {
    /// YAML document to check
    file: PathBuf,
}

impl CommandExecutor for CheckCommand {
    async fn execute_with_config(self, config: GridConfig, cli: CliConfig) -> Result<()> {
        let session = open_session(self.file, config, &cli).await?;
        let changes = session.type_changes();

        if changes.is_empty() {
            println!("{}", "No cells change on save".green());
            return Ok(());
        }

        for change in &changes {
            println!("{}", describe_change(change));
        }
        println!(
            "{}",
            format!("{} cells would change on save", changes.len()).yellow()
        );
        Ok(())
    }
}

/// One line per change: `row 1, id: "42" (string) -> 42 (integer)`.
#[must_use]
pub fn describe_change(change: &CellChange) -> String {
    let after = match &change.after {
        Some(value) => format!("{} ({})", inline(value), kind_name(value)),
        None => "removed".to_string(),
    };
    format!(
        "row {}, {}: {} ({}) -> {}",
        change.row,
        change.column,
        inline(&change.before),
        kind_name(&change.before),
        after
    )
}

/// Short single-line YAML for a value.
fn inline(value: &Value) -> String {
    match value {
        Value::String(text) => format!("{text:?}"),
        Value::Null => "null".to_string(),
        other => serde_json::to_string(other).unwrap_or_else(|_| format!("{other:?}")),
    }
}
