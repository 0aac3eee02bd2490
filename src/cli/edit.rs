//! Single-cell edits from the command line: `set` and `add-row`.
//!
//! ```bash
//! yamlgrid set inventory.yaml --row 2 --column count --value 12
//! yamlgrid add-row inventory.yaml --cell name=gizmo --cell count=1
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::str::FromStr;

use super::CliConfig;
use super::common::{CommandExecutor, open_session};
use crate::config::GridConfig;
use crate::core::GridError;

/// A `column=value` pair. The value may be empty or contain `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellAssignment {
    pub column: String,
    pub value: String,
}

impl FromStr for CellAssignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((column, value)) if !column.trim().is_empty() => Ok(Self {
                column: column.trim().to_string(),
                value: value.to_string(),
            }),
            _ => Err(format!("expected COLUMN=VALUE, got '{s}'")),
        }
    }
}

/// Command to change one cell and save.
#[derive(Args)]
pub struct SetCommand {
    /// YAML document to edit
    file: PathBuf,

    /// Row number, starting at 1
    #[arg(long)]
    row: usize,

    /// Column name; a new name adds the column
    #[arg(long)]
    column: String,

    /// New cell text, typed the same way as an edited grid cell
    #[arg(long, allow_hyphen_values = true)]
    value: String,
}

impl CommandExecutor for SetCommand {
    async fn execute_with_config(self, config: GridConfig, cli: CliConfig) -> Result<()> {
        let mut session = open_session(self.file, config, &cli).await?;
        let rows = session.grid().len();
        let index = self.row.checked_sub(1).ok_or(GridError::CellOutOfRange {
            row: self.row,
            rows,
        })?;

        session.grid_mut().set_cell(index, &self.column, self.value)?;
        session.save().await?;
        Ok(())
    }
}

/// Command to append a row and save.
#[derive(Args)]
pub struct AddRowCommand {
    /// YAML document to edit
    file: PathBuf,

    /// Initial cell of the new row (repeatable)
    #[arg(long = "cell", value_name = "COLUMN=VALUE", allow_hyphen_values = true)]
    cells: Vec<CellAssignment>,
}

impl CommandExecutor for AddRowCommand {
    async fn execute_with_config(self, config: GridConfig, cli: CliConfig) -> Result<()> {
        let mut session = open_session(self.file, config, &cli).await?;
        let grid = session.grid_mut();

        let index = grid.add_blank_row();
        for cell in self.cells {
            grid.set_cell(index, &cell.column, cell.value)?;
        }
        session.save().await?;
        Ok(())
    }
}
