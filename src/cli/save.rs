//! Save an edited grid payload back into its document.
//!
//! ```bash
//! yamlgrid show inventory.yaml --format json > grid.json
//! $EDITOR grid.json
//! yamlgrid save inventory.yaml --grid grid.json
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

use super::CliConfig;
use super::common::{CommandExecutor, open_session, read_input};
use crate::config::GridConfig;
use crate::grid::{Grid, GridPayload};

/// Command to write a grid payload into a document.
#[derive(Args)]
pub struct SaveCommand {
    /// YAML document to update
    file: PathBuf,

    /// Grid payload as JSON (`-` reads stdin)
    #[arg(long, value_name = "PAYLOAD")]
    grid: String,
}

impl CommandExecutor for SaveCommand {
    async fn execute_with_config(self, config: GridConfig, cli: CliConfig) -> Result<()> {
        // Payload errors abort before the document is opened.
        let text = read_input(&self.grid).await?;
        let source = if self.grid == "-" { "stdin" } else { self.grid.as_str() };
        let payload = GridPayload::from_json(&text, source)?;
        debug!("Payload from {source}: {} rows", payload.rows.len());

        let mut session = open_session(self.file, config, &cli).await?;
        session.replace_grid(Grid::from_payload(payload));
        session.save().await?;
        Ok(())
    }
}
