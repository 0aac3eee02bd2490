//! Display a document's table.
//!
//! ```bash
//! yamlgrid show inventory.yaml
//! yamlgrid show inventory.yaml --filter name=wid --filter tags=blue
//! yamlgrid show inventory.yaml --format json > grid.json
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::CliConfig;
use super::common::{CommandExecutor, open_session};
use super::formatters::{OutputFormat, PLACEHOLDER, render_json, render_table, render_yaml};
use crate::config::GridConfig;
use crate::grid::{ColumnFilter, FilterTerm};
use crate::session::Notifier;

/// Command to project a document and print it.
#[derive(Args)]
pub struct ShowCommand {
    /// YAML document to show
    file: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Only show rows whose COLUMN contains TEXT (case-insensitive, repeatable)
    #[arg(long = "filter", value_name = "COLUMN=TEXT")]
    filters: Vec<FilterTerm>,
}

impl CommandExecutor for ShowCommand {
    async fn execute_with_config(self, config: GridConfig, cli: CliConfig) -> Result<()> {
        let session = open_session(self.file, config, &cli).await?;
        let grid = session.grid();

        let filter = ColumnFilter::new(self.filters);
        if !grid.is_empty() {
            filter.validate(grid.columns())?;
        }

        match self.format {
            OutputFormat::Json => {
                if !filter.is_empty() {
                    session.notifier().warn("Filters are ignored with --format json");
                }
                println!("{}", render_json(grid)?);
            }
            OutputFormat::Yaml => print!("{}", render_yaml(grid, &filter)?),
            OutputFormat::Table => match render_table(grid, &filter) {
                Some(table) => {
                    println!("{}", table.header.cyan().bold());
                    println!("{}", table.separator.bright_black());
                    for line in &table.lines {
                        println!("{line}");
                    }
                    println!("{}", table.footer.bright_black());
                }
                None => println!("{PLACEHOLDER}"),
            },
        }
        Ok(())
    }
}
