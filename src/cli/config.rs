//! Inspect the yamlgrid configuration.
//!
//! ```bash
//! yamlgrid config          # same as `config show`
//! yamlgrid config show
//! yamlgrid --config ./grid.toml config show
//! yamlgrid config path
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use crate::config::{ConfigLocation, GridConfig};

/// Command to show the effective configuration or where it is read from.
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the configuration file path
    Path,
}

impl ConfigCommand {
    /// Run the subcommand. `config_path` is the global `--config` flag.
    pub async fn execute(self, config_path: Option<String>) -> Result<()> {
        let location = ConfigLocation::locate(config_path.as_deref())?;
        match self.command {
            Some(ConfigSubcommands::Show) | None => Self::show(&location).await,
            Some(ConfigSubcommands::Path) => {
                println!("{}", location.path.display());
                Ok(())
            }
        }
    }

    async fn show(location: &ConfigLocation) -> Result<()> {
        let config = GridConfig::load_at(location).await?;

        println!("{}", "yamlgrid configuration".bold());
        let status = if location.path.exists() {
            format!("from {}", location.source)
        } else {
            "not found, using defaults".to_string()
        };
        println!("Location: {} ({})\n", location.path.display(), status.bright_black());
        print!("{}", config.to_toml()?);
        Ok(())
    }
}
