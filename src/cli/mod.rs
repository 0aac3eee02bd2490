//! Command-line interface for yamlgrid.
//!
//! Every document command follows the same flow: load the configuration,
//! open a [`PreviewSession`](crate::session::PreviewSession) on the file,
//! read or edit its grid, and for editing commands save through the shared
//! save pipeline.
//!
//! # Available Commands
//!
//! ## Viewing
//! - `show` - Print the table of a document as a grid, JSON payload or YAML
//! - `check` - List cells whose type would change on an unedited save
//!
//! ## Editing
//! - `save` - Write an edited JSON grid payload back into the document
//! - `set` - Change one cell and save
//! - `add-row` - Append a row and save
//!
//! ## System
//! - `config` - Show the effective configuration and its location
//!
//! # Example
//!
//! ```bash
//! yamlgrid show inventory.yaml
//! yamlgrid show inventory.yaml --format json > grid.json
//! yamlgrid save inventory.yaml --grid grid.json
//! yamlgrid --verbose set inventory.yaml --row 1 --column count --value 7
//! ```
//!
//! # Global Options
//!
//! All commands support these global options:
//! - `--verbose` - Enable debug logging on stderr
//! - `--quiet` - Suppress status messages, keep errors
//! - `--config` - Path to a custom config file

mod check;
pub mod common;
mod config;
mod edit;
pub mod formatters;
mod save;
mod show;


use anyhow::Result;
use clap::{Parser, Subcommand};

use common::{CommandExecutor, init_logging};

/// Runtime configuration for CLI execution.
///
/// Built once from the global flags and handed to every command, so tests
/// can drive commands without touching the process environment.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    ///
    /// `"debug"` with `--verbose`, `"error"` with `--quiet`, otherwise `"warn"`.
    pub log_level: Option<String>,

    /// Suppress informational and warning status lines.
    pub quiet: bool,

    /// Custom path to the configuration file.
    ///
    /// Takes precedence over `YAMLGRID_CONFIG` and the default location
    /// (`~/.yamlgrid/config.toml`).
    pub config_path: Option<String>,
}

impl CliConfig {
    /// Create a new CLI configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Main CLI structure for yamlgrid.
///
/// Options marked `global = true` are accepted before or after the
/// subcommand.
///
/// ```bash
/// yamlgrid --quiet save inventory.yaml --grid grid.json
/// yamlgrid show inventory.yaml -v
/// yamlgrid -c ./grid.toml config show
/// ```
#[derive(Parser)]
#[command(
    name = "yamlgrid",
    about = "Edit the table inside a YAML document as a grid",
    version,
    long_about = "yamlgrid projects a list of records inside a YAML document into rows and \
                  columns, and writes edited rows back without disturbing the rest of the file."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging.
    ///
    /// Equivalent to `RUST_LOG=debug` unless `RUST_LOG` is already set.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress status messages; errors are still printed.
    ///
    /// Rendered output such as `show --format json` is unaffected.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a custom configuration file.
    ///
    /// Overrides `YAMLGRID_CONFIG` and `~/.yamlgrid/config.toml`. The file
    /// must exist.
    #[arg(short, long, global = true)]
    config: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the table of a document.
    ///
    /// See [`show::ShowCommand`] for options.
    Show(show::ShowCommand),

    /// Write an edited grid payload back into a document.
    ///
    /// The payload is the JSON printed by `show --format json`.
    Save(save::SaveCommand),

    /// Change one cell and save.
    Set(edit::SetCommand),

    /// Append a row and save.
    AddRow(edit::AddRowCommand),

    /// List cells whose type would change if the document were saved unedited.
    Check(check::CheckCommand),

    /// Show the effective configuration.
    ///
    /// See [`config::ConfigCommand`] for subcommands.
    Config(config::ConfigCommand),
}

impl Cli {
    /// Execute the CLI with configuration built from the parsed flags.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use clap::Parser;
    /// use yaml_grid::cli::Cli;
    ///
    /// let cli = Cli::parse();
    /// cli.execute().await?;
    /// ```
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Build a [`CliConfig`] from the parsed CLI arguments.
    ///
    /// ```rust,ignore
    /// let cli = Cli::parse_from(["yamlgrid", "--verbose", "show", "a.yaml"]);
    /// assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: Some(log_level.to_string()),
            quiet: self.quiet,
            config_path: self.config.clone(),
        }
    }

    /// Execute the CLI with an injected configuration.
    ///
    /// Installs the tracing subscriber, then dispatches to the subcommand.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        init_logging(config.log_level.as_deref());

        match self.command {
            Commands::Show(cmd) => cmd.execute(config).await,
            Commands::Save(cmd) => cmd.execute(config).await,
            Commands::Set(cmd) => cmd.execute(config).await,
            Commands::AddRow(cmd) => cmd.execute(config).await,
            Commands::Check(cmd) => cmd.execute(config).await,
            Commands::Config(cmd) => cmd.execute(config.config_path).await,
        }
    }
}
