//! Common utilities and traits for CLI commands

use anyhow::{Context, Result};
use std::future::Future;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

use crate::cli::CliConfig;
use crate::config::GridConfig;
use crate::session::{FsDocumentStore, PreviewSession, TerminalNotifier};

/// Session type used by every document command.
pub type CliSession = PreviewSession<FsDocumentStore, TerminalNotifier>;

/// Common trait for commands that need the effective configuration.
pub trait CommandExecutor: Sized {
    /// Load the configuration named by the global flags, then run.
    fn execute(self, cli: CliConfig) -> impl Future<Output = Result<()>> + Send
    where
        Self: Send,
    {
        async move {
            let config = GridConfig::load(cli.config_path.as_deref()).await?;
            self.execute_with_config(config, cli).await
        }
    }

    /// Run with an already loaded configuration.
    fn execute_with_config(
        self,
        config: GridConfig,
        cli: CliConfig,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Open `file` with the filesystem store and a terminal notifier.
pub async fn open_session(file: PathBuf, config: GridConfig, cli: &CliConfig) -> Result<CliSession> {
    PreviewSession::open(file, FsDocumentStore, TerminalNotifier::new(cli.quiet), config).await
}

/// Read a whole input, `-` meaning stdin.
pub async fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read from stdin")?;
        Ok(text)
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("Failed to read {source}"))
    }
}

/// Install the tracing subscriber for the binary.
///
/// `RUST_LOG` wins; otherwise `level` is used. Output goes to stderr so it
/// never mixes with JSON or YAML written to stdout.
pub fn init_logging(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("warn")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
