//! User configuration for yamlgrid.
//!
//! One TOML file, every field optional:
//!
//! ```toml
//! # Key holding the rows when the document root is a mapping
//! tables_key = "tables"
//!
//! # What a save does when the document on disk can no longer be parsed:
//! # "abort" fails the save, "drop-siblings" writes only the table
//! on_unparsable_latest = "abort"
//!
//! # Hold a lock file next to the document while saving
//! lock_saves = true
//! ```
//!
//! # Configuration File Location
//!
//! Looked up in this order, first match wins:
//!
//! 1. `--config <path>` on the command line
//! 2. The `YAMLGRID_CONFIG` environment variable
//! 3. **Unix/macOS**: `~/.yamlgrid/config.toml`,
//!    **Windows**: `%LOCALAPPDATA%\yamlgrid\config.toml`
//!
//! An explicit path (1 or 2) must exist. A missing default file means
//! built-in defaults.

use crate::core::GridError;
use crate::document::DEFAULT_TABLES_KEY;
use crate::utils::platform::resolve_path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "YAMLGRID_CONFIG";

/// What to do when the latest document cannot be parsed at save time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnparsableLatestPolicy {
    /// Fail the save and leave the file alone
    #[default]
    Abort,
    /// Write the table alone, discarding the other top-level keys
    DropSiblings,
}

impl fmt::Display for UnparsableLatestPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::DropSiblings => write!(f, "drop-siblings"),
        }
    }
}

/// Effective settings for loading and saving documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Key holding the rows inside a mapping root.
    pub tables_key: String,

    pub on_unparsable_latest: UnparsableLatestPolicy,

    /// Take the cross-process lock file while saving.
    pub lock_saves: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tables_key: DEFAULT_TABLES_KEY.to_string(),
            on_unparsable_latest: UnparsableLatestPolicy::default(),
            lock_saves: true,
        }
    }
}

/// Where a configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Flag,
    Environment,
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "--config"),
            Self::Environment => write!(f, "{CONFIG_ENV_VAR}"),
            Self::Default => write!(f, "default location"),
        }
    }
}

/// Resolved configuration file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub source: ConfigSource,
}

impl ConfigLocation {
    /// Resolve the configuration path from the flag, the environment, or the
    /// default location.
    ///
    /// # Errors
    ///
    /// Fails when path expansion fails or no home directory can be found.
    pub fn locate(explicit: Option<&str>) -> Result<Self> {
        Self::locate_with(explicit, std::env::var(CONFIG_ENV_VAR).ok())
    }

    /// [`locate`](Self::locate) with the environment value passed in.
    pub fn locate_with(explicit: Option<&str>, env_value: Option<String>) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(Self {
                path: resolve_path(path)?,
                source: ConfigSource::Flag,
            });
        }
        if let Some(path) = env_value.filter(|value| !value.trim().is_empty()) {
            return Ok(Self {
                path: resolve_path(&path)
                    .with_context(|| format!("Invalid {CONFIG_ENV_VAR} value: {path}"))?,
                source: ConfigSource::Environment,
            });
        }
        Ok(Self {
            path: GridConfig::default_path()?,
            source: ConfigSource::Default,
        })
    }

    /// Whether the file was named explicitly and so must exist.
    #[must_use]
    pub fn is_explicit(&self) -> bool {
        self.source != ConfigSource::Default
    }
}

impl GridConfig {
    /// Load the configuration from the flag path, `YAMLGRID_CONFIG`, or the
    /// default location.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use yaml_grid::config::GridConfig;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let config = GridConfig::load(None).await?;
    /// println!("Rows live under '{}'", config.tables_key);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit path does not exist
    /// - The file exists but cannot be read
    /// - The file is not valid TOML or has unknown keys
    pub async fn load(explicit: Option<&str>) -> Result<Self> {
        let location = ConfigLocation::locate(explicit)?;
        Self::load_at(&location).await
    }

    /// Load from an already resolved location.
    pub async fn load_at(location: &ConfigLocation) -> Result<Self> {
        if location.path.exists() {
            debug!("Loading configuration from {} ({})", location.path.display(), location.source);
            return Self::load_from(&location.path).await;
        }
        if location.is_explicit() {
            return Err(GridError::ConfigError {
                message: format!(
                    "configuration file not found: {} (from {})",
                    location.path.display(),
                    location.source
                ),
            }
            .into());
        }
        debug!("No configuration at {}, using defaults", location.path.display());
        Ok(Self::default())
    }

    /// Load configuration from a specific file path.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content).map_err(|e| GridError::ConfigError {
            message: format!("{}: {}", path.display(), e.message()),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot work.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.tables_key.trim().is_empty() {
            return Err(GridError::ConfigError {
                message: "tables_key must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Get the default file path for the configuration.
    ///
    /// - **Windows**: `%LOCALAPPDATA%\yamlgrid\config.toml`
    /// - **Unix/macOS**: `~/.yamlgrid/config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if the home (or local data) directory cannot be
    /// determined.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("yamlgrid")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".yamlgrid")
        };

        Ok(config_dir.join("config.toml"))
    }
}
