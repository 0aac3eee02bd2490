//! Configuration management for yamlgrid
//!
//! A single user-level TOML file tunes how documents are read and saved:
//! which key holds the rows, what a save does when the file on disk has been
//! broken in the meantime, and whether saves take a lock file.
//!
//! See [`GridConfig`] for the file format and lookup order.
//!
//! # Examples
//!
//! ```rust,no_run
//! use yaml_grid::config::{ConfigLocation, GridConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let location = ConfigLocation::locate(None)?;
//! let config = GridConfig::load_at(&location).await?;
//! println!("{} -> {}", location.path.display(), config.on_unparsable_latest);
//! # Ok(())
//! # }
//! ```

mod global;

pub use global::{
    CONFIG_ENV_VAR, ConfigLocation, ConfigSource, GridConfig, UnparsableLatestPolicy,
};
