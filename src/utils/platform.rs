//! Platform-specific helpers: home directory lookup and path expansion.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Whether the current platform is Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// Returns the home directory of the current user.
///
/// # Errors
///
/// Fails when the home directory cannot be determined.
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        let platform_help = if is_windows() {
            "On Windows: Check that the USERPROFILE environment variable is set"
        } else {
            "On Unix/Linux: Check that the HOME environment variable is set"
        };
        anyhow::anyhow!("Could not determine home directory.\n\n{platform_help}")
    })
}

/// Expands `~/` and environment variables (`$VAR`, `${VAR}`) in a path.
///
/// # Examples
///
/// ```rust,no_run
/// use yaml_grid::utils::platform::resolve_path;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = resolve_path("~/.yamlgrid/config.toml")?;
/// let data = resolve_path("$HOME/tables.yaml")?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails on `~user` forms, which are not supported, and on undefined
/// variables.
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = if let Some(stripped) = path.strip_prefix("~/") {
        get_home_dir()?.join(stripped)
    } else if path.starts_with('~') && path != "~" {
        return Err(anyhow::anyhow!(
            "Invalid path: {path}\n\n\
            Tilde expansion only supports '~/' for home directory.\n\
            Use '~/' followed by a relative path, like '~/Documents/file.yaml'"
        ));
    } else if path == "~" {
        get_home_dir()?
    } else {
        PathBuf::from(path)
    };

    let path_str = expanded.to_string_lossy();
    let expanded_str = shellexpand::env(&path_str)
        .with_context(|| {
            format!(
                "Failed to expand environment variables in path: {path_str}\n\n\
                Common issues:\n\
                - Undefined environment variable (e.g., $UNDEFINED_VAR)\n\
                - Invalid variable syntax (use $VAR or ${{VAR}})"
            )
        })?
        .into_owned();

    Ok(PathBuf::from(expanded_str))
}
