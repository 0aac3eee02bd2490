//! yamlgrid CLI entry point
//!
//! Parses arguments, runs the command, and turns failures into a
//! user-friendly error with suggestions and a non-zero exit status.
//!
//! Commands:
//! - `show` - Print the table of a document
//! - `save` - Write an edited grid payload back
//! - `set` / `add-row` - Edit from the command line
//! - `check` - Preview type changes an unedited save would make
//! - `config` - Show the effective configuration

use anyhow::Result;
use clap::Parser;
use yaml_grid::cli;
use yaml_grid::core::error::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
