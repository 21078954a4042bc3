//! Thanks CLI entry point
//!
//! This is the main executable for `thanks`, a small tool that inspects a
//! Maven build's resolved dependencies and stars the GitHub repositories
//! behind them. It handles command-line argument parsing, logging setup,
//! error display, and command execution.

use anyhow::Result;
use clap::Parser;
use thanks_cli::cli::Cli;
use thanks_cli::core::error::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    cli.init_logging();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the command
    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
