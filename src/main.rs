//! CLI entry point for the course-browser tool.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod cli;
mod commands;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let cli = Cli::parse();

    // Determine log level based on verbose/quiet/debug flags
    // Priority: RUST_LOG env var > quiet flag > verbose flags > --debug > default (info)
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 if cli.command.connection().debug => "debug",
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // Logs on stderr; stdout is reserved for rendered trees and commands.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?cli, "CLI arguments parsed");

    match &cli.command {
        Command::Probe(args) => commands::run_probe_command(args).await,
        Command::Tree(args) => commands::run_tree_command(args).await,
        Command::Curl(args) => commands::run_curl_command(args).await,
    }
}
