use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use tracing::info;

use rota::board::TrelloBoard;
use rota::cli::Cli;
use rota::config::Credentials;
use rota::pipeline::Pipeline;

fn main() -> Result<()> {
    let cli = Cli::parse();
    rota::logging::init(cli.verbose, cli.log_file.clone());

    // reqwest is built without a default TLS provider; install ring once.
    // Err means a provider is already installed, which is fine.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let credentials = Credentials::load(&cli.config)
        .with_context(|| format!("Failed to load credentials from {}", cli.config.display()))?;
    info!(board = %credentials.board_id, "credentials loaded");

    let board = TrelloBoard::with_base_url(credentials, &cli.api_url)
        .context("Failed to build the board client")?;

    // Captured once; every due-date comparison in the run uses this value.
    let now = Utc::now();
    let summary = Pipeline::new(&board, now, cli.dry_run).run();

    let headline = if cli.dry_run {
        "Dry run".yellow()
    } else {
        "Done".green()
    };
    println!(
        "{} {} list(s): {} relocated, {} repositioned, {} skipped",
        headline, summary.lists, summary.relocated, summary.repositioned, summary.skipped
    );

    Ok(())
}
