//! Self-play CLI
//!
//! Plays the configured engines against each other and prints a report.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use selfplay::{MatchRunner, SelfPlayConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess self-play runner");
    println!();
    println!("Usage:");
    println!("  selfplay [config.toml]");
    println!();
    println!("Without a config file two games of classical (depth 4) vs random are played.");
    println!("Set RUST_LOG=debug to log every move and search.");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match env::args().nth(1) {
        Some(arg) if arg == "--help" || arg == "-h" => {
            print_usage();
            return Ok(());
        }
        Some(path) => SelfPlayConfig::load(Path::new(&path))
            .with_context(|| format!("failed to load config {path}"))?,
        None => SelfPlayConfig::default(),
    };

    info!(
        games = config.games,
        depth = config.depth,
        white = %config.white,
        black = %config.black,
        "starting self-play"
    );

    let record_path = config.record_path.clone();
    let mut runner = MatchRunner::new(config)?;
    let summary = runner.run().context("self-play aborted")?;

    println!("{}", summary.report());

    if let Some(path) = record_path {
        summary
            .save(&path)
            .with_context(|| format!("failed to save games to {}", path.display()))?;
        info!(path = %path.display(), "games saved");
    }

    Ok(())
}
