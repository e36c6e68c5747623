//! Strictly Teams - Unified CLI
//!
//! Interactive terminal UI or a one-shot split from the command line.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use strictly_teams::{Pin, SplitFormat, TeamsConfig, format_split};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui {
            config,
            seed,
            log_file,
        } => run_tui(config, seed, log_file),
        Command::Split {
            names,
            pins,
            config,
            seed,
            json,
        } => run_split(names, pins, config, seed, json),
    }
}

/// Run the interactive terminal UI
fn run_tui(config_path: PathBuf, seed: Option<u64>, log_file: PathBuf) -> Result<()> {
    let config = load_config(&config_path, seed)?;
    strictly_teams::run_tui(config, &log_file)
}

/// Split the given names once and print the result
fn run_split(
    names: Vec<String>,
    pins: Vec<(String, Pin)>,
    config_path: PathBuf,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    initialize_cli_tracing();

    let config = load_config(&config_path, seed)?;
    let teams = strictly_teams::split(&names, &pins, &config).context("Failed to split teams")?;
    let format = if json {
        SplitFormat::Json
    } else {
        SplitFormat::Text
    };
    println!("{}", format_split(&teams, &config, format)?);

    Ok(())
}

#[instrument(skip(path), fields(path = %path.display()))]
fn load_config(path: &Path, seed: Option<u64>) -> Result<TeamsConfig> {
    info!("Loading teams configuration");
    let config = TeamsConfig::load_or_default(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    Ok(config.with_seed(seed))
}

fn initialize_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,strictly_teams=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("CLI tracing initialized");
}
