//! Solo Tic-Tac-Toe - play against a rule-based computer in the terminal.

#![warn(missing_docs)]

mod cli;
mod simulate;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use solo_tictactoe_tui::GameConfig;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play);

    match command {
        Command::Play => {
            init_file_tracing(&cli.log_file)?;
            let config = load_config(&cli)?;
            tui::run_tui(config).await
        }
        Command::Simulate { games, json } => {
            init_stderr_tracing();
            let config = load_config(&cli)?;
            let tally = simulate::run(games, *config.seed()).context("Simulation failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tally)?);
            } else {
                println!("{} games: {}", games, tally);
            }
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = GameConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_seed(cli.seed);
    info!(?config, "Configuration ready");
    Ok(config)
}

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "info";

fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn env_filter_from_env() -> EnvFilter {
    env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

/// Logs go to a file so they do not tear the board.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter_from_env())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter_from_env())
        .with_writer(std::io::stderr)
        .try_init();
}
