//! Command-line interface for solo_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Solo Tic-Tac-Toe - play against a rule-based computer
#[derive(Parser, Debug)]
#[command(name = "solo_tictactoe")]
#[command(about = "Tic-tac-toe against a rule-based computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the computer's random choices (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log file for the interactive board
    #[arg(long, global = true, default_value = "solo_tictactoe.log")]
    pub log_file: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play on the interactive terminal board
    Play,

    /// Pit a random human stand-in against the computer and print a tally
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}
