//! Command-line interface for strictly_loop.

use clap::{Parser, Subcommand};

/// Strictly Loop - turn-taking tic-tac-toe with automatic players
#[derive(Parser, Debug)]
#[command(name = "strictly_loop")]
#[command(about = "Play tic-tac-toe against an automatic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal UI
    Tui {
        /// Path to the loop configuration file
        #[arg(short, long, default_value = "strictly_loop.toml")]
        config: std::path::PathBuf,

        /// Start straight into a mode (auto-vs-auto or human-vs-auto) instead of the menu
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Play automatic games to completion and print the results
    Simulate {
        /// Path to the loop configuration file
        #[arg(short, long, default_value = "strictly_loop.toml")]
        config: std::path::PathBuf,

        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Ignore the configured cadence and play without delay
        #[arg(long)]
        no_delay: bool,
    },
}
