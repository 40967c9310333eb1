//! Strictly Loop - Unified CLI
//!
//! Terminal front-end and headless simulation for the tic-tac-toe game loop.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::collections::HashMap;
use std::path::Path;
use strictly_loop::{
    Controller, GameMode, LogPresenter, LoopConfig, OutcomeMessage, Seat, View, mailbox,
    tui::{self, engine_factory},
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { config, mode } => run_tui(&config, mode).await,
        Command::Simulate {
            config,
            games,
            no_delay,
        } => run_simulate(&config, games, no_delay).await,
    }
}

/// Run the terminal UI
async fn run_tui(config_path: &Path, mode: Option<String>) -> Result<()> {
    let config = LoopConfig::load_or_default(config_path)?;
    let mode = mode.map(|m| m.parse::<GameMode>()).transpose()?;
    tui::run_tui(config, mode).await
}

/// Play automatic games and print each final board
#[instrument(skip(config_path))]
async fn run_simulate(config_path: &Path, games: u32, no_delay: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = LoopConfig::load_or_default(config_path)?;
    if no_delay {
        config = config.without_delay();
    }

    info!(games, "Starting simulation");

    let (_input, mut mailbox) = mailbox();
    let factory = engine_factory(&config);
    let mut controller = Controller::with_factory(LogPresenter, config, factory);
    let mut tally: HashMap<OutcomeMessage, u32> = HashMap::new();

    for game in 1..=games {
        let result = controller.play(GameMode::AutoVsAuto, &mut mailbox).await?;
        let message = result
            .message()
            .ok_or_else(|| anyhow::anyhow!("Automatic game {} ended without an outcome", game))?;

        if let Some(session) = controller.session() {
            println!("\nGame {}", game);
            println!("{}", session.render(View::PlayerStatus));
            println!("{}:", session.render(View::GameState));
            print!("{}", session.render(View::Board));
        }
        println!("{}", message);

        *tally.entry(message).or_default() += 1;
        controller.reset();
    }

    if games > 1 {
        println!("\nSummary over {} games:", games);
        for message in [
            OutcomeMessage::Winner(Seat::Player1),
            OutcomeMessage::Winner(Seat::Player2),
            OutcomeMessage::Draw,
        ] {
            let count = tally.get(&message).copied().unwrap_or(0);
            println!("  {:<16} {}", message.to_string(), count);
        }
    }

    Ok(())
}
