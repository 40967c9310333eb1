//! Strictly Loop - turn-taking tic-tac-toe game loop
//!
//! This library drives a game between human and automatic players against a
//! rules engine it treats as a black box.
//!
//! # Architecture
//!
//! - **Engine**: the [`Engine`] trait and the bundled [`TicTacToe`] rules
//! - **Session**: the single active [`GameSession`] and its player kinds
//! - **Controller**: configuration, the turn scheduler and outcome reporting
//! - **TUI**: a crossterm/ratatui front-end with a start menu and board views
//!
//! # Example
//!
//! ```no_run
//! use strictly_loop::{Controller, GameMode, LogPresenter, LoopConfig, TicTacToe, mailbox};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (_input, mut mailbox) = mailbox();
//! let mut controller: Controller<TicTacToe, _> =
//!     Controller::new(LogPresenter, LoopConfig::default());
//! let result = controller.play(GameMode::AutoVsAuto, &mut mailbox).await?;
//! println!("{:?}", result.message());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod engine;
mod error;
mod games;
mod session;

pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, LoopConfig};

// Crate-level exports - Controller
pub use controller::{
    Cadence, ControlSignal, Controller, ControllerState, GameMode, InputHandle, InputSignal,
    LogPresenter, Mailbox, OutcomeMessage, Panel, PlayThrough, Presenter, Slot, TerminalReason,
    TurnRequest, announce, apply_request, configure, configure_named, configure_with,
    key_to_signal, mailbox, render_views, report, run_loop,
};

// Crate-level exports - Engine seam
pub use engine::{Engine, EngineError, MoveResult, Outcome, Seat, View};

// Crate-level exports - Errors
pub use error::{ControllerError, ControllerErrorKind, ControllerResult};

// Crate-level exports - Session
pub use session::{GameSession, PlayerKind};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{Board, Mark, Position, Square, TicTacToe};
