//! Rules engine seam.
//!
//! The controller drives a game exclusively through [`Engine`]. Board
//! storage, move legality and win/draw determination belong to the engine;
//! the controller only observes whose turn it is, whether the game is over,
//! and the pre-formatted text views the engine renders.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two seats at the table.
///
/// Player 1 always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Seat {
    /// First player to move.
    #[display("Player 1")]
    Player1,
    /// Second player to move.
    #[display("Player 2")]
    Player2,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::Player1 => Seat::Player2,
            Seat::Player2 => Seat::Player1,
        }
    }
}

/// Result of a game as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// No terminal state reached yet.
    #[display("in progress")]
    InProgress,
    /// Board full with no winner.
    #[display("draw")]
    Draw,
    /// Player 1 completed a line.
    #[display("Player 1 wins")]
    Player1Wins,
    /// Player 2 completed a line.
    #[display("Player 2 wins")]
    Player2Wins,
}

impl Outcome {
    /// Returns the winning seat, if any.
    pub fn winner(self) -> Option<Seat> {
        match self {
            Outcome::Player1Wins => Some(Seat::Player1),
            Outcome::Player2Wins => Some(Seat::Player2),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

/// Engine verdict on a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The move was applied and the turn advanced.
    Applied,
    /// The move was refused (occupied cell, wrong turn, game over).
    Rejected,
    /// The cell index does not name a square on the board.
    InvalidCell,
}

/// Text views the engine can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum View {
    /// The board with marks only.
    Board,
    /// The board with vacant cells labelled by their input index.
    IndexedBoard,
    /// Which seat is human and which is automatic.
    PlayerStatus,
    /// Whose turn it is, or that the game has ended.
    GameState,
}

/// Failure reported by an engine when a session cannot be started.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", message, file, line)]
pub struct EngineError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Rules engine for a two-seat, turn-based game on a nine-cell board.
pub trait Engine {
    /// Creates a fresh, unstarted engine instance.
    fn new_session() -> Self
    where
        Self: Sized;

    /// Records which seats play automatically and opens the game for moves.
    fn start(&mut self, player1_automatic: bool, player2_automatic: bool) -> Result<(), EngineError>;

    /// Submits a move for the seat to move.
    ///
    /// `None` asks the engine to pick the move itself, which is only
    /// accepted when the seat to move is automatic.
    fn submit_move(&mut self, cell: Option<usize>) -> MoveResult;

    /// Returns true once no further moves are possible.
    fn is_terminal(&self) -> bool;

    /// Returns the current outcome.
    fn outcome(&self) -> Outcome;

    /// Returns the seat to move, or `None` when the game is over or not started.
    fn to_move(&self) -> Option<Seat>;

    /// Clears all game state back to an unstarted session.
    fn reset(&mut self);

    /// Renders one of the text views from the current state.
    fn render(&self, view: View) -> String;
}
