//! The single active game session.

use crate::engine::{Engine, MoveResult, Outcome, Seat, View};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who chooses a seat's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from the keyboard.
    #[display("human")]
    Human,
    /// Moves are chosen by the engine.
    #[display("automatic")]
    Automatic,
}

impl PlayerKind {
    /// Returns true for [`PlayerKind::Automatic`].
    pub fn is_automatic(self) -> bool {
        self == PlayerKind::Automatic
    }
}

/// A play-through against the engine.
///
/// The session owns the engine instance; board state is never read directly,
/// only through the engine's queries and rendered views.
#[derive(Debug)]
pub struct GameSession<E> {
    engine: E,
    player1_kind: PlayerKind,
    player2_kind: PlayerKind,
    cancelled: bool,
}

impl<E: Engine> GameSession<E> {
    /// Wraps a freshly created engine.
    ///
    /// The engine is not started; see [`crate::configure`].
    #[instrument(skip(engine))]
    pub fn new(engine: E, player1_kind: PlayerKind, player2_kind: PlayerKind) -> Self {
        info!("Creating new game session");
        Self {
            engine,
            player1_kind,
            player2_kind,
            cancelled: false,
        }
    }

    /// Kind of the first player.
    pub fn player1_kind(&self) -> PlayerKind {
        self.player1_kind
    }

    /// Kind of the second player.
    pub fn player2_kind(&self) -> PlayerKind {
        self.player2_kind
    }

    /// Kind of the player in the given seat.
    pub fn kind_of(&self, seat: Seat) -> PlayerKind {
        match seat {
            Seat::Player1 => self.player1_kind,
            Seat::Player2 => self.player2_kind,
        }
    }

    /// The seat to move, if the game is in play.
    pub fn to_move(&self) -> Option<Seat> {
        self.engine.to_move()
    }

    /// Kind of the player to move, if the game is in play.
    pub fn active_kind(&self) -> Option<PlayerKind> {
        self.to_move().map(|seat| self.kind_of(seat))
    }

    /// True once the engine reports a win or a draw.
    pub fn is_terminal(&self) -> bool {
        self.engine.is_terminal()
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.engine.outcome()
    }

    /// True if the last run was cancelled and no reset has happened since.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub(crate) fn mark_cancelled(&mut self) {
        self.cancelled = true;
    }

    /// Issues the engine's start operation with this session's player kinds.
    pub(crate) fn start(&mut self) -> Result<(), crate::engine::EngineError> {
        self.engine.start(
            self.player1_kind.is_automatic(),
            self.player2_kind.is_automatic(),
        )
    }

    /// Forwards a move to the engine.
    #[instrument(skip(self))]
    pub fn submit(&mut self, cell: Option<usize>) -> MoveResult {
        let result = self.engine.submit_move(cell);
        debug!(?result, terminal = self.is_terminal(), "Engine answered move");
        result
    }

    /// Renders an engine view.
    pub fn render(&self, view: View) -> String {
        self.engine.render(view)
    }

    /// Clears engine state and the cancellation mark.
    ///
    /// The session must be started again before further play.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.engine.reset();
        self.cancelled = false;
        info!("Session reset");
    }

    /// Read access to the engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}
