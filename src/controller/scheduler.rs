//! Turn scheduling: one move per tick until the game ends or is cancelled.

use std::time::Duration;

use derive_new::new;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

use super::input::{InputSignal, Mailbox};
use super::mode::GameMode;
use super::presenter::{Presenter, Slot, render_views};
use crate::config::LoopConfig;
use crate::engine::{Engine, MoveResult};
use crate::error::{ControllerError, ControllerErrorKind, ControllerResult};
use crate::session::{GameSession, PlayerKind};

/// Tick delays before automatic moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Cadence {
    /// Delay when both seats are automatic.
    automatic: Duration,
    /// Delay when a human is at the table.
    human_paced: Duration,
}

impl Cadence {
    /// Delay for a mode.
    pub fn for_mode(&self, mode: GameMode) -> Duration {
        match mode {
            GameMode::AutoVsAuto => self.automatic,
            GameMode::HumanVsAuto => self.human_paced,
        }
    }

    /// Delay for a configured session, judged by its player kinds.
    pub fn for_session<E: Engine>(&self, session: &GameSession<E>) -> Duration {
        if session.player1_kind().is_automatic() && session.player2_kind().is_automatic() {
            self.automatic
        } else {
            self.human_paced
        }
    }
}

/// A single proposed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRequest {
    /// A human picked this cell index.
    Cell(usize),
    /// The engine picks for an automatic seat.
    Automatic,
}

/// Result of interpreting one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    /// The move was applied.
    Continue,
    /// The human asked to abandon the game.
    Cancel,
    /// The move was refused; nothing changed.
    InvalidInput,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalReason {
    /// The engine reached a win or a draw.
    GameEnded,
    /// The human cancelled.
    UserCancelled,
}

/// Submits one request and translates the engine's verdict.
///
/// Anything other than [`MoveResult::Applied`] is `InvalidInput`.
#[instrument(skip(session))]
pub fn apply_request<E: Engine>(session: &mut GameSession<E>, request: TurnRequest) -> ControlSignal {
    let cell = match request {
        TurnRequest::Cell(index) => Some(index),
        TurnRequest::Automatic => None,
    };
    match session.submit(cell) {
        MoveResult::Applied => ControlSignal::Continue,
        MoveResult::Rejected | MoveResult::InvalidCell => ControlSignal::InvalidInput,
    }
}

/// Drives the session until it ends or the human cancels.
///
/// Ticks are strictly sequential. Cancellation is checked after each
/// automatic cadence wait and on every human input, so a cancel takes effect
/// within one tick. Acting on a cancel consumes it along with any pending
/// input, so it never reaches a later run. A cancelled session must be reset
/// before it can be run again.
#[instrument(skip_all, fields(player1 = %session.player1_kind(), player2 = %session.player2_kind()))]
pub async fn run_loop<E, P>(
    session: &mut GameSession<E>,
    mailbox: &mut Mailbox,
    presenter: &mut P,
    config: &LoopConfig,
) -> ControllerResult<TerminalReason>
where
    E: Engine,
    P: Presenter + ?Sized,
{
    if session.is_cancelled() {
        return Err(ControllerError::new(ControllerErrorKind::SessionNotReset));
    }

    let delay = config.cadence().for_session(session);
    let show_indexed = *config.show_indexed_board();
    let mut ticks = 0u32;
    let mut fresh_turn = true;
    info!(?delay, "Starting turn loop");

    while !session.is_terminal() {
        let Some(seat) = session.to_move() else {
            return Err(ControllerError::new(ControllerErrorKind::SessionNotStarted));
        };

        let signal = match session.kind_of(seat) {
            PlayerKind::Automatic => {
                sleep(delay).await;
                mailbox.discard_pending();
                if mailbox.is_cancelled() {
                    ControlSignal::Cancel
                } else {
                    let signal = apply_request(session, TurnRequest::Automatic);
                    if signal == ControlSignal::InvalidInput {
                        return Err(ControllerError::new(
                            ControllerErrorKind::AutomaticMoveRejected(seat.to_string()),
                        ));
                    }
                    signal
                }
            }
            PlayerKind::Human => {
                if mailbox.is_cancelled() {
                    ControlSignal::Cancel
                } else {
                    if fresh_turn {
                        presenter.set_text(
                            Slot::Prompt,
                            format!("{}: press 0-8 to place your mark, Esc to cancel", seat),
                        );
                    }
                    match mailbox.next().await {
                        None => {
                            return Err(ControllerError::new(ControllerErrorKind::InputClosed));
                        }
                        Some(InputSignal::Cancel) => ControlSignal::Cancel,
                        Some(InputSignal::Select(_)) if mailbox.is_cancelled() => {
                            ControlSignal::Cancel
                        }
                        Some(InputSignal::Select(cell)) => {
                            let signal = apply_request(session, TurnRequest::Cell(cell));
                            if signal == ControlSignal::InvalidInput {
                                warn!(cell, "Human move refused");
                                presenter.set_text(
                                    Slot::Prompt,
                                    format!("Cell {} is not available, choose another (0-8)", cell),
                                );
                            }
                            signal
                        }
                    }
                }
            }
        };

        match signal {
            ControlSignal::Continue => {
                ticks += 1;
                fresh_turn = true;
                debug!(ticks, %seat, "Tick applied");
                render_views(session, presenter, show_indexed);
            }
            ControlSignal::InvalidInput => {
                fresh_turn = false;
                debug!(%seat, "Re-prompting without advancing the turn");
            }
            ControlSignal::Cancel => {
                mailbox.clear();
                session.mark_cancelled();
                presenter.set_text(Slot::Prompt, "Game cancelled".to_string());
                info!(ticks, "Turn loop cancelled");
                return Ok(TerminalReason::UserCancelled);
            }
        }
    }

    presenter.set_text(Slot::Prompt, String::new());
    info!(ticks, outcome = %session.outcome(), "Turn loop finished");
    Ok(TerminalReason::GameEnded)
}
