//! Final result reporting.

use tracing::{info, instrument};

use super::presenter::{Panel, Presenter, Slot};
use crate::engine::{Engine, Outcome, Seat};
use crate::error::{ControllerError, ControllerErrorKind, ControllerResult};
use crate::session::GameSession;

/// Message describing how a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OutcomeMessage {
    /// Nobody completed a line.
    #[display("It's a draw!")]
    Draw,
    /// The named seat completed a line.
    #[display("{} wins!", _0)]
    Winner(Seat),
}

/// Reads the outcome of a finished session.
///
/// Fails with `PreconditionViolation` while the game is still in progress,
/// including after a cancelled run.
#[instrument(skip(session), fields(outcome = %session.outcome()))]
pub fn report<E: Engine>(session: &GameSession<E>) -> ControllerResult<OutcomeMessage> {
    if !session.is_terminal() {
        return Err(ControllerError::new(ControllerErrorKind::PreconditionViolation));
    }
    match session.outcome() {
        Outcome::Draw => Ok(OutcomeMessage::Draw),
        Outcome::Player1Wins => Ok(OutcomeMessage::Winner(Seat::Player1)),
        Outcome::Player2Wins => Ok(OutcomeMessage::Winner(Seat::Player2)),
        Outcome::InProgress => Err(ControllerError::new(
            ControllerErrorKind::PreconditionViolation,
        )),
    }
}

/// Shows the outcome in the winner banner.
#[instrument(skip(presenter))]
pub fn announce<P: Presenter + ?Sized>(message: OutcomeMessage, presenter: &mut P) {
    presenter.set_visible(Panel::CancelControl, false);
    presenter.set_text(Slot::Winner, message.to_string());
    presenter.set_visible(Panel::WinnerBanner, true);
    info!(%message, "Outcome announced");
}
