//! Session setup: mode to player kinds, engine start, view switch.

use tracing::{error, info, instrument};

use super::mode::GameMode;
use super::presenter::{Panel, Presenter, Slot, render_views};
use crate::engine::Engine;
use crate::error::ControllerResult;
use crate::session::GameSession;

/// Starts a new session on a fresh engine from [`Engine::new_session`].
#[instrument(skip(presenter))]
pub fn configure<E, P>(
    mode: GameMode,
    presenter: &mut P,
    show_indexed_board: bool,
) -> ControllerResult<GameSession<E>>
where
    E: Engine,
    P: Presenter + ?Sized,
{
    configure_with(E::new_session(), mode, presenter, show_indexed_board)
}

/// Parses a mode name and starts a new session.
///
/// Fails with `InvalidMode` for anything other than the two supported modes.
#[instrument(skip(presenter))]
pub fn configure_named<E, P>(
    mode: &str,
    presenter: &mut P,
    show_indexed_board: bool,
) -> ControllerResult<GameSession<E>>
where
    E: Engine,
    P: Presenter + ?Sized,
{
    let mode: GameMode = mode.parse()?;
    configure(mode, presenter, show_indexed_board)
}

/// Starts a new session on the given engine.
///
/// A start failure is returned as is; the presenter stays on the start menu.
#[instrument(skip(engine, presenter))]
pub fn configure_with<E, P>(
    engine: E,
    mode: GameMode,
    presenter: &mut P,
    show_indexed_board: bool,
) -> ControllerResult<GameSession<E>>
where
    E: Engine,
    P: Presenter + ?Sized,
{
    let (player1, player2) = mode.player_kinds();
    let mut session = GameSession::new(engine, player1, player2);

    session.start().map_err(|e| {
        error!(error = %e, "Engine refused to start");
        e
    })?;

    presenter.set_visible(Panel::StartMenu, false);
    presenter.set_visible(Panel::WinnerBanner, false);
    presenter.set_text(Slot::Winner, String::new());
    presenter.set_visible(Panel::InProgress, true);
    presenter.set_visible(Panel::CancelControl, true);
    render_views(&session, presenter, show_indexed_board);

    info!(%mode, %player1, %player2, "Session configured");
    Ok(session)
}
