//! Game loop controller.
//!
//! The controller composes three pieces:
//!
//! - [`configure`] turns a [`GameMode`] into a started [`GameSession`],
//! - [`run_loop`] advances the session one tick at a time,
//! - [`report`] maps a finished session to an [`OutcomeMessage`].
//!
//! [`Controller`] owns the single active session and walks the state
//! machine `Idle → Configuring → Playing → Terminal → Idle`, with
//! `Playing → Idle` on cancellation.

mod configurator;
mod input;
mod mode;
mod presenter;
mod reporter;
mod scheduler;

pub use configurator::{configure, configure_named, configure_with};
pub use input::{InputHandle, InputSignal, Mailbox, key_to_signal, mailbox};
pub use mode::GameMode;
pub use presenter::{LogPresenter, Panel, Presenter, Slot, render_views};
pub use reporter::{OutcomeMessage, announce, report};
pub use scheduler::{Cadence, ControlSignal, TerminalReason, TurnRequest, apply_request, run_loop};

use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, info, instrument, warn};

use crate::config::LoopConfig;
use crate::engine::Engine;
use crate::error::{ControllerError, ControllerErrorKind, ControllerResult};
use crate::session::GameSession;

/// Controller lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Waiting for a mode selection.
    Idle,
    /// Creating and starting a session.
    Configuring,
    /// Turn loop running.
    Playing,
    /// Game over, outcome available until reset.
    Terminal,
}

/// Summary of one play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct PlayThrough {
    /// Why the loop stopped.
    reason: TerminalReason,
    /// Outcome message; only present when the game ended.
    message: Option<OutcomeMessage>,
}

/// Drives play-throughs against engines of type `E`, rendering into `P`.
pub struct Controller<E, P> {
    presenter: P,
    config: LoopConfig,
    factory: Box<dyn FnMut() -> E>,
    session: Option<GameSession<E>>,
    state: ControllerState,
}

impl<E: Engine + 'static, P: Presenter> Controller<E, P> {
    /// Creates a controller that builds engines with [`Engine::new_session`].
    pub fn new(presenter: P, config: LoopConfig) -> Self {
        Self::with_factory(presenter, config, E::new_session)
    }

    /// Creates a controller with a custom engine factory.
    #[instrument(skip_all)]
    pub fn with_factory(
        presenter: P,
        config: LoopConfig,
        factory: impl FnMut() -> E + 'static,
    ) -> Self {
        let mut controller = Self {
            presenter,
            config,
            factory: Box::new(factory),
            session: None,
            state: ControllerState::Idle,
        };
        controller.show_start_menu();
        info!("Controller ready");
        controller
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// The current session, if any.
    pub fn session(&self) -> Option<&GameSession<E>> {
        self.session.as_ref()
    }

    /// The presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The loop configuration.
    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Starts a fresh session for `mode`.
    ///
    /// Any previous session is reset and discarded first. Fails with
    /// `SessionActive` while the controller is `Configuring` or `Playing`,
    /// that is from a successful configure until the run finishes or
    /// [`Controller::reset`] is called. A `play` future dropped mid-run
    /// leaves the controller `Playing` until reset.
    #[instrument(skip(self))]
    pub fn configure(&mut self, mode: GameMode) -> ControllerResult<()> {
        match self.state {
            ControllerState::Configuring | ControllerState::Playing => {
                return Err(ControllerError::new(ControllerErrorKind::SessionActive));
            }
            ControllerState::Terminal => self.reset(),
            ControllerState::Idle => {}
        }

        if let Some(mut stale) = self.session.take() {
            debug!("Discarding previous session");
            stale.reset();
        }

        self.state = ControllerState::Configuring;
        let engine = (self.factory)();
        let show_indexed = *self.config.show_indexed_board();
        match configure_with(engine, mode, &mut self.presenter, show_indexed) {
            Ok(session) => {
                self.session = Some(session);
                self.state = ControllerState::Playing;
                Ok(())
            }
            Err(e) => {
                self.state = ControllerState::Idle;
                self.show_start_menu();
                Err(e)
            }
        }
    }

    /// Parses a mode name and starts a fresh session.
    #[instrument(skip(self))]
    pub fn configure_named(&mut self, mode: &str) -> ControllerResult<()> {
        let mode: GameMode = mode.parse()?;
        self.configure(mode)
    }

    /// Runs the turn loop on the current session.
    #[instrument(skip_all)]
    pub async fn run(&mut self, mailbox: &mut Mailbox) -> ControllerResult<TerminalReason> {
        let Some(session) = self.session.as_mut() else {
            return Err(ControllerError::new(ControllerErrorKind::SessionNotStarted));
        };

        let result = run_loop(session, mailbox, &mut self.presenter, &self.config).await;
        self.state = match &result {
            Ok(TerminalReason::GameEnded) => ControllerState::Terminal,
            Ok(TerminalReason::UserCancelled) => ControllerState::Idle,
            Err(e) => {
                warn!(error = %e, "Turn loop failed");
                ControllerState::Idle
            }
        };
        result
    }

    /// Reports and announces the outcome of the current session.
    ///
    /// Fails with `PreconditionViolation` unless the game has ended.
    #[instrument(skip(self))]
    pub fn report(&mut self) -> ControllerResult<OutcomeMessage> {
        let Some(session) = self.session.as_ref() else {
            return Err(ControllerError::new(ControllerErrorKind::PreconditionViolation));
        };
        let message = report(session)?;
        announce(message, &mut self.presenter);
        Ok(message)
    }

    /// Configures, runs and, if the game ended, reports one play-through.
    ///
    /// Input left over from before the play-through is discarded.
    #[instrument(skip(self, mailbox))]
    pub async fn play(
        &mut self,
        mode: GameMode,
        mailbox: &mut Mailbox,
    ) -> ControllerResult<PlayThrough> {
        mailbox.clear();
        self.configure(mode)?;
        let reason = self.run(mailbox).await?;
        let message = match reason {
            TerminalReason::GameEnded => Some(self.report()?),
            TerminalReason::UserCancelled => None,
        };
        info!(?reason, ?message, "Play-through finished");
        Ok(PlayThrough::new(reason, message))
    }

    /// Resets the current session and returns to the start menu.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.reset();
        }
        self.state = ControllerState::Idle;
        self.show_start_menu();
    }

    fn show_start_menu(&mut self) {
        self.presenter.set_visible(Panel::InProgress, false);
        self.presenter.set_visible(Panel::CancelControl, false);
        self.presenter.set_visible(Panel::WinnerBanner, false);
        self.presenter.set_text(Slot::Prompt, String::new());
        self.presenter.set_visible(Panel::StartMenu, true);
    }
}
