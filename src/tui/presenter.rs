//! Presenter that redraws a ratatui terminal on every change.

use ratatui::{Terminal, backend::Backend};
use tracing::warn;

use super::ui::{self, ScreenState};
use crate::controller::{Panel, Presenter, Slot};

/// Terminal-backed presenter.
pub struct TuiPresenter<B: Backend> {
    terminal: Terminal<B>,
    screen: ScreenState,
}

impl<B: Backend> TuiPresenter<B> {
    /// Wraps a terminal; nothing is drawn until the first change.
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            screen: ScreenState::new(),
        }
    }

    /// The accumulated screen state.
    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    /// The wrapped terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Mutable access to the wrapped terminal.
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Redraws from the current screen state.
    pub fn redraw(&mut self) {
        let screen = &self.screen;
        if let Err(e) = self.terminal.draw(|f| ui::draw(f, screen)) {
            warn!(error = %e, "Failed to draw frame");
        }
    }
}

impl<B: Backend> Presenter for TuiPresenter<B> {
    fn set_visible(&mut self, panel: Panel, visible: bool) {
        self.screen.set_visible(panel, visible);
        self.redraw();
    }

    fn set_text(&mut self, slot: Slot, text: String) {
        self.screen.set_text(slot, text);
        self.redraw();
    }
}
