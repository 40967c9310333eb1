//! Presentation sink.
//!
//! The controller never formats board text itself; it copies engine views
//! and its own prompts into named slots and toggles panel visibility.

use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::engine::{Engine, View};
use crate::session::GameSession;

/// Panels the presentation layer can show or hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Mode selection.
    StartMenu,
    /// Board and status while a game is in play.
    InProgress,
    /// The cancel/reset hint.
    CancelControl,
    /// Final result.
    WinnerBanner,
}

/// Text slots the presentation layer displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// An engine-rendered view.
    View(View),
    /// Instruction or complaint shown to the human player.
    Prompt,
    /// Outcome message.
    Winner,
}

impl From<View> for Slot {
    fn from(view: View) -> Self {
        Slot::View(view)
    }
}

/// Sink for visibility changes and text.
pub trait Presenter {
    /// Shows or hides a panel.
    fn set_visible(&mut self, panel: Panel, visible: bool);

    /// Replaces the text of a slot.
    fn set_text(&mut self, slot: Slot, text: String);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn set_visible(&mut self, panel: Panel, visible: bool) {
        (**self).set_visible(panel, visible);
    }

    fn set_text(&mut self, slot: Slot, text: String) {
        (**self).set_text(slot, text);
    }
}

/// Presenter that writes everything to the log.
///
/// Used for headless runs where only the final result is printed.
#[derive(Debug, Default)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn set_visible(&mut self, panel: Panel, visible: bool) {
        debug!(?panel, visible, "Panel visibility");
    }

    fn set_text(&mut self, slot: Slot, text: String) {
        match slot {
            Slot::Winner => info!(%text, "Outcome"),
            Slot::View(View::Board) => debug!("Board:\n{}", text),
            _ => debug!(?slot, %text, "Slot updated"),
        }
    }
}

/// Copies the session's current views into the presenter.
///
/// The indexed overlay is only copied when `show_indexed_board` is set.
pub fn render_views<E, P>(session: &GameSession<E>, presenter: &mut P, show_indexed_board: bool)
where
    E: Engine,
    P: Presenter + ?Sized,
{
    for view in View::iter() {
        if view == View::IndexedBoard && !show_indexed_board {
            continue;
        }
        presenter.set_text(Slot::View(view), session.render(view));
    }
}
