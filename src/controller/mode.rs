//! Game mode selection.

use std::str::FromStr;

use crate::error::{ControllerError, ControllerErrorKind};
use crate::session::PlayerKind;

/// Which seats a human plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::EnumIter)]
pub enum GameMode {
    /// Both seats play automatically.
    AutoVsAuto,
    /// Player 1 is human, Player 2 automatic.
    #[default]
    HumanVsAuto,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::AutoVsAuto => "Automatic vs Automatic",
            GameMode::HumanVsAuto => "Human vs Automatic",
        }
    }

    /// Start-menu key that selects this mode.
    pub fn menu_key(&self) -> char {
        match self {
            GameMode::AutoVsAuto => '1',
            GameMode::HumanVsAuto => '2',
        }
    }

    /// Resolves a start-menu key press.
    #[track_caller]
    pub fn from_menu_key(key: char) -> Result<Self, ControllerError> {
        <Self as strum::IntoEnumIterator>::iter()
            .find(|mode| mode.menu_key() == key)
            .ok_or_else(|| ControllerError::new(ControllerErrorKind::InvalidMode(key.to_string())))
    }

    /// Player kinds for Player 1 and Player 2.
    pub fn player_kinds(&self) -> (PlayerKind, PlayerKind) {
        match self {
            GameMode::AutoVsAuto => (PlayerKind::Automatic, PlayerKind::Automatic),
            GameMode::HumanVsAuto => (PlayerKind::Human, PlayerKind::Automatic),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GameMode {
    type Err = ControllerError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "autovsauto" | "auto" => Ok(GameMode::AutoVsAuto),
            "humanvsauto" | "human" => Ok(GameMode::HumanVsAuto),
            _ => Err(ControllerError::new(ControllerErrorKind::InvalidMode(
                s.to_string(),
            ))),
        }
    }
}
