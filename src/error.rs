//! Controller error types.

use derive_more::{Display, Error};
use tracing::{instrument, warn};

use crate::engine::EngineError;

/// What went wrong in the controller.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ControllerErrorKind {
    /// Mode selection named neither supported mode.
    #[display("Invalid mode '{}' (expected auto-vs-auto or human-vs-auto)", _0)]
    InvalidMode(String),

    /// Outcome requested while the game is still in progress.
    #[display("Outcome requested before the game reached a terminal state")]
    PreconditionViolation,

    /// The engine refused to start the session.
    #[display("Engine failed to start the session: {}", _0)]
    EngineStart(String),

    /// A cancelled session was run again without a reset.
    #[display("Session was cancelled and must be reset before reuse")]
    SessionNotReset,

    /// The session was run before the engine was started.
    #[display("Session has not been started")]
    SessionNotStarted,

    /// The engine refused a move it was asked to choose itself.
    #[display("Engine rejected an automatic move for {}", _0)]
    AutomaticMoveRejected(String),

    /// A play-through was requested while another session is active.
    #[display("A session is already in play")]
    SessionActive,

    /// The input mailbox closed while waiting for a human move.
    #[display("Input mailbox closed while waiting for a move")]
    InputClosed,
}

/// Controller error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Controller error: {} at {}:{}", kind, file, line)]
pub struct ControllerError {
    /// Error kind.
    pub kind: ControllerErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ControllerError {
    /// Creates a new controller error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ControllerErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        warn!(error_kind = %kind, "Controller error created");
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &ControllerErrorKind {
        &self.kind
    }
}

impl From<ControllerErrorKind> for ControllerError {
    #[track_caller]
    fn from(kind: ControllerErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<EngineError> for ControllerError {
    #[track_caller]
    fn from(err: EngineError) -> Self {
        Self::new(ControllerErrorKind::EngineStart(err.message))
    }
}

/// Result alias for controller operations.
pub type ControllerResult<T> = Result<T, ControllerError>;
