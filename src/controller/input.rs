//! Keyboard input and the single-slot mailbox the scheduler awaits.

use crossterm::event::KeyCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, instrument};

/// A resolved keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    /// Select the cell with this index.
    Select(usize),
    /// Abandon the play-through.
    Cancel,
}

/// Maps a key to an input signal.
///
/// Digits 0-8 select a cell and Escape cancels; every other key yields
/// `None` and must be ignored.
pub fn key_to_signal(key: KeyCode) -> Option<InputSignal> {
    match key {
        KeyCode::Esc => Some(InputSignal::Cancel),
        KeyCode::Char(c) => c
            .to_digit(10)
            .map(|digit| digit as usize)
            .filter(|index| *index <= 8)
            .map(InputSignal::Select),
        _ => None,
    }
}

/// Creates a connected handle/mailbox pair.
pub fn mailbox() -> (InputHandle, Mailbox) {
    let (tx, rx) = mpsc::channel(1);
    let cancelled = Arc::new(AtomicBool::new(false));
    (
        InputHandle {
            tx,
            cancelled: Arc::clone(&cancelled),
        },
        Mailbox { rx, cancelled },
    )
}

/// Posting side, held by the keyboard handler.
#[derive(Debug, Clone)]
pub struct InputHandle {
    tx: mpsc::Sender<InputSignal>,
    cancelled: Arc<AtomicBool>,
}

impl InputHandle {
    /// Posts a signal without waiting.
    ///
    /// A cancel always raises the cancel flag. A selection arriving while the
    /// slot is still occupied is dropped. Returns false if nothing was queued.
    #[instrument(skip(self))]
    pub fn push(&self, signal: InputSignal) -> bool {
        if signal == InputSignal::Cancel {
            self.cancelled.store(true, Ordering::SeqCst);
        }
        match self.tx.try_send(signal) {
            Ok(()) => true,
            Err(TrySendError::Full(dropped)) => {
                debug!(?dropped, "Mailbox full, input dropped");
                false
            }
            Err(TrySendError::Closed(_)) => false,
        }
    }

    /// Maps and posts a key press; unmapped keys are ignored.
    pub fn push_key(&self, key: KeyCode) -> bool {
        match key_to_signal(key) {
            Some(signal) => self.push(signal),
            None => false,
        }
    }

    /// Posts a signal, waiting for the slot to free up.
    ///
    /// Returns false once the mailbox has been dropped.
    pub async fn send(&self, signal: InputSignal) -> bool {
        if signal == InputSignal::Cancel {
            self.cancelled.store(true, Ordering::SeqCst);
        }
        self.tx.send(signal).await.is_ok()
    }
}

/// Receiving side, awaited by the turn scheduler.
#[derive(Debug)]
pub struct Mailbox {
    rx: mpsc::Receiver<InputSignal>,
    cancelled: Arc<AtomicBool>,
}

impl Mailbox {
    /// Waits for the next signal; `None` once every handle is gone.
    pub async fn next(&mut self) -> Option<InputSignal> {
        self.rx.recv().await
    }

    /// True if a cancel was posted since the last [`Mailbox::clear`].
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Drops any pending signal and lowers the cancel flag.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        while let Ok(stale) = self.rx.try_recv() {
            debug!(?stale, "Discarding stale input");
        }
        self.cancelled.store(false, Ordering::SeqCst);
    }

    /// Discards a pending selection without waiting.
    ///
    /// Keys pressed during an automatic turn are not carried over to the
    /// next human turn.
    pub(crate) fn discard_pending(&mut self) {
        while let Ok(stale) = self.rx.try_recv() {
            debug!(?stale, "Ignoring input outside a human turn");
        }
    }
}
