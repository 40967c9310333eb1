//! Terminal UI for the game loop.

mod presenter;
mod ui;

pub use presenter::TuiPresenter;
pub use ui::{ScreenState, draw};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use crate::config::LoopConfig;
use crate::controller::{Controller, GameMode, InputHandle, Mailbox, Presenter, Slot, mailbox};
use crate::games::tictactoe::TicTacToe;

/// Runs the interactive terminal front-end until the user quits.
///
/// With `mode` set the first game starts immediately; afterwards, and
/// otherwise, the start menu picks the mode.
#[instrument(skip(config))]
pub async fn run_tui(config: LoopConfig, mode: Option<GameMode>) -> Result<()> {
    // Log to a file so tracing output does not corrupt the screen.
    let log_file = std::fs::File::create("strictly_loop.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Strictly Loop TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let (input, mut mailbox) = mailbox();
    let (menu_tx, mut menu_rx) = mpsc::unbounded_channel();
    let stop = Arc::new(AtomicBool::new(false));
    let reader = spawn_key_reader(input, menu_tx, Arc::clone(&stop));

    let mut controller =
        Controller::with_factory(TuiPresenter::new(terminal), config.clone(), engine_factory(&config));

    let res = drive(&mut controller, &mut mailbox, &mut menu_rx, mode).await;

    stop.store(true, Ordering::SeqCst);
    if let Err(e) = reader.await {
        warn!(error = %e, "Key reader task failed");
    }

    disable_raw_mode()?;
    execute!(controller.presenter_mut().terminal_mut().backend_mut(), LeaveAlternateScreen)?;
    controller.presenter_mut().terminal_mut().show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Engine factory honouring the configured seed.
///
/// Each new session gets the next seed so consecutive games differ.
pub fn engine_factory(config: &LoopConfig) -> impl FnMut() -> TicTacToe + 'static {
    let seed = *config.seed();
    let mut games = 0u64;
    move || match seed {
        Some(seed) => {
            let engine = TicTacToe::with_seed(seed.wrapping_add(games));
            games += 1;
            engine
        }
        None => TicTacToe::new(),
    }
}

type TuiController = Controller<TicTacToe, TuiPresenter<CrosstermBackend<io::Stdout>>>;

async fn drive(
    controller: &mut TuiController,
    mailbox: &mut Mailbox,
    menu_rx: &mut mpsc::UnboundedReceiver<KeyCode>,
    mut next_mode: Option<GameMode>,
) -> Result<()> {
    loop {
        let mode = match next_mode.take() {
            Some(mode) => mode,
            None => match choose_mode(controller, menu_rx).await {
                Some(mode) => mode,
                None => break,
            },
        };

        match controller.play(mode, mailbox).await {
            Ok(result) => {
                if result.message().is_some() {
                    drain(menu_rx);
                    controller
                        .presenter_mut()
                        .set_text(Slot::Prompt, "Game over".to_string());
                    if menu_rx.recv().await.is_none() {
                        break;
                    }
                }
            }
            Err(e) => {
                error!(error = %e, "Play-through failed");
                controller.reset();
                controller
                    .presenter_mut()
                    .set_text(Slot::Prompt, e.kind().to_string());
                drain(menu_rx);
                continue;
            }
        }

        controller.reset();
        drain(menu_rx);
    }

    info!("User quit");
    Ok(())
}

/// Waits for a start-menu key. `None` means quit.
async fn choose_mode(
    controller: &mut TuiController,
    menu_rx: &mut mpsc::UnboundedReceiver<KeyCode>,
) -> Option<GameMode> {
    while let Some(key) = menu_rx.recv().await {
        match key {
            KeyCode::Char('q') => return None,
            KeyCode::Char(c) => match GameMode::from_menu_key(c) {
                Ok(mode) => {
                    info!(%mode, "Mode selected");
                    return Some(mode);
                }
                Err(e) => {
                    debug!(error = %e, "Ignoring menu key");
                    controller
                        .presenter_mut()
                        .set_text(Slot::Prompt, "Press 1 or 2 to play, q to quit".to_string());
                }
            },
            _ => {}
        }
    }
    None
}

fn drain(menu_rx: &mut mpsc::UnboundedReceiver<KeyCode>) {
    while menu_rx.try_recv().is_ok() {}
}

/// Polls crossterm for key presses on a blocking thread.
///
/// Digits and Escape go to the game mailbox; every key also goes to the
/// menu channel.
fn spawn_key_reader(
    input: InputHandle,
    menu_tx: mpsc::UnboundedSender<KeyCode>,
    stop: Arc<AtomicBool>,
) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !stop.load(Ordering::SeqCst) {
            match event::poll(Duration::from_millis(100)) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    error!(error = %e, "Failed to poll terminal events");
                    break;
                }
            }
            let key = match event::read() {
                Ok(Event::Key(key)) => key,
                Ok(_) => continue,
                Err(e) => {
                    error!(error = %e, "Failed to read terminal event");
                    break;
                }
            };
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            input.push_key(key.code);
            if menu_tx.send(key.code).is_err() {
                break;
            }
        }
        debug!("Key reader stopped");
    })
}
