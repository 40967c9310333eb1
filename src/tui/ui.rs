//! Stateless UI rendering for the game loop.

use std::collections::{HashMap, HashSet};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use crate::controller::{GameMode, Panel, Slot};
use crate::engine::View;

/// Everything the presenter has been told so far.
#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    visible: HashSet<Panel>,
    texts: HashMap<Slot, String>,
}

impl ScreenState {
    /// Creates an empty screen with every panel hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows or hides a panel.
    pub fn set_visible(&mut self, panel: Panel, visible: bool) {
        if visible {
            self.visible.insert(panel);
        } else {
            self.visible.remove(&panel);
        }
    }

    /// Replaces a slot's text.
    pub fn set_text(&mut self, slot: Slot, text: String) {
        self.texts.insert(slot, text);
    }

    /// True if the panel is shown.
    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible.contains(&panel)
    }

    /// Text of a slot, empty if never set.
    pub fn text(&self, slot: Slot) -> &str {
        self.texts.get(&slot).map(String::as_str).unwrap_or("")
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, screen: &ScreenState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Prompt
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let title = Paragraph::new("Strictly Loop - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if screen.is_visible(Panel::StartMenu) {
        draw_start_menu(frame, chunks[1]);
    } else if screen.is_visible(Panel::InProgress) {
        draw_game(frame, chunks[1], screen);
    }

    let prompt = Paragraph::new(screen.text(Slot::Prompt).to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(prompt, chunks[2]);

    draw_hints(frame, chunks[3], screen);
}

fn draw_start_menu(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("Choose a mode:"), Line::from("")];
    for mode in GameMode::iter() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}  ", mode.menu_key()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(mode.name()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("  q  Quit"));

    let menu = Paragraph::new(lines).block(Block::default().title("Start").borders(Borders::ALL));
    frame.render_widget(menu, center_rect(area, 40, 9));
}

fn draw_game(frame: &mut Frame, area: Rect, screen: &ScreenState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(4), Constraint::Length(3)])
        .split(area);

    let overlay = screen.text(Slot::View(View::IndexedBoard));
    let boards = if overlay.is_empty() {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(100)])
            .split(rows[0])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0])
    };

    let board = Paragraph::new(screen.text(Slot::View(View::Board)).to_string())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().title("Board").borders(Borders::ALL));
    frame.render_widget(board, boards[0]);

    if !overlay.is_empty() {
        let indexed = Paragraph::new(overlay.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title("Cells").borders(Borders::ALL));
        frame.render_widget(indexed, boards[1]);
    }

    let status = format!(
        "{}\n{}",
        screen.text(Slot::View(View::PlayerStatus)),
        screen.text(Slot::View(View::GameState))
    );
    frame.render_widget(Paragraph::new(status), rows[1]);

    if screen.is_visible(Panel::WinnerBanner) {
        let banner = Paragraph::new(screen.text(Slot::Winner).to_string())
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(banner, rows[2]);
    }
}

fn draw_hints(frame: &mut Frame, area: Rect, screen: &ScreenState) {
    let hint = if screen.is_visible(Panel::CancelControl) {
        "0-8 place mark   Esc cancel game"
    } else if screen.is_visible(Panel::WinnerBanner) {
        "Any key returns to the menu"
    } else {
        ""
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
