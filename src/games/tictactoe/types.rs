//! Core domain types for tic-tac-toe.

use super::position::Position;
use crate::engine::Seat;
use serde::{Deserialize, Serialize};

/// Mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Player 1's mark (goes first).
    X,
    /// Player 2's mark.
    O,
}

impl Mark {
    /// Returns the mark played by a seat.
    pub fn for_seat(seat: Seat) -> Self {
        match seat {
            Seat::Player1 => Mark::X,
            Seat::Player2 => Mark::O,
        }
    }

    /// Returns the seat playing this mark.
    pub fn seat(self) -> Seat {
        match self {
            Mark::X => Seat::Player1,
            Mark::O => Seat::Player2,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Places a mark, overwriting whatever was there.
    pub(super) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the vacant positions in index order.
    pub fn vacant(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Checks for three in a row.
    pub fn winner(&self) -> Option<Mark> {
        for [a, b, c] in LINES {
            if let Square::Occupied(mark) = self.get(a) {
                if self.get(b) == Square::Occupied(mark) && self.get(c) == Square::Occupied(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    /// Formats the board with marks only; vacant cells are blank.
    pub fn display(&self) -> String {
        self.format_rows(|_| " ".to_string())
    }

    /// Formats the board with vacant cells labelled by their input index.
    pub fn display_indexed(&self) -> String {
        self.format_rows(|pos| pos.to_index().to_string())
    }

    fn format_rows(&self, vacant: impl Fn(Position) -> String) -> String {
        let mut result = String::new();
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .filter_map(|col| Position::from_index(row * 3 + col))
                .map(|pos| match self.get(pos) {
                    Square::Empty => vacant(pos),
                    Square::Occupied(mark) => mark.to_string(),
                })
                .collect();
            result.push_str(&format!("  {} | {} | {}\n", cells[0], cells[1], cells[2]));
            if row < 2 {
                result.push_str(" -----------\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
