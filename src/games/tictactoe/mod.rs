//! Tic-tac-toe rules engine.

mod position;
mod rules;
mod types;

pub use position::Position;
pub use rules::TicTacToe;
pub use types::{Board, Mark, Square};
