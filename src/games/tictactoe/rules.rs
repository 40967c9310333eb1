//! Game logic and rules for tic-tac-toe.

use super::position::Position;
use super::types::{Board, Mark, Square};
use crate::engine::{Engine, EngineError, MoveResult, Outcome, Seat, View};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine.
///
/// Automatic seats play a uniformly random vacant square. Seed the engine
/// with [`TicTacToe::with_seed`] for reproducible automatic play.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    board: Board,
    to_move: Mark,
    /// Automatic/manual setting per seat, Player 1 first.
    automatic: [bool; 2],
    started: bool,
    outcome: Outcome,
    history: Vec<Position>,
    rng: StdRng,
}

impl TicTacToe {
    /// Creates an unstarted game seeded from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates an unstarted game with a deterministic automatic player.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            // Both seats play automatically until start() says otherwise.
            automatic: [true, true],
            started: false,
            outcome: Outcome::InProgress,
            history: Vec::new(),
            rng,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns true if the seat plays automatically.
    pub fn is_automatic(&self, seat: Seat) -> bool {
        self.automatic[seat_index(seat)]
    }

    fn kind_label(&self, seat: Seat) -> &'static str {
        if self.is_automatic(seat) {
            "automatic"
        } else {
            "manual"
        }
    }

    /// Places the current mark and updates the outcome.
    fn place(&mut self, pos: Position) {
        let mark = self.to_move;
        self.board.set(pos, Square::Occupied(mark));
        self.history.push(pos);
        debug!(mark = %mark, position = %pos, "Mark placed");

        if let Some(winner) = self.board.winner() {
            self.outcome = match winner.seat() {
                Seat::Player1 => Outcome::Player1Wins,
                Seat::Player2 => Outcome::Player2Wins,
            };
            info!(outcome = %self.outcome, moves = self.history.len(), "Game won");
        } else if self.board.is_full() {
            self.outcome = Outcome::Draw;
            info!(moves = self.history.len(), "Game drawn");
        } else {
            self.to_move = Mark::for_seat(mark.seat().opponent());
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

fn seat_index(seat: Seat) -> usize {
    match seat {
        Seat::Player1 => 0,
        Seat::Player2 => 1,
    }
}

impl Engine for TicTacToe {
    fn new_session() -> Self {
        Self::new()
    }

    #[instrument(skip(self))]
    fn start(&mut self, player1_automatic: bool, player2_automatic: bool) -> Result<(), EngineError> {
        if self.started {
            return Err(EngineError::new("Game already started; reset it first"));
        }
        self.automatic = [player1_automatic, player2_automatic];
        self.started = true;
        info!(
            player1 = self.kind_label(Seat::Player1),
            player2 = self.kind_label(Seat::Player2),
            "Game started"
        );
        Ok(())
    }

    #[instrument(skip(self), fields(to_move = %self.to_move))]
    fn submit_move(&mut self, cell: Option<usize>) -> MoveResult {
        let Some(seat) = self.to_move() else {
            debug!("Move submitted outside of play");
            return MoveResult::Rejected;
        };

        let pos = match cell {
            Some(index) => {
                let Some(pos) = Position::from_index(index) else {
                    return MoveResult::InvalidCell;
                };
                if self.is_automatic(seat) {
                    debug!(%seat, "Manual move submitted for an automatic seat");
                    return MoveResult::Rejected;
                }
                if !self.board.is_empty(pos) {
                    debug!(position = %pos, "Square is already occupied");
                    return MoveResult::Rejected;
                }
                pos
            }
            None => {
                if !self.is_automatic(seat) {
                    debug!(%seat, "Automatic move requested for a manual seat");
                    return MoveResult::Rejected;
                }
                let vacant = self.board.vacant();
                match vacant.choose(&mut self.rng) {
                    Some(pos) => *pos,
                    None => return MoveResult::Rejected,
                }
            }
        };

        self.place(pos);
        MoveResult::Applied
    }

    fn is_terminal(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    fn outcome(&self) -> Outcome {
        self.outcome
    }

    fn to_move(&self) -> Option<Seat> {
        if self.started && !self.is_terminal() {
            Some(self.to_move.seat())
        } else {
            None
        }
    }

    #[instrument(skip(self))]
    fn reset(&mut self) {
        let rng = self.rng.clone();
        *self = Self::from_rng(rng);
        debug!("Game reset");
    }

    fn render(&self, view: View) -> String {
        match view {
            View::Board => self.board.display(),
            View::IndexedBoard => self.board.display_indexed(),
            View::PlayerStatus => format!(
                "Player 1 ({})\nPlayer 2 ({})",
                self.kind_label(Seat::Player1),
                self.kind_label(Seat::Player2)
            ),
            View::GameState => {
                if self.is_terminal() {
                    "Game ended".to_string()
                } else if self.started {
                    format!("Game in play, {}'s turn", self.to_move)
                } else {
                    "Game not started".to_string()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual_game() -> TicTacToe {
        let mut game = TicTacToe::with_seed(7);
        game.start(false, false).expect("fresh game starts");
        game
    }

    fn play(game: &mut TicTacToe, cells: &[usize]) {
        for cell in cells {
            assert_eq!(game.submit_move(Some(*cell)), MoveResult::Applied, "cell {cell}");
        }
    }

    #[test]
    fn test_player_settings() {
        let mut game = TicTacToe::with_seed(1);
        assert_eq!(
            game.render(View::PlayerStatus),
            "Player 1 (automatic)\nPlayer 2 (automatic)"
        );
        game.start(false, true).unwrap();
        assert_eq!(
            game.render(View::PlayerStatus),
            "Player 1 (manual)\nPlayer 2 (automatic)"
        );
        game.reset();
        game.start(true, false).unwrap();
        assert_eq!(
            game.render(View::PlayerStatus),
            "Player 1 (automatic)\nPlayer 2 (manual)"
        );
    }

    #[test]
    fn test_board_display() {
        let game = manual_game();
        let expected = "    |   |  \n -----------\n    |   |  \n -----------\n    |   |  \n";
        assert_eq!(game.render(View::Board), expected);
        assert_eq!(game.render(View::GameState), "Game in play, X's turn");
    }

    #[test]
    fn test_indexed_board_labels_vacant_cells() {
        let mut game = manual_game();
        play(&mut game, &[4]);
        let expected = "  0 | 1 | 2\n -----------\n  3 | X | 5\n -----------\n  6 | 7 | 8\n";
        assert_eq!(game.render(View::IndexedBoard), expected);
    }

    #[test]
    fn test_start_twice_fails() {
        let mut game = manual_game();
        assert!(game.start(true, true).is_err());
    }

    #[test]
    fn test_move_validation() {
        let mut game = manual_game();
        assert_eq!(game.submit_move(Some(9)), MoveResult::InvalidCell);
        assert_eq!(game.submit_move(None), MoveResult::Rejected);
        play(&mut game, &[0]);
        assert_eq!(game.submit_move(Some(0)), MoveResult::Rejected);
        assert_eq!(game.to_move(), Some(Seat::Player2));
        assert_eq!(game.history(), &[Position::TopLeft]);
    }

    #[test]
    fn test_unstarted_game_rejects_moves() {
        let mut game = TicTacToe::with_seed(3);
        assert_eq!(game.to_move(), None);
        assert_eq!(game.submit_move(None), MoveResult::Rejected);
        assert_eq!(game.render(View::GameState), "Game not started");
    }

    #[test]
    fn test_win_detection() {
        let mut game = manual_game();
        // X takes the top row.
        play(&mut game, &[0, 4, 1, 6, 2]);
        assert!(game.is_terminal());
        assert_eq!(game.outcome(), Outcome::Player1Wins);
        assert_eq!(game.to_move(), None);
        assert_eq!(game.submit_move(Some(8)), MoveResult::Rejected);
        assert_eq!(game.render(View::GameState), "Game ended");
    }

    #[test]
    fn test_draw_detection() {
        let mut game = manual_game();
        play(&mut game, &[0, 4, 2, 1, 3, 5, 7, 6, 8]);
        assert!(game.is_terminal());
        assert_eq!(game.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_auto_move_reaches_endgame() {
        for seed in 0..50 {
            let mut game = TicTacToe::with_seed(seed);
            game.start(true, true).unwrap();
            let mut moves = 0;
            while !game.is_terminal() {
                assert_eq!(game.submit_move(None), MoveResult::Applied);
                moves += 1;
                assert!(moves <= 9, "seed {seed} did not end within nine moves");
            }
            assert!(moves >= 5);
        }
    }

    #[test]
    fn test_reset_clears_state() {
        let mut game = manual_game();
        play(&mut game, &[0, 4, 1, 6, 2]);
        game.reset();
        assert!(!game.is_terminal());
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.history().is_empty());
        assert!(game.board().vacant().len() == 9);
        assert_eq!(game.to_move(), None);
    }
}
