//! Tests for the bundled tic-tac-toe engine through the `Engine` seam.

use strictly_loop::{Engine, Mark, MoveResult, Outcome, Position, Seat, Square, TicTacToe, View};

fn started(p1_auto: bool, p2_auto: bool) -> TicTacToe {
    let mut game = TicTacToe::with_seed(7);
    game.start(p1_auto, p2_auto).expect("fresh engine starts");
    game
}

#[test]
fn test_position_index_round_trip() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_moves_fill_the_board() {
    let mut game = started(false, false);
    assert_eq!(game.submit_move(Some(0)), MoveResult::Applied);
    assert_eq!(game.submit_move(Some(4)), MoveResult::Applied);

    let board = game.board();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
    assert_eq!(board.get(Position::Center), Square::Occupied(Mark::O));
    assert_eq!(board.vacant().len(), 7);
    assert!(!board.vacant().contains(&Position::Center));
}

#[test]
fn test_invalid_cells() {
    let mut game = started(false, false);
    assert_eq!(game.submit_move(Some(9)), MoveResult::InvalidCell);
    assert_eq!(game.submit_move(Some(4)), MoveResult::Applied);
    assert_eq!(game.submit_move(Some(4)), MoveResult::Rejected);
    assert_eq!(game.to_move(), Some(Seat::Player2));
}

#[test]
fn test_column_win() {
    let mut game = started(false, false);
    for cell in [1, 0, 4, 2, 7] {
        assert_eq!(game.submit_move(Some(cell)), MoveResult::Applied);
    }
    assert!(game.is_terminal());
    assert_eq!(game.outcome(), Outcome::Player1Wins);
    assert_eq!(game.to_move(), None);
    assert_eq!(game.render(View::GameState), "Game ended");
    assert_eq!(game.submit_move(Some(8)), MoveResult::Rejected);
}

#[test]
fn test_automatic_seat_picks_vacant_square() {
    let mut game = started(false, true);
    assert_eq!(game.submit_move(None), MoveResult::Rejected);
    assert_eq!(game.submit_move(Some(4)), MoveResult::Applied);
    assert_eq!(game.submit_move(Some(0)), MoveResult::Rejected);
    assert_eq!(game.submit_move(None), MoveResult::Applied);
    assert_ne!(game.history()[1], Position::Center);
    assert_eq!(game.to_move(), Some(Seat::Player1));
}

#[test]
fn test_views_render() {
    let game = started(true, false);
    assert_eq!(
        game.render(View::PlayerStatus),
        "Player 1 (automatic)\nPlayer 2 (manual)"
    );
    assert_eq!(game.render(View::GameState), "Game in play, X's turn");
    assert!(game.render(View::IndexedBoard).contains('8'));
    assert!(!game.render(View::Board).contains('8'));
}
