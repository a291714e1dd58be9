//! Turn order, square validation and simple diagonal movement.

mod common;

use checkers::CheckersError;
use checkers::game::{GAME_NOT_ENDED, Game};
use checkers::piece::{Color, Piece, Rank};
use common::opening;

#[test]
fn opening_exchange_of_simple_moves() {
    let mut game = opening();

    game.play_move("Trevor", (5, 0), (4, 1)).unwrap();
    assert_eq!(game.turn(), Color::White);

    game.play_move("Rovert", (2, 1), (3, 0)).unwrap();
    assert_eq!(game.turn(), Color::Black);

    assert_eq!(game.piece_at((3, 0)), Ok(Some(Piece::man(Color::White))));
    assert_eq!(game.piece_at((2, 1)), Ok(None));
    assert_eq!(game.piece_at((4, 1)), Ok(Some(Piece::man(Color::Black))));
    assert_eq!(game.game_winner(), GAME_NOT_ENDED);
}

#[test]
fn black_moves_first() {
    let mut game = opening();
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(
        game.play_move("Rovert", (2, 1), (3, 0)),
        Err(CheckersError::OutOfTurn("Rovert".to_owned()))
    );
}

#[test]
fn unknown_player_is_rejected() {
    let mut game = opening();
    assert!(matches!(
        game.play_move("NotAPlayer", (5, 0), (4, 1)),
        Err(CheckersError::InvalidPlayer(_))
    ));
}

#[test]
fn off_board_squares_are_rejected() {
    let mut game = opening();
    assert_eq!(
        game.play_move("Trevor", (8, 0), (7, 1)),
        Err(CheckersError::InvalidSquare { row: 8, col: 0 })
    );
    assert_eq!(
        game.play_move("Trevor", (5, 0), (8, 1)),
        Err(CheckersError::InvalidSquare { row: 8, col: 1 })
    );
    assert_eq!(
        game.play_move("Trevor", (5, 0), (4, -1)),
        Err(CheckersError::InvalidSquare { row: 4, col: -1 })
    );
    assert_eq!(game.piece_at((-1, 0)), Err(CheckersError::InvalidSquare { row: -1, col: 0 }));
}

#[test]
fn light_squares_are_rejected() {
    let mut game = opening();
    assert_eq!(
        game.play_move("Trevor", (5, 0), (4, 0)),
        Err(CheckersError::InvalidSquare { row: 4, col: 0 })
    );
    assert_eq!(game.piece_at((0, 0)), Err(CheckersError::InvalidSquare { row: 0, col: 0 }));
    assert_eq!(game.piece_at((7, 7)), Err(CheckersError::InvalidSquare { row: 7, col: 7 }));
}

#[test]
fn non_diagonal_and_occupied_moves_are_rejected() {
    let mut game = opening();
    game.play_move("Trevor", (5, 2), (4, 3)).unwrap();

    // sideways onto a square occupied by its own man
    assert!(matches!(
        game.play_move("Rovert", (2, 1), (2, 3)),
        Err(CheckersError::InvalidMove(_))
    ));
    // straight ahead two rows
    assert_eq!(
        game.play_move("Rovert", (2, 1), (4, 1)),
        Err(CheckersError::InvalidMove("pieces move one or two squares diagonally"))
    );
    // three squares along a diagonal, but onto a black man
    assert_eq!(
        game.play_move("Rovert", (2, 7), (5, 4)),
        Err(CheckersError::InvalidMove("the destination square is occupied"))
    );
}

#[test]
fn long_diagonals_are_rejected() {
    let long = Err(CheckersError::InvalidMove("pieces move one or two squares diagonally"));

    let mut game = Game::from_fen("1m6/8/8/8/3M4/8/8/8", Color::Black).unwrap();
    game.create_player("Trevor", Color::Black).unwrap();
    assert_eq!(game.play_move("Trevor", (4, 3), (1, 0)), long);
    assert_eq!(game.play_move("Trevor", (4, 3), (0, 7)), long);

    let mut game = Game::from_fen("1m6/8/8/8/3K4/8/8/8", Color::Black).unwrap();
    game.create_player("Trevor", Color::Black).unwrap();
    assert_eq!(game.play_move("Trevor", (4, 3), (7, 0)), long);
    assert_eq!(game.piece_at((4, 3)), Ok(Some(Piece::new(Color::Black, Rank::King))));
}

#[test]
fn pieces_must_belong_to_the_mover() {
    let mut game = opening();
    assert!(matches!(
        game.play_move("Trevor", (2, 1), (3, 0)),
        Err(CheckersError::InvalidMove(_))
    ));
    assert!(matches!(
        game.play_move("Trevor", (4, 1), (3, 0)),
        Err(CheckersError::InvalidMove(_))
    ));
}

#[test]
fn men_cannot_step_backward() {
    let mut game = opening();
    game.play_move("Trevor", (5, 0), (4, 1)).unwrap();
    game.play_move("Rovert", (2, 7), (3, 6)).unwrap();

    assert_eq!(
        game.play_move("Trevor", (4, 1), (5, 0)),
        Err(CheckersError::InvalidMove("men may only move forward"))
    );
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn kings_step_in_every_direction() {
    let mut game = Game::from_fen("1m6/8/8/4K3/8/8/8/8", Color::Black).unwrap();
    game.create_player("Trevor", Color::Black).unwrap();
    game.create_player("Rovert", Color::White).unwrap();

    game.play_move("Trevor", (3, 4), (4, 5)).unwrap();
    game.play_move("Rovert", (0, 1), (1, 2)).unwrap();
    game.play_move("Trevor", (4, 5), (5, 4)).unwrap();
    game.play_move("Rovert", (1, 2), (2, 1)).unwrap();
    game.play_move("Trevor", (5, 4), (4, 3)).unwrap();

    assert_eq!(game.piece_at((4, 3)), Ok(Some(Piece::new(Color::Black, Rank::King))));
}

#[test]
fn legal_moves_lists_the_opening() {
    let game = opening();
    let moves = game.legal_moves();
    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|mv| mv.from.row() == 5 && mv.to.row() == 4));
}

#[test]
fn players_can_be_registered_late() {
    let mut game = Game::opening();
    game.create_player("Trevor", Color::Black).unwrap();
    game.play_move("Trevor", (5, 0), (4, 1)).unwrap();

    let white = game.create_player("Rovert", Color::White).unwrap();
    assert_eq!(white.piece_count(), 12);
    game.play_move("Rovert", (2, 1), (3, 0)).unwrap();
}
