//! A rules engine for checkers with kings and triple kings.
//!
//! [`game::Game`] is the entry point: register two players, then submit moves
//! with [`game::Game::play_move`]. Each request is validated in full before the
//! board changes, so a rejected move never leaves partial state behind.
//!
//! ```
//! use checkers::game::{Game, GAME_NOT_ENDED};
//! use checkers::piece::Color;
//!
//! let mut game = Game::opening();
//! game.create_player("Trevor", Color::Black).unwrap();
//! game.create_player("Rovert", Color::White).unwrap();
//!
//! game.play_move("Trevor", (5, 0), (4, 1)).unwrap();
//! game.play_move("Rovert", (2, 1), (3, 0)).unwrap();
//! assert_eq!(game.game_winner(), GAME_NOT_ENDED);
//! ```

pub mod board;
pub mod display_format;
pub mod error;
pub mod game;
pub mod piece;
pub mod player;
pub mod rules;
pub mod square;

pub use error::{CheckersError, ParseSquareError, Result};
