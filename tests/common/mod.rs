#![allow(dead_code)]

use checkers::game::Game;
use checkers::piece::Color;

pub fn registered(mut game: Game) -> Game {
    game.create_player("Trevor", Color::Black).unwrap();
    game.create_player("Rovert", Color::White).unwrap();
    game
}

pub fn setup(fen: &str, turn: Color) -> Game {
    registered(Game::from_fen(fen, turn).unwrap())
}

pub fn opening() -> Game {
    registered(Game::opening())
}
