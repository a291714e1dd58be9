use crate::board::Board;
use crate::display_format::DisplayFormat;
use crate::error::{CheckersError, Result};
use crate::piece::{Color, Piece, Rank};
use crate::player::Player;
use crate::rules::{self, ValidatedMove};
use crate::square::{Move, Square};
use log::{debug, info, trace};
use std::fmt::{Display, Formatter};

pub const GAME_NOT_ENDED: &str = "Game has not ended";

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    players: [Option<Player>; 2],
    turn: Color,
    pending: Option<Square>, // piece in the middle of a capture sequence
    outcome: Option<Outcome>,
    history: Vec<Ply>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    BlackWon,
    WhiteWon,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Ply {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<(Square, Piece)>,
    pub rank: Rank,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MoveOutcome {
    pub captured: Option<Square>,
    pub promotion: Option<Rank>,
    pub continues: bool,
    /// Total opponent pieces captured by the mover so far.
    pub captured_total: u32,
    pub outcome: Option<Outcome>,
}

impl Outcome {
    pub fn won_by(color: Color) -> Self {
        match color {
            Color::Black => Self::BlackWon,
            Color::White => Self::WhiteWon,
        }
    }

    pub fn winner(&self) -> Color {
        match self {
            Self::BlackWon => Color::Black,
            Self::WhiteWon => Color::White,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} won", self.winner())
    }
}

impl Game {
    pub fn new(board: Board, turn: Color) -> Self {
        let mut game = Self {
            board,
            players: [None, None],
            turn,
            pending: None,
            outcome: None,
            history: Vec::new(),
        };
        game.check_termination();
        game
    }

    pub fn opening() -> Self {
        Self::new(Board::opening(), Color::Black)
    }

    pub fn from_fen(fen: &str, turn: Color) -> Option<Self> {
        Some(Self::new(Board::from_fen(fen)?, turn))
    }

    pub fn fen(&self) -> (String, Color) {
        (self.board.fen(), self.turn)
    }

    pub fn create_player(&mut self, name: &str, color: Color) -> Result<&Player> {
        if self.players.iter().flatten().any(|player| player.name() == name) {
            return Err(CheckersError::InvalidPlayer(format!("player name already exists: {name}")));
        }
        if let Some(player) = &self.players[color.index()] {
            return Err(CheckersError::InvalidPlayer(format!(
                "{color} is already taken by {}",
                player.name()
            )));
        }

        info!("player '{name}' registered as {color}");
        let player = self.players[color.index()].insert(Player::new(name.to_owned(), color, &self.board));
        Ok(player)
    }

    pub fn player(&self, name: &str) -> Result<&Player> {
        self.players
            .iter()
            .flatten()
            .find(|player| player.name() == name)
            .ok_or_else(|| CheckersError::InvalidPlayer(format!("unknown player: {name}")))
    }

    pub fn player_by_color(&self, color: Color) -> Option<&Player> {
        self.players[color.index()].as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn pending(&self) -> Option<Square> {
        self.pending
    }

    pub fn history(&self) -> &[Ply] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|ply| ply.mv)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn piece_at(&self, (row, col): (i32, i32)) -> Result<Option<Piece>> {
        Ok(self.board[Square::new(row, col)?])
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        if self.outcome.is_some() {
            return Vec::new();
        }
        rules::legal_moves(&self.board, self.turn, self.pending)
    }

    pub fn validate_move(&self, name: &str, from: (i32, i32), to: (i32, i32)) -> Result<ValidatedMove> {
        if self.outcome.is_some() {
            return Err(CheckersError::InvalidMove("the game has already ended"));
        }

        let player = self.player(name)?;
        if player.color() != self.turn {
            return Err(CheckersError::OutOfTurn(name.to_owned()));
        }

        let mv = Move::new(Square::new(from.0, from.1)?, Square::new(to.0, to.1)?);
        rules::validate(&self.board, self.turn, mv, self.pending)
    }

    pub fn play_move(&mut self, name: &str, from: (i32, i32), to: (i32, i32)) -> Result<MoveOutcome> {
        let validated = self
            .validate_move(name, from, to)
            .inspect_err(|err| debug!("rejected move {from:?} to {to:?} by '{name}': {err}"))?;
        Ok(self.apply(validated))
    }

    fn apply(&mut self, validated: ValidatedMove) -> MoveOutcome {
        let ValidatedMove {
            mv,
            piece,
            capture,
            rank,
            continues,
        } = validated;
        let color = piece.color();

        let captured = capture.and_then(|square| self.board.remove(square).map(|jumped| (square, jumped)));
        if let Some((_, jumped)) = captured {
            if let Some(opponent) = &mut self.players[color.opponent().index()] {
                opponent.record_loss(jumped);
            }
            if let Some(player) = &mut self.players[color.index()] {
                player.record_capture();
            }
        }

        self.board.remove(mv.from);
        self.board.place(mv.to, piece.with_rank(rank));
        if let Some(promotion) = validated.promotion()
            && let Some(player) = &mut self.players[color.index()]
        {
            player.record_promotion(piece.rank(), promotion);
        }

        self.history.push(Ply {
            mv,
            piece,
            captured,
            rank,
        });
        debug!("{color} played {mv} ({}), capture {capture:?}", rank.name());

        if continues {
            trace!("{color} must continue capturing from {}", mv.to);
            self.pending = Some(mv.to);
        } else {
            self.pending = None;
            self.turn = self.turn.opponent();
            self.check_termination();
        }

        MoveOutcome {
            captured: capture,
            promotion: validated.promotion(),
            continues,
            captured_total: self.player_by_color(color).map_or(0, Player::captured_count),
            outcome: self.outcome,
        }
    }

    fn check_termination(&mut self) {
        if self.outcome.is_some() {
            return;
        }

        let color = self.turn;
        let reason = if self.board.count(color) == 0 {
            "no pieces"
        } else if rules::legal_moves(&self.board, color, self.pending).is_empty() {
            "no legal moves"
        } else {
            return;
        };

        let outcome = Outcome::won_by(color.opponent());
        info!("{color} has {reason} left, {outcome}");
        self.outcome = Some(outcome);
    }

    /// Name of the winning player, or [`GAME_NOT_ENDED`].
    pub fn game_winner(&self) -> &str {
        match self.outcome {
            None => GAME_NOT_ENDED,
            Some(outcome) => {
                let winner = outcome.winner();
                self.player_by_color(winner).map_or(winner.name(), Player::name)
            }
        }
    }

    pub fn display(&self, format: DisplayFormat) -> impl Display + '_ {
        struct Impl<'a>(&'a Game, DisplayFormat);
        return Impl(self, format);

        impl Impl<'_> {
            fn format_row(&self, f: &mut Formatter<'_>, row: i8) -> std::fmt::Result {
                let &Self(game, format) = self;
                write!(f, "{row}")?;

                let last = game.last_move();
                for col in 0..Board::SIZE {
                    let Ok(square) = Square::new(row as i32, col as i32) else {
                        write!(f, "   ")?;
                        continue;
                    };

                    match game.board[square] {
                        Some(piece) => {
                            let piece = piece.display(format.with_concise(true));
                            if format.effects && last.is_some_and(|mv| mv.to == square) {
                                write!(f, " \x1B[3m{piece}\x1B[0m")?;
                            } else {
                                write!(f, " {piece}")?;
                            }
                        }
                        None if last.is_some_and(|mv| mv.from == square) => write!(f, " ╶╴")?,
                        None => write!(f, " . ")?,
                    }
                }

                Ok(())
            }

            fn format_captured(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                let &Self(game, format) = self;
                let captured = game.history.iter().filter_map(|ply| ply.captured);
                if captured.clone().next().is_none() {
                    return Ok(());
                }

                write!(f, "captured:")?;
                for color in Color::ALL {
                    write!(f, " ")?;
                    for (_, piece) in captured.clone().filter(|(_, piece)| piece.color() == color) {
                        write!(f, "{}", piece.display(format.with_concise(true)))?;
                    }
                }
                writeln!(f)
            }
        }

        impl Display for Impl<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                let &Self(game, format) = self;
                write!(f, "{}", game.board.fen())?;

                if format.concise {
                    return write!(f, " {}", game.turn);
                }

                writeln!(f)?;

                for row in 0..Board::SIZE {
                    self.format_row(f, row)?;
                    writeln!(f)?;
                }

                for col in 0..Board::SIZE {
                    write!(f, "  {col}")?;
                }
                writeln!(f)?;
                self.format_captured(f)?;

                if let Some(ply) = game.history.last() {
                    let piece = ply.piece.with_rank(ply.rank).display(format.with_concise(true));
                    write!(f, "({}) {} {piece} - ", game.history.len(), ply.mv)?;
                }

                if let Some(outcome) = game.outcome {
                    write!(f, "{outcome}, winner {}", game.game_winner())?;
                } else {
                    let name = game.player_by_color(game.turn).map_or(game.turn.name(), Player::name);
                    let action = if game.pending.is_some() { "to continue capturing" } else { "to play" };
                    write!(f, "{name} ({}) {action} - {} legal moves", game.turn, game.legal_moves().len())?;
                }

                writeln!(f)
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::opening()
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(DisplayFormat::string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        let mut game = Game::opening();
        game.create_player("Trevor", Color::Black).unwrap();
        game.create_player("Rovert", Color::White).unwrap();
        game
    }

    #[test]
    fn registers_players_once() {
        let mut game = game();
        assert!(matches!(
            game.create_player("Trevor", Color::White),
            Err(CheckersError::InvalidPlayer(_))
        ));

        let mut fresh = Game::opening();
        fresh.create_player("a", Color::Black).unwrap();
        assert!(matches!(
            fresh.create_player("b", Color::Black),
            Err(CheckersError::InvalidPlayer(_))
        ));

        let player = game.player("Rovert").unwrap();
        assert_eq!(player.color(), Color::White);
        assert_eq!(player.piece_count(), 12);
        assert!(matches!(game.player("nobody"), Err(CheckersError::InvalidPlayer(_))));
    }

    #[test]
    fn rejected_move_leaves_state_untouched() {
        let mut game = game();
        let before = game.fen();
        assert!(game.play_move("Trevor", (5, 0), (3, 2)).is_err());
        assert!(game.play_move("Trevor", (5, 0), (4, 0)).is_err());
        assert_eq!(game.fen(), before);
        assert!(game.history().is_empty());
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn simple_moves_alternate_turns() {
        let mut game = game();
        let outcome = game.play_move("Trevor", (5, 0), (4, 1)).unwrap();
        assert_eq!(outcome.captured, None);
        assert!(!outcome.continues);
        assert_eq!(game.turn(), Color::White);

        game.play_move("Rovert", (2, 1), (3, 0)).unwrap();
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.game_winner(), GAME_NOT_ENDED);
        assert_eq!(game.last_move().map(|mv| mv.to.to_string()), Some("3,0".to_owned()));
    }

    #[test]
    fn piece_at_checks_squares() {
        let game = game();
        assert_eq!(game.piece_at((5, 0)), Ok(Some(Piece::man(Color::Black))));
        assert_eq!(game.piece_at((4, 1)), Ok(None));
        assert_eq!(game.piece_at((4, 0)), Err(CheckersError::InvalidSquare { row: 4, col: 0 }));
        assert_eq!(game.piece_at((8, 1)), Err(CheckersError::InvalidSquare { row: 8, col: 1 }));
    }

    #[test]
    fn side_without_moves_loses_immediately() {
        // the lone white man on 7,0 can neither step nor jump
        let game = Game::from_fen("8/8/8/8/8/8/8/m7", Color::White).unwrap();
        assert_eq!(game.outcome(), Some(Outcome::BlackWon));
        assert_eq!(game.game_winner(), "Black");
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn renders_status_line() {
        let mut game = game();
        game.play_move("Trevor", (5, 0), (4, 1)).unwrap();
        let text = game.to_string();
        assert!(text.starts_with(&game.board().fen()));
        assert!(text.contains("(1) 5,0-4,1 MM - Rovert (White) to play - 7 legal moves"));
        assert_eq!(
            game.display(DisplayFormat::string().with_concise(true)).to_string(),
            format!("{} White", game.board().fen())
        );
    }
}
