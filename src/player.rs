use crate::board::Board;
use crate::piece::{Color, Piece, Rank};
use std::fmt::{Display, Formatter};

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Player {
    name: String,
    color: Color,
    pieces: u32,
    kings: u32,
    triple_kings: u32,
    captured: u32,
}

impl Player {
    pub(crate) fn new(name: String, color: Color, board: &Board) -> Self {
        Self {
            name,
            color,
            pieces: board.count(color),
            kings: board.count_rank(color, Rank::King),
            triple_kings: board.count_rank(color, Rank::TripleKing),
            captured: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn piece_count(&self) -> u32 {
        self.pieces
    }

    pub fn king_count(&self) -> u32 {
        self.kings
    }

    pub fn triple_king_count(&self) -> u32 {
        self.triple_kings
    }

    pub fn captured_count(&self) -> u32 {
        self.captured
    }

    pub(crate) fn record_capture(&mut self) {
        self.captured += 1;
    }

    pub(crate) fn record_loss(&mut self, piece: Piece) {
        self.pieces -= 1;
        self.adjust_rank(piece.rank(), false);
    }

    pub(crate) fn record_promotion(&mut self, from: Rank, to: Rank) {
        self.adjust_rank(from, false);
        self.adjust_rank(to, true);
    }

    fn adjust_rank(&mut self, rank: Rank, gained: bool) {
        let count = match rank {
            Rank::Man => return,
            Rank::King => &mut self.kings,
            Rank::TripleKing => &mut self.triple_kings,
        };
        if gained {
            *count += 1;
        } else {
            *count -= 1;
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) pieces({}) kings({}) triple kings({}) captured({})",
            self.name, self.color, self.pieces, self.kings, self.triple_kings, self.captured
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_board() {
        let board = Board::from_fen("1k6/8/8/8/8/8/8/2M1T3").unwrap();
        let white = Player::new("w".to_owned(), Color::White, &board);
        assert_eq!((white.piece_count(), white.king_count(), white.triple_king_count()), (1, 1, 0));

        let mut black = Player::new("b".to_owned(), Color::Black, &board);
        assert_eq!((black.piece_count(), black.king_count(), black.triple_king_count()), (2, 0, 1));

        black.record_promotion(Rank::Man, Rank::King);
        black.record_loss(Piece::new(Color::Black, Rank::TripleKing));
        assert_eq!((black.piece_count(), black.king_count(), black.triple_king_count()), (1, 1, 0));
        assert_eq!(black.captured_count(), 0);
    }
}
