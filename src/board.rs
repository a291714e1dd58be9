use crate::display_format::DisplayFormat;
use crate::piece::{Color, Piece, Rank};
use crate::square::{Move, Square};
use std::fmt::{Display, Formatter};
use std::ops::Index;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    pieces: Vec<Option<Piece>>,
}

impl Board {
    pub const SIZE: i8 = 8;

    const OPENING: &'static str = "1m1m1m1m/m1m1m1m1/1m1m1m1m/8/8/M1M1M1M1/1M1M1M1M/M1M1M1M1";

    pub fn empty() -> Self {
        Self {
            pieces: vec![None; (Self::SIZE * Self::SIZE) as usize],
        }
    }

    pub fn opening() -> Self {
        match Self::from_fen(Self::OPENING) {
            Some(board) => board,
            None => unreachable!("opening layout is well formed"),
        }
    }

    /// Rows 0 to 7 separated by `/`, `m`/`k`/`t` for white and upper case for black.
    pub fn from_fen(fen: &str) -> Option<Self> {
        let mut board = Self::empty();
        let rows = fen.trim().split('/').collect::<Vec<_>>();
        if rows.len() != Self::SIZE as usize {
            return None;
        }

        for (row, text) in rows.into_iter().enumerate() {
            let mut col = 0;
            for current in text.chars() {
                match current {
                    '1'..='8' => col += current.to_digit(10)? as i32,
                    _ => {
                        let piece = Piece::from_fen_char(current)?;
                        let square = Square::new(row as i32, col).ok()?;
                        board.place(square, piece);
                        col += 1;
                    }
                }
            }
            if col != Self::SIZE as i32 {
                return None;
            }
        }

        Some(board)
    }

    pub fn fen(&self) -> String {
        let mut result = String::new();
        for row in 0..Self::SIZE {
            if row > 0 {
                result.push('/');
            }

            let mut empty = 0;
            for col in 0..Self::SIZE {
                let piece = Square::new(row as i32, col as i32).ok().and_then(|square| self[square]);
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            result.push_str(&empty.to_string());
                            empty = 0;
                        }
                        result.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                result.push_str(&empty.to_string());
            }
        }
        result
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self[square]
    }

    pub(crate) fn place(&mut self, square: Square, piece: Piece) {
        self.pieces[square.index()] = Some(piece);
    }

    pub(crate) fn remove(&mut self, square: Square) -> Option<Piece> {
        self.pieces[square.index()].take()
    }

    pub fn squares_between(from: Square, to: Square) -> Option<Square> {
        let mv = Move::new(from, to);
        match mv.diagonal_distance() {
            Some(2) => from.shift(mv.direction()?, 1),
            _ => None,
        }
    }

    pub fn iter_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self[square].map(|piece| (square, piece)))
    }

    pub fn count(&self, color: Color) -> u32 {
        self.iter_pieces().filter(|(_, piece)| piece.color() == color).count() as u32
    }

    pub fn count_rank(&self, color: Color, rank: Rank) -> u32 {
        self.iter_pieces()
            .filter(|(_, piece)| piece.color() == color && piece.rank() == rank)
            .count() as u32
    }

    pub fn display(&self, format: DisplayFormat) -> impl Display + '_ {
        struct Impl<'a>(&'a Board, DisplayFormat);
        return Impl(self, format);

        impl Display for Impl<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                let &Self(board, format) = self;
                for row in 0..Board::SIZE {
                    write!(f, "{row}")?;
                    for col in 0..Board::SIZE {
                        match Square::new(row as i32, col as i32) {
                            Ok(square) => match board[square] {
                                Some(piece) => write!(f, " {}", piece.display(format.with_concise(true)))?,
                                None => write!(f, " . ")?,
                            },
                            Err(_) => write!(f, "   ")?,
                        }
                    }
                    writeln!(f)?;
                }
                for col in 0..Board::SIZE {
                    write!(f, "  {col}")?;
                }
                writeln!(f)
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::opening()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;
    fn index(&self, index: Square) -> &Self::Output {
        &self.pieces[index.index()]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(DisplayFormat::string()))
    }
}
