use crate::display_format::DisplayFormat;
use crate::error::CheckersError;
use std::fmt::{Display, Formatter};
use std::num::NonZeroI8;
use std::str::FromStr;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Color {
    Black,
    White,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(i8)]
pub enum Rank {
    Man,
    King,
    TripleKing,
}

// sign is the color, magnitude the rank
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Piece {
    data: NonZeroI8,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opponent(&self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Black => 0,
            Self::White => 1,
        }
    }

    pub fn forward(&self) -> i8 {
        match self {
            Self::Black => -1,
            Self::White => 1,
        }
    }

    // the opponent's men promote here
    pub fn home_row(&self) -> i8 {
        match self {
            Self::Black => 7,
            Self::White => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::White => "White",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Color {
    type Err = CheckersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Self::Black),
            "white" | "w" => Ok(Self::White),
            _ => Err(CheckersError::InvalidPlayer(format!("unknown piece color '{s}'"))),
        }
    }
}

impl Rank {
    pub fn is_king(&self) -> bool {
        *self != Self::Man
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Man => "man",
            Self::King => "king",
            Self::TripleKing => "triple king",
        }
    }
}

impl Piece {
    pub fn new(color: Color, rank: Rank) -> Self {
        let data = match NonZeroI8::new(rank as i8 + 1) {
            Some(data) => data,
            None => unreachable!(),
        };
        let data = if color == Color::Black { data } else { -data };
        Self { data }
    }

    pub fn man(color: Color) -> Self {
        Self::new(color, Rank::Man)
    }

    pub fn color(&self) -> Color {
        if self.data.is_positive() {
            Color::Black
        } else {
            Color::White
        }
    }

    pub fn rank(&self) -> Rank {
        match self.data.get().abs() {
            1 => Rank::Man,
            2 => Rank::King,
            _ => Rank::TripleKing,
        }
    }

    pub fn with_rank(&self, rank: Rank) -> Self {
        Self::new(self.color(), rank)
    }

    pub fn from_fen_char(value: char) -> Option<Self> {
        let rank = match value.to_ascii_lowercase() {
            'm' => Rank::Man,
            'k' => Rank::King,
            't' => Rank::TripleKing,
            _ => return None,
        };
        let color = if value.is_ascii_uppercase() { Color::Black } else { Color::White };
        Some(Self::new(color, rank))
    }

    pub fn fen_char(&self) -> char {
        let result = match self.rank() {
            Rank::Man => 'm',
            Rank::King => 'k',
            Rank::TripleKing => 't',
        };
        match self.color() {
            Color::Black => result.to_ascii_uppercase(),
            Color::White => result,
        }
    }

    pub fn glyph(&self) -> char {
        match (self.color(), self.rank()) {
            (Color::Black, Rank::Man) => '⛂',
            (Color::Black, Rank::King) => '⛃',
            (Color::Black, Rank::TripleKing) => '♚',
            (Color::White, Rank::Man) => '⛀',
            (Color::White, Rank::King) => '⛁',
            (Color::White, Rank::TripleKing) => '♔',
        }
    }

    pub fn display(&self, format: DisplayFormat) -> impl Display + use<> {
        let s = if !format.concise {
            format!("{} {}", self.color(), self.rank().name())
        } else if format.unicode {
            format!("{} ", self.glyph())
        } else {
            let c = self.fen_char();
            format!("{c}{c}")
        };

        if format.effects && self.color() == Color::Black {
            format!("\x1B[31m{s}\x1B[0m")
        } else {
            s
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(DisplayFormat::string()))
    }
}
