use crate::board::Board;
use crate::error::{CheckersError, ParseSquareError, Result};
use std::fmt::Formatter;
use std::str::FromStr;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Square {
    row: i8,
    col: i8,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Square {
    pub fn new(row: i32, col: i32) -> Result<Self> {
        Self::from_row_col(row, col).ok_or(CheckersError::InvalidSquare { row, col })
    }

    fn from_row_col(row: i32, col: i32) -> Option<Self> {
        let size = Board::SIZE as i32;
        if !(0..size).contains(&row) || !(0..size).contains(&col) || !Self::is_playable(row, col) {
            return None;
        }
        Some(Self {
            row: row as i8,
            col: col as i8,
        })
    }

    pub fn is_playable(row: i32, col: i32) -> bool {
        (row + col) % 2 == 1
    }

    pub fn from_index(index: usize) -> Option<Self> {
        let size = Board::SIZE as usize;
        if index >= size * size {
            return None;
        }
        Self::from_row_col((index / size) as i32, (index % size) as i32)
    }

    /// Steps diagonally by `distance` squares, `None` if that leaves the board.
    pub fn shift(&self, (dr, dc): (i8, i8), distance: i8) -> Option<Self> {
        Self::from_row_col(
            (self.row + dr * distance) as i32,
            (self.col + dc * distance) as i32,
        )
    }

    pub fn index(&self) -> usize {
        (self.row * Board::SIZE + self.col) as usize
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn col(&self) -> i8 {
        self.col
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        let size = Board::SIZE as usize;
        (0..size * size).filter_map(Self::from_index)
    }
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    pub fn row_delta(&self) -> i8 {
        self.to.row - self.from.row
    }

    pub fn col_delta(&self) -> i8 {
        self.to.col - self.from.col
    }

    /// Number of diagonal steps, or `None` if the move is not diagonal.
    pub fn diagonal_distance(&self) -> Option<i8> {
        let distance = self.row_delta().abs();
        (distance != 0 && distance == self.col_delta().abs()).then_some(distance)
    }

    pub fn direction(&self) -> Option<(i8, i8)> {
        self.diagonal_distance()
            .map(|_| (self.row_delta().signum(), self.col_delta().signum()))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_coordinates(s)
            .and_then(|(row, col)| Self::new(row, col).ok())
            .ok_or_else(|| ParseSquareError(s.trim().to_owned()))
    }
}

/// Parses `row,col` or `(row, col)` into a raw coordinate pair without
/// checking that it lies on the board.
pub fn parse_coordinates(s: &str) -> Option<(i32, i32)> {
    let s = s.trim();
    let s = s.strip_prefix('(').and_then(|s| s.strip_suffix(')')).unwrap_or(s);
    let (row, col) = s.split_once(',')?;
    Some((row.trim().parse().ok()?, col.trim().parse().ok()?))
}
