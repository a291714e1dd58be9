use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckersError {
    #[error("invalid player: {0}")]
    InvalidPlayer(String),

    #[error("it is not {0}'s turn")]
    OutOfTurn(String),

    #[error("invalid square ({row}, {col})")]
    InvalidSquare { row: i32, col: i32 },

    #[error("invalid move: {0}")]
    InvalidMove(&'static str),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{0}' is not a playable square, expected row,col")]
pub struct ParseSquareError(pub String);

pub type Result<T> = std::result::Result<T, CheckersError>;
