use crate::board::Board;
use crate::error::{CheckersError, Result};
use crate::piece::{Color, Piece, Rank};
use crate::square::{Move, Square};
use log::trace;

pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ValidatedMove {
    pub mv: Move,
    pub piece: Piece,
    pub capture: Option<Square>,
    pub rank: Rank,
    pub continues: bool,
}

impl ValidatedMove {
    pub fn promotion(&self) -> Option<Rank> {
        (self.rank != self.piece.rank()).then_some(self.rank)
    }
}

pub fn directions(piece: Piece) -> impl Iterator<Item = (i8, i8)> {
    let forward = piece.color().forward();
    DIAGONALS
        .into_iter()
        .filter(move |&(dr, _)| piece.rank().is_king() || dr == forward)
}

/// Rank after landing on `to`. A man reaching the opponent's home row becomes a
/// king; a king returning to its own home row becomes a triple king.
pub fn promoted_rank(piece: Piece, to: Square) -> Rank {
    let color = piece.color();
    match piece.rank() {
        Rank::Man if to.row() == color.opponent().home_row() => Rank::King,
        Rank::King if to.row() == color.home_row() => Rank::TripleKing,
        rank => rank,
    }
}

pub fn captures_from(board: &Board, from: Square) -> impl Iterator<Item = Move> + '_ {
    board[from].into_iter().flat_map(move |piece| {
        directions(piece).filter_map(move |direction| {
            let over = from.shift(direction, 1)?;
            let to = from.shift(direction, 2)?;
            let jumped = board[over]?;
            (jumped.color() != piece.color() && board[to].is_none()).then_some(Move::new(from, to))
        })
    })
}

pub fn steps_from(board: &Board, from: Square) -> impl Iterator<Item = Move> + '_ {
    board[from].into_iter().flat_map(move |piece| {
        directions(piece).filter_map(move |direction| {
            let to = from.shift(direction, 1)?;
            board[to].is_none().then_some(Move::new(from, to))
        })
    })
}

fn own_squares(board: &Board, color: Color) -> impl Iterator<Item = Square> + '_ {
    board
        .iter_pieces()
        .filter(move |(_, piece)| piece.color() == color)
        .map(|(square, _)| square)
}

pub fn has_capture(board: &Board, color: Color) -> bool {
    own_squares(board, color).any(|square| captures_from(board, square).next().is_some())
}

pub fn legal_moves(board: &Board, color: Color, pending: Option<Square>) -> Vec<Move> {
    if let Some(square) = pending {
        return captures_from(board, square).collect();
    }

    let captures = own_squares(board, color)
        .flat_map(|square| captures_from(board, square))
        .collect::<Vec<_>>();
    if !captures.is_empty() {
        return captures;
    }

    own_squares(board, color)
        .flat_map(|square| steps_from(board, square))
        .collect()
}

pub fn validate(board: &Board, color: Color, mv: Move, pending: Option<Square>) -> Result<ValidatedMove> {
    use CheckersError::InvalidMove;

    let Some(piece) = board[mv.from] else {
        return Err(InvalidMove("there is no piece on the starting square"));
    };
    if piece.color() != color {
        return Err(InvalidMove("the piece on the starting square belongs to the opponent"));
    }
    if board[mv.to].is_some() {
        return Err(InvalidMove("the destination square is occupied"));
    }
    if let Some(square) = pending
        && square != mv.from
    {
        return Err(InvalidMove("a capture sequence must be continued with the same piece"));
    }

    let (Some(distance @ 1..=2), Some(direction)) = (mv.diagonal_distance(), mv.direction()) else {
        return Err(InvalidMove("pieces move one or two squares diagonally"));
    };
    if !directions(piece).any(|allowed| allowed == direction) {
        return Err(InvalidMove("men may only move forward"));
    }

    let capture = if distance == 2 {
        let over = jumped_square(mv)?;
        match board[over] {
            Some(jumped) if jumped.color() != color => Some(over),
            Some(_) => return Err(InvalidMove("a piece cannot jump over its own side")),
            None => return Err(InvalidMove("a jump must capture an opponent piece")),
        }
    } else {
        if pending.is_some() {
            return Err(InvalidMove("a capture sequence can only continue by capturing"));
        }
        if has_capture(board, color) {
            return Err(InvalidMove("a capture is available and must be taken"));
        }
        None
    };

    let rank = promoted_rank(piece, mv.to);
    let continues = capture.is_some_and(|over| {
        let mut next = board.clone();
        next.remove(over);
        next.remove(mv.from);
        next.place(mv.to, piece.with_rank(rank));
        captures_from(&next, mv.to).next().is_some()
    });

    trace!("validated {mv} for {color}: capture {capture:?} rank {rank:?} continues {continues}");

    Ok(ValidatedMove {
        mv,
        piece,
        capture,
        rank,
        continues,
    })
}

fn jumped_square(mv: Move) -> Result<Square> {
    Board::squares_between(mv.from, mv.to).ok_or(CheckersError::InvalidMove("not a jump"))
}
