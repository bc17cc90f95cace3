use thiserror::Error;

use super::types::{Color, Square};

/// Reasons a requested move is refused. The board is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    NoPiece(Square),
    #[error("piece on {square} does not belong to {expected}")]
    WrongSide { square: Square, expected: Color },
    #[error("{from} -> {to} is not a move of that piece")]
    IllegalDestination { from: Square, to: Square },
    #[error("{from} -> {to} leaves the general in check")]
    LeavesGeneralInCheck { from: Square, to: Square },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("square {0} is off the board")]
    OffBoard(Square),
    #[error("square {0} is already occupied")]
    Occupied(Square),
    #[error("piece limit reached")]
    TooManyPieces,
}
