use super::error::MoveError;
use super::types::{Color, GameStatus, Move, Square};
use super::Board;
use crate::rules;

/// A board plus the side to move. This is the thin session layer front ends
/// drive; everything it does is a call into the stateless core.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    side_to_move: Color,
}

impl Position {
    pub fn startpos() -> Self {
        Self { board: Board::startpos(), side_to_move: Color::Red }
    }

    pub fn from_board(board: Board, side_to_move: Color) -> Self { Self { board, side_to_move } }

    pub fn board(&self) -> &Board { &self.board }

    pub fn side_to_move(&self) -> Color { self.side_to_move }

    /// Plays `from -> to` for the side to move. Only check-safe moves are
    /// accepted; on error nothing changes.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        let piece = self.board.piece_at(from).ok_or(MoveError::NoPiece(from))?;
        if piece.color != self.side_to_move {
            return Err(MoveError::WrongSide { square: from, expected: self.side_to_move });
        }
        let mv = rules::make_move(&self.board, piece, to);
        if !rules::is_legal_move(&mv, &self.board) { return Err(MoveError::IllegalDestination { from, to }); }
        if !rules::is_check_safe(&mv, &self.board) { return Err(MoveError::LeavesGeneralInCheck { from, to }); }
        self.play(&mv);
        Ok(mv)
    }

    /// Applies an already validated move and passes the turn.
    pub fn play(&mut self, mv: &Move) {
        self.board = self.board.apply(mv);
        self.side_to_move = self.side_to_move.opposite();
    }

    pub fn legal_moves(&self) -> Vec<Move> { rules::legal_moves(&self.board, self.side_to_move) }

    pub fn legal_moves_count(&self) -> usize { self.legal_moves().len() }

    /// Status of the side to move.
    pub fn status(&self) -> GameStatus { rules::classify(&self.board, self.side_to_move) }

    /// The side that has won, if the side to move is checkmated or has lost its general.
    pub fn winner(&self) -> Option<Color> {
        if self.board.general(self.side_to_move).is_none() { return Some(self.side_to_move.opposite()); }
        match self.status() {
            GameStatus::Checkmate => Some(self.side_to_move.opposite()),
            _ => None,
        }
    }

    pub fn set_from_start_and_moves(moves: &[(Square, Square)]) -> Result<Self, MoveError> {
        let mut pos = Self::startpos();
        for &(from, to) in moves { pos.make_move(from, to)?; }
        Ok(pos)
    }
}

impl Default for Position {
    fn default() -> Self { Self::startpos() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_side_and_bad_destination() {
        let mut pos = Position::startpos();
        let before = pos.board().clone();
        assert_eq!(
            pos.make_move(Square::new(0, 3), Square::new(0, 4)),
            Err(MoveError::WrongSide { square: Square::new(0, 3), expected: Color::Red })
        );
        assert_eq!(
            pos.make_move(Square::new(0, 6), Square::new(1, 6)),
            Err(MoveError::IllegalDestination { from: Square::new(0, 6), to: Square::new(1, 6) })
        );
        assert_eq!(pos.make_move(Square::new(3, 5), Square::new(3, 4)), Err(MoveError::NoPiece(Square::new(3, 5))));
        assert_eq!(pos.board(), &before);
        assert_eq!(pos.side_to_move(), Color::Red);
    }

    #[test]
    fn moves_alternate_sides() {
        let pos = Position::set_from_start_and_moves(&[
            (Square::new(1, 7), Square::new(4, 7)),
            (Square::new(7, 0), Square::new(6, 2)),
        ]).unwrap();
        assert_eq!(pos.side_to_move(), Color::Red);
        assert_eq!(pos.legal_moves_count(), pos.legal_moves().len());
        assert_eq!(pos.status(), GameStatus::Playing);
    }
}
