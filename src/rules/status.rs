use crate::board::{Board, Color, GameStatus, Move, Piece};
use crate::rules::movegen::{attacks, pseudo_moves};

/// Builds the move of `piece` to `to`, recording whatever stands on `to`.
pub fn make_move(board: &Board, piece: Piece, to: crate::board::Square) -> Move {
    Move { from: piece.square, to, piece, captured: board.piece_at(to) }
}

/// True iff `color` has a general and some opposing piece attacks its square.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(general) = board.general(color) else { return false };
    board.pieces_of(color.opposite()).any(|p| attacks(&p, general.square, board))
}

/// Applying `mv` does not leave the mover's own general in check.
pub fn is_check_safe(mv: &Move, board: &Board) -> bool {
    !is_in_check(&board.apply(mv), mv.piece.color)
}

/// The mover stands on `mv.from` and `mv.to` is one of its pseudo-moves.
/// Whether the move exposes the mover's general is not considered.
pub fn is_legal_move(mv: &Move, board: &Board) -> bool {
    match board.piece_at(mv.from) {
        Some(p) if p.id == mv.piece.id => pseudo_moves(&p, board).contains(&mv.to),
        _ => false,
    }
}

/// Every pseudo-move of `color`, in board order.
pub fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for p in board.pieces_of(color) {
        out.extend(pseudo_moves(&p, board).into_iter().map(|to| make_move(board, p, to)));
    }
    out
}

/// Check-safe moves of `color`.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = pseudo_legal_moves(board, color);
    out.retain(|m| is_check_safe(m, board));
    out
}

/// Check-safe moves of a single piece.
pub fn legal_moves_for(piece: &Piece, board: &Board) -> Vec<Move> {
    pseudo_moves(piece, board)
        .into_iter()
        .map(|to| make_move(board, *piece, to))
        .filter(|m| is_check_safe(m, board))
        .collect()
}

/// Stops at the first check-safe move found.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board.pieces_of(color).any(|p| {
        pseudo_moves(&p, board).into_iter().any(|to| is_check_safe(&make_move(board, p, to), board))
    })
}

/// In check, and no pseudo-move gets the general out of it.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && !has_legal_move(board, color)
}

/// Not in check, and no check-safe move exists. Pseudo-moves that would
/// walk into check do not count as available moves.
pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_in_check(board, color) && !has_legal_move(board, color)
}

/// Status of `color` on `board`, by priority Checkmate > Stalemate > Check > Playing.
pub fn classify(board: &Board, color: Color) -> GameStatus {
    let in_check = is_in_check(board, color);
    match (in_check, has_legal_move(board, color)) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Playing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, Square};

    #[test]
    fn startpos_is_playing_for_both() {
        let b = Board::startpos();
        assert_eq!(classify(&b, Color::Red), GameStatus::Playing);
        assert_eq!(classify(&b, Color::Black), GameStatus::Playing);
    }

    #[test]
    fn missing_general_is_never_in_check() {
        let b = Board::from_pieces(&[(PieceKind::Chariot, Color::Red, (4, 5))]).unwrap();
        assert!(!is_in_check(&b, Color::Black));
    }

    #[test]
    fn walking_into_check_is_not_check_safe() {
        // Black general may step to (3,0) only if file 3 is clear of Red attackers.
        let b = Board::from_pieces(&[
            (PieceKind::General, Color::Black, (4, 0)),
            (PieceKind::General, Color::Red, (5, 9)),
            (PieceKind::Chariot, Color::Red, (3, 6)),
        ]).unwrap();
        let g = b.general(Color::Black).unwrap();
        let targets: Vec<Square> = legal_moves_for(&g, &b).into_iter().map(|m| m.to).collect();
        assert!(!targets.contains(&Square::new(3, 0)));
        assert!(targets.contains(&Square::new(4, 1)));
        assert!(pseudo_moves(&g, &b).contains(&Square::new(3, 0)));
    }
}
