use crate::board::{Board, Piece, PieceKind, Square};

const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
// (dx, dy, leg_dx, leg_dy): the leg is the first step along the longer axis.
const HORSE_JUMPS: [(i8, i8, i8, i8); 8] = [
    (-2, -1, -1, 0), (-2, 1, -1, 0), (2, -1, 1, 0), (2, 1, 1, 0),
    (-1, -2, 0, -1), (1, -2, 0, -1), (-1, 2, 0, 1), (1, 2, 0, 1),
];

/// Pseudo-legal destinations of `piece` on `board`.
///
/// Never includes a square held by the piece's own colour, never leaves the
/// board, and does not consider whether the mover's general ends up attacked.
/// Output order is deterministic for a given board.
pub fn pseudo_moves(piece: &Piece, board: &Board) -> Vec<Square> {
    let mut out = Vec::with_capacity(17);
    let from = piece.square;
    match piece.kind {
        PieceKind::General => {
            for (dx, dy) in ORTHOGONAL {
                if let Some(to) = from.offset(dx, dy) {
                    if to.in_palace(piece.color) { push_enterable(&mut out, board, piece, to); }
                }
            }
            if let Some(target) = flying_general_target(piece, board) {
                if !out.contains(&target) { out.push(target); }
            }
        }
        PieceKind::Advisor => {
            for (dx, dy) in DIAGONAL {
                if let Some(to) = from.offset(dx, dy) {
                    if to.in_palace(piece.color) { push_enterable(&mut out, board, piece, to); }
                }
            }
        }
        PieceKind::Elephant => {
            for (dx, dy) in DIAGONAL {
                let Some(to) = from.offset(2 * dx, 2 * dy) else { continue };
                if !to.on_home_side(piece.color) { continue; }
                let eye = Square::new(from.x + dx, from.y + dy);
                if board.is_occupied(eye) { continue; }
                push_enterable(&mut out, board, piece, to);
            }
        }
        PieceKind::Horse => {
            for (dx, dy, lx, ly) in HORSE_JUMPS {
                let Some(to) = from.offset(dx, dy) else { continue };
                if board.is_occupied(Square::new(from.x + lx, from.y + ly)) { continue; }
                push_enterable(&mut out, board, piece, to);
            }
        }
        PieceKind::Chariot => {
            for (dx, dy) in ORTHOGONAL {
                let mut cur = from;
                while let Some(to) = cur.offset(dx, dy) {
                    match board.piece_at(to) {
                        None => out.push(to),
                        Some(other) => {
                            if other.color != piece.color { out.push(to); }
                            break;
                        }
                    }
                    cur = to;
                }
            }
        }
        PieceKind::Cannon => {
            for (dx, dy) in ORTHOGONAL {
                let mut cur = from;
                let mut screened = false;
                while let Some(to) = cur.offset(dx, dy) {
                    match (screened, board.piece_at(to)) {
                        (false, None) => out.push(to),
                        (false, Some(_)) => screened = true,
                        (true, None) => {}
                        (true, Some(other)) => {
                            if other.color != piece.color { out.push(to); }
                            break;
                        }
                    }
                    cur = to;
                }
            }
        }
        PieceKind::Soldier => {
            if let Some(to) = from.offset(0, piece.color.forward()) {
                push_enterable(&mut out, board, piece, to);
            }
            if from.across_river(piece.color) {
                for dx in [-1, 1] {
                    if let Some(to) = from.offset(dx, 0) { push_enterable(&mut out, board, piece, to); }
                }
            }
        }
    }
    out
}

/// Name used by session collaborators; identical to [`pseudo_moves`].
pub fn generate_moves(piece: &Piece, board: &Board) -> Vec<Square> { pseudo_moves(piece, board) }

/// True iff `target` is among `pseudo_moves(piece, board)`, decided without
/// building the list. Check detection runs this once per opposing piece.
pub fn attacks(piece: &Piece, target: Square, board: &Board) -> bool {
    let from = piece.square;
    if !target.is_on_board() || target == from { return false; }
    if board.piece_at(target).map_or(false, |p| p.color == piece.color) { return false; }
    let (dx, dy) = (target.x - from.x, target.y - from.y);
    match piece.kind {
        PieceKind::General => {
            (dx.abs() + dy.abs() == 1 && target.in_palace(piece.color))
                || flying_general_target(piece, board) == Some(target)
        }
        PieceKind::Advisor => dx.abs() == 1 && dy.abs() == 1 && target.in_palace(piece.color),
        PieceKind::Elephant => {
            dx.abs() == 2 && dy.abs() == 2
                && target.on_home_side(piece.color)
                && !board.is_occupied(Square::new(from.x + dx / 2, from.y + dy / 2))
        }
        PieceKind::Horse => {
            let leg = match (dx.abs(), dy.abs()) {
                (2, 1) => Square::new(from.x + dx / 2, from.y),
                (1, 2) => Square::new(from.x, from.y + dy / 2),
                _ => return false,
            };
            !board.is_occupied(leg)
        }
        PieceKind::Chariot => board.pieces_between(from, target) == Some(0),
        PieceKind::Cannon => {
            let screens = if board.is_occupied(target) { 1 } else { 0 };
            board.pieces_between(from, target) == Some(screens)
        }
        PieceKind::Soldier => {
            (dx == 0 && dy == piece.color.forward())
                || (dy == 0 && dx.abs() == 1 && from.across_river(piece.color))
        }
    }
}

fn push_enterable(out: &mut Vec<Square>, board: &Board, piece: &Piece, to: Square) {
    match board.piece_at(to) {
        Some(other) if other.color == piece.color => {}
        _ => out.push(to),
    }
}

// Square of the opposing general when the two face each other on an open file.
fn flying_general_target(general: &Piece, board: &Board) -> Option<Square> {
    if !board.rules().flying_general { return None; }
    let other = board.general(general.color.opposite())?;
    if other.square.x != general.square.x { return None; }
    if board.pieces_between(general.square, other.square) != Some(0) { return None; }
    Some(other.square)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attacks_agrees_with_pseudo_moves_on_startpos() {
        let b = Board::startpos();
        for p in b.pieces() {
            let moves = pseudo_moves(&p, &b);
            for idx in 0..crate::board::NUM_SQUARES {
                let sq = Square::from_index(idx);
                assert_eq!(attacks(&p, sq, &b), moves.contains(&sq), "{:?} -> {}", p, sq);
            }
        }
    }
}
