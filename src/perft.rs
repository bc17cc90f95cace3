use crate::board::{Board, Color};
use crate::rules::legal_moves;

// Check-safe move-tree leaf count; every child is a fresh board.
pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = legal_moves(board, color);
    if depth == 1 { return moves.len() as u64; }
    moves.iter().map(|m| perft(&board.apply(m), color.opposite(), depth - 1)).sum()
}

/// Per-root-move counts, in generation order.
pub fn divide(board: &Board, color: Color, depth: u32) -> Vec<(crate::board::Move, u64)> {
    if depth == 0 { return Vec::new(); }
    legal_moves(board, color)
        .into_iter()
        .map(|m| { let n = perft(&board.apply(&m), color.opposite(), depth - 1); (m, n) })
        .collect()
}
