use crate::board::{Board, Color, Move};
use crate::rules::legal_moves;
use crate::search::alphabeta::SearchReport;
use crate::search::eval::{evaluate, piece_value, EvalLayer};
use rand::Rng;
use std::time::Instant;

/// Uniformly random check-safe move.
pub fn choose_random(board: &Board, color: Color, layer: EvalLayer, rng: &mut impl Rng) -> SearchReport {
    let start = Instant::now();
    let moves = legal_moves(board, color);
    if moves.is_empty() { return SearchReport::no_move(0, start.elapsed()); }
    let mv = moves[rng.gen_range(0..moves.len())];
    SearchReport {
        score: evaluate(board, color, layer),
        best_move: Some(mv),
        depth_reached: 0,
        nodes: 1,
        elapsed_ms: start.elapsed().as_millis() as u64,
    }
}

/// Captures the most valuable piece available; with nothing to take, plays a
/// random quiet move. Equal-valued captures go to the first one generated.
pub fn choose_greedy_capture(board: &Board, color: Color, layer: EvalLayer, rng: &mut impl Rng) -> SearchReport {
    let start = Instant::now();
    let moves = legal_moves(board, color);
    if moves.is_empty() { return SearchReport::no_move(0, start.elapsed()); }
    let mv = best_capture(&moves).unwrap_or_else(|| moves[rng.gen_range(0..moves.len())]);
    SearchReport {
        score: evaluate(board, color, layer),
        best_move: Some(mv),
        depth_reached: 1,
        nodes: moves.len() as u64,
        elapsed_ms: start.elapsed().as_millis() as u64,
    }
}

fn best_capture(moves: &[Move]) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;
    for m in moves {
        let Some(victim) = m.captured else { continue };
        let v = piece_value(victim.kind);
        if best.map_or(true, |(_, bv)| v > bv) { best = Some((*m, v)); }
    }
    best.map(|(m, _)| m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, Square};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn greedy_takes_a_horse_from_startpos() {
        let b = Board::startpos();
        let mut rng = SmallRng::seed_from_u64(3);
        // Red's only opening captures are the two cannon shots at the horses.
        let r = choose_greedy_capture(&b, Color::Red, EvalLayer::Material, &mut rng);
        let mv = r.best_move.unwrap();
        assert_eq!(mv.captured.map(|c| c.kind), Some(PieceKind::Horse));
        assert!(mv.from == Square::new(1, 7) || mv.from == Square::new(7, 7));
    }
}
