use crate::board::{Board, Color, Piece, PieceKind};
use serde::{Deserialize, Serialize};

const GENERAL: i32 = 10_000;
const ADVISOR: i32 = 20;
const ELEPHANT: i32 = 20;
const HORSE: i32 = 40;
const CHARIOT: i32 = 90;
const CANNON: i32 = 45;
const SOLDIER: i32 = 10;

const POSITIONAL_BONUS: i32 = 5;
const CENTER_CONTROL: i32 = 10;
const RIVER_CROSSING: i32 = 5;

// Mate scoring helpers; MATE_SCORE stands in for an unbounded score.
pub const MATE_SCORE: i32 = 1_000_000;
pub const DRAW_SCORE: i32 = 0;

pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::General => GENERAL,
        PieceKind::Advisor => ADVISOR,
        PieceKind::Elephant => ELEPHANT,
        PieceKind::Horse => HORSE,
        PieceKind::Chariot => CHARIOT,
        PieceKind::Cannon => CANNON,
        PieceKind::Soldier => SOLDIER,
    }
}

/// Evaluation layers, each including every term of the ones before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EvalLayer {
    Material,
    Positional,
    CenterControl,
    RiverCrossing,
}

impl Default for EvalLayer {
    fn default() -> Self { EvalLayer::Material }
}

fn signed(piece: &Piece, color: Color, v: i32) -> i32 { if piece.color == color { v } else { -v } }

// Material from `color`'s perspective.
pub fn material(board: &Board, color: Color) -> i32 {
    board.pieces().map(|p| signed(&p, color, piece_value(p.kind))).sum()
}

// Flat per-piece bonus, symmetric between the colours.
pub fn positional(board: &Board, color: Color) -> i32 {
    board.pieces().map(|p| signed(&p, color, POSITIONAL_BONUS)).sum()
}

pub fn center_control(board: &Board, color: Color) -> i32 {
    board.pieces().filter(|p| (3..=5).contains(&p.square.x)).map(|p| signed(&p, color, CENTER_CONTROL)).sum()
}

pub fn river_crossing(board: &Board, color: Color) -> i32 {
    board.pieces().filter(|p| p.square.across_river(p.color)).map(|p| signed(&p, color, RIVER_CROSSING)).sum()
}

/// Static score of `board` for `color`; positive favours `color`.
pub fn evaluate(board: &Board, color: Color, layer: EvalLayer) -> i32 {
    let mut score = material(board, color);
    if layer >= EvalLayer::Positional { score += positional(board, color); }
    if layer >= EvalLayer::CenterControl { score += center_control(board, color); }
    if layer >= EvalLayer::RiverCrossing { score += river_crossing(board, color); }
    score
}
