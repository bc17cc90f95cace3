// Xiangqi rules engine with tiered alpha-beta search
pub mod board;
pub mod perft;
pub mod rules;
pub mod search;
pub mod selfplay;

// Re-exports kept minimal: the collaborator-facing surface
pub use board::{apply_move, Board, Color, GameStatus, Move, Piece, PieceKind, Position, RuleSet, Square};
pub use rules::{classify, generate_moves, is_legal_move};
pub use search::{find_best_move, Difficulty, SearchJob, SearchReport};
