pub mod alphabeta;
pub mod difficulty;
pub mod eval;
pub mod job;
pub mod policy;
pub mod strategy;

pub use alphabeta::{SearchParams, SearchReport, Searcher};
pub use difficulty::{Difficulty, StrategyKind, TierProfile};
pub use eval::{evaluate, piece_value, EvalLayer, DRAW_SCORE, MATE_SCORE};
pub use job::{SearchError, SearchJob};
pub use strategy::{find_best_move, find_best_move_with_rng, Strategy};
