use crate::board::{Board, Color};
use crate::search::alphabeta::{SearchParams, SearchReport, Searcher};
use crate::search::difficulty::{Difficulty, StrategyKind};
use crate::search::eval::EvalLayer;
use crate::search::policy::{choose_greedy_capture, choose_random};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Closed set of move-selection behaviours a difficulty tier resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Random { layer: EvalLayer },
    GreedyCapture { layer: EvalLayer },
    Minimax(SearchParams),
}

impl Strategy {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let profile = difficulty.profile();
        match profile.strategy {
            StrategyKind::Random => Strategy::Random { layer: profile.layer },
            StrategyKind::GreedyCapture => Strategy::GreedyCapture { layer: profile.layer },
            StrategyKind::Minimax => Strategy::Minimax(SearchParams::from(profile)),
        }
    }

    /// Picks a move for `color`. `abort` only affects the minimax variant.
    pub fn select_move(
        &self,
        board: &Board,
        color: Color,
        rng: &mut impl Rng,
        abort: Option<Arc<AtomicBool>>,
    ) -> SearchReport {
        match *self {
            Strategy::Random { layer } => choose_random(board, color, layer, rng),
            Strategy::GreedyCapture { layer } => choose_greedy_capture(board, color, layer, rng),
            Strategy::Minimax(params) => {
                let mut searcher = match abort {
                    Some(flag) => Searcher::with_abort(flag),
                    None => Searcher::default(),
                };
                searcher.search_with_params(board, color, params)
            }
        }
    }
}

/// Chooses a move for `color` at `difficulty`, blocking the calling thread.
/// Use [`crate::search::job::SearchJob`] to keep the caller responsive.
pub fn find_best_move(board: &Board, color: Color, difficulty: Difficulty) -> SearchReport {
    let mut rng = SmallRng::from_entropy();
    find_best_move_with_rng(board, color, difficulty, &mut rng)
}

pub fn find_best_move_with_rng(board: &Board, color: Color, difficulty: Difficulty, rng: &mut impl Rng) -> SearchReport {
    Strategy::for_difficulty(difficulty).select_move(board, color, rng, None)
}
