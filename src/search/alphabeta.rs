use crate::board::{Board, Color, Move};
use crate::rules::{has_legal_move, is_in_check, legal_moves};
use crate::search::difficulty::TierProfile;
use crate::search::eval::{evaluate, piece_value, EvalLayer, DRAW_SCORE, MATE_SCORE};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

// Iteration cap when only a movetime bounds the search.
const MAX_PLY: u32 = 64;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Deepest iteration; 0 with a movetime means "until the clock runs out".
    pub depth: u32,
    pub movetime: Option<Duration>,
    pub layer: EvalLayer,
    pub order_captures: bool,
}

impl From<TierProfile> for SearchParams {
    fn from(p: TierProfile) -> Self {
        Self { depth: p.depth, movetime: Some(p.time_budget), layer: p.layer, order_captures: true }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// From the searching side's perspective; `-MATE_SCORE` when it has no move.
    pub score: i32,
    pub best_move: Option<Move>,
    pub depth_reached: u32,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

impl SearchReport {
    pub fn no_move(depth_reached: u32, elapsed: Duration) -> Self {
        Self { score: -MATE_SCORE, best_move: None, depth_reached, nodes: 0, elapsed_ms: elapsed.as_millis() as u64 }
    }
}

/// Minimax with alpha-beta over explicit maximising and minimising plies.
///
/// Every child is searched on its own cloned board, so sibling branches never
/// share state. The clock and the abort flag are polled at node entry: an
/// interrupted node contributes `DRAW_SCORE` and the iteration it belongs to
/// is thrown away.
pub struct Searcher {
    pub(crate) nodes: u64,
    root: Color,
    layer: EvalLayer,
    deadline: Option<Instant>,
    abort: Option<Arc<AtomicBool>>,
    order_captures: bool,
    stopped: bool,
}

impl Default for Searcher {
    fn default() -> Self {
        Self {
            nodes: 0,
            root: Color::Red,
            layer: EvalLayer::Material,
            deadline: None,
            abort: None,
            order_captures: false,
            stopped: false,
        }
    }
}

impl Searcher {
    pub fn with_abort(flag: Arc<AtomicBool>) -> Self {
        Self { abort: Some(flag), ..Self::default() }
    }

    pub fn search_depth(&mut self, board: &Board, color: Color, depth: u32) -> SearchReport {
        let params = SearchParams { depth, ..SearchParams::default() };
        self.search_with_params(board, color, params)
    }

    pub fn search_with_params(&mut self, board: &Board, color: Color, params: SearchParams) -> SearchReport {
        let start = Instant::now();
        self.nodes = 0;
        self.root = color;
        self.layer = params.layer;
        self.order_captures = params.order_captures;
        self.stopped = false;
        self.deadline = params.movetime.map(|d| start + d);

        let mut root_moves = legal_moves(board, color);
        if root_moves.is_empty() { return SearchReport::no_move(0, start.elapsed()); }
        if self.order_captures { order_by_victim(&mut root_moves); }

        let max_depth = match (params.depth, params.movetime) {
            (0, Some(_)) => MAX_PLY,
            (d, _) => d.max(1),
        };
        let mut best: Option<(Move, i32)> = None;
        let mut depth_reached = 0;
        for d in 1..=max_depth {
            let (iter_best, complete) = self.search_root(board, &root_moves, d);
            if !complete {
                trace!("depth {} cut off after {} nodes", d, self.nodes);
                if best.is_none() { best = iter_best; }
                break;
            }
            let Some((mv, score)) = iter_best else { break };
            best = Some((mv, score));
            depth_reached = d;
            debug!("depth {} score {} nodes {} best {}", d, score, self.nodes, mv);
            // Previous best goes first in the next iteration.
            if let Some(pos) = root_moves.iter().position(|m| *m == mv) {
                let m = root_moves.remove(pos);
                root_moves.insert(0, m);
            }
            if score.abs() >= MATE_SCORE - MAX_PLY as i32 { break; }
            if self.should_stop() { break; }
        }

        let (best_move, score) = match best {
            Some((m, s)) => (Some(m), s),
            // Nothing finished in time: hand back the first move as a provisional answer.
            None => match root_moves.first() {
                Some(m) => (Some(*m), evaluate(&board.apply(m), color, self.layer)),
                None => (None, -MATE_SCORE),
            },
        };
        SearchReport { score, best_move, depth_reached, nodes: self.nodes, elapsed_ms: start.elapsed().as_millis() as u64 }
    }

    // Returns the best root move of this iteration and whether it ran to completion.
    fn search_root(&mut self, board: &Board, moves: &[Move], depth: u32) -> (Option<(Move, i32)>, bool) {
        let mut alpha = -MATE_SCORE;
        let beta = MATE_SCORE;
        let mut best: Option<(Move, i32)> = None;
        for m in moves {
            let child = board.apply(m);
            let score = self.minimax(&child, depth - 1, false, alpha, beta, 1);
            if self.stopped { return (best, false); }
            if best.map_or(true, |(_, bs)| score > bs) { best = Some((*m, score)); }
            if score > alpha { alpha = score; }
        }
        (best, true)
    }

    fn minimax(&mut self, board: &Board, depth: u32, maximizing: bool, mut alpha: i32, mut beta: i32, ply: i32) -> i32 {
        if self.should_stop() {
            self.stopped = true;
            return DRAW_SCORE;
        }
        self.nodes += 1;
        let side = if maximizing { self.root } else { self.root.opposite() };
        let in_check = is_in_check(board, side);
        if depth == 0 {
            if in_check && !has_legal_move(board, side) { return mated_score(maximizing, ply); }
            return self.eval(board);
        }
        let mut moves = legal_moves(board, side);
        if moves.is_empty() {
            return if in_check { mated_score(maximizing, ply) } else { self.eval(board) };
        }
        if self.order_captures { order_by_victim(&mut moves); }

        if maximizing {
            let mut best = -MATE_SCORE;
            for m in &moves {
                let child = board.apply(m);
                let score = self.minimax(&child, depth - 1, false, alpha, beta, ply + 1);
                if score > best { best = score; }
                if best > alpha { alpha = best; }
                if beta <= alpha || self.stopped { break; }
            }
            best
        } else {
            let mut best = MATE_SCORE;
            for m in &moves {
                let child = board.apply(m);
                let score = self.minimax(&child, depth - 1, true, alpha, beta, ply + 1);
                if score < best { best = score; }
                if best < beta { beta = best; }
                if beta <= alpha || self.stopped { break; }
            }
            best
        }
    }

    fn eval(&self, board: &Board) -> i32 { evaluate(board, self.root, self.layer) }

    fn should_stop(&self) -> bool {
        if let Some(ref flag) = self.abort { if flag.load(Ordering::Relaxed) { return true; } }
        if let Some(dl) = self.deadline { if Instant::now() >= dl { return true; } }
        false
    }

    pub fn nodes(&self) -> u64 { self.nodes }
}

// Mated side loses; quicker mates score further from zero.
fn mated_score(maximizing: bool, ply: i32) -> i32 {
    if maximizing { -MATE_SCORE + ply } else { MATE_SCORE - ply }
}

// Most valuable victim first; quiet moves keep their generation order.
fn order_by_victim(moves: &mut [Move]) {
    moves.sort_by_key(|m| Reverse(m.captured.map_or(0, |c| piece_value(c.kind))));
}
