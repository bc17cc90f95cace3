//! Background search.
//!
//! A [`SearchJob`] owns one search thread. Cancellation is cooperative: the
//! searcher polls the shared stop flag at every node entry, so a cancelled
//! job still returns its best completed result.

use crate::board::{Board, Color};
use crate::search::alphabeta::SearchReport;
use crate::search::difficulty::Difficulty;
use crate::search::strategy::Strategy;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search thread terminated abnormally")]
    WorkerPanicked,
    #[error("search result was already taken")]
    AlreadyTaken,
    #[error("failed to spawn search thread: {0}")]
    Spawn(#[from] std::io::Error),
}

pub struct SearchJob {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<SearchReport>>,
}

impl SearchJob {
    pub fn spawn(board: Board, color: Color, difficulty: Difficulty) -> Result<Self, SearchError> {
        Self::spawn_with(board, color, Strategy::for_difficulty(difficulty), None)
    }

    /// Like [`SearchJob::spawn`] with a fixed RNG seed for the random policies.
    pub fn spawn_seeded(board: Board, color: Color, difficulty: Difficulty, seed: u64) -> Result<Self, SearchError> {
        Self::spawn_with(board, color, Strategy::for_difficulty(difficulty), Some(seed))
    }

    pub fn spawn_with(board: Board, color: Color, strategy: Strategy, seed: Option<u64>) -> Result<Self, SearchError> {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::Builder::new().name("xqbot-search".into()).spawn(move || {
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => SmallRng::from_entropy(),
            };
            let report = strategy.select_move(&board, color, &mut rng, Some(flag));
            info!(
                "search for {} finished: depth {} nodes {} score {} in {}ms",
                color, report.depth_reached, report.nodes, report.score, report.elapsed_ms
            );
            report
        })?;
        Ok(Self { stop, handle: Some(handle) })
    }

    /// Asks the search to stop; does not wait.
    pub fn cancel(&self) { self.stop.store(true, Ordering::Relaxed); }

    pub fn is_finished(&self) -> bool { self.handle.as_ref().map_or(true, |h| h.is_finished()) }

    /// Non-blocking poll. Yields the report once, when the search has ended.
    pub fn try_result(&mut self) -> Option<Result<SearchReport, SearchError>> {
        if !self.handle.as_ref()?.is_finished() { return None; }
        Some(self.join())
    }

    /// Blocks until the search ends.
    pub fn wait(mut self) -> Result<SearchReport, SearchError> { self.join() }

    /// Cancels and then waits, returning the best result found so far.
    pub fn stop_and_wait(self) -> Result<SearchReport, SearchError> {
        self.cancel();
        self.wait()
    }

    fn join(&mut self) -> Result<SearchReport, SearchError> {
        let handle = self.handle.take().ok_or(SearchError::AlreadyTaken)?;
        handle.join().map_err(|_| SearchError::WorkerPanicked)
    }
}

impl Drop for SearchJob {
    fn drop(&mut self) {
        // Abandoned jobs stop at the next node.
        self.stop.store(true, Ordering::Relaxed);
    }
}
