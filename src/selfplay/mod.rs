use crate::board::{Color, GameStatus, Move, Position};
use crate::search::{Difficulty, SearchParams, Strategy};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub red: Difficulty,
    pub black: Difficulty,
    pub seed: u64,
    /// Caps every minimax tier's time budget, keeping long matches practical.
    pub movetime_ms: Option<u64>,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 1, max_plies: 200, red: Difficulty::Elementary, black: Difficulty::Elementary, seed: 42, movetime_ms: None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    RedWins,
    BlackWins,
    Draw,
    /// Ply limit reached before a result.
    Unfinished,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub red: Difficulty,
    pub black: Difficulty,
    pub moves: Vec<Move>,
    pub outcome: Outcome,
    /// Status of the side to move when the game stopped.
    pub final_status: GameStatus,
}

fn strategy_for(difficulty: Difficulty, params: &SelfPlayParams) -> Strategy {
    match (Strategy::for_difficulty(difficulty), params.movetime_ms) {
        (Strategy::Minimax(p), Some(ms)) => {
            let cap = Duration::from_millis(ms);
            let movetime = p.movetime.map_or(cap, |t| t.min(cap));
            Strategy::Minimax(SearchParams { movetime: Some(movetime), ..p })
        }
        (s, _) => s,
    }
}

/// Plays game `index` of the match. Each game derives its own RNG from the
/// match seed, so games are reproducible independently of scheduling.
pub fn play_game(params: &SelfPlayParams, index: usize) -> GameRecord {
    let mut rng = SmallRng::seed_from_u64(params.seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    let red = strategy_for(params.red, params);
    let black = strategy_for(params.black, params);
    let mut pos = Position::startpos();
    let mut moves = Vec::new();
    let mut outcome = Outcome::Unfinished;
    loop {
        match pos.status() {
            GameStatus::Checkmate => {
                outcome = if pos.side_to_move() == Color::Black { Outcome::RedWins } else { Outcome::BlackWins };
                break;
            }
            GameStatus::Stalemate => {
                outcome = Outcome::Draw;
                break;
            }
            _ => {}
        }
        if moves.len() >= params.max_plies { break; }
        let strategy = if pos.side_to_move() == Color::Red { &red } else { &black };
        let report = strategy.select_move(pos.board(), pos.side_to_move(), &mut rng, None);
        let Some(mv) = report.best_move else { break };
        pos.play(&mv);
        moves.push(mv);
    }
    GameRecord { red: params.red, black: params.black, moves, outcome, final_status: pos.status() }
}

pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    (0..params.games).into_par_iter().map(|i| play_game(params, i)).collect()
}

/// One JSON object per line.
pub fn write_records<P: AsRef<Path>>(games: &[GameRecord], path: P) -> anyhow::Result<()> {
    if let Some(dir) = path.as_ref().parent() {
        if !dir.as_os_str().is_empty() { create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(&path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_records<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<GameRecord>> {
    let r = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in r.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}

/// (red wins, black wins, draws) over finished games.
pub fn tally(games: &[GameRecord]) -> (usize, usize, usize) {
    games.iter().fold((0, 0, 0), |(r, b, d), g| match g.outcome {
        Outcome::RedWins => (r + 1, b, d),
        Outcome::BlackWins => (r, b + 1, d),
        Outcome::Draw => (r, b, d + 1),
        Outcome::Unfinished => (r, b, d),
    })
}
