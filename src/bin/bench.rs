use clap::Parser;
use std::time::{Duration, Instant};
use xqbot::board::{Board, Color};
use xqbot::search::{Difficulty, EvalLayer, SearchParams, Searcher};

#[derive(Parser, Debug)]
#[command(name = "xqbot-bench", version, about = "Benchmark xqbot search from the start position")]
struct Args {
    /// Minimax difficulty level whose depth, budget and evaluation are used (3-10)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(3..=10))]
    level: u8,

    /// Fixed search depth (overrides the level's depth when > 0)
    #[arg(long, default_value_t = 0)]
    depth: u32,

    /// Movetime in milliseconds (overrides the level's budget)
    #[arg(long)]
    movetime: Option<u64>,

    /// Disable capture-first ordering
    #[arg(long, default_value_t = false)]
    no_ordering: bool,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let difficulty = Difficulty::from_level(args.level).ok_or_else(|| anyhow::anyhow!("bad level"))?;

    let mut p = SearchParams::from(difficulty.profile());
    if args.depth > 0 { p.depth = args.depth; }
    if let Some(ms) = args.movetime { p.movetime = Some(Duration::from_millis(ms)); }
    p.order_captures = !args.no_ordering;
    if p.layer == EvalLayer::Material { log::debug!("benchmarking with material-only evaluation"); }

    let board = Board::startpos();
    let mut s = Searcher::default();
    let t0 = Instant::now();
    let res = s.search_with_params(&board, Color::Red, p);
    let dt = t0.elapsed();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&res)?);
        return Ok(());
    }
    let nps = if dt.as_secs_f64() > 0.0 { res.nodes as f64 / dt.as_secs_f64() } else { 0.0 };
    let best = res.best_move.map_or_else(|| "(none)".to_string(), |m| m.to_string());
    println!("bestmove={} score={} depth={} nodes={} elapsed={:.3}s nps={:.1}", best, res.score, res.depth_reached, res.nodes, dt.as_secs_f64(), nps);
    Ok(())
}
