use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;
use xqbot::search::Difficulty;
use xqbot::selfplay::{play_game, tally, write_records, SelfPlayParams};

#[derive(Parser, Debug)]
#[command(name = "xqbot-selfplay", about = "Play engine-vs-engine matches and write JSON-lines records")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    /// Red difficulty level (1-10)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=10))]
    red: u8,
    /// Black difficulty level (1-10)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=10))]
    black: u8,
    #[arg(long)]
    movetime_ms: Option<u64>,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        max_plies: a.max_plies,
        red: Difficulty::from_level(a.red).context("red level")?,
        black: Difficulty::from_level(a.black).context("black level")?,
        seed: a.seed,
        movetime_ms: a.movetime_ms,
    };
    eprintln!("Playing {} games: red {} vs black {} (threads={})", a.games, params.red, params.black, a.threads);

    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")?);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(a.threads.max(1)).build()?;
    let games: Vec<_> = pool.install(|| {
        (0..params.games).into_par_iter().map(|i| {
            let g = play_game(&params, i);
            pb.inc(1);
            g
        }).collect()
    });
    pb.finish();

    let (r, b, d) = tally(&games);
    eprintln!("Red {r} / Black {b} / Draw {d} / Unfinished {}", games.len() - r - b - d);
    write_records(&games, &a.out)?;
    eprintln!("Wrote {} records to {}", games.len(), a.out.display());
    Ok(())
}
