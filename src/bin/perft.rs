use xqbot::board::{Board, Color};
use xqbot::perft::perft;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for xqbot")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Side to move from the start position: 'r' or 'b'
    #[arg(long, default_value = "r")]
    side: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Print per-root-move counts
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use rayon::prelude::*;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let side = match args.side.as_str() {
        "r" | "red" => Color::Red,
        "b" | "black" => Color::Black,
        other => anyhow::bail!("unknown side '{other}'"),
    };
    let base = Board::startpos();
    let depth = args.depth;

    if args.divide && depth > 0 {
        for (mv, n) in xqbot::perft::divide(&base, side, depth) { println!("{mv}: {n}"); }
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let nodes: u64 = pool.install(|| {
        if args.threads <= 1 || depth <= 1 {
            perft(&base, side, depth)
        } else {
            let root_moves = xqbot::rules::legal_moves(&base, side);
            root_moves.par_iter().map(|mv| perft(&base.apply(mv), side.opposite(), depth - 1)).sum()
        }
    });
    let dt = t0.elapsed().as_secs_f64();
    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
