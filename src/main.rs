use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use xqbot::board::{Color, GameStatus, Move, Position, Square};
use xqbot::search::{Difficulty, SearchJob};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Xiangqi against the engine", long_about = None)]
struct Args {
    /// Engine difficulty, 1 (novice) to 10 (international master)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
    level: u8,

    /// Difficulty of the Black engine in AI-vs-AI mode (defaults to --level)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    black_level: Option<u8>,

    /// Operation mode: 'h' for human vs engine, 'a' for engine vs engine
    #[arg(long, default_value = "h")]
    mode: String,

    /// Your color: 'r' for red, 'b' for black
    #[arg(long, default_value = "r")]
    color: String,

    /// Seed for the random move policies
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many plies
    #[arg(long, default_value_t = 300)]
    max_plies: usize,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "r" | "red" => Ok(Color::Red),
        "b" | "black" => Ok(Color::Black),
        _ => anyhow::bail!("Invalid color: use 'r' or 'b'"),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    HumanVsEngine,
    EngineVsEngine,
}

fn parse_mode(mode_str: &str) -> Result<Mode> {
    match mode_str.to_lowercase().as_str() {
        "h" | "human" => Ok(Mode::HumanVsEngine),
        "a" | "ai" | "engine" => Ok(Mode::EngineVsEngine),
        _ => anyhow::bail!("Invalid mode: use 'h' or 'a'"),
    }
}

fn difficulty(level: u8) -> Result<Difficulty> {
    Difficulty::from_level(level).with_context(|| format!("no difficulty level {level}"))
}

fn parse_squares(input: &str) -> Option<(Square, Square)> {
    let nums: Vec<i8> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().ok())
        .collect::<Option<Vec<_>>>()?;
    match nums[..] {
        [x1, y1, x2, y2] => Some((Square::new(x1, y1), Square::new(x2, y2))),
        _ => None,
    }
}

fn print_moves(moves: &[Move]) {
    for (i, mv) in moves.iter().enumerate() {
        print!("{} ", mv);
        if (i + 1) % 6 == 0 { println!(); }
    }
    println!();
}

fn human_move(pos: &mut Position) -> Result<Option<Move>> {
    loop {
        print!("Enter your move as 'x1 y1 x2 y2' ('moves' to list, 'quit' to exit): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 { return Ok(None); }
        let input = input.trim();
        match input {
            "quit" => return Ok(None),
            "moves" => { print_moves(&pos.legal_moves()); continue; }
            _ => {}
        }
        let Some((from, to)) = parse_squares(input) else {
            println!("Invalid format! Example: '1 7 4 7'");
            continue;
        };
        match pos.make_move(from, to) {
            Ok(mv) => return Ok(Some(mv)),
            Err(e) => println!("Illegal move: {e}"),
        }
    }
}

fn engine_move(pos: &Position, difficulty: Difficulty, seed: Option<u64>, verbose: bool) -> Result<Option<Move>> {
    if verbose { println!("Thinking ({difficulty})..."); }
    let job = match seed {
        Some(s) => SearchJob::spawn_seeded(pos.board().clone(), pos.side_to_move(), difficulty, s)?,
        None => SearchJob::spawn(pos.board().clone(), pos.side_to_move(), difficulty)?,
    };
    let report = job.wait()?;
    if verbose {
        println!(
            "score {} depth {} nodes {} elapsed {}ms",
            report.score, report.depth_reached, report.nodes, report.elapsed_ms
        );
    }
    Ok(report.best_move)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mode = parse_mode(&args.mode)?;
    let human_color = parse_color(&args.color)?;
    let red_level = difficulty(args.level)?;
    let black_level = difficulty(args.black_level.unwrap_or(args.level))?;

    let mut pos = Position::startpos();
    let mut plies = 0usize;

    loop {
        println!("\n{}", pos.board());
        match pos.status() {
            GameStatus::Checkmate => {
                if let Some(winner) = pos.winner() { println!("Checkmate! {winner} wins!"); }
                break;
            }
            GameStatus::Stalemate => {
                println!("Stalemate: {} has no legal move.", pos.side_to_move());
                break;
            }
            GameStatus::Check => println!("{} is in check.", pos.side_to_move()),
            _ => {}
        }
        if plies >= args.max_plies {
            println!("Ply limit reached.");
            break;
        }
        println!("{}'s turn", pos.side_to_move());

        let is_human_turn = mode == Mode::HumanVsEngine && pos.side_to_move() == human_color;
        if is_human_turn {
            if human_move(&mut pos)?.is_none() {
                println!("Thanks for playing!");
                break;
            }
        } else {
            let level = if mode == Mode::EngineVsEngine && pos.side_to_move() == Color::Black { black_level } else { red_level };
            match engine_move(&pos, level, args.seed.map(|s| s ^ plies as u64), args.verbose)? {
                Some(mv) => {
                    println!("Engine plays: {}", mv);
                    pos.play(&mv);
                }
                None => {
                    println!("No legal moves available!");
                    break;
                }
            }
        }
        plies += 1;
    }

    Ok(())
}
