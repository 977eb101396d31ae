use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use ferrochess::board::position::{Position, START_FEN};
use ferrochess::movegen::generate_legal_moves;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Position to count from, as a FEN string
    #[arg(short, long, default_value_t = String::from(START_FEN))]
    fen: String,

    /// Maximum perft depth
    #[arg(short, long, default_value_t = 4)]
    depth: u32,
}

fn perft(pos: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = generate_legal_moves(pos, pos.side_to_move);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in moves {
        let mut mv = mv;
        pos.make(&mut mv);
        nodes += perft(pos, depth - 1);
        pos.undo(&mv);
    }
    nodes
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut pos = Position::from_fen(&args.fen)?;
    println!("perft from: {}", args.fen);

    for depth in 1..=args.depth {
        let start = Instant::now();
        let nodes = perft(&mut pos, depth);
        let elapsed = start.elapsed();
        println!(
            "depth {:>2}  nodes {:>12}  time {:>8.3}s",
            depth,
            nodes,
            elapsed.as_secs_f64()
        );
    }

    Ok(())
}
