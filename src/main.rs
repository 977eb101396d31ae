use anyhow::Result;
use clap::Parser;
use log::info;

use ferrochess::board::position::{Position, START_FEN};
use ferrochess::search::Search;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Position to search, as a FEN string
    #[arg(short, long, default_value_t = String::from(START_FEN))]
    fen: String,

    /// Maximum search depth in plies
    #[arg(short, long, default_value_t = 5)]
    depth: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut pos = Position::from_fen(&args.fen)?;
    println!("{}", pos);

    info!("searching to depth {}", args.depth);
    let mut search = Search::new();
    let result = search.find_best_move(&mut pos, args.depth);

    if result.best_move.is_null() {
        println!(
            "no legal moves (score {}): {}",
            result.score,
            if result.score == 0 { "stalemate" } else { "checkmate" }
        );
    } else {
        println!(
            "best move: {}  score: {}  depth: {}  nodes: {}",
            result.best_move, result.score, result.depth, result.nodes_searched
        );
    }

    Ok(())
}
