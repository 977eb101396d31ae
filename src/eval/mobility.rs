//! Mobility: pseudo-legal move counts, square-root compressed so open
//! positions do not drown out material.

use crate::board::position::{Color, Position};
use crate::movegen::moves::{generate_pseudo_legal, MAX_MOVES};

pub const MOBILITY_UNIT: f64 = 10.0;

/// Mobility score from White's perspective.
pub fn mobility_score(pos: &Position) -> i32 {
    let mut buffer = Vec::with_capacity(MAX_MOVES);

    generate_pseudo_legal(pos, Color::White, &mut buffer);
    let white = buffer.len() as f64;

    buffer.clear();
    generate_pseudo_legal(pos, Color::Black, &mut buffer);
    let black = buffer.len() as f64;

    (MOBILITY_UNIT * (white.sqrt() - black.sqrt())) as i32
}
