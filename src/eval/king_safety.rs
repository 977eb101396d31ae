//! King shelter: open files next to the king are dangerous until the
//! endgame, where the king is a fighting piece.

use crate::board::bitboard::*;
use crate::board::position::{Color, PieceKind, Position};

pub const OPEN_FILE_PENALTY: i32 = 20;

fn shield_penalty(pos: &Position, color: Color) -> i32 {
    let Some(king_sq) = pos.king_square(color) else {
        return 0;
    };
    let pawns = pos.pieces(color, PieceKind::Pawn);
    let king_file = file_of(king_sq) as i32;

    let mut penalty = 0;
    for file in (king_file - 1).max(0)..=(king_file + 1).min(7) {
        if pawns & file_mask(file as u8) == EMPTY {
            penalty += OPEN_FILE_PENALTY;
        }
    }
    penalty
}

/// King safety from White's perspective; zero in the endgame.
pub fn king_shield_score(pos: &Position, endgame: bool) -> i32 {
    if endgame {
        return 0;
    }
    shield_penalty(pos, Color::Black) - shield_penalty(pos, Color::White)
}
