//! Pawn structure: doubled, isolated, and passed pawns.

use crate::board::bitboard::*;
use crate::board::position::{Color, PieceKind, Position};

pub const DOUBLED_PAWN_PENALTY: i32 = 20;
pub const ISOLATED_PAWN_PENALTY: i32 = 12;
pub const PASSED_PAWN_UNIT: i32 = 5;

fn adjacent_files_mask(file: u8) -> Bitboard {
    let mut mask = EMPTY;
    if file > 0 {
        mask |= file_mask(file - 1);
    }
    if file < 7 {
        mask |= file_mask(file + 1);
    }
    mask
}

// Own and adjacent files, ranks strictly ahead of the pawn. Tolerant
// FEN loading can put a pawn on its promotion rank, so the back-rank
// cases must not shift by 64.
fn passed_span(sq: Square, color: Color) -> Bitboard {
    let rank = rank_of(sq);
    let files = file_mask(file_of(sq)) | adjacent_files_mask(file_of(sq));
    let ahead = match color {
        Color::White => {
            if rank == 7 {
                EMPTY
            } else {
                !0u64 << ((rank as u32 + 1) * 8)
            }
        }
        Color::Black => (1u64 << (rank as u32 * 8)) - 1,
    };
    files & ahead
}

fn is_passed(sq: Square, color: Color, enemy_pawns: Bitboard) -> bool {
    enemy_pawns & passed_span(sq, color) == EMPTY
}

// Quadratic in the distance already advanced, so a passer near
// promotion dwarfs one still at home.
fn passed_bonus(sq: Square, color: Color) -> i32 {
    let advanced = match color {
        Color::White => rank_of(sq) as i32 - 1,
        Color::Black => 6 - rank_of(sq) as i32,
    };
    PASSED_PAWN_UNIT * advanced * advanced
}

/// Pawn structure score from White's perspective.
pub fn pawn_structure_score(pos: &Position) -> i32 {
    let white_pawns = pos.pieces(Color::White, PieceKind::Pawn);
    let black_pawns = pos.pieces(Color::Black, PieceKind::Pawn);
    let mut score = 0;

    for file in 0..8u8 {
        let mask = file_mask(file);
        let white_count = popcount(white_pawns & mask) as i32;
        let black_count = popcount(black_pawns & mask) as i32;

        if white_count > 1 {
            score -= DOUBLED_PAWN_PENALTY * (white_count - 1);
        }
        if black_count > 1 {
            score += DOUBLED_PAWN_PENALTY * (black_count - 1);
        }

        let adjacent = adjacent_files_mask(file);
        if white_count > 0 && white_pawns & adjacent == EMPTY {
            score -= ISOLATED_PAWN_PENALTY * white_count;
        }
        if black_count > 0 && black_pawns & adjacent == EMPTY {
            score += ISOLATED_PAWN_PENALTY * black_count;
        }
    }

    let mut pawns = white_pawns;
    while pawns != 0 {
        let sq = pop_lsb(&mut pawns);
        if is_passed(sq, Color::White, black_pawns) {
            score += passed_bonus(sq, Color::White);
        }
    }
    let mut pawns = black_pawns;
    while pawns != 0 {
        let sq = pop_lsb(&mut pawns);
        if is_passed(sq, Color::Black, white_pawns) {
            score -= passed_bonus(sq, Color::Black);
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_is_balanced() {
        assert_eq!(pawn_structure_score(&Position::default()), 0);
    }

    #[test]
    fn test_doubled_pawns_penalised() {
        // Two white pawns on the e-file vs a clean black pair. The black
        // e5/d5 pawns block the white passers, keeping the passed-pawn
        // term out of the comparison.
        let doubled =
            Position::from_fen("4k3/8/8/3pp3/8/4P3/4P3/4K3 w - - 0 1").unwrap();
        let clean = Position::from_fen("4k3/8/8/3pp3/8/8/3PP3/4K3 w - - 0 1").unwrap();
        assert!(pawn_structure_score(&doubled) < pawn_structure_score(&clean));
    }

    #[test]
    fn test_isolated_pawn_penalised() {
        // The a2 pawn has no neighbours; its mirror with a b2 pawn does.
        let isolated = Position::from_fen("4k3/p7/8/8/8/8/P7/4K3 w - - 0 1").unwrap();
        assert_eq!(pawn_structure_score(&isolated), 0);
        let supported = Position::from_fen("4k3/p7/8/8/8/8/PP6/4K3 w - - 0 1").unwrap();
        assert!(pawn_structure_score(&supported) > pawn_structure_score(&isolated));
    }

    #[test]
    fn test_passed_pawn_detection() {
        // White pawn on e5 faces a black pawn on d7: not passed.
        let blocked = Position::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 w - - 0 1").unwrap();
        // With the black pawn on h7 instead, e5 is passed.
        let passed = Position::from_fen("4k3/7p/8/4P3/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(pawn_structure_score(&passed) > pawn_structure_score(&blocked));
    }

    #[test]
    fn test_back_rank_pawns_do_not_overflow() {
        // Tolerant FEN loading accepts pawns on their promotion ranks;
        // the span computation must cope. The mirrored pair cancels.
        let pos = Position::from_fen("P7/8/8/8/8/8/8/p7 w - - 0 1").unwrap();
        assert_eq!(pawn_structure_score(&pos), 0);

        let white_only = Position::from_fen("P7/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert!(pawn_structure_score(&white_only) > 0);
    }

    #[test]
    fn test_passed_bonus_grows_with_advancement() {
        let far = Position::from_fen("4k3/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let near = Position::from_fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1").unwrap();
        assert!(pawn_structure_score(&far) > pawn_structure_score(&near));
    }
}
