//! Attack sets: precomputed lookups for the non-sliding pieces, rays
//! computed on the fly for the sliders.
//!
//! The lookup tables live behind a `Lazy` static, so the first use from
//! anywhere in the engine initialises them exactly once; there is no
//! uninitialised state to observe.

use once_cell::sync::Lazy;

use crate::board::bitboard::*;
use crate::board::position::Color;

struct AttackTables {
    pawn: [[Bitboard; 64]; 2],
    knight: [Bitboard; 64],
    king: [Bitboard; 64],
}

static TABLES: Lazy<AttackTables> = Lazy::new(|| {
    let mut tables = AttackTables {
        pawn: [[EMPTY; 64]; 2],
        knight: [EMPTY; 64],
        king: [EMPTY; 64],
    };

    for sq in 0..64u8 {
        let rank = rank_of(sq) as i32;
        let file = file_of(sq) as i32;

        // Pawns attack the two forward diagonals, clipped at the edges.
        if rank < 7 {
            if file > 0 {
                tables.pawn[Color::White as usize][sq as usize] |= square_mask(sq + 7);
            }
            if file < 7 {
                tables.pawn[Color::White as usize][sq as usize] |= square_mask(sq + 9);
            }
        }
        if rank > 0 {
            if file > 0 {
                tables.pawn[Color::Black as usize][sq as usize] |= square_mask(sq - 9);
            }
            if file < 7 {
                tables.pawn[Color::Black as usize][sq as usize] |= square_mask(sq - 7);
            }
        }

        // The file-distance filter rejects jumps that wrap around a rank.
        const KNIGHT_DELTAS: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
        for delta in KNIGHT_DELTAS {
            let target = sq as i32 + delta;
            if (0..64).contains(&target) && (file - file_of(target as Square) as i32).abs() <= 2 {
                tables.knight[sq as usize] |= square_mask(target as Square);
            }
        }

        const KING_DELTAS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
        for delta in KING_DELTAS {
            let target = sq as i32 + delta;
            if (0..64).contains(&target) && (file - file_of(target as Square) as i32).abs() <= 1 {
                tables.king[sq as usize] |= square_mask(target as Square);
            }
        }
    }

    tables
});

#[inline(always)]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    TABLES.pawn[color as usize][sq as usize]
}

#[inline(always)]
pub fn knight_attacks(sq: Square) -> Bitboard {
    TABLES.knight[sq as usize]
}

#[inline(always)]
pub fn king_attacks(sq: Square) -> Bitboard {
    TABLES.king[sq as usize]
}

/// Diagonal ray walk. Each ray includes its first blocker, so captures
/// are part of the attack set; friendly blockers are masked off by the
/// callers that need destinations.
pub fn bishop_attacks(sq: Square, blockers: Bitboard) -> Bitboard {
    sliding_attacks(sq, blockers, &[(1, 1), (1, -1), (-1, 1), (-1, -1)])
}

pub fn rook_attacks(sq: Square, blockers: Bitboard) -> Bitboard {
    sliding_attacks(sq, blockers, &[(1, 0), (-1, 0), (0, 1), (0, -1)])
}

#[inline(always)]
pub fn queen_attacks(sq: Square, blockers: Bitboard) -> Bitboard {
    bishop_attacks(sq, blockers) | rook_attacks(sq, blockers)
}

fn sliding_attacks(sq: Square, blockers: Bitboard, directions: &[(i32, i32); 4]) -> Bitboard {
    let mut attacks = EMPTY;
    let rank = rank_of(sq) as i32;
    let file = file_of(sq) as i32;

    for &(dr, df) in directions {
        let mut r = rank + dr;
        let mut f = file + df;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let target = make_square(r as u8, f as u8);
            attacks |= square_mask(target);
            if blockers & square_mask(target) != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_attacks_corner() {
        assert_eq!(knight_attacks(A1), square_mask(B3) | square_mask(C2));
        assert_eq!(knight_attacks(H8), square_mask(G6) | square_mask(F7));
    }

    #[test]
    fn test_knight_attacks_center() {
        assert_eq!(popcount(knight_attacks(E4)), 8);
    }

    #[test]
    fn test_king_attacks() {
        assert_eq!(popcount(king_attacks(E4)), 8);
        assert_eq!(popcount(king_attacks(A1)), 3);
        assert_eq!(king_attacks(A1), square_mask(A2) | square_mask(B1) | square_mask(B2));
    }

    #[test]
    fn test_pawn_attacks_edges() {
        assert_eq!(pawn_attacks(Color::White, E4), square_mask(D5) | square_mask(F5));
        assert_eq!(pawn_attacks(Color::White, A2), square_mask(B3));
        assert_eq!(pawn_attacks(Color::White, H2), square_mask(G3));
        assert_eq!(pawn_attacks(Color::Black, E5), square_mask(D4) | square_mask(F4));
        assert_eq!(pawn_attacks(Color::White, E8), EMPTY);
        assert_eq!(pawn_attacks(Color::Black, E1), EMPTY);
    }

    #[test]
    fn test_rook_attacks_with_blocker() {
        // Blocker on a4: the ray includes a4 and stops there.
        let attacks = rook_attacks(A1, square_mask(A4));
        assert_ne!(attacks & square_mask(A4), 0);
        assert_eq!(attacks & square_mask(A5), 0);
        assert_ne!(attacks & square_mask(H1), 0);
    }

    #[test]
    fn test_bishop_attacks_with_blocker() {
        let attacks = bishop_attacks(D4, square_mask(F6));
        assert_ne!(attacks & square_mask(E5), 0);
        assert_ne!(attacks & square_mask(F6), 0);
        assert_eq!(attacks & square_mask(G7), 0);
    }

    #[test]
    fn test_empty_board_slider_counts() {
        assert_eq!(popcount(rook_attacks(E4, EMPTY)), 14);
        assert_eq!(popcount(bishop_attacks(E4, EMPTY)), 13);
        assert_eq!(popcount(queen_attacks(E4, EMPTY)), 27);
    }

    #[test]
    fn test_determinism() {
        let blockers = square_mask(E6) | square_mask(C3);
        assert_eq!(queen_attacks(E4, blockers), queen_attacks(E4, blockers));
    }
}
