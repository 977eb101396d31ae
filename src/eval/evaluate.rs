//! Static evaluation.
//!
//! Scores are centipawns from WHITE's perspective, always: positive
//! means White stands better, whoever is to move. The search applies the
//! side-to-move sign flip; nothing here does.

use crate::board::position::{Color, Position};
use crate::eval::king_safety::king_shield_score;
use crate::eval::material::{is_endgame, is_insufficient_material, material_score};
use crate::eval::mobility::mobility_score;
use crate::eval::pawns::pawn_structure_score;
use crate::eval::pst::piece_square_score;
use crate::eval::threats::piece_safety_score;
use crate::movegen::legal::{generate_legal_moves, is_king_in_check};

/// Checkmate score magnitude. The search subtracts the ply so nearer
/// mates score higher; ±100000 alpha-beta bounds leave ample headroom.
pub const MATE: i32 = 10_000;

/// Evaluate `pos` in centipawns from White's perspective.
///
/// Game endings short-circuit: the side to move having no legal moves is
/// mate (±`MATE`) or stalemate (0), and drawn material is 0.
pub fn evaluate(pos: &Position) -> i32 {
    let side = pos.side_to_move;

    if generate_legal_moves(pos, side).is_empty() {
        if is_king_in_check(pos, side) {
            return match side {
                Color::White => -MATE,
                Color::Black => MATE,
            };
        }
        return 0;
    }

    if is_insufficient_material(pos) {
        return 0;
    }

    let endgame = is_endgame(pos);

    let material = material_score(pos, endgame);
    let position = piece_square_score(pos, endgame);
    let structure = pawn_structure_score(pos);
    let mobility = mobility_score(pos);
    let safety = piece_safety_score(pos);
    let shield = king_shield_score(pos, endgame);

    let mut total = material + position + structure / 2 + mobility / 2 + safety / 10 + shield;

    // Material and structure edges convert more easily with fewer
    // pieces on the board.
    if endgame {
        total = total * 6 / 5;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_is_level() {
        let score = evaluate(&Position::default());
        assert!(score.abs() < 100, "startpos should be near zero, got {}", score);
    }

    #[test]
    fn test_material_advantage_dominates() {
        // White is a queen up.
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1").unwrap();
        assert!(evaluate(&pos) > 500);
    }

    #[test]
    fn test_white_centric_for_both_sides_to_move() {
        // The same queen-up position must score positive for White no
        // matter who is to move.
        let white_to_move = Position::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1").unwrap();
        let black_to_move = Position::from_fen("4k3/8/8/8/8/8/8/Q3K3 b - - 0 1").unwrap();
        assert!(evaluate(&white_to_move) > 0);
        assert!(evaluate(&black_to_move) > 0);
    }

    #[test]
    fn test_checkmate_score() {
        // Back-rank mate: Black to move, mated.
        let pos = Position::from_fen("R3k3/8/4K3/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(evaluate(&pos), MATE);
    }

    #[test]
    fn test_stalemate_is_zero() {
        let pos = Position::from_fen("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(evaluate(&pos), 0);
    }

    #[test]
    fn test_insufficient_material_is_zero() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(evaluate(&pos), 0);
    }
}
