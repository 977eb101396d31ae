//! Attack detection and the legality filter.

use crate::board::bitboard::*;
use crate::board::position::{Color, Move, PieceKind, Position};
use crate::movegen::attacks;
use crate::movegen::moves::{generate_pseudo_legal, MAX_MOVES};

/// Is `sq` attacked by any piece of `by`, given the current occupancy?
///
/// Reverse lookup: a pawn of the defending colour placed on `sq` would
/// attack exactly the squares from which an enemy pawn attacks `sq`, and
/// the symmetric argument holds for every other piece kind.
pub fn is_square_attacked(pos: &Position, sq: Square, by: Color) -> bool {
    if attacks::pawn_attacks(by.opposite(), sq) & pos.pieces(by, PieceKind::Pawn) != 0 {
        return true;
    }
    if attacks::knight_attacks(sq) & pos.pieces(by, PieceKind::Knight) != 0 {
        return true;
    }
    if attacks::king_attacks(sq) & pos.pieces(by, PieceKind::King) != 0 {
        return true;
    }

    let blockers = pos.all_pieces();
    let diagonal = attacks::bishop_attacks(sq, blockers);
    if diagonal & (pos.pieces(by, PieceKind::Bishop) | pos.pieces(by, PieceKind::Queen)) != 0 {
        return true;
    }
    let straight = attacks::rook_attacks(sq, blockers);
    if straight & (pos.pieces(by, PieceKind::Rook) | pos.pieces(by, PieceKind::Queen)) != 0 {
        return true;
    }

    false
}

pub fn is_king_in_check(pos: &Position, color: Color) -> bool {
    match pos.king_square(color) {
        Some(sq) => is_square_attacked(pos, sq, color.opposite()),
        None => false,
    }
}

/// `side` is the side that makes `mv`; the move is legal iff it does not
/// leave that side's king attacked.
pub fn is_move_legal(pos: &mut Position, mv: &mut Move, side: Color) -> bool {
    pos.make(mv);
    let in_check = is_king_in_check(pos, side);
    pos.undo(mv);
    !in_check
}

/// Fill `moves` with the legal moves for `side`, reusing the buffer.
///
/// The position is mutated during filtering but restored exactly before
/// returning. Emission order follows the pseudo-legal generators and is
/// deterministic for a given position.
pub fn generate_legal_into(pos: &mut Position, side: Color, moves: &mut Vec<Move>) {
    moves.clear();
    generate_pseudo_legal(pos, side, moves);
    moves.retain_mut(|mv| is_move_legal(pos, mv, side));
}

pub fn generate_legal_moves(pos: &Position, side: Color) -> Vec<Move> {
    let mut scratch = pos.clone();
    let mut moves = Vec::with_capacity(MAX_MOVES);
    generate_legal_into(&mut scratch, side, &mut moves);
    moves
}
