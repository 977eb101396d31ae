//! Error types for the engine's fallible surface.

use thiserror::Error;

/// Errors from FEN parsing.
///
/// The placement field is parsed tolerantly (unknown characters are
/// skipped), so only the side-to-move and castling fields can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Side-to-move field was neither `w` nor `b`
    #[error("invalid side-to-move field: {0:?}")]
    InvalidSideToMove(String),

    /// Castling field contained a character outside `KQkq-`
    #[error("invalid castling flag: {0:?}")]
    InvalidCastlingFlag(char),
}
