//! Error types.
//!
//! Every error leaves the session in the state it was in before the failing call.

use thiserror::Error;

use crate::types::Square;

/// Why a square reference could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseSquareError {
    #[error("square must be exactly 2 characters, got {0}")]
    WrongLength(usize),
    #[error("file must be a-h, got {0:?}")]
    BadFile(char),
    #[error("rank must be 1-8, got {0:?}")]
    BadRank(char),
}

/// Why a four-character move (`e2e4`) could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("move must be exactly 4 characters, got {0}")]
    WrongLength(usize),
    #[error("bad square in move: {0}")]
    Square(#[from] ParseSquareError),
}

/// A malformed or off-board square reference entered by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid square {text:?}: {source}")]
pub struct InvalidSquare {
    pub text: String,
    pub source: ParseSquareError,
}

/// Errors of a move attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// A move was attempted with nothing selected.
    #[error("no square selected")]
    NoSelectionActive,

    #[error(transparent)]
    InvalidSquare(#[from] InvalidSquare),

    /// The rules rejected the move.
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },
}

/// Errors of a move given as one piece of text (`e2e4`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("malformed move: {0}")]
    Malformed(#[from] ParseMoveError),
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors while reading a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN missing board part")]
    MissingPlacement,
    #[error("FEN has {0} ranks, expected 8")]
    RankCount(usize),
    #[error("FEN rank {rank} does not cover 8 files")]
    RankLength { rank: u8 },
    #[error("unknown piece letter {0:?}")]
    UnknownPiece(char),
    #[error("invalid side to move {0:?}")]
    SideToMove(String),
}

/// Errors while loading a session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}
