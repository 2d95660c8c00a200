//! Move representation.

use std::fmt;

use serde::Serialize;

use crate::types::{Cell, Piece, Square};

/// A from/to square pair. Carries no legality information by itself.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct Move {
    from: Square,
    to: Square,
}

/// Kind of an approved move, as decided by the rules.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    Quiet,
    DoublePush,
    Capture,
}

/// A move applied to the board, with what it needs to be taken back.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize)]
pub struct MoveRecord {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Cell,
    pub kind: MoveKind,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Returns the origin square.
    #[inline(always)]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline(always)]
    pub const fn to(self) -> Square {
        self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
