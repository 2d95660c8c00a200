//! Square and move notation.
//!
//! Squares are written file letter then rank digit (`e2`). The file letter is accepted in either case;
//! nothing else is tolerated, surrounding whitespace included.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseMoveError, ParseSquareError};
use crate::moves::Move;
use crate::types::Square;

/// Parses a square reference such as `e2` or `E2`.
pub fn parse_square(text: &str) -> Result<Square, ParseSquareError> {
    let mut chars = text.chars();
    let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
        (Some(file), Some(rank), None) => (file, rank),
        _ => return Err(ParseSquareError::WrongLength(text.chars().count())),
    };

    let file = file.to_ascii_lowercase();
    if !('a'..='h').contains(&file) {
        return Err(ParseSquareError::BadFile(file));
    }
    if !('1'..='8').contains(&rank) {
        return Err(ParseSquareError::BadRank(rank));
    }

    let col = file as u8 - b'a';
    let row = 8 - (rank as u8 - b'0');
    Square::new(row, col).ok_or(ParseSquareError::BadRank(rank))
}

/// Parses a move written as two adjacent squares (`e2e4`).
pub fn parse_move(text: &str) -> Result<Move, ParseMoveError> {
    let len = text.chars().count();
    if len != 4 || !text.is_ascii() {
        return Err(ParseMoveError::WrongLength(len));
    }
    let from = parse_square(&text[0..2])?;
    let to = parse_square(&text[2..4])?;
    Ok(Move::new(from, to))
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        let rank = (b'8' - self.row()) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_square(s)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}
