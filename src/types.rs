use std::fmt;
use std::ops::{Index, IndexMut, Not};

use serde::{Deserialize, Serialize};

use crate::bitboard::Bitboard;

/// Side of a piece, and the side to move.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White = 0,
    Black = 1,
}

/// Whose turn it is. White moves first.
pub type Turn = Color;

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Row delta of a pawn step: White moves up the grid (towards row 0), Black down.
    #[inline(always)]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row a pawn starts on, the only row it may double-step from.
    #[inline(always)]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

/// Allows for array indexing without explicit conversion of Color to usize.
/// Example: `array[Color::White]`
impl<T> Index<Color> for [T] {
    type Output = T;
    fn index(&self, index: Color) -> &Self::Output {
        &self[index as usize]
    }
}

impl<T> IndexMut<Color> for [T] {
    fn index_mut(&mut self, index: Color) -> &mut Self::Output {
        &mut self[index as usize]
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => write!(f, "White"),
            Self::Black => write!(f, "Black"),
        }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Pawn = 0,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const NUM: usize = 6;

    #[rustfmt::skip]
    pub const ALL: [PieceType; PieceType::NUM] = [
        PieceType::Pawn, PieceType::Knight, PieceType::Bishop,
        PieceType::Rook, PieceType::Queen,  PieceType::King,
    ];
}

/// Allows for array indexing without explicit conversion of PieceType to usize.
impl<T> Index<PieceType> for [T] {
    type Output = T;
    fn index(&self, index: PieceType) -> &Self::Output {
        &self[index as usize]
    }
}

impl<T> IndexMut<PieceType> for [T] {
    fn index_mut(&mut self, index: PieceType) -> &mut Self::Output {
        &mut self[index as usize]
    }
}

/// A colored piece. Pieces are plain values: moving one copies it to the new cell.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub piece_type: PieceType,
}

/// Content of a board square: `None` when empty.
pub type Cell = Option<Piece>;

impl Piece {
    pub const fn new(color: Color, piece_type: PieceType) -> Self {
        Self { color, piece_type }
    }

    /// Converts Piece to its FEN letter (uppercase for White).
    #[rustfmt::skip]
    pub const fn to_char(self) -> char {
        let ch = match self.piece_type {
            PieceType::Pawn   => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook   => 'r',
            PieceType::Queen  => 'q',
            PieceType::King   => 'k',
        };
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    /// Creates Piece from a FEN letter.
    #[rustfmt::skip]
    pub const fn from_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() { Color::White } else { Color::Black };
        let piece_type = match ch.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _   => return None,
        };
        Some(Self { color, piece_type })
    }

    /// Unicode chess symbol, for text renderers.
    #[rustfmt::skip]
    pub const fn glyph(self) -> char {
        match (self.color, self.piece_type) {
            (Color::White, PieceType::King)   => '\u{2654}',
            (Color::White, PieceType::Queen)  => '\u{2655}',
            (Color::White, PieceType::Rook)   => '\u{2656}',
            (Color::White, PieceType::Bishop) => '\u{2657}',
            (Color::White, PieceType::Knight) => '\u{2658}',
            (Color::White, PieceType::Pawn)   => '\u{2659}',
            (Color::Black, PieceType::King)   => '\u{265A}',
            (Color::Black, PieceType::Queen)  => '\u{265B}',
            (Color::Black, PieceType::Rook)   => '\u{265C}',
            (Color::Black, PieceType::Bishop) => '\u{265D}',
            (Color::Black, PieceType::Knight) => '\u{265E}',
            (Color::Black, PieceType::Pawn)   => '\u{265F}',
        }
    }
}

/// A board coordinate. Row 0 is rank 8 (top), column 0 is file a.
///
/// Both components are always in `0..8`: the only constructors check the range.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 { Some(Self { row, col }) } else { None }
    }

    /// Inverse of [`Square::index`].
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 64 { Some(Self { row: (index / 8) as u8, col: (index % 8) as u8 }) } else { None }
    }

    /// Iterates over all 64 squares, row by row from the top-left corner.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    #[inline(always)]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline(always)]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Flat index in `0..64`, row-major.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Square shifted by the given deltas, `None` when it falls off the board.
    #[inline(always)]
    pub const fn offset(self, delta_row: i8, delta_col: i8) -> Option<Square> {
        let row = self.row as i8 + delta_row;
        let col = self.col as i8 + delta_col;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    /// Turns the square into a bitboard
    #[inline(always)]
    pub fn bb(self) -> Bitboard {
        Bitboard::from_square(self.index())
    }
}

impl<T> Index<Square> for [T] {
    type Output = T;
    fn index(&self, index: Square) -> &Self::Output {
        &self[index.index()]
    }
}

impl<T> IndexMut<Square> for [T] {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self[index.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_flip() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
        assert_eq!(Color::default(), Color::White);
    }

    #[test]
    fn piece_char_roundtrip() {
        for color in Color::ALL {
            for piece_type in PieceType::ALL {
                let piece = Piece::new(color, piece_type);
                assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
            }
        }
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::new(Color::White, PieceType::Knight).to_char(), 'N');
        assert_eq!(Piece::new(Color::Black, PieceType::Queen).to_char(), 'q');
    }

    #[test]
    fn square_bounds() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert_eq!(Square::all().count(), 64);
        assert!(Square::all().enumerate().all(|(i, sq)| sq.index() == i));
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn square_offset_stays_on_board() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 2), Square::new(1, 2));
        assert_eq!(Square::new(7, 7).unwrap().offset(1, 1), None);
    }
}
