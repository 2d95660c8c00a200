//! Chessboard representation
//!
//! This module contains the implementation of the Board object: an 8x8 grid of cells, row 0 at the top (rank 8).
//! Next to the grid the board keeps per-color occupancy bitboards and an incrementally updated Zobrist key.
//! Every mutation goes through [`Board::place`], which keeps the three representations in sync.
//!
//! The board knows nothing about whose turn it is or which moves are legal.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::error::FenError;
use crate::types::{Cell, Color, Piece, PieceType, Square};
use crate::zobrist::zobrist_keys;

/// FEN piece placement of the standard starting position.
pub const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[rustfmt::skip]
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook, PieceType::Knight, PieceType::Bishop, PieceType::Queen,
    PieceType::King, PieceType::Bishop, PieceType::Knight, PieceType::Rook,
];

/// Chess board representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; 8]; 8],
    colors: [Bitboard; 2], //Per-color occupancy
    key: u64,
}

impl Board {
    /// A board with no pieces.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The canonical 32-piece starting arrangement.
    pub fn standard_setup() -> Self {
        let mut board = Self::empty();
        for col in 0..8u8 {
            for (color, back_row, pawn_row) in [(Color::Black, 0, 1), (Color::White, 7, 6)] {
                board.put(back_row, col, Piece::new(color, BACK_RANK[col as usize]));
                board.put(pawn_row, col, Piece::new(color, PieceType::Pawn));
            }
        }
        board
    }

    // Only called with literal in-range coordinates.
    fn put(&mut self, row: u8, col: u8, piece: Piece) {
        if let Some(sq) = Square::new(row, col) {
            self.place(sq, Some(piece));
        }
    }

    #[inline(always)]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Overwrites a cell. No game rule is checked.
    pub fn place(&mut self, sq: Square, cell: Cell) {
        let keys = zobrist_keys();

        if let Some(old) = self.piece_at(sq) {
            self.colors[old.color] ^= sq.bb();
            self.key ^= keys.piece(old, sq);
        }
        if let Some(new) = cell {
            self.colors[new.color] |= sq.bb();
            self.key ^= keys.piece(new, sq);
        }
        self.cells[sq.row() as usize][sq.col() as usize] = cell;
    }

    /// Moves whatever stands on `from` to `to` and returns the cell that was overwritten.
    pub fn make_move(&mut self, from: Square, to: Square) -> Cell {
        let moving = self.piece_at(from);
        let captured = self.piece_at(to);
        self.place(from, None);
        self.place(to, moving);
        captured
    }

    /// Reverts [`Board::make_move`].
    pub fn unmake_move(&mut self, from: Square, to: Square, moved: Piece, captured: Cell) {
        self.place(to, captured);
        self.place(from, Some(moved));
    }

    /// The raw 8x8 grid, row 0 first.
    #[inline(always)]
    pub fn cells(&self) -> &[[Cell; 8]; 8] {
        &self.cells
    }

    /// Returns the squares occupied by `color`.
    #[inline(always)]
    pub fn color(&self, color: Color) -> Bitboard {
        self.colors[color]
    }

    /// Returns which squares are occupied by a piece of any color.
    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.colors[Color::White] | self.colors[Color::Black]
    }

    #[inline(always)]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        !self.occupied().contains(sq)
    }

    /// Zobrist key of the piece placement.
    #[inline(always)]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Builds a board from the piece placement field of a FEN string.
    pub fn from_fen(placement: &str) -> Result<Self, FenError> {
        if placement.is_empty() {
            return Err(FenError::MissingPlacement);
        }
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut board = Self::empty();
        for (row, rank) in ranks.into_iter().enumerate() {
            let row = row as u8;
            let rank_error = FenError::RankLength { rank: 8 - row };
            let mut col = 0u8;

            for ch in rank.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    col += skip as u8;
                } else {
                    let piece = Piece::from_char(ch).ok_or(FenError::UnknownPiece(ch))?;
                    let sq = Square::new(row, col).ok_or_else(|| rank_error.clone())?;
                    board.place(sq, Some(piece));
                    col += 1;
                }
                if col > 8 {
                    return Err(rank_error);
                }
            }
            if col != 8 {
                return Err(rank_error);
            }
        }
        Ok(board)
    }

    /// Piece placement field of a FEN string.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(64);
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                fen.push('/');
            }
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
        }
        fen
    }

    #[cfg(test)]
    fn recompute_key(&self) -> u64 {
        let keys = zobrist_keys();
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| keys.piece(p, sq))).fold(0, |acc, k| acc ^ k)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self { cells: [[None; 8]; 8], colors: [Bitboard(0); 2], key: 0 }
    }
}

/// Text grid with rank labels on the left and file labels below.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +------------------------+")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} |", 8 - row)?;
            for cell in cells {
                let ch = cell.map_or('.', |p| p.to_char());
                write!(f, " {} ", ch)?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +------------------------+")?;
        writeln!(f, "    a  b  c  d  e  f  g  h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    #[test]
    fn standard_setup_matches_startpos_fen() {
        let board = Board::standard_setup();
        assert_eq!(board.to_fen(), STARTPOS);
        assert_eq!(Board::from_fen(STARTPOS).unwrap(), board);
        assert_eq!(board.occupied().popcnt(), 32);
        assert_eq!(board.color(Color::White).popcnt(), 16);
    }

    #[test]
    fn starting_squares() {
        let board = Board::standard_setup();
        assert_eq!(board.piece_at(sq("e2")), Some(Piece::new(Color::White, PieceType::Pawn)));
        assert_eq!(board.piece_at(sq("e7")), Some(Piece::new(Color::Black, PieceType::Pawn)));
        assert_eq!(board.piece_at(sq("e1")), Some(Piece::new(Color::White, PieceType::King)));
        assert_eq!(board.piece_at(sq("d8")), Some(Piece::new(Color::Black, PieceType::Queen)));
        for row in 2..=5 {
            for col in 0..8 {
                assert_eq!(board.piece_at(Square::new(row, col).unwrap()), None);
            }
        }
    }

    #[test]
    fn place_keeps_occupancy_and_key_in_sync() {
        let mut board = Board::standard_setup();
        let queen = Piece::new(Color::White, PieceType::Queen);
        board.place(sq("e4"), Some(queen));
        board.place(sq("e7"), Some(queen));
        board.place(sq("a1"), None);
        assert!(board.color(Color::White).contains(sq("e7")));
        assert!(!board.color(Color::Black).contains(sq("e7")));
        assert!(board.is_empty_at(sq("a1")));
        assert_eq!(board.key(), board.recompute_key());
    }

    #[test]
    fn make_and_unmake_restore_the_board() {
        let mut board = Board::from_fen("4k3/8/4p3/3P4/8/8/8/4K3").unwrap();
        let before = board.clone();
        let pawn = board.piece_at(sq("d5")).unwrap();
        let captured = board.make_move(sq("d5"), sq("e6"));
        assert_eq!(captured, Some(Piece::new(Color::Black, PieceType::Pawn)));
        assert_eq!(board.piece_at(sq("e6")), Some(pawn));
        assert_eq!(board.key(), board.recompute_key());
        board.unmake_move(sq("d5"), sq("e6"), pawn, captured);
        assert_eq!(board, before);
    }

    #[test]
    fn rejects_bad_fen() {
        assert_eq!(Board::from_fen(""), Err(FenError::MissingPlacement));
        assert_eq!(Board::from_fen("8/8/8"), Err(FenError::RankCount(3)));
        assert_eq!(Board::from_fen("9/8/8/8/8/8/8/8"), Err(FenError::RankLength { rank: 8 }));
        assert_eq!(Board::from_fen("8/8/8/8/8/8/8/7"), Err(FenError::RankLength { rank: 1 }));
        assert_eq!(Board::from_fen("8/8/8/8/8/8/8/ppppppppp"), Err(FenError::RankLength { rank: 1 }));
        assert_eq!(Board::from_fen("8/8/8/8/8/8/8/7x"), Err(FenError::UnknownPiece('x')));
    }

    #[test]
    fn display_shows_rank_eight_first() {
        let text = Board::standard_setup().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "8 | r  n  b  q  k  b  n  r |");
        assert_eq!(lines[8], "1 | R  N  B  Q  K  B  N  R |");
    }
}
