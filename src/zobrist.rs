//! Zobrist keys.
//!
//! One random 64-bit key per (color, piece type, square) plus one for Black to move. A position key is
//! the XOR of the keys of its occupied cells, so it can be updated incrementally on every cell change.
//! Keys come from a fixed seed: the same position always hashes to the same value across runs.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Color, Piece, PieceType, Square};

const SEED: u64 = 0x6368_6573_7367_616d;

pub struct ZobristKeys {
    pieces: [[[u64; 64]; PieceType::NUM]; 2],
    black_to_move: u64,
}

static ZOBRIST_KEYS: OnceLock<ZobristKeys> = OnceLock::new();

/// Returns the key tables, generating them on the first call.
pub fn zobrist_keys() -> &'static ZobristKeys {
    ZOBRIST_KEYS.get_or_init(ZobristKeys::new)
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(SEED);
        let mut pieces = [[[0u64; 64]; PieceType::NUM]; 2];

        for color in Color::ALL {
            for piece_type in PieceType::ALL {
                for key in pieces[color][piece_type].iter_mut() {
                    *key = rng.random();
                }
            }
        }

        Self { pieces, black_to_move: rng.random() }
    }

    #[inline(always)]
    pub fn piece(&self, piece: Piece, square: Square) -> u64 {
        self.pieces[piece.color][piece.piece_type][square]
    }

    #[inline(always)]
    pub fn side(&self, turn: Color) -> u64 {
        match turn {
            Color::White => 0,
            Color::Black => self.black_to_move,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_distinct_per_square_and_piece() {
        let keys = zobrist_keys();
        let pawn = Piece::new(Color::White, PieceType::Pawn);
        let a8 = Square::new(0, 0).unwrap();
        let b8 = Square::new(0, 1).unwrap();
        assert_ne!(keys.piece(pawn, a8), keys.piece(pawn, b8));
        assert_ne!(keys.piece(pawn, a8), keys.piece(Piece::new(Color::Black, PieceType::Pawn), a8));
        assert_eq!(keys.side(Color::White), 0);
        assert_ne!(keys.side(Color::Black), 0);
    }

    #[test]
    fn keys_are_reproducible() {
        let fresh = ZobristKeys::new();
        let knight = Piece::new(Color::Black, PieceType::Knight);
        let sq = Square::new(2, 5).unwrap();
        assert_eq!(fresh.piece(knight, sq), zobrist_keys().piece(knight, sq));
    }
}
