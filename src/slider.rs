//! Sliding piece attacks.
//!
//! Bishops, rooks and queens move along rays until the first occupied square, which is included
//! (it may be a capture). Attacks are computed by walking the rays against an occupancy bitboard.

use crate::bitboard::Bitboard;
use crate::types::{PieceType, Square};

const ROOK_DELTAS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const BISHOP_DELTAS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

// Computes sliding attacks given a square and an occupancy
fn sliding_attack(square: Square, deltas: &[(i8, i8)], occupancy: Bitboard) -> Bitboard {
    let mut attacks = Bitboard(0);

    for &(delta_row, delta_col) in deltas {
        let mut next = square.offset(delta_row, delta_col);

        while let Some(sq) = next {
            attacks |= sq.bb();
            if occupancy.contains(sq) {
                break; // Path is blocked
            }
            next = sq.offset(delta_row, delta_col);
        }
    }
    attacks
}

#[inline(always)]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    sliding_attack(square, &ROOK_DELTAS, occupancy)
}

#[inline(always)]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    sliding_attack(square, &BISHOP_DELTAS, occupancy)
}

#[inline(always)]
pub fn queen_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    rook_attacks(square, occupancy) | bishop_attacks(square, occupancy)
}

/// Attacks of a sliding piece type, `None` for pieces that do not slide.
pub fn slider_attacks(piece_type: PieceType, square: Square, occupancy: Bitboard) -> Option<Bitboard> {
    match piece_type {
        PieceType::Bishop => Some(bishop_attacks(square, occupancy)),
        PieceType::Rook => Some(rook_attacks(square, occupancy)),
        PieceType::Queen => Some(queen_attacks(square, occupancy)),
        PieceType::Pawn | PieceType::Knight | PieceType::King => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn empty_board_ray_lengths() {
        assert_eq!(rook_attacks(sq(0, 0), Bitboard::EMPTY).popcnt(), 14);
        assert_eq!(bishop_attacks(sq(0, 0), Bitboard::EMPTY).popcnt(), 7);
        assert_eq!(queen_attacks(sq(3, 3), Bitboard::EMPTY).popcnt(), 27);
    }

    #[test]
    fn blocker_is_included_and_stops_the_ray() {
        let blocker = sq(0, 3);
        let attacks = rook_attacks(sq(0, 0), blocker.bb());
        assert!(attacks.contains(sq(0, 1)));
        assert!(attacks.contains(blocker));
        assert!(!attacks.contains(sq(0, 4)));
        assert!(attacks.contains(sq(7, 0)));
    }

    #[test]
    fn only_sliders_have_slider_attacks() {
        assert!(slider_attacks(PieceType::Knight, sq(4, 4), Bitboard::EMPTY).is_none());
        assert!(slider_attacks(PieceType::Queen, sq(4, 4), Bitboard::EMPTY).is_some());
    }
}
