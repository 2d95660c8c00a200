//! Step table generation.
//!
//! This module generates look-up tables for knights, kings and pawns.
//! Tables provide the reachable squares for a given piece type and square, queried via `[square]` or `[color][square]`.
//!
//! Sliding pieces are handled differently (in slider.rs) because of board occupancy.

use std::sync::OnceLock;

use crate::bitboard::Bitboard;
use crate::types::{Color, Square};

/// Contains the step look-up tables per piece.
pub struct AttackTables {
    pub knight: [Bitboard; 64],
    pub king: [Bitboard; 64],
    pub pawn_capture: [[Bitboard; 64]; 2],
    pub pawn_push: [[Bitboard; 64]; 2],
    pub pawn_double_push: [[Bitboard; 64]; 2],
}

const KNIGHT_DELTAS: [(i8, i8); 8] = [(2, 1), (2, -1), (1, 2), (1, -2), (-1, 2), (-1, -2), (-2, 1), (-2, -1)];
const KING_DELTAS: [(i8, i8); 8] = [(0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1)];

/// Global step tables, initialized on first use.
static ATTACK_TABLES: OnceLock<AttackTables> = OnceLock::new();

/// Returns the step tables, computing them on the first call.
pub fn attack_tables() -> &'static AttackTables {
    ATTACK_TABLES.get_or_init(AttackTables::new)
}

impl AttackTables {
    pub fn new() -> Self {
        let mut knight = [Bitboard(0); 64];
        let mut king = [Bitboard(0); 64];
        let mut pawn_capture = [[Bitboard(0); 64]; 2]; //Color-dependent
        let mut pawn_push = [[Bitboard(0); 64]; 2]; //Color-dependent
        let mut pawn_double_push = [[Bitboard(0); 64]; 2]; //Color-dependent

        for from in Square::all() {
            let sq = from.index();

            // ****************** KNIGHT ******************
            for (delta_row, delta_col) in KNIGHT_DELTAS {
                if let Some(to) = from.offset(delta_row, delta_col) {
                    knight[sq] |= to.bb();
                }
            }

            // ****************** KING ******************
            for (delta_row, delta_col) in KING_DELTAS {
                if let Some(to) = from.offset(delta_row, delta_col) {
                    king[sq] |= to.bb();
                }
            }

            for color in Color::ALL {
                let forward = color.pawn_direction();

                // ****************** PAWN CAPTURE ******************
                for delta_col in [-1, 1] {
                    if let Some(to) = from.offset(forward, delta_col) {
                        pawn_capture[color][sq] |= to.bb();
                    }
                }

                // ****************** PAWN PUSH ******************
                if let Some(to) = from.offset(forward, 0) {
                    pawn_push[color][sq] = to.bb();
                }

                // ****************** DOUBLE PAWN PUSH ******************
                if from.row() == color.pawn_home_row() {
                    if let Some(to) = from.offset(2 * forward, 0) {
                        pawn_double_push[color][sq] = to.bb();
                    }
                }
            }
        }

        Self { knight, king, pawn_capture, pawn_push, pawn_double_push }
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn knight_and_king_counts() {
        let tables = attack_tables();
        assert_eq!(tables.knight[sq(0, 0).index()].popcnt(), 2);
        assert_eq!(tables.knight[sq(3, 3).index()].popcnt(), 8);
        assert_eq!(tables.king[sq(0, 0).index()].popcnt(), 3);
        assert_eq!(tables.king[sq(4, 4).index()].popcnt(), 8);
    }

    #[test]
    fn pawn_tables_follow_color_direction() {
        let tables = attack_tables();
        // White pawn on e2 (row 6, col 4)
        let e2 = sq(6, 4).index();
        assert_eq!(tables.pawn_push[Color::White][e2], sq(5, 4).bb());
        assert_eq!(tables.pawn_double_push[Color::White][e2], sq(4, 4).bb());
        assert_eq!(tables.pawn_capture[Color::White][e2], sq(5, 3).bb() | sq(5, 5).bb());
        // Black pawn on e7 (row 1, col 4)
        let e7 = sq(1, 4).index();
        assert_eq!(tables.pawn_push[Color::Black][e7], sq(2, 4).bb());
        assert_eq!(tables.pawn_double_push[Color::Black][e7], sq(3, 4).bb());
        // No double push away from the home row, no push off the board
        assert!(tables.pawn_double_push[Color::White][sq(5, 4).index()].is_empty());
        assert!(tables.pawn_push[Color::White][sq(0, 4).index()].is_empty());
        assert_eq!(tables.pawn_capture[Color::Black][sq(1, 0).index()], sq(2, 1).bb());
    }
}
