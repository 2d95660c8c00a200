//! Move legality.
//!
//! Legality here is purely geometric: whose turn it is and whether a king is left in check are not looked at.
//! Two rule sets exist. [`RuleSet::Permissive`] only constrains pawns and lets every other piece go anywhere,
//! pawns capturing pieces of either color. [`RuleSet::Standard`] adds the movement pattern of every piece,
//! blocked slides, and forbids landing on a friendly piece.
//!
//! Under both rule sets a move from an empty square or onto the starting square is illegal.

use serde::{Deserialize, Serialize};

use crate::attack::attack_tables;
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::moves::MoveKind;
use crate::slider::slider_attacks;
use crate::types::{Cell, Color, Piece, PieceType, Square};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// Pawn rules only.
    Permissive,
    /// Movement rules for every piece.
    #[default]
    Standard,
}

/// Whether moving from `from` to `to` is legal under the standard rules.
pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    RuleSet::default().is_legal(board, from, to)
}

#[inline(always)]
fn capture_or_quiet(target: Cell) -> MoveKind {
    if target.is_some() { MoveKind::Capture } else { MoveKind::Quiet }
}

impl RuleSet {
    #[inline(always)]
    pub fn is_legal(self, board: &Board, from: Square, to: Square) -> bool {
        self.classify(board, from, to).is_some()
    }

    /// Returns the kind of the move if it is legal, `None` otherwise.
    pub fn classify(self, board: &Board, from: Square, to: Square) -> Option<MoveKind> {
        if from == to {
            return None;
        }
        let piece = board.piece_at(from)?;
        if piece.piece_type == PieceType::Pawn {
            return self.pawn_move(board, piece.color, from, to);
        }

        let target = board.piece_at(to);
        match self {
            RuleSet::Permissive => Some(capture_or_quiet(target)),
            RuleSet::Standard => {
                if target.is_some_and(|t| t.color == piece.color) {
                    return None;
                }
                reach(board, piece, from).contains(to).then(|| capture_or_quiet(target))
            }
        }
    }

    fn pawn_move(self, board: &Board, color: Color, from: Square, to: Square) -> Option<MoveKind> {
        let tables = attack_tables();

        let Some(target) = board.piece_at(to) else {
            // ===== Straight, non-capturing =====
            if tables.pawn_push[color][from].contains(to) {
                return Some(MoveKind::Quiet);
            }
            if tables.pawn_double_push[color][from].contains(to) {
                let between = from.offset(color.pawn_direction(), 0)?;
                return board.is_empty_at(between).then_some(MoveKind::DoublePush);
            }
            return None;
        };

        // ===== Diagonal capture =====
        if !tables.pawn_capture[color][from].contains(to) {
            return None;
        }
        match self {
            RuleSet::Permissive => Some(MoveKind::Capture),
            RuleSet::Standard => (target.color != color).then_some(MoveKind::Capture),
        }
    }
}

/// Squares a non-pawn piece standing on `from` could move to, ignoring what stands on them.
fn reach(board: &Board, piece: Piece, from: Square) -> Bitboard {
    let tables = attack_tables();
    match piece.piece_type {
        PieceType::Knight => tables.knight[from],
        PieceType::King => tables.king[from],
        other => slider_attacks(other, from, board.occupied()).unwrap_or(Bitboard::EMPTY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    fn board(placement: &str) -> Board {
        Board::from_fen(placement).unwrap()
    }

    #[test]
    fn pawn_single_and_double_step() {
        let b = Board::standard_setup();
        for rules in [RuleSet::Permissive, RuleSet::Standard] {
            assert_eq!(rules.classify(&b, sq("e2"), sq("e3")), Some(MoveKind::Quiet));
            assert_eq!(rules.classify(&b, sq("e2"), sq("e4")), Some(MoveKind::DoublePush));
            assert_eq!(rules.classify(&b, sq("e7"), sq("e5")), Some(MoveKind::DoublePush));
            assert!(!rules.is_legal(&b, sq("e2"), sq("e5")));
            assert!(!rules.is_legal(&b, sq("e2"), sq("e1")));
            assert!(!rules.is_legal(&b, sq("e7"), sq("e8")));
            assert!(!rules.is_legal(&b, sq("e2"), sq("d3")));
        }
    }

    #[test]
    fn pawn_double_step_needs_home_row_and_clear_path() {
        // White pawn on e3 (not home), knight blocking f3, pawn on g2 free
        let b = board("4k3/8/8/8/8/4PN2/5PP1/4K3");
        assert!(!is_legal(&b, sq("e3"), sq("e5")));
        assert!(is_legal(&b, sq("e3"), sq("e4")));
        assert!(!is_legal(&b, sq("f2"), sq("f4")));
        assert!(!is_legal(&b, sq("f2"), sq("f3")));
        assert!(is_legal(&b, sq("g2"), sq("g4")));
        // Destination occupied blocks the double step
        let b = board("4k3/8/8/8/6p1/8/6P1/4K3");
        assert!(!is_legal(&b, sq("g2"), sq("g4")));
        assert!(is_legal(&b, sq("g2"), sq("g3")));
    }

    #[test]
    fn pawn_diagonal_capture() {
        let b = board("4k3/8/4p3/3P4/8/8/8/4K3");
        assert_eq!(RuleSet::Standard.classify(&b, sq("d5"), sq("e6")), Some(MoveKind::Capture));
        assert!(!is_legal(&b, sq("d5"), sq("c6")));
        let b = board("4k3/8/8/3P4/8/8/8/4K3");
        assert!(!is_legal(&b, sq("d5"), sq("e6")));
        // Never backwards
        let b = board("4k3/8/8/3P4/2p5/8/8/4K3");
        assert!(!is_legal(&b, sq("d5"), sq("c4")));
    }

    #[test]
    fn own_piece_capture_only_in_permissive() {
        let b = board("4k3/8/4N3/3P4/8/8/8/4K3");
        assert!(RuleSet::Permissive.is_legal(&b, sq("d5"), sq("e6")));
        assert!(!RuleSet::Standard.is_legal(&b, sq("d5"), sq("e6")));
    }

    #[test]
    fn permissive_lets_other_pieces_go_anywhere() {
        let b = Board::standard_setup();
        assert!(RuleSet::Permissive.is_legal(&b, sq("d1"), sq("d8")));
        assert!(RuleSet::Permissive.is_legal(&b, sq("a1"), sq("b1")));
        assert!(!RuleSet::Standard.is_legal(&b, sq("d1"), sq("d8")));
        assert!(!RuleSet::Standard.is_legal(&b, sq("a1"), sq("b1")));
    }

    #[test]
    fn empty_origin_and_null_move_are_illegal() {
        let b = Board::standard_setup();
        for rules in [RuleSet::Permissive, RuleSet::Standard] {
            assert!(!rules.is_legal(&b, sq("e4"), sq("e5")));
            assert!(!rules.is_legal(&b, sq("d1"), sq("d1")));
            assert!(!rules.is_legal(&b, sq("e2"), sq("e2")));
        }
    }

    #[test]
    fn knight_and_king_geometry() {
        let b = Board::standard_setup();
        assert!(is_legal(&b, sq("g1"), sq("f3")));
        assert!(is_legal(&b, sq("b8"), sq("c6")));
        assert!(!is_legal(&b, sq("g1"), sq("e2")));
        assert!(!is_legal(&b, sq("g1"), sq("g3")));

        let b = board("8/8/8/3k4/8/8/8/4K3");
        assert!(is_legal(&b, sq("d5"), sq("e6")));
        assert!(is_legal(&b, sq("e1"), sq("d2")));
        assert!(!is_legal(&b, sq("e1"), sq("e3")));
    }

    #[test]
    fn sliders_are_blocked() {
        let b = board("4k3/8/8/8/8/8/3p4/R2QK2B");
        // Rook slides until the queen
        assert!(is_legal(&b, sq("a1"), sq("c1")));
        assert!(!is_legal(&b, sq("a1"), sq("d1")));
        assert!(is_legal(&b, sq("a1"), sq("a8")));
        // Queen captures the pawn, cannot jump it
        assert_eq!(RuleSet::Standard.classify(&b, sq("d1"), sq("d2")), Some(MoveKind::Capture));
        assert!(!is_legal(&b, sq("d1"), sq("d3")));
        assert!(is_legal(&b, sq("d1"), sq("a4")));
        // Bishop on h1 along the long diagonal
        assert!(is_legal(&b, sq("h1"), sq("a8")));
        assert!(!is_legal(&b, sq("h1"), sq("h2")));
    }
}
