use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::moves::Move;
use crate::rules::RuleSet;
use crate::types::{Color, Square};

/// Includes the list of moves generated for each position. Permissive rules let every non-pawn
/// piece reach any other square, so the capacity covers 16 pieces times 63 destinations.
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub fn new() -> Self {
        Self { moves: Vec::with_capacity(256) }
    }

    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

/// Squares the piece on `from` may legally move to. Empty when `from` is empty.
pub fn legal_targets(rules: RuleSet, board: &Board, from: Square) -> Bitboard {
    if board.is_empty_at(from) {
        return Bitboard::EMPTY;
    }
    Square::all().filter(|&to| rules.is_legal(board, from, to)).collect()
}

/// Appends every legal move of `color`'s pieces to `list`.
pub fn generate_all_moves(rules: RuleSet, board: &Board, color: Color, list: &mut MoveList) {
    for from in board.color(color).squares() {
        for to in legal_targets(rules, board, from).squares() {
            list.push(Move::new(from, to));
        }
    }
}
