//! Move path enumeration.
//!
//! Counts the leaf nodes of the move tree to a fixed depth. King safety is not tracked, so the counts agree
//! with standard chess only as long as no side can have been left in check (depth 3 from the start position).

use crate::board::Board;
use crate::movegen::{MoveList, generate_all_moves};
use crate::rules::RuleSet;
use crate::types::Color;

pub fn perft(rules: RuleSet, board: &mut Board, side_to_move: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut list = MoveList::new();
    generate_all_moves(rules, board, side_to_move, &mut list);

    if depth == 1 {
        return list.len() as u64;
    }

    let mut nodes = 0;

    for m in list.iter() {
        let Some(moved) = board.piece_at(m.from()) else {
            continue;
        };
        let captured = board.make_move(m.from(), m.to());
        nodes += perft(rules, board, !side_to_move, depth - 1);
        board.unmake_move(m.from(), m.to(), moved, captured);
    }

    nodes
}

/// Node counts for depths `1..=depth` from the start position.
pub fn perft_n(rules: RuleSet, depth: u32) -> Vec<u64> {
    let mut board = Board::standard_setup();
    (1..=depth).map(|d| perft(rules, &mut board, Color::White, d)).collect()
}
