//! Perft (performance test) for move generation verification.
//!
//! Counts leaves of the pseudo-legal move tree, so figures differ from
//! standard chess perft tables: no castling, no double pawn steps, no
//! en passant, and positions with the king in check are still expanded.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::movegen::generate_moves;

/// Count leaf nodes `depth` plies below `board` with `color` to move.
///
/// Depth 0 returns 1. Depth 1 returns the move count without applying
/// any move.
pub fn perft(board: &Board, color: Color, forward: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(board, color, forward);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let child = board.apply(mv);
        nodes += perft(&child, !color, forward, depth - 1);
    }
    nodes
}

/// Per-move breakdown of [`perft`], in generation order.
pub fn divide(board: &Board, color: Color, forward: Color, depth: usize) -> Vec<(Move, u64)> {
    generate_moves(board, color, forward)
        .into_iter()
        .map(|mv| {
            let count = if depth <= 1 {
                1
            } else {
                perft(&board.apply(mv), !color, forward, depth - 1)
            };
            (mv, count)
        })
        .collect()
}
