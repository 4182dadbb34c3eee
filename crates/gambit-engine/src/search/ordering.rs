//! Move ordering: best-move hint, killers, promotions and MVV-LVA captures.

use std::cmp::Reverse;
use std::collections::HashSet;

use gambit_core::{Board, Move, PieceKind};

/// Ordering values indexed by [`PieceKind::index()`].
pub const PIECE_VALUE: [i32; PieceKind::COUNT] = [100, 320, 330, 500, 900, 20_000];

/// A pawn reaching either edge row.
const PROMOTION_BONUS: i32 = 80_000;

/// Lifts every capture above every quiet move.
const CAPTURE_BONUS: i32 = 100_000;

#[inline]
fn value_of(kind: PieceKind) -> i32 {
    PIECE_VALUE[kind.index()]
}

/// Tactical score of a single move, higher first.
///
/// - Pawn promotion: 80,000
/// - Capture: 100,000 + 10 × victim − attacker (MVV-LVA)
/// - Quiet move: 0
pub fn score_move(board: &Board, mv: Move) -> i32 {
    let Some(attacker) = board.piece_at(mv.from()) else {
        return 0;
    };
    let mut score = 0;

    if board.is_promotion(mv) {
        score += PROMOTION_BONUS;
    }
    if let Some(victim) = board.piece_at(mv.to()).filter(|v| v.color() != attacker.color()) {
        score += CAPTURE_BONUS + 10 * value_of(victim.kind()) - value_of(attacker.kind());
    }
    score
}

/// Sort `moves` for an interior node: killers first, then [`score_move`].
///
/// The sort is stable, so equal keys keep generation order.
pub fn order_moves(board: &Board, moves: &mut [Move], killers: Option<&HashSet<Move>>) {
    moves.sort_by_key(|&mv| {
        let killer = killers.is_some_and(|set| set.contains(&mv));
        Reverse((killer, score_move(board, mv)))
    });
}

/// Sort root moves: the previous iteration's best move, then the previous
/// iteration's score for each move, then [`score_move`].
pub fn order_root_moves(board: &Board, moves: &mut [(Move, i32)], best: Move) {
    moves.sort_by_key(|&(mv, previous)| Reverse((mv == best, previous, score_move(board, mv))));
}

/// Sort captures by victim value, most valuable first.
pub fn order_captures(board: &Board, moves: &mut [Move]) {
    moves.sort_by_key(|&mv| Reverse(board.piece_at(mv.to()).map_or(0, |v| value_of(v.kind()))));
}
