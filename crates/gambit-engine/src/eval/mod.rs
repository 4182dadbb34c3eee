//! Static evaluation: tapered material, piece-square tables, pawn structure
//! and king shield.

pub mod king_safety;
pub mod material;
pub mod pawns;
pub mod phase;
pub mod pst;
pub mod score;

use gambit_core::{Board, Color};

use self::king_safety::king_shield;
use self::material::material;
use self::pawns::{passed_pawns, pawn_structure};
use self::phase::{MAX_PHASE, game_phase};
use self::pst::pst_value;
use self::score::Score;

/// Piece-square placement, `forward` minus its opponent.
fn placement(board: &Board, forward: Color) -> Score {
    let (h, w) = (board.height(), board.width());
    let mut score = Score::ZERO;
    for (sq, piece) in board.pieces() {
        if piece.color() == forward {
            score += pst_value(piece.kind(), sq, false, h, w);
        } else {
            score -= pst_value(piece.kind(), sq, true, h, w);
        }
    }
    score
}

/// Blend middlegame and endgame by phase, truncating toward zero.
#[inline]
pub fn taper(score: Score, phase: i32) -> i32 {
    (score.mg() * phase + score.eg() * (MAX_PHASE - phase)) / MAX_PHASE
}

/// Evaluate `board` in centipawns; positive favors `perspective`.
///
/// `forward` is the color whose pawns advance toward increasing row. The
/// search passes its root color. The score is built once from `forward`'s
/// side and negated for the other color, so
/// `evaluate(b, c, f) == -evaluate(b, !c, f)` always holds.
///
/// Pure and total: boards without kings, with duplicate kings or with
/// irregular material still produce a score.
pub fn evaluate(board: &Board, perspective: Color, forward: Color) -> i32 {
    let score = material(board, forward)
        + placement(board, forward)
        + pawn_structure(board, forward)
        + passed_pawns(board, forward)
        + king_shield(board, forward);

    let value = taper(score, game_phase(board));
    if perspective == forward { value } else { -value }
}
