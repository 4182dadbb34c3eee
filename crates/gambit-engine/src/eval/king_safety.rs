//! King safety evaluation based on pawn shield coverage.
//!
//! Looks only at the three squares directly ahead of each king, in that
//! king's direction of advance. Middlegame only.

use gambit_core::{Board, Color, PieceKind, Square};

use crate::eval::score::{S, Score};

/// Bonus per friendly pawn on a shield square.
const SHIELD_PAWN_BONUS: Score = S(12, 0);

/// Penalty per on-board shield square without a friendly pawn.
const MISSING_SHIELD_PAWN_PENALTY: Score = S(-8, 0);

fn shield(board: &Board, king_sq: Square, color: Color, direction: i8) -> Score {
    let (h, w) = (board.height(), board.width());
    let mut score = Score::ZERO;
    for d_col in [-1, 0, 1] {
        let Some(sq) = king_sq.offset(direction, d_col, h, w) else {
            continue;
        };
        let friendly_pawn = board
            .piece_at(sq)
            .is_some_and(|p| p.kind() == PieceKind::Pawn && p.color() == color);
        score += if friendly_pawn {
            SHIELD_PAWN_BONUS
        } else {
            MISSING_SHIELD_PAWN_PENALTY
        };
    }
    score
}

/// Pawn shield score, `forward` minus its opponent.
///
/// Every king on the board contributes, so boards with no king or with
/// duplicate kings still evaluate.
pub fn king_shield(board: &Board, forward: Color) -> Score {
    let mut score = Score::ZERO;
    for (sq, piece) in board.pieces() {
        if piece.kind() != PieceKind::King {
            continue;
        }
        let color = piece.color();
        if color == forward {
            score += shield(board, sq, color, 1);
        } else {
            score -= shield(board, sq, color, -1);
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use gambit_core::{Board, Color};

    use super::king_shield;
    use crate::eval::score::{S, Score};

    #[test]
    fn starting_position_is_zero() {
        let board: Board = "RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbqkbnr".parse().unwrap();
        assert_eq!(king_shield(&board, Color::First), Score::ZERO);
    }

    #[test]
    fn full_shield_against_bare_king() {
        // First: 3 shield pawns = +36. Second: 3 empty squares = -24.
        let board: Board = "4K3/3PPP2/8/8/8/8/8/4k3".parse().unwrap();
        assert_eq!(king_shield(&board, Color::First), S(36 + 24, 0));
    }

    #[test]
    fn edge_king_has_two_shield_squares() {
        let board: Board = "K7/PP6/8/8/8/8/8/7k".parse().unwrap();
        // First: +24. Second at (7,7): two empty squares = -16.
        assert_eq!(king_shield(&board, Color::First), S(24 + 16, 0));
    }

    #[test]
    fn enemy_pawn_does_not_shield() {
        let board: Board = "4K3/4p3/8/8/8/8/8/8".parse().unwrap();
        assert_eq!(king_shield(&board, Color::First), S(-24, 0));
    }

    #[test]
    fn no_kings_is_zero() {
        let board: Board = "8/PPP5/8/8/8/8/8/8".parse().unwrap();
        assert_eq!(king_shield(&board, Color::First), Score::ZERO);
    }
}
