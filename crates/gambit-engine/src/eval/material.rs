//! Material balance evaluation.
//!
//! Counts weighted piece material for each side and adds a bishop-pair bonus.
//! Scores are from the `forward` color's view (positive = forward ahead).

use gambit_core::{Board, Color, PieceKind};

use crate::eval::score::{S, Score};

/// Base material values indexed by [`PieceKind::index()`].
///
/// | Piece  | mg  | eg  |
/// |--------|-----|-----|
/// | Pawn   | 100 | 120 |
/// | Knight | 320 | 310 |
/// | Bishop | 330 | 320 |
/// | Rook   | 500 | 520 |
/// | Queen  | 900 | 880 |
/// | King   |   0 |   0 |
pub const MATERIAL_VALUE: [Score; PieceKind::COUNT] = [
    S(100, 120), // Pawn
    S(320, 310), // Knight
    S(330, 320), // Bishop
    S(500, 520), // Rook
    S(900, 880), // Queen
    S(0, 0),     // King
];

/// Bonus awarded to a side that has two or more bishops.
const BISHOP_PAIR_BONUS: Score = S(30, 50);

fn material_for(board: &Board, color: Color) -> Score {
    let mut score = Score::ZERO;
    let mut bishops = 0;

    for (_, piece) in board.pieces().filter(|(_, p)| p.color() == color) {
        score += MATERIAL_VALUE[piece.kind().index()];
        if piece.kind() == PieceKind::Bishop {
            bishops += 1;
        }
    }

    if bishops >= 2 {
        score += BISHOP_PAIR_BONUS;
    }
    score
}

/// Material balance, `forward` minus its opponent.
pub fn material(board: &Board, forward: Color) -> Score {
    material_for(board, forward) - material_for(board, !forward)
}

#[cfg(test)]
mod tests {
    use gambit_core::{Board, Color};

    use super::material;
    use crate::eval::score::{S, Score};

    #[test]
    fn starting_position_is_balanced() {
        let board: Board = "RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbqkbnr".parse().unwrap();
        assert_eq!(material(&board, Color::First), Score::ZERO);
    }

    #[test]
    fn extra_pawn() {
        let board: Board = "4K3/4P3/8/8/8/8/8/4k3".parse().unwrap();
        assert_eq!(material(&board, Color::First), S(100, 120));
        assert_eq!(material(&board, Color::Second), S(-100, -120));
    }

    #[test]
    fn bishop_pair_bonus() {
        // First: two bishops; Second: bishop + knight.
        let board: Board = "2B1KB2/8/8/8/8/8/8/2b1kn2".parse().unwrap();
        // bishops 2*S(330,320) + pair S(30,50) vs S(330,320) + S(320,310)
        assert_eq!(material(&board, Color::First), S(40, 60));
    }

    #[test]
    fn tolerates_missing_kings() {
        let board: Board = "Q7/8/8/8/8/8/8/8".parse().unwrap();
        assert_eq!(material(&board, Color::First), S(900, 880));
    }
}
