//! Pawn structure evaluation.
//!
//! Doubled and isolated pawns are judged from per-file pawn counts. Passed
//! pawns are judged along each color's own direction of advance, with the
//! bonus indexed by distance from that color's home edge.

use gambit_core::{Board, Color, MAX_DIM, PieceKind, Square};

use crate::eval::score::{S, Score};

/// Penalty per extra pawn stacked on a file.
const DOUBLED_PAWN_PENALTY: Score = S(12, 10);

/// Penalty for a file with pawns and no friendly pawns on either neighbour.
const ISOLATED_PAWN_PENALTY: Score = S(10, 6);

/// Passed pawn bonus indexed by rows advanced from the home edge.
#[rustfmt::skip]
const PASSED_PAWN_BONUS: [Score; 8] = [
    S(0, 0), S(5, 10), S(10, 25), S(20, 45), S(35, 70), S(60, 110), S(100, 170), S(0, 0),
];

type FileCounts = [i32; MAX_DIM as usize];

fn file_counts(board: &Board) -> [FileCounts; Color::COUNT] {
    let mut counts = [[0; MAX_DIM as usize]; Color::COUNT];
    for (sq, piece) in board.pieces() {
        if piece.kind() == PieceKind::Pawn {
            counts[piece.color().index()][sq.col() as usize] += 1;
        }
    }
    counts
}

fn structure_penalty(files: &FileCounts, width: usize) -> Score {
    let mut penalty = Score::ZERO;
    for file in 0..width {
        let count = files[file];
        if count >= 2 {
            penalty += DOUBLED_PAWN_PENALTY * (count - 1);
        }
        let left = if file > 0 { files[file - 1] } else { 0 };
        let right = if file + 1 < width { files[file + 1] } else { 0 };
        if count > 0 && left == 0 && right == 0 {
            penalty += ISOLATED_PAWN_PENALTY;
        }
    }
    penalty
}

/// Doubled and isolated pawn penalties, `forward` minus its opponent.
pub fn pawn_structure(board: &Board, forward: Color) -> Score {
    let counts = file_counts(board);
    let width = board.width() as usize;
    structure_penalty(&counts[(!forward).index()], width)
        - structure_penalty(&counts[forward.index()], width)
}

fn is_passed(board: &Board, sq: Square, color: Color, direction: i8) -> bool {
    let (h, w) = (board.height(), board.width());
    for d_col in [-1, 0, 1] {
        let mut cur = sq;
        while let Some(next) = cur.offset(direction, 0, h, w) {
            cur = next;
            let Some(probe) = next.offset(0, d_col, h, w) else {
                continue;
            };
            if board
                .piece_at(probe)
                .is_some_and(|p| p.kind() == PieceKind::Pawn && p.color() != color)
            {
                return false;
            }
        }
    }
    true
}

/// Passed pawn bonuses, `forward` minus its opponent.
pub fn passed_pawns(board: &Board, forward: Color) -> Score {
    let mut score = Score::ZERO;
    let last_row = board.height() - 1;

    for (sq, piece) in board.pieces() {
        if piece.kind() != PieceKind::Pawn {
            continue;
        }
        let color = piece.color();
        let (direction, advanced) = if color == forward {
            (1, sq.row())
        } else {
            (-1, last_row - sq.row())
        };
        if is_passed(board, sq, color, direction) {
            let bonus = PASSED_PAWN_BONUS[advanced as usize];
            if color == forward {
                score += bonus;
            } else {
                score -= bonus;
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use gambit_core::{Board, Color};

    use super::{passed_pawns, pawn_structure};
    use crate::eval::score::{S, Score};

    #[test]
    fn starting_pawns_are_neutral() {
        let board: Board = "RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbqkbnr".parse().unwrap();
        assert_eq!(pawn_structure(&board, Color::First), Score::ZERO);
        assert_eq!(passed_pawns(&board, Color::First), Score::ZERO);
    }

    #[test]
    fn doubled_isolated_pawns() {
        // First: two pawns on file 0, nothing on file 1.
        let board: Board = "4K3/P7/P7/8/8/8/8/4k3".parse().unwrap();
        // doubled S(12,10) + isolated S(10,6)
        assert_eq!(pawn_structure(&board, Color::First), S(-22, -16));
        assert_eq!(pawn_structure(&board, Color::Second), S(22, 16));
    }

    #[test]
    fn connected_pawns_are_not_isolated() {
        let board: Board = "4K3/PP6/8/8/8/8/8/4k3".parse().unwrap();
        assert_eq!(pawn_structure(&board, Color::First), Score::ZERO);
    }

    #[test]
    fn lone_pawn_is_passed() {
        // First pawn on row 4: four rows from its home edge.
        let board: Board = "4K3/8/8/8/3P4/8/8/4k3".parse().unwrap();
        assert_eq!(passed_pawns(&board, Color::First), S(35, 70));
    }

    #[test]
    fn enemy_pawn_ahead_on_adjacent_file_blocks() {
        // First pawn (3,3); Second pawn (5,4) sits ahead on an adjacent file.
        // The Second pawn has the First pawn ahead of it (toward row 0) too.
        let board: Board = "4K3/8/8/3P4/8/4p3/8/4k3".parse().unwrap();
        assert_eq!(passed_pawns(&board, Color::First), Score::ZERO);
    }

    #[test]
    fn pawn_behind_does_not_block() {
        // Second pawn (2,4) is behind the First pawn (4,3) from First's view,
        // and ahead of nothing of First's from its own view toward row 0.
        let board: Board = "4K3/8/4p3/8/3P4/8/8/4k3".parse().unwrap();
        // First: passed at row 4 -> S(35,70).
        // Second: advanced 7-2 = 5 rows, passed -> S(60,110).
        assert_eq!(passed_pawns(&board, Color::First), S(35 - 60, 70 - 110));
    }

    #[test]
    fn opposing_colors_use_mirrored_rows() {
        let board: Board = "4K3/8/8/8/8/8/4p3/4k3".parse().unwrap();
        // Advancing toward row 0, the Second pawn at row 6 is one row out.
        assert_eq!(passed_pawns(&board, Color::First), S(-5, -10));
        // Advancing toward row 7, the same pawn is one step from promoting.
        assert_eq!(passed_pawns(&board, Color::Second), S(100, 170));
    }
}
