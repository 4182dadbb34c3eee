//! Piece-square tables (PST) for all six piece types.
//!
//! Tables are indexed `row * 8 + col` with row 0 being the home edge of the
//! color that reads them unmirrored. Use [`pst_value`] to look up a value for
//! either color; the color advancing toward row 0 reads the board rotated
//! half a turn.

use gambit_core::{PieceKind, Square};

use crate::eval::score::{S, Score};

/// Pawn PST. Rows 0 and 7 are never occupied by a pawn.
#[rustfmt::skip]
const PAWN_PST: [Score; 64] = [
    // Row 0
    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),
    // Row 1
    S(10,15),  S(10,15),  S(10,15),  S(10,15),  S(10,15),  S(10,15),  S(10,15),  S(10,15),
    // Row 2
    S(20,30),  S(20,30),  S(20,30),  S(20,30),  S(20,30),  S(20,30),  S(20,30),  S(20,30),
    // Row 3
    S(30,45),  S(30,45),  S(30,45),  S(30,45),  S(30,45),  S(30,45),  S(30,45),  S(30,45),
    // Row 4
    S(40,60),  S(40,60),  S(40,60),  S(40,60),  S(40,60),  S(40,60),  S(40,60),  S(40,60),
    // Row 5
    S(50,80),  S(50,80),  S(50,80),  S(50,80),  S(50,80),  S(50,80),  S(50,80),  S(50,80),
    // Row 6
    S(60,110), S(60,110), S(60,110), S(60,110), S(60,110), S(60,110), S(60,110), S(60,110),
    // Row 7
    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),
];

#[rustfmt::skip]
const KNIGHT_PST: [Score; 64] = [
    // Row 0
    S(-50,-40),S(-40,-30),S(-30,-20),S(-30,-20),S(-30,-20),S(-30,-20),S(-40,-30),S(-50,-40),
    // Row 1
    S(-40,-30),S(-20,-10),S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(-20,-10),S(-40,-30),
    // Row 2
    S(-30,-20),S(0,0),    S(10,10),  S(15,12),  S(15,12),  S(10,10),  S(0,0),    S(-30,-20),
    // Row 3
    S(-30,-20),S(5,5),    S(15,12),  S(20,15),  S(20,15),  S(15,12),  S(5,5),    S(-30,-20),
    // Row 4
    S(-30,-20),S(0,0),    S(15,12),  S(20,15),  S(20,15),  S(15,12),  S(0,0),    S(-30,-20),
    // Row 5
    S(-30,-20),S(5,5),    S(10,10),  S(15,12),  S(15,12),  S(10,10),  S(5,5),    S(-30,-20),
    // Row 6
    S(-40,-30),S(-20,-10),S(0,0),    S(5,5),    S(5,5),    S(0,0),    S(-20,-10),S(-40,-30),
    // Row 7
    S(-50,-40),S(-40,-30),S(-30,-20),S(-30,-20),S(-30,-20),S(-30,-20),S(-40,-30),S(-50,-40),
];

#[rustfmt::skip]
const BISHOP_PST: [Score; 64] = [
    // Row 0
    S(-20,-10),S(-10,-5), S(-10,-5), S(-10,-5), S(-10,-5), S(-10,-5), S(-10,-5), S(-20,-10),
    // Row 1
    S(-10,-5), S(0,5),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,5),    S(-10,-5),
    // Row 2
    S(-10,-5), S(0,0),    S(5,10),   S(10,10),  S(10,10),  S(5,10),   S(0,0),    S(-10,-5),
    // Row 3
    S(-10,-5), S(5,10),   S(5,10),   S(10,15),  S(10,15),  S(5,10),   S(5,10),   S(-10,-5),
    // Row 4
    S(-10,-5), S(0,0),    S(10,15),  S(10,15),  S(10,15),  S(10,15),  S(0,0),    S(-10,-5),
    // Row 5
    S(-10,-5), S(10,10),  S(10,10),  S(10,10),  S(10,10),  S(10,10),  S(10,10),  S(-10,-5),
    // Row 6
    S(-10,-5), S(5,5),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(5,5),    S(-10,-5),
    // Row 7
    S(-20,-10),S(-10,-5), S(-10,-5), S(-10,-5), S(-10,-5), S(-10,-5), S(-10,-5), S(-20,-10),
];

#[rustfmt::skip]
const ROOK_PST: [Score; 64] = [
    // Row 0
    S(0,0),    S(0,0),    S(0,5),    S(5,10),   S(5,10),   S(0,5),    S(0,0),    S(0,0),
    // Row 1
    S(-5,0),   S(0,5),    S(0,10),   S(0,15),   S(0,15),   S(0,10),   S(0,5),    S(-5,0),
    // Row 2
    S(-5,0),   S(0,5),    S(0,10),   S(0,15),   S(0,15),   S(0,10),   S(0,5),    S(-5,0),
    // Row 3
    S(-5,0),   S(0,5),    S(0,10),   S(0,15),   S(0,15),   S(0,10),   S(0,5),    S(-5,0),
    // Row 4
    S(-5,0),   S(0,5),    S(0,10),   S(0,15),   S(0,15),   S(0,10),   S(0,5),    S(-5,0),
    // Row 5
    S(-5,0),   S(0,5),    S(0,10),   S(0,15),   S(0,15),   S(0,10),   S(0,5),    S(-5,0),
    // Row 6
    S(5,0),    S(10,5),   S(10,10),  S(10,10),  S(10,10),  S(10,10),  S(10,5),   S(5,0),
    // Row 7
    S(0,0),    S(0,0),    S(0,5),    S(0,5),    S(0,5),    S(0,5),    S(0,0),    S(0,0),
];

#[rustfmt::skip]
const QUEEN_PST: [Score; 64] = [
    // Row 0
    S(-20,-10),S(-10,-5), S(-10,-5), S(-5,-5),  S(-5,-5),  S(-10,-5), S(-10,-5), S(-20,-10),
    // Row 1
    S(-10,-5), S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(-10,-5),
    // Row 2
    S(-10,-5), S(0,0),    S(5,5),    S(5,5),    S(5,5),    S(5,5),    S(0,0),    S(-10,-5),
    // Row 3
    S(-5,-5),  S(0,0),    S(5,5),    S(5,10),   S(5,10),   S(5,5),    S(0,0),    S(-5,-5),
    // Row 4
    S(0,-5),   S(0,0),    S(5,5),    S(5,10),   S(5,10),   S(5,5),    S(0,0),    S(-5,-5),
    // Row 5
    S(-10,-5), S(5,0),    S(5,5),    S(5,5),    S(5,5),    S(5,5),    S(0,0),    S(-10,-5),
    // Row 6
    S(-10,-5), S(0,0),    S(5,0),    S(0,0),    S(0,0),    S(0,0),    S(0,0),    S(-10,-5),
    // Row 7
    S(-20,-10),S(-10,-5), S(-10,-5), S(-5,-5),  S(-5,-5),  S(-10,-5), S(-10,-5), S(-20,-10),
];

/// King PST. Middlegame values reward the home corners; endgame values reward centralization.
#[rustfmt::skip]
const KING_PST: [Score; 64] = [
    // Row 0
    S(20,-50), S(30,-30), S(10,-20), S(0,-10),  S(0,-10),  S(10,-20), S(30,-30), S(20,-50),
    // Row 1
    S(20,-30), S(20,-10), S(0,0),    S(0,10),   S(0,10),   S(0,0),    S(20,-10), S(20,-30),
    // Row 2
    S(-10,-20),S(-20,0),  S(-20,15), S(-20,20), S(-20,20), S(-20,15), S(-20,0),  S(-10,-20),
    // Row 3
    S(-20,-10),S(-30,10), S(-30,20), S(-40,30), S(-40,30), S(-30,20), S(-30,10), S(-20,-10),
    // Row 4
    S(-30,-10),S(-40,10), S(-40,20), S(-50,30), S(-50,30), S(-40,20), S(-40,10), S(-30,-10),
    // Row 5
    S(-30,-20),S(-40,0),  S(-40,15), S(-50,20), S(-50,20), S(-40,15), S(-40,0),  S(-30,-20),
    // Row 6
    S(-30,-30),S(-40,-10),S(-40,0),  S(-50,10), S(-50,10), S(-40,0),  S(-40,-10),S(-30,-30),
    // Row 7
    S(-30,-50),S(-40,-30),S(-40,-20),S(-50,-10),S(-50,-10),S(-40,-20),S(-40,-30),S(-30,-50),
];

/// Piece-square values indexed `[piece_kind][square]`.
const PST: [[Score; 64]; PieceKind::COUNT] = [
    PAWN_PST,
    KNIGHT_PST,
    BISHOP_PST,
    ROOK_PST,
    QUEEN_PST,
    KING_PST,
];

/// Look up the PST bonus for a piece of `kind` on `sq` of a
/// `height` x `width` board.
///
/// When `mirrored` is set the square is rotated half a turn first, so the
/// color advancing toward row 0 reads the tables from its own side.
#[inline]
pub fn pst_value(kind: PieceKind, sq: Square, mirrored: bool, height: u8, width: u8) -> Score {
    let (row, col) = if mirrored {
        (height - 1 - sq.row(), width - 1 - sq.col())
    } else {
        (sq.row(), sq.col())
    };
    PST[kind.index()][row as usize * 8 + col as usize]
}

#[cfg(test)]
mod tests {
    use gambit_core::{PieceKind, Square};

    use super::pst_value;
    use crate::eval::score::S;

    #[test]
    fn pawn_on_sixth_row() {
        assert_eq!(pst_value(PieceKind::Pawn, Square::new(6, 3), false, 8, 8), S(60, 110));
    }

    #[test]
    fn mirrored_pawn_reads_opposite_row() {
        let forward = pst_value(PieceKind::Pawn, Square::new(6, 3), false, 8, 8);
        let backward = pst_value(PieceKind::Pawn, Square::new(1, 4), true, 8, 8);
        assert_eq!(forward, backward);
    }

    #[test]
    fn knight_corner_is_penalized() {
        let corner = pst_value(PieceKind::Knight, Square::new(0, 0), false, 8, 8);
        let centre = pst_value(PieceKind::Knight, Square::new(3, 3), false, 8, 8);
        assert!(corner.mg() < centre.mg());
        assert!(corner.eg() < centre.eg());
    }

    #[test]
    fn king_prefers_home_corner_in_middlegame() {
        let home = pst_value(PieceKind::King, Square::new(0, 1), false, 8, 8);
        let exposed = pst_value(PieceKind::King, Square::new(4, 4), false, 8, 8);
        assert_eq!(home, S(30, -30));
        assert!(home.mg() > exposed.mg());
        assert!(home.eg() < exposed.eg());
    }

    #[test]
    fn queen_table_is_asymmetric_left_to_right() {
        let left = pst_value(PieceKind::Queen, Square::new(4, 0), false, 8, 8);
        let right = pst_value(PieceKind::Queen, Square::new(4, 7), false, 8, 8);
        assert_eq!(left, S(0, -5));
        assert_eq!(right, S(-5, -5));
        assert_eq!(pst_value(PieceKind::Queen, Square::new(3, 7), true, 8, 8), left);
    }

    #[test]
    fn small_board_mirrors_within_its_own_size() {
        let sq = Square::new(3, 3);
        assert_eq!(
            pst_value(PieceKind::Rook, sq, true, 4, 4),
            pst_value(PieceKind::Rook, Square::new(0, 0), false, 4, 4)
        );
    }
}
