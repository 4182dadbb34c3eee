use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

pub(super) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(super) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Single-step moves for knights and kings.
pub(super) fn gen_leaper(
    board: &Board,
    sq: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    let (h, w) = (board.height(), board.width());
    for &(d_row, d_col) in offsets {
        let Some(to) = sq.offset(d_row, d_col, h, w) else {
            continue;
        };
        if board.piece_at(to).is_none_or(|p| p.color() != color) {
            moves.push(Move::new(sq, to));
        }
    }
}
