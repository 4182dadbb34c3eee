use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

/// Single push onto an empty square, then the left and right diagonal
/// captures onto enemy pieces. Promotion happens in `Board::apply`.
pub(super) fn gen_pawn(board: &Board, sq: Square, color: Color, direction: i8, moves: &mut Vec<Move>) {
    let (h, w) = (board.height(), board.width());

    if let Some(to) = sq.offset(direction, 0, h, w) {
        if board.piece_at(to).is_none() {
            moves.push(Move::new(sq, to));
        }
    }

    for d_col in [-1, 1] {
        let Some(to) = sq.offset(direction, d_col, h, w) else {
            continue;
        };
        if board.piece_at(to).is_some_and(|p| p.color() != color) {
            moves.push(Move::new(sq, to));
        }
    }
}
