use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

pub(super) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(super) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each ray until the board edge or the first occupied square. An enemy
/// piece on that square is included as a capture.
pub(super) fn gen_slider(
    board: &Board,
    sq: Square,
    color: Color,
    rays: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    let (h, w) = (board.height(), board.width());
    for &(d_row, d_col) in rays {
        let mut cur = sq;
        while let Some(to) = cur.offset(d_row, d_col, h, w) {
            match board.piece_at(to) {
                None => moves.push(Move::new(sq, to)),
                Some(p) => {
                    if p.color() != color {
                        moves.push(Move::new(sq, to));
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}
