//! Pseudo-legal move generation.
//!
//! Moves never land on a piece of the mover's color, but nothing checks
//! whether the mover's king is left attacked. There is no castling, no
//! double pawn step and no en passant.
//!
//! Order is deterministic: squares are scanned row-major and each piece
//! emits its moves in a fixed direction order, so ordering heuristics and
//! killer matching are reproducible.

mod leapers;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::PieceKind;

use self::leapers::{KING_OFFSETS, KNIGHT_OFFSETS, gen_leaper};
use self::pawns::gen_pawn;
use self::sliders::{DIAGONALS, ORTHOGONALS, gen_slider};

/// Generate every pseudo-legal move for `color`.
///
/// `forward` is the color whose pawns advance toward increasing row index
/// (the root color of the search); pawns of the other color advance toward
/// row 0.
pub fn generate_moves(board: &Board, color: Color, forward: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(48);
    let direction: i8 = if color == forward { 1 } else { -1 };

    for (sq, piece) in board.pieces() {
        if piece.color() != color {
            continue;
        }
        match piece.kind() {
            PieceKind::Pawn => gen_pawn(board, sq, color, direction, &mut moves),
            PieceKind::Knight => gen_leaper(board, sq, color, &KNIGHT_OFFSETS, &mut moves),
            PieceKind::Bishop => gen_slider(board, sq, color, &DIAGONALS, &mut moves),
            PieceKind::Rook => gen_slider(board, sq, color, &ORTHOGONALS, &mut moves),
            PieceKind::Queen => {
                gen_slider(board, sq, color, &ORTHOGONALS, &mut moves);
                gen_slider(board, sq, color, &DIAGONALS, &mut moves);
            }
            PieceKind::King => gen_leaper(board, sq, color, &KING_OFFSETS, &mut moves),
        }
    }

    moves
}

/// Generate only the moves of `color` that land on an enemy piece.
pub fn generate_captures(board: &Board, color: Color, forward: Color) -> Vec<Move> {
    let mut moves = generate_moves(board, color, forward);
    moves.retain(|mv| board.piece_at(mv.to()).is_some_and(|p| p.color() != color));
    moves
}
