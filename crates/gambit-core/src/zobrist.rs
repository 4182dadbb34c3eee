//! Zobrist keys for the transposition-table identity of a board.
//!
//! A board's hash is the XOR of one key per occupied `(piece, square)`;
//! the side to move is mixed in separately by [`Board::key`](crate::Board::key).

use crate::board::MAX_DIM;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

const SQUARES: usize = MAX_DIM as usize * MAX_DIM as usize;

const SEED: u64 = 0x4741_4d42_4954_2121; // "GAMBIT!!"

/// Xorshift64 step. Returns the next state, which doubles as the output.
const fn xorshift64(mut state: u64) -> u64 {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    state
}

struct Keys {
    piece_square: [[u64; SQUARES]; Piece::COUNT],
    second_to_move: u64,
}

static KEYS: Keys = {
    let mut piece_square = [[0u64; SQUARES]; Piece::COUNT];
    let mut state = SEED;
    let mut piece = 0;
    while piece < Piece::COUNT {
        let mut sq = 0;
        while sq < SQUARES {
            state = xorshift64(state);
            piece_square[piece][sq] = state;
            sq += 1;
        }
        piece += 1;
    }
    Keys {
        piece_square,
        second_to_move: xorshift64(state),
    }
};

/// Key for `piece` standing on `sq`.
#[inline]
pub(crate) fn piece_square(piece: Piece, sq: Square) -> u64 {
    KEYS.piece_square[piece.index()][sq.row() as usize * MAX_DIM as usize + sq.col() as usize]
}

/// Key mixed in when `color` is to move.
#[inline]
pub(crate) fn side(color: Color) -> u64 {
    match color {
        Color::First => 0,
        Color::Second => KEYS.second_to_move,
    }
}
