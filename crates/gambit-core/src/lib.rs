//! Core types for gambit: rotated-board model, pseudo-legal move generation,
//! and copy-make move application.

mod apply;
mod board;
mod chess_move;
mod color;
mod error;
mod grid;
mod movegen;
mod perft;
mod piece;
mod square;
mod zobrist;

pub use board::{Board, MAX_DIM, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use error::BoardError;
pub use movegen::{generate_captures, generate_moves};
pub use perft::{divide, perft};
pub use piece::{Piece, PieceKind};
pub use square::Square;
