//! The board: a fixed-size grid of optional pieces.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;
use crate::zobrist;

/// Largest supported height and width.
pub const MAX_DIM: u8 = 8;

const CELLS: usize = MAX_DIM as usize * MAX_DIM as usize;

/// A `height` x `width` grid mapping each square to at most one piece.
///
/// Boards are plain `Copy` values: applying a move produces a new board and
/// leaves the original untouched. No invariant is enforced on piece counts,
/// so boards with missing or duplicate kings are representable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; CELLS],
    height: u8,
    width: u8,
    /// XOR of the Zobrist keys of every occupied square.
    hash: u64,
}

impl Board {
    /// An empty 8x8 board.
    pub fn new() -> Board {
        Board {
            cells: [None; CELLS],
            height: MAX_DIM,
            width: MAX_DIM,
            hash: 0,
        }
    }

    /// An empty board of the given size.
    pub fn with_size(height: usize, width: usize) -> Result<Board, BoardError> {
        let max = MAX_DIM as usize;
        if !(1..=max).contains(&height) || !(1..=max).contains(&width) {
            return Err(BoardError::InvalidDimensions { height, width });
        }
        Ok(Board {
            cells: [None; CELLS],
            height: height as u8,
            width: width as u8,
            hash: 0,
        })
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Return `true` if `sq` lies on this board.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        sq.row() < self.height && sq.col() < self.width
    }

    #[inline]
    fn slot(sq: Square) -> usize {
        sq.row() as usize * MAX_DIM as usize + sq.col() as usize
    }

    /// The piece on `sq`, if any. Squares off the board are empty.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if self.contains(sq) {
            self.cells[Self::slot(sq)]
        } else {
            None
        }
    }

    /// Replace the contents of `sq`, keeping the hash in sync.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `sq` lies on the board.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        debug_assert!(self.contains(sq), "square {sq} is off a {}x{} board", self.height, self.width);
        let slot = Self::slot(sq);
        if let Some(old) = self.cells[slot] {
            self.hash ^= zobrist::piece_square(old, sq);
        }
        if let Some(new) = piece {
            self.hash ^= zobrist::piece_square(new, sq);
        }
        self.cells[slot] = piece;
    }

    /// Place `piece` on `sq`, replacing any occupant.
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.set(sq, Some(piece));
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + use<> {
        let (height, width) = (self.height, self.width);
        (0..height).flat_map(move |row| (0..width).map(move |col| Square::new(row, col)))
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares()
            .filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Return `true` if at least one king of `color` is present.
    pub fn has_king(&self, color: Color) -> bool {
        let king = Piece::new(PieceKind::King, color);
        self.pieces().any(|(_, piece)| piece == king)
    }

    /// Structural hash of the piece placement (side to move excluded).
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Transposition identity: piece placement plus side to move.
    #[inline]
    pub fn key(&self, to_move: Color) -> u64 {
        self.hash ^ zobrist::side(to_move)
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for printing a board as a grid, highest row on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in (0..board.height).rev() {
            write!(f, "{row}  ")?;
            for col in 0..board.width {
                let c = board
                    .piece_at(Square::new(row, col))
                    .map_or('.', Piece::letter);
                if col + 1 < board.width {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..board.width {
            write!(f, " {col}")?;
        }
        Ok(())
    }
}
