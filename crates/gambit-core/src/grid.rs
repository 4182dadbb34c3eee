//! Grid notation for boards.
//!
//! A FEN-like placement string with rows listed from row 0 upward:
//! rows are separated by `/`, digits stand for runs of empty squares,
//! uppercase letters are First's pieces and lowercase letters Second's.
//! The first row fixes the width; the number of rows is the height.
//!
//! ```text
//! "4K3/4P3/8/8/8/8/8/4k3"   First king (0,4), pawn (1,4); Second king (7,4)
//! ```

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::square::Square;

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Board, BoardError> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        let mut parsed: Vec<Vec<Option<Piece>>> = Vec::with_capacity(rows.len());

        for row_str in &rows {
            let mut cells = Vec::new();
            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 {
                        return Err(BoardError::InvalidPieceChar { character: c });
                    }
                    cells.extend(std::iter::repeat_n(None, run as usize));
                } else {
                    let piece =
                        Piece::from_letter(c).ok_or(BoardError::InvalidPieceChar { character: c })?;
                    cells.push(Some(piece));
                }
            }
            parsed.push(cells);
        }

        let width = parsed.first().map_or(0, Vec::len);
        let mut board = Board::with_size(parsed.len(), width)?;
        for (row, cells) in parsed.iter().enumerate() {
            if cells.len() != width {
                return Err(BoardError::BadRowLength {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_some() {
                    board.set(Square::new(row as u8, col as u8), *cell);
                }
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() {
            if row > 0 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for col in 0..self.width() {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.letter())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
        }
        Ok(())
    }
}
