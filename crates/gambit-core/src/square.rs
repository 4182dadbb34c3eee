//! Board coordinates as `(row, col)` pairs.

use std::fmt;

/// A square on the board, addressed by zero-based row and column.
///
/// Row 0 is the home edge of whichever color advances toward increasing
/// rows in the current search frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        Square { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Step by `(d_row, d_col)`, returning `None` when the result falls
    /// outside a `height` x `width` board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8, height: u8, width: u8) -> Option<Square> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        if (0..height as i16).contains(&row) && (0..width as i16).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn offset_inside() {
        let sq = Square::new(3, 3);
        assert_eq!(sq.offset(1, -2, 8, 8), Some(Square::new(4, 1)));
    }

    #[test]
    fn offset_off_board() {
        assert_eq!(Square::new(0, 0).offset(-1, 0, 8, 8), None);
        assert_eq!(Square::new(7, 7).offset(0, 1, 8, 8), None);
        assert_eq!(Square::new(3, 3).offset(1, 0, 4, 4), None);
    }

    #[test]
    fn display() {
        assert_eq!(Square::new(1, 4).to_string(), "(1,4)");
    }
}
