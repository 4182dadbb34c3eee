//! Errors from constructing or parsing boards.

/// Errors raised when building a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Height or width outside `1..=MAX_DIM`.
    #[error("board dimensions {height}x{width} are outside 1..=8")]
    InvalidDimensions {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },
    /// A row in grid notation describes the wrong number of squares.
    #[error("row {row} describes {found} squares, expected {expected}")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Width established by the first row.
        expected: usize,
        /// Squares described by this row.
        found: usize,
    },
    /// An unrecognized character appeared in grid notation.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The offending character.
        character: char,
    },
}

#[cfg(test)]
mod tests {
    use super::BoardError;

    #[test]
    fn display_messages() {
        let err = BoardError::InvalidDimensions { height: 9, width: 8 };
        assert_eq!(err.to_string(), "board dimensions 9x8 are outside 1..=8");
        let err = BoardError::InvalidPieceChar { character: 'x' };
        assert_eq!(err.to_string(), "invalid piece character: 'x'");
    }
}
