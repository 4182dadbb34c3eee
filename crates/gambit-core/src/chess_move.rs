//! Moves as `(origin, destination)` pairs.

use std::fmt;

use crate::square::Square;

/// A move from one square to another.
///
/// Captures and promotions are implicit: whatever occupies the destination
/// is replaced, and a pawn reaching either edge row becomes a queen when the
/// move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// "No move" sentinel, `(0,0)->(0,0)`. Never generated.
    pub const NULL: Move = Move::new(Square::new(0, 0), Square::new(0, 0));

    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Return `true` for the sentinel (origin equals destination).
    #[inline]
    pub fn is_null(self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::square::Square;

    #[test]
    fn null_is_null() {
        assert!(Move::NULL.is_null());
        assert!(!Move::new(Square::new(1, 4), Square::new(2, 4)).is_null());
    }

    #[test]
    fn display_arrow() {
        let mv = Move::new(Square::new(1, 4), Square::new(2, 4));
        assert_eq!(mv.to_string(), "(1,4)->(2,4)");
    }
}
