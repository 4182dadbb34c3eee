//! The two sides of the board.

use std::fmt;
use std::ops::Not;

/// One of the two players.
///
/// The engine is color-symmetric: neither color has a fixed home side.
/// Which color advances toward increasing row index is decided per search
/// by the caller (see [`generate_moves`](crate::generate_moves)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    First = 0,
    Second = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::First, Color::Second];

    /// Return the index (0 for First, 1 for Second).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposing color.
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::First => Color::Second,
            Color::Second => Color::First,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::First => write!(f, "first"),
            Color::Second => write!(f, "second"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn opponent_roundtrip() {
        assert_eq!(Color::First.opponent(), Color::Second);
        assert_eq!(!Color::Second, Color::First);
        assert_eq!(!!Color::First, Color::First);
    }

    #[test]
    fn index_matches_all_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
        assert_eq!(Color::ALL.len(), Color::COUNT);
    }
}
