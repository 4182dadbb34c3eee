//! Middlegame/endgame score pair used throughout evaluation.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Middlegame and endgame evaluation terms, blended by game phase at the
/// end of [`evaluate`](crate::eval::evaluate).
///
/// Kept as two plain `i32` fields: boards with irregular material (many
/// promoted queens, test setups) must never overflow a component.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Score {
    mg: i32,
    eg: i32,
}

impl Score {
    /// Zero score (mg=0, eg=0).
    pub const ZERO: Score = Score { mg: 0, eg: 0 };

    #[inline]
    pub const fn new(mg: i32, eg: i32) -> Score {
        Score { mg, eg }
    }

    /// Extract the middlegame component.
    #[inline]
    pub const fn mg(self) -> i32 {
        self.mg
    }

    /// Extract the endgame component.
    #[inline]
    pub const fn eg(self) -> i32 {
        self.eg
    }
}

/// Shorthand constructor for a [`Score`].
///
/// `S(mg, eg)` is equivalent to `Score::new(mg, eg)`, following the naming
/// convention common to handcrafted chess evaluations.
#[allow(non_snake_case)]
#[inline]
pub const fn S(mg: i32, eg: i32) -> Score {
    Score::new(mg, eg)
}

impl Add for Score {
    type Output = Score;

    #[inline]
    fn add(self, rhs: Score) -> Score {
        Score::new(self.mg + rhs.mg, self.eg + rhs.eg)
    }
}

impl AddAssign for Score {
    #[inline]
    fn add_assign(&mut self, rhs: Score) {
        self.mg += rhs.mg;
        self.eg += rhs.eg;
    }
}

impl Sub for Score {
    type Output = Score;

    #[inline]
    fn sub(self, rhs: Score) -> Score {
        Score::new(self.mg - rhs.mg, self.eg - rhs.eg)
    }
}

impl SubAssign for Score {
    #[inline]
    fn sub_assign(&mut self, rhs: Score) {
        self.mg -= rhs.mg;
        self.eg -= rhs.eg;
    }
}

impl Neg for Score {
    type Output = Score;

    #[inline]
    fn neg(self) -> Score {
        Score::new(-self.mg, -self.eg)
    }
}

impl Mul<i32> for Score {
    type Output = Score;

    #[inline]
    fn mul(self, rhs: i32) -> Score {
        Score::new(self.mg * rhs, self.eg * rhs)
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S({}, {})", self.mg, self.eg)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S({}, {})", self.mg, self.eg)
    }
}

#[cfg(test)]
mod tests {
    use super::{S, Score};

    #[test]
    fn components() {
        let s = S(100, -50);
        assert_eq!(s.mg(), 100);
        assert_eq!(s.eg(), -50);
    }

    #[test]
    fn addition() {
        assert_eq!(S(10, 20) + S(30, 40), S(40, 60));
    }

    #[test]
    fn subtraction() {
        assert_eq!(S(50, 60) - S(10, 20), S(40, 40));
    }

    #[test]
    fn negation() {
        assert_eq!(-S(10, -20), S(-10, 20));
    }

    #[test]
    fn multiply_scalar() {
        assert_eq!(S(10, 20) * 3, S(30, 60));
        assert_eq!(S(10, 20) * -2, S(-20, -40));
    }

    #[test]
    fn large_values_do_not_wrap() {
        let queen = S(900, 880);
        assert_eq!(queen * 64, S(57_600, 56_320));
    }

    #[test]
    fn zero_constant() {
        assert_eq!(Score::ZERO, S(0, 0));
        assert_eq!(Score::default(), Score::ZERO);
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", S(3, -4)), "S(3, -4)");
    }
}
