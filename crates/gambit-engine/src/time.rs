//! Time management: turn clock parameters into a search deadline.

use std::time::{Duration, Instant};

/// Smallest budget handed to a search.
pub const MIN_BUDGET: Duration = Duration::from_millis(50);

/// Largest budget taken from a running clock.
pub const MAX_CLOCK_BUDGET: Duration = Duration::from_millis(2000);

/// Budget when no clock information is given.
pub const DEFAULT_BUDGET: Duration = Duration::from_millis(500);

/// Share of remaining time spent on one move.
const MOVES_TO_GO: u32 = 35;

/// Upper bound on the safety margin reserved from each budget.
const MAX_MARGIN: Duration = Duration::from_millis(100);

/// Clock information available for one move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    /// Fixed time for this move.
    pub movetime: Option<Duration>,
    /// Time left for the side to move.
    pub remaining: Option<Duration>,
    /// Increment per move for the side to move.
    pub increment: Option<Duration>,
}

/// Turn a [`Clock`] into a search budget.
///
/// | Given               | Budget                                  |
/// |---------------------|-----------------------------------------|
/// | `movetime`          | `max(50ms, movetime)`                   |
/// | remaining (+ inc)   | `clamp(remaining/35 + inc/2, 50ms, 2s)` |
/// | nothing             | 500ms                                   |
pub fn allot_budget(clock: &Clock) -> Duration {
    if let Some(movetime) = clock.movetime {
        return movetime.max(MIN_BUDGET);
    }
    match clock.remaining {
        Some(remaining) => {
            let inc = clock.increment.unwrap_or(Duration::ZERO);
            (remaining / MOVES_TO_GO + inc / 2).clamp(MIN_BUDGET, MAX_CLOCK_BUDGET)
        }
        None => DEFAULT_BUDGET,
    }
}

/// Deadline for a search that starts at `start` with `budget`, keeping a
/// margin of `min(100ms, budget/10)` for returning the move.
pub fn deadline_for(start: Instant, budget: Duration) -> Instant {
    start + budget - MAX_MARGIN.min(budget / 10)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn movetime_is_used_directly() {
        let clock = Clock {
            movetime: Some(ms(300)),
            remaining: Some(ms(60_000)),
            ..Clock::default()
        };
        assert_eq!(allot_budget(&clock), ms(300));
    }

    #[test]
    fn tiny_movetime_is_raised() {
        let clock = Clock {
            movetime: Some(ms(5)),
            ..Clock::default()
        };
        assert_eq!(allot_budget(&clock), MIN_BUDGET);
    }

    #[test]
    fn remaining_time_share() {
        let clock = Clock {
            remaining: Some(ms(35_000)),
            increment: Some(ms(200)),
            ..Clock::default()
        };
        assert_eq!(allot_budget(&clock), ms(1_100));
    }

    #[test]
    fn clock_budget_is_clamped() {
        let long = Clock {
            remaining: Some(ms(600_000)),
            ..Clock::default()
        };
        assert_eq!(allot_budget(&long), MAX_CLOCK_BUDGET);

        let short = Clock {
            remaining: Some(ms(700)),
            ..Clock::default()
        };
        assert_eq!(allot_budget(&short), MIN_BUDGET);
    }

    #[test]
    fn no_clock_uses_default() {
        assert_eq!(allot_budget(&Clock::default()), DEFAULT_BUDGET);
    }

    #[test]
    fn deadline_margin() {
        let start = Instant::now();
        assert_eq!(deadline_for(start, ms(500)), start + ms(450));
        assert_eq!(deadline_for(start, ms(2000)), start + ms(1900));
        assert_eq!(deadline_for(start, ms(50)), start + ms(45));
    }
}
