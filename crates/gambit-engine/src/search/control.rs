//! Search control: the wall-clock deadline.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::time::deadline_for;

/// The deadline passed while a search was in progress.
///
/// Returned by every node and propagated with `?` up to the
/// iterative-deepening driver, which discards the unfinished iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search deadline reached")]
pub struct Aborted;

/// Controls when a search must stop.
///
/// Checked at every alpha-beta and quiescence node and before each
/// quiescence capture. Two modes:
/// - **Timed**: stop once `Instant::now()` reaches the deadline
/// - **Infinite**: never stop on time (depth-limited searches and tests)
#[derive(Debug, Clone)]
pub struct SearchControl {
    start: Instant,
    deadline: Option<Instant>,
}

impl SearchControl {
    /// Create control with no deadline.
    pub fn infinite() -> Self {
        Self {
            start: Instant::now(),
            deadline: None,
        }
    }

    /// Create control whose clock starts now, reserving a safety margin
    /// out of `budget` (see [`deadline_for`]).
    pub fn new_timed(budget: Duration) -> Self {
        let start = Instant::now();
        Self {
            start,
            deadline: Some(deadline_for(start, budget)),
        }
    }

    /// Create control with an explicit absolute deadline.
    pub fn with_deadline(start: Instant, deadline: Instant) -> Self {
        Self {
            start,
            deadline: Some(deadline),
        }
    }

    /// `Err(Aborted)` once the deadline has been reached.
    #[inline]
    pub fn check(&self) -> Result<(), Aborted> {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(Aborted),
            _ => Ok(()),
        }
    }

    /// Elapsed time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
