//! Per-call search configuration.

/// Feature toggles and limits for one top-level search.
///
/// Every toggle changes only how much work the search does, never which
/// minimax value it converges to (up to transposition bound imprecision).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Probe and store the transposition table.
    pub use_tt: bool,
    /// Sort moves before searching them. When off, generation order is used.
    pub use_move_ordering: bool,
    /// Record and prefer killer moves. Only meaningful with move ordering.
    pub use_killers: bool,
    /// Resolve captures past the horizon instead of evaluating statically.
    pub use_quiescence: bool,
    /// Report each completed iteration to the caller.
    pub collect_stats: bool,
    /// Deepest iteration to attempt.
    pub max_depth: u8,
    /// Capture plies available to quiescence.
    pub quiescence_depth: u8,
    /// Transposition table slots (rounded up to a power of two).
    pub tt_entries: usize,
}

impl SearchConfig {
    pub const DEFAULT_MAX_DEPTH: u8 = 20;
    pub const DEFAULT_QUIESCENCE_DEPTH: u8 = 16;
    pub const DEFAULT_TT_ENTRIES: usize = 1 << 18;

    /// Same configuration with `max_depth` capped at `depth`.
    pub fn with_depth_limit(mut self, depth: u8) -> SearchConfig {
        self.max_depth = self.max_depth.min(depth);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            use_tt: true,
            use_move_ordering: true,
            use_killers: true,
            use_quiescence: true,
            collect_stats: true,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            quiescence_depth: Self::DEFAULT_QUIESCENCE_DEPTH,
            tt_entries: Self::DEFAULT_TT_ENTRIES,
        }
    }
}
