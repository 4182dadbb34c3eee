//! Iterative-deepening search driver.

pub mod alphabeta;
pub mod config;
pub mod control;
pub mod heuristics;
pub mod ordering;
pub mod tt;

use std::time::{Duration, Instant};

use gambit_core::{Board, Color, Move, generate_moves};
use tracing::debug;

use alphabeta::{SearchContext, search_root};
pub use config::SearchConfig;
pub use control::{Aborted, SearchControl};
use ordering::order_root_moves;

/// Counters gathered during one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Alpha-beta and quiescence nodes visited.
    pub nodes: u64,
    /// Nodes answered by the transposition table.
    pub tt_cuts: u64,
    /// Transposition table fill in permille (0 when disabled).
    pub hashfull: u32,
    /// Wall time since the search clock started.
    pub elapsed: Duration,
}

impl SearchStats {
    /// Nodes per second, or 0 before any time has elapsed.
    pub fn nps(&self) -> u64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.nodes as f64 / secs) as u64
        } else {
            0
        }
    }
}

/// Snapshot handed to the caller after each completed iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationReport {
    pub depth: u8,
    /// Best root value, from the searching color's point of view.
    pub score: i32,
    pub best_move: Move,
    pub stats: SearchStats,
}

/// Result of a search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move of the deepest completed iteration, or [`Move::NULL`] when
    /// there was no move or not even depth 1 finished.
    pub best_move: Move,
    /// Score of `best_move` from the searching color's point of view.
    pub score: i32,
    /// Depth of the last completed iteration (0 if none).
    pub depth: u8,
    pub stats: SearchStats,
}

/// Iterative-deepening searcher.
///
/// Holds only configuration: every call builds its own transposition and
/// killer tables, so calls are independent.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SearchConfig {
        &mut self.config
    }

    /// Choose a move for `color` on `board` before `control`'s deadline.
    ///
    /// `color` is treated as advancing toward increasing row. Depths run
    /// from 1 to `max_depth`; only completed depths update the result.
    /// When statistics are enabled `on_iter` is called after each
    /// completed depth.
    pub fn search<F>(
        &self,
        board: &Board,
        color: Color,
        control: &SearchControl,
        mut on_iter: F,
    ) -> SearchResult
    where
        F: FnMut(&IterationReport),
    {
        let config = &self.config;
        let mut ctx = SearchContext::new(color, config, control);

        let mut root_moves: Vec<(Move, i32)> = generate_moves(board, color, color)
            .into_iter()
            .map(|mv| (mv, 0))
            .collect();

        let mut best_move = Move::NULL;
        let mut best_score = 0;
        let mut completed_depth = 0;

        let time_left_ms = control
            .deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()).as_millis() as u64);
        debug!(%color, moves = root_moves.len(), ?time_left_ms, "search started");
        if root_moves.is_empty() {
            debug!(%color, "no moves available");
        }

        for depth in 1..=config.max_depth {
            if root_moves.is_empty() {
                break;
            }
            if config.use_move_ordering {
                order_root_moves(board, &mut root_moves, best_move);
            }

            match search_root(board, &mut root_moves, depth, &mut ctx) {
                Ok((mv, score)) => {
                    best_move = mv;
                    best_score = score;
                    completed_depth = depth;

                    let stats = ctx.stats();
                    debug!(
                        depth,
                        score,
                        nodes = stats.nodes,
                        tt_cuts = stats.tt_cuts,
                        hashfull = stats.hashfull,
                        best = %mv,
                        "iteration complete"
                    );
                    if config.collect_stats {
                        on_iter(&IterationReport {
                            depth,
                            score,
                            best_move: mv,
                            stats,
                        });
                    }
                }
                Err(Aborted) => {
                    debug!(depth, completed_depth, "deadline reached, keeping last completed depth");
                    break;
                }
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            depth: completed_depth,
            stats: ctx.stats(),
        }
    }
}
