//! Min/max alpha-beta search with quiescence.
//!
//! Scores are always from the root color's point of view: nodes where the
//! root color moves maximize, the others minimize.

use gambit_core::{Board, Color, Move, generate_captures, generate_moves};

use crate::eval::evaluate;
use crate::search::config::SearchConfig;
use crate::search::control::{Aborted, SearchControl};
use crate::search::heuristics::KillerTable;
use crate::search::ordering::{order_captures, order_moves};
use crate::search::tt::{Bound, TranspositionTable};
use crate::search::SearchStats;

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 1_000_000;

/// Killer slots beyond the deepest iteration.
const KILLER_PLY_SLACK: usize = 5;

/// Search state threaded through alpha-beta calls.
pub(super) struct SearchContext<'a> {
    /// Color the search is run for; also the color advancing toward +row.
    pub root: Color,
    pub config: &'a SearchConfig,
    /// Search control (deadline).
    pub control: &'a SearchControl,
    /// `None` when the table is disabled.
    pub tt: Option<TranspositionTable>,
    pub killers: KillerTable,
    /// Total nodes visited, quiescence included.
    pub nodes: u64,
    /// Transposition probes that ended a node.
    pub tt_cuts: u64,
}

impl<'a> SearchContext<'a> {
    pub fn new(root: Color, config: &'a SearchConfig, control: &'a SearchControl) -> Self {
        Self {
            root,
            config,
            control,
            tt: config
                .use_tt
                .then(|| TranspositionTable::new(config.tt_entries)),
            killers: KillerTable::new(config.max_depth as usize + KILLER_PLY_SLACK),
            nodes: 0,
            tt_cuts: 0,
        }
    }

    /// Counters so far, with the table fill in permille.
    pub fn stats(&self) -> SearchStats {
        let hashfull = self.tt.as_ref().map_or(0, |tt| {
            (tt.occupied() as u64 * 1000 / tt.capacity() as u64) as u32
        });
        SearchStats {
            nodes: self.nodes,
            tt_cuts: self.tt_cuts,
            hashfull,
            elapsed: self.control.elapsed(),
        }
    }

    #[inline]
    fn evaluate(&self, board: &Board) -> i32 {
        evaluate(board, self.root, self.root)
    }
}

/// Search every root move to `depth` with a full window.
///
/// Each move's value is written back into `root_moves` for the next
/// iteration's ordering. Returns the first move with the strictly greatest
/// value, or [`Move::NULL`] when there are no root moves.
pub(super) fn search_root(
    board: &Board,
    root_moves: &mut [(Move, i32)],
    depth: u8,
    ctx: &mut SearchContext<'_>,
) -> Result<(Move, i32), Aborted> {
    let mut best_move = Move::NULL;
    let mut best_value = -INF;
    let opponent = !ctx.root;

    for (mv, value) in root_moves.iter_mut() {
        ctx.control.check()?;
        let child = board.apply(*mv);
        *value = alpha_beta(&child, opponent, depth - 1, -INF, INF, 1, ctx)?;
        if *value > best_value {
            best_value = *value;
            best_move = *mv;
        }
    }

    Ok((best_move, best_value))
}

/// Alpha-beta node for `color` to move with `depth` plies remaining.
pub(super) fn alpha_beta(
    board: &Board,
    color: Color,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ply: usize,
    ctx: &mut SearchContext<'_>,
) -> Result<i32, Aborted> {
    ctx.nodes += 1;
    ctx.control.check()?;

    let key = board.key(color);
    let (original_alpha, original_beta) = (alpha, beta);

    // Probe transposition table
    if let Some(entry) = ctx.tt.as_ref().and_then(|tt| tt.probe(key)) {
        if entry.depth >= depth {
            match entry.bound {
                Bound::Exact => {
                    ctx.tt_cuts += 1;
                    return Ok(entry.score);
                }
                Bound::LowerBound => alpha = alpha.max(entry.score),
                Bound::UpperBound => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                ctx.tt_cuts += 1;
                return Ok(entry.score);
            }
        }
    }

    // A captured king ends the line.
    if !board.has_king(Color::First) || !board.has_king(Color::Second) {
        return Ok(ctx.evaluate(board));
    }

    if depth == 0 {
        return if ctx.config.use_quiescence {
            quiescence(board, color, alpha, beta, ctx.config.quiescence_depth, ctx)
        } else {
            Ok(ctx.evaluate(board))
        };
    }

    let mut moves = generate_moves(board, color, ctx.root);
    if moves.is_empty() {
        return Ok(ctx.evaluate(board));
    }

    let maximizing = color == ctx.root;
    let use_killers = ctx.config.use_killers;

    if ctx.config.use_move_ordering {
        let killers = if use_killers { ctx.killers.at(ply) } else { None };
        order_moves(board, &mut moves, killers);
    }

    let mut best = if maximizing { -INF } else { INF };

    for mv in moves {
        let child = board.apply(mv);
        let value = alpha_beta(&child, !color, depth - 1, alpha, beta, ply + 1, ctx)?;

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(value);
        } else {
            best = best.min(value);
            beta = beta.min(value);
        }

        if beta <= alpha {
            if use_killers && !board.is_capture(mv) {
                ctx.killers.store(ply, mv);
            }
            break;
        }
    }

    if let Some(tt) = ctx.tt.as_mut() {
        let bound = Bound::classify(best, original_alpha, original_beta);
        tt.store(key, depth, best, bound);
    }

    Ok(best)
}

/// Quiescence search: captures only, with a stand-pat baseline.
///
/// Fail-hard: returns a value clamped to the `[alpha, beta]` window.
/// Nothing is stored in the transposition table.
fn quiescence(
    board: &Board,
    color: Color,
    mut alpha: i32,
    mut beta: i32,
    depth: u8,
    ctx: &mut SearchContext<'_>,
) -> Result<i32, Aborted> {
    ctx.nodes += 1;
    ctx.control.check()?;

    // Stand-pat: the side to move can choose not to capture
    let stand_pat = ctx.evaluate(board);
    let maximizing = color == ctx.root;

    if maximizing {
        if stand_pat >= beta {
            return Ok(beta);
        }
        alpha = alpha.max(stand_pat);
    } else {
        if stand_pat <= alpha {
            return Ok(alpha);
        }
        beta = beta.min(stand_pat);
    }

    if depth == 0 {
        return Ok(if maximizing { alpha } else { beta });
    }

    let mut captures = generate_captures(board, color, ctx.root);
    order_captures(board, &mut captures);

    for mv in captures {
        ctx.control.check()?;
        let child = board.apply(mv);
        let score = quiescence(&child, !color, alpha, beta, depth - 1, ctx)?;

        if maximizing {
            if score >= beta {
                return Ok(beta);
            }
            alpha = alpha.max(score);
        } else {
            if score <= alpha {
                return Ok(alpha);
            }
            beta = beta.min(score);
        }
    }

    Ok(if maximizing { alpha } else { beta })
}
