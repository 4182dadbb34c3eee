//! Search and evaluation for gambit.

pub mod eval;
pub mod search;
pub mod time;

pub use eval::evaluate;
pub use search::{
    Aborted, IterationReport, SearchConfig, SearchControl, SearchResult, SearchStats, Searcher,
};
pub use time::{Clock, allot_budget, deadline_for};
