//! Killer moves for quiet move ordering.

use std::collections::HashSet;

use gambit_core::Move;

/// Per-ply sets of quiet moves that caused a cutoff.
///
/// Sets only grow during a search; a fresh table is built per top-level
/// call and shared by all of its iterations.
#[derive(Debug, Clone)]
pub struct KillerTable {
    slots: Vec<HashSet<Move>>,
}

impl KillerTable {
    /// Create an empty table covering plies `0..plies`.
    pub fn new(plies: usize) -> Self {
        Self {
            slots: vec![HashSet::new(); plies],
        }
    }

    /// Record `mv` as a killer at `ply`. Plies past the table are ignored.
    pub fn store(&mut self, ply: usize, mv: Move) {
        if let Some(set) = self.slots.get_mut(ply) {
            set.insert(mv);
        }
    }

    /// Check if a move is a killer at the given ply.
    #[cfg(test)]
    pub fn is_killer(&self, ply: usize, mv: Move) -> bool {
        self.slots.get(ply).is_some_and(|set| set.contains(&mv))
    }

    /// Killers recorded at `ply`.
    pub fn at(&self, ply: usize) -> Option<&HashSet<Move>> {
        self.slots.get(ply)
    }
}

#[cfg(test)]
mod tests {
    use gambit_core::{Move, Square};

    use super::KillerTable;

    fn mv(a: u8, b: u8) -> Move {
        Move::new(Square::new(a, b), Square::new(a + 1, b))
    }

    #[test]
    fn store_and_query() {
        let mut killers = KillerTable::new(4);
        killers.store(2, mv(1, 1));
        killers.store(2, mv(1, 2));
        assert!(killers.is_killer(2, mv(1, 1)));
        assert!(killers.is_killer(2, mv(1, 2)));
        assert!(!killers.is_killer(1, mv(1, 1)));
        assert_eq!(killers.at(2).map(|s| s.len()), Some(2));
    }

    #[test]
    fn out_of_range_ply_is_ignored() {
        let mut killers = KillerTable::new(2);
        killers.store(5, mv(0, 0));
        assert!(!killers.is_killer(5, mv(0, 0)));
        assert!(killers.at(5).is_none());
    }
}
