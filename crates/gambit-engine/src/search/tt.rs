//! Transposition table: a fixed array of slots indexed by position key.
//!
//! Each slot holds the full 64-bit key, so a probe only ever returns an
//! entry stored for the same placement and side to move. A fresh table is
//! built for every top-level search.

/// Bound type stored in a TT entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The stored score is exact.
    Exact,
    /// The stored score is a lower bound (failed high).
    LowerBound,
    /// The stored score is an upper bound (failed low).
    UpperBound,
}

impl Bound {
    /// Classify `score` against the window the node was entered with.
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Bound {
        if score <= alpha {
            Bound::UpperBound
        } else if score >= beta {
            Bound::LowerBound
        } else {
            Bound::Exact
        }
    }
}

/// One stored search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    pub key: u64,
    pub score: i32,
    pub depth: u8,
    pub bound: Bound,
}

/// Fixed-size, always-allocated transposition table.
#[derive(Debug)]
pub struct TranspositionTable {
    slots: Vec<Option<TtEntry>>,
    mask: usize,
}

impl TranspositionTable {
    /// Create a table with at least `entries` slots (rounded up to a power
    /// of two, minimum one).
    pub fn new(entries: usize) -> Self {
        let len = entries.max(1).next_power_of_two();
        Self {
            slots: vec![None; len],
            mask: len - 1,
        }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        key as usize & self.mask
    }

    /// Look up `key`. Returns `None` for an empty slot or a different key.
    #[inline]
    pub fn probe(&self, key: u64) -> Option<TtEntry> {
        self.slots[self.index(key)].filter(|entry| entry.key == key)
    }

    /// Store a result. An entry for the same key is only replaced by a
    /// search of equal or greater depth; an entry for a different key is
    /// always replaced.
    pub fn store(&mut self, key: u64, depth: u8, score: i32, bound: Bound) {
        let idx = self.index(key);
        let slot = &mut self.slots[idx];
        if let Some(existing) = slot {
            if existing.key == key && existing.depth > depth {
                return;
            }
        }
        *slot = Some(TtEntry {
            key,
            score,
            depth,
            bound,
        });
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_rounds_up() {
        assert_eq!(TranspositionTable::new(1000).capacity(), 1024);
        assert_eq!(TranspositionTable::new(0).capacity(), 1);
    }

    #[test]
    fn store_and_probe() {
        let mut tt = TranspositionTable::new(64);
        tt.store(0xDEAD_BEEF, 3, 42, Bound::Exact);
        let entry = tt.probe(0xDEAD_BEEF).unwrap();
        assert_eq!(entry.score, 42);
        assert_eq!(entry.depth, 3);
        assert_eq!(entry.bound, Bound::Exact);
    }

    #[test]
    fn probe_empty_is_none() {
        let tt = TranspositionTable::new(64);
        assert!(tt.probe(12345).is_none());
    }

    #[test]
    fn colliding_key_is_not_returned() {
        let mut tt = TranspositionTable::new(16);
        tt.store(5, 2, 10, Bound::Exact);
        assert!(tt.probe(5 + 16).is_none());
    }

    #[test]
    fn shallower_store_keeps_deeper_entry() {
        let mut tt = TranspositionTable::new(16);
        tt.store(7, 4, 100, Bound::Exact);
        tt.store(7, 2, -5, Bound::LowerBound);
        assert_eq!(tt.probe(7).unwrap().score, 100);
        tt.store(7, 4, 60, Bound::UpperBound);
        assert_eq!(tt.probe(7).unwrap().score, 60);
    }

    #[test]
    fn different_key_replaces() {
        let mut tt = TranspositionTable::new(16);
        tt.store(3, 9, 1, Bound::Exact);
        tt.store(3 + 16, 1, 2, Bound::Exact);
        assert!(tt.probe(3).is_none());
        assert_eq!(tt.probe(3 + 16).unwrap().score, 2);
        assert_eq!(tt.occupied(), 1);
    }

    #[test]
    fn classify_bounds() {
        assert_eq!(Bound::classify(-10, -10, 10), Bound::UpperBound);
        assert_eq!(Bound::classify(10, -10, 10), Bound::LowerBound);
        assert_eq!(Bound::classify(0, -10, 10), Bound::Exact);
    }
}
