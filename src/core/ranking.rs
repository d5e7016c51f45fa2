use std::cmp::Ordering;

use crate::core::candidate::{Candidate, rank_order};

/// Fixed-capacity ordered collection keeping the best-ranked (lowest
/// distance) candidates offered so far.
#[derive(Debug)]
pub struct BoundedRanking {
    capacity: usize,
    entries: Vec<Candidate>,
}

impl BoundedRanking {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts `candidate` in rank order. Past capacity the single worst
    /// member is evicted; offering a candidate that ranks no better than the
    /// worst member of a full set is a no-op. Never fails.
    pub fn offer(&mut self, candidate: Candidate) {
        if self.capacity == 0 {
            return;
        }
        let at = self
            .entries
            .partition_point(|held| rank_order(held, &candidate) != Ordering::Greater);
        if at == self.entries.len() && self.entries.len() >= self.capacity {
            return;
        }
        self.entries.insert(at, candidate);
        if self.entries.len() > self.capacity {
            self.entries.pop();
        }
    }

    /// Current members, ascending by (distance, name). Non-destructive and
    /// valid at any point of a scan.
    pub fn snapshot(&self) -> Vec<Candidate> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
