//! Min-priority open set with deterministic tie-breaking.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An open-set entry. Ordered so that [`BinaryHeap`] pops the smallest
/// priority first, and among equal priorities the earliest insertion.
#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: f64,
    seq: u64,
    node: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue of node indices keyed by `f64`.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, node: usize, priority: f64) {
        self.heap.push(Entry {
            priority,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    /// Removes the entry with the smallest priority, oldest first on ties.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.node)
    }
}
