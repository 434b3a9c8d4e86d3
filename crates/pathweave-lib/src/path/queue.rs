//! Heap entries for the lazy-deletion priority queues used by Dijkstra and A*.
//!
//! Entries are never updated in place. A shorter distance pushes a fresh
//! entry, and the search loop discards entries that are stale by the time
//! they are popped.

use std::cmp::Ordering;

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct FloatOrd(pub(crate) f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Dijkstra queue entry keyed by tentative distance.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct QueueEntry {
    pub(crate) node: usize,
    pub(crate) cost: FloatOrd,
}

impl QueueEntry {
    pub(crate) fn new(node: usize, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* open-set entry keyed by `f = g + h`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct AStarEntry {
    pub(crate) node: usize,
    pub(crate) cost: FloatOrd,
    pub(crate) estimate: FloatOrd,
}

impl AStarEntry {
    pub(crate) fn new(node: usize, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lowest estimate first; among equal estimates prefer the deeper node.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
