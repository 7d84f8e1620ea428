//! Min-priority frontier with decrease-key semantics.
//!
//! Dijkstra and Prim both need a queue where a node's priority can only be
//! lowered after insertion. `BinaryHeap` has no native decrease-key, so the
//! frontier keeps the best known priority per node and lazily skips stale
//! heap entries on extraction. Each decrease pushes one extra entry, giving
//! O(log n) amortized extract-min and decrease-key.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Copy, Clone, PartialEq)]
struct Entry {
    priority: f64,
    seq: u64,
    node: usize,
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap; equal priorities fall back to insertion
        // order so extraction is deterministic.
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue over dense node indices `0..node_count`.
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    /// Best priority pushed so far per node, `INFINITY` if never inserted.
    best: Vec<f64>,
    /// Nodes inserted but not yet extracted. Stale heap entries do not
    /// count, so emptiness is answerable without touching the heap.
    live: usize,
    seq: u64,
}

impl Frontier {
    pub fn new(node_count: usize) -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            best: vec![f64::INFINITY; node_count],
            live: 0,
            seq: 0,
        }
    }

    /// Insert `node` or lower its priority. A priority is never raised.
    ///
    /// Returns true if the priority improved (which is also the signal that
    /// the caller should update its bookkeeping, e.g. a parent pointer).
    pub fn insert_or_decrease(&mut self, node: usize, priority: f64) -> bool {
        if priority < self.best[node] {
            if self.best[node].is_infinite() {
                self.live += 1;
            }
            self.best[node] = priority;
            self.heap.push(Entry {
                priority,
                seq: self.seq,
                node,
            });
            self.seq += 1;
            true
        } else {
            false
        }
    }

    /// Pop the `(node, priority)` pair with the smallest priority.
    ///
    /// As long as the caller never decreases a node's priority after it has
    /// been extracted (the visited guard in Dijkstra/Prim), each node comes
    /// out at most once, at its best priority.
    pub fn extract_min(&mut self) -> Option<(usize, f64)> {
        while let Some(Entry { priority, node, .. }) = self.heap.pop() {
            if priority <= self.best[node] {
                self.live -= 1;
                return Some((node, priority));
            }
            // Stale entry superseded by a later decrease; drop it.
        }
        None
    }

    /// True when no live entry remains.
    ///
    /// Exact under the same contract as [`Frontier::extract_min`]: a node's
    /// priority is never decreased after extraction.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}
