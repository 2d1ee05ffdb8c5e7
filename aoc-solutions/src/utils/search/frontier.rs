//! Priority queue of discovered but unsettled nodes.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::cost::Cost;

/// Field order matters: the derived `Ord` compares the estimate first and
/// the insertion sequence second, which gives FIFO order among equal
/// estimates.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry<C> {
    estimate: C,
    seq: u64,
    node: usize,
    cost: C,
}

/// Min-queue keyed by `cost + heuristic`.
///
/// Entries are never updated in place. A node whose cost improves is pushed
/// again and the outdated entry is discarded by the caller when popped.
#[derive(Debug)]
pub(crate) struct Frontier<C> {
    heap: BinaryHeap<Reverse<Entry<C>>>,
    next_seq: u64,
}

impl<C: Cost> Frontier<C> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, node: usize, cost: C, estimate: C) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            estimate,
            seq,
            node,
            cost,
        }));
    }

    /// Smallest estimate as `(node, cost at push time)`
    pub(crate) fn pop(&mut self) -> Option<(usize, C)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.node, entry.cost))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
