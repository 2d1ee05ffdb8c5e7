//! Puts results back into (year, day, part) order
//!
//! Workers finish in any order. Two min-heaps hold the keys still expected
//! and the results that arrived early; a result is released as soon as it
//! is the smallest key still expected.

use crate::executor::SolverResult;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Output position of a result; derives compare year, then day, then part
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// An early result, ordered so the smallest key sits on top of a max-heap
struct Pending {
    key: ResultKey,
    result: SolverResult,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key.cmp(&self.key)
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Pending {}

/// Releases results in ascending [`ResultKey`] order
pub struct ResultAggregator {
    expected: BinaryHeap<Reverse<ResultKey>>,
    pending: BinaryHeap<Pending>,
}

impl ResultAggregator {
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Buffer `result` and return every result that is now next in line
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.push(Pending {
            key: ResultKey::from(&result),
            result,
        });

        let mut ready = Vec::new();
        while let (Some(Reverse(next)), Some(top)) = (self.expected.peek(), self.pending.peek()) {
            if top.key != *next {
                break;
            }
            self.expected.pop();
            if let Some(Pending { result, .. }) = self.pending.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Everything still buffered, in order. Only non-empty when some expected
    /// result never arrived.
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut pending: Vec<Pending> = self.pending.drain().collect();
        pending.sort_by_key(|p| p.key);
        pending.into_iter().map(|p| p.result).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}
