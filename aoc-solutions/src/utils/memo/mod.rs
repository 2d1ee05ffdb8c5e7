//! Memo tables for recurrences
//!
//! A [`MemoTable`] evaluates a [`Recurrence`] lazily, computing every index
//! it needs exactly once. The table belongs to whoever builds it: create one
//! per computation and drop it afterwards, nothing is kept in statics.
//!
//! # Backend Types
//!
//! - [`VecBackend`]: dense `usize` indices (auto-growing)
//! - [`HashMapBackend`]: arbitrary `Hash + Eq` indices
//!
//! # Cycles
//!
//! Dependencies are expected to form a DAG. An index that depends on itself,
//! directly or not, is reported as [`MemoError::Cycle`] instead of looping.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::memo::{HashMapBackend, MemoError, MemoTable};
//!
//! // Ways to climb `n` stairs taking 1 or 2 at a time
//! let mut stairs = MemoTable::new(
//!     HashMapBackend::new(),
//!     |n: &u32| match n { 0 | 1 => vec![], _ => vec![n - 1, n - 2] },
//!     |n: &u32, deps: Vec<u64>| if *n <= 1 { 1 } else { deps[0] + deps[1] },
//! );
//! assert_eq!(stairs.get(&30).unwrap(), 1_346_269);
//!
//! let mut looping = MemoTable::new(
//!     HashMapBackend::new(),
//!     |n: &u8| vec![(n + 1) % 3],
//!     |_: &u8, deps: Vec<u8>| deps[0],
//! );
//! assert_eq!(looping.get(&0), Err(MemoError::Cycle(0)));
//! ```

mod backend;
mod recurrence;
mod table;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use recurrence::{ClosureRecurrence, Recurrence};
pub use table::{MemoError, MemoTable};

#[cfg(test)]
mod tests;
