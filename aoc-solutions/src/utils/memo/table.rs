//! Memo table with iterative dependency resolution.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use thiserror::Error;

use super::backend::Backend;
use super::recurrence::{ClosureRecurrence, Recurrence};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoError<I: Debug> {
    /// `index` was reached again while its own value was still pending
    #[error("dependency cycle through {0:?}")]
    Cycle(I),
}

/// Pending evaluation of one index
struct Frame<I, V> {
    index: I,
    deps: Vec<I>,
    values: Vec<V>,
}

/// Memoised evaluation of a [`Recurrence`], owned by one computation.
///
/// Dependencies are resolved with an explicit stack of frames, so chains
/// deeper than the thread's call stack are fine. Each index is combined at
/// most once per table.
///
/// # Example (closure-based)
///
/// ```rust
/// use aoc_solutions::utils::memo::{MemoTable, VecBackend};
///
/// let mut table = MemoTable::new(
///     VecBackend::new(),
///     |n: &usize| if *n == 0 { vec![] } else { vec![n - 1] },
///     |n: &usize, deps: Vec<u64>| if *n == 0 { 1 } else { *n as u64 * deps[0] },
/// );
///
/// assert_eq!(table.get(&5).unwrap(), 120);
/// ```
pub struct MemoTable<I, V, B, R> {
    backend: B,
    recurrence: R,
    _phantom: PhantomData<fn(&I) -> V>,
}

impl<I, V, B, R> MemoTable<I, V, B, R>
where
    I: Clone + Eq + Hash + Debug,
    V: Clone,
    B: Backend<I, V>,
    R: Recurrence<I, V>,
{
    pub fn with_recurrence(backend: B, recurrence: R) -> Self {
        Self {
            backend,
            recurrence,
            _phantom: PhantomData,
        }
    }

    /// Value at `index`, computing it and any missing dependencies first.
    ///
    /// # Errors
    ///
    /// [`MemoError::Cycle`] if `index` transitively depends on itself. Values
    /// finished before the cycle was found stay cached.
    pub fn get(&mut self, index: &I) -> Result<V, MemoError<I>> {
        if let Some(value) = self.backend.get(index) {
            return Ok(value.clone());
        }

        let mut pending = HashSet::from([index.clone()]);
        let mut root = self.frame(index.clone());
        let mut stack: Vec<Frame<I, V>> = Vec::new();

        loop {
            let top = stack.last_mut().unwrap_or(&mut root);

            if let Some(dep) = top.deps.get(top.values.len()) {
                if let Some(value) = self.backend.get(dep) {
                    top.values.push(value.clone());
                    continue;
                }
                let dep = dep.clone();
                if !pending.insert(dep.clone()) {
                    return Err(MemoError::Cycle(dep));
                }
                let frame = self.frame(dep);
                stack.push(frame);
                continue;
            }

            let Some(Frame { index, values, .. }) = stack.pop() else {
                return Ok(self.finish(root.index, root.values));
            };
            pending.remove(&index);
            let value = self.finish(index, values);
            stack
                .last_mut()
                .unwrap_or(&mut root)
                .values
                .push(value);
        }
    }

    /// Cached value at `index`, without computing anything
    pub fn peek(&self, index: &I) -> Option<&V> {
        self.backend.get(index)
    }

    fn finish(&mut self, index: I, values: Vec<V>) -> V {
        let value = self.recurrence.combine(&index, values);
        self.backend.insert(index, value.clone());
        value
    }

    fn frame(&self, index: I) -> Frame<I, V> {
        let deps = self.recurrence.deps(&index);
        Frame {
            values: Vec::with_capacity(deps.len()),
            index,
            deps,
        }
    }
}

impl<I, V, B> MemoTable<I, V, B, ClosureRecurrence<I, V, fn(&I) -> Vec<I>, fn(&I, Vec<V>) -> V>>
where
    I: Clone + Eq + Hash + Debug,
    V: Clone,
    B: Backend<I, V>,
{
    /// Build a table from a dependency function and a combine function
    pub fn new<D, C>(
        backend: B,
        deps_fn: D,
        combine_fn: C,
    ) -> MemoTable<I, V, B, ClosureRecurrence<I, V, D, C>>
    where
        D: Fn(&I) -> Vec<I>,
        C: Fn(&I, Vec<V>) -> V,
    {
        MemoTable::with_recurrence(backend, ClosureRecurrence::new(deps_fn, combine_fn))
    }
}
