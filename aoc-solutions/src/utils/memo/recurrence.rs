//! Trait-based recurrence definition.

use std::marker::PhantomData;

/// A value defined in terms of the values at other indices.
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::memo::{MemoTable, Recurrence, VecBackend};
///
/// struct Fibonacci;
///
/// impl Recurrence<usize, u64> for Fibonacci {
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
///     }
///
///     fn combine(&self, n: &usize, deps: Vec<u64>) -> u64 {
///         if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
///     }
/// }
///
/// let mut table = MemoTable::with_recurrence(VecBackend::new(), Fibonacci);
/// assert_eq!(table.get(&10).unwrap(), 55);
/// ```
pub trait Recurrence<I, V> {
    /// Indices this index depends on; empty for base cases.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Value at `index` from the dependency values, in the order returned
    /// by `deps`.
    fn combine(&self, index: &I, deps: Vec<V>) -> V;
}

/// Adapts a pair of closures to the [`Recurrence`] trait.
pub struct ClosureRecurrence<I, V, D, C> {
    deps_fn: D,
    combine_fn: C,
    _phantom: PhantomData<fn(&I) -> V>,
}

impl<I, V, D, C> ClosureRecurrence<I, V, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<V>) -> V,
{
    pub fn new(deps_fn: D, combine_fn: C) -> Self {
        Self {
            deps_fn,
            combine_fn,
            _phantom: PhantomData,
        }
    }
}

impl<I, V, D, C> Recurrence<I, V> for ClosureRecurrence<I, V, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<V>) -> V,
{
    fn deps(&self, index: &I) -> Vec<I> {
        (self.deps_fn)(index)
    }

    fn combine(&self, index: &I, deps: Vec<V>) -> V {
        (self.combine_fn)(index, deps)
    }
}
