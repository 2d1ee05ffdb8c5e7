//! Storage backends for memo tables.

use std::collections::HashMap;
use std::hash::Hash;

/// Where a [`MemoTable`](super::MemoTable) keeps finished values.
///
/// Values are written once per index and never overwritten.
pub trait Backend<I, V> {
    fn get(&self, index: &I) -> Option<&V>;

    fn insert(&mut self, index: I, value: V);
}

/// A Vec-based backend for `usize` indices.
///
/// Efficient for dense indices starting from 0; grows on demand.
#[derive(Debug)]
pub struct VecBackend<V> {
    data: Vec<Option<V>>,
}

impl<V> VecBackend<V> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<V> Default for VecBackend<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Backend<usize, V> for VecBackend<V> {
    fn get(&self, index: &usize) -> Option<&V> {
        self.data.get(*index)?.as_ref()
    }

    fn insert(&mut self, index: usize, value: V) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        self.data[index] = Some(value);
    }
}

/// A HashMap-based backend for arbitrary hashable indices.
#[derive(Debug)]
pub struct HashMapBackend<I, V> {
    data: HashMap<I, V>,
}

impl<I, V> HashMapBackend<I, V> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, V> Default for HashMapBackend<I, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, V> Backend<I, V> for HashMapBackend<I, V> {
    fn get(&self, index: &I) -> Option<&V> {
        self.data.get(index)
    }

    fn insert(&mut self, index: I, value: V) {
        self.data.insert(index, value);
    }
}
