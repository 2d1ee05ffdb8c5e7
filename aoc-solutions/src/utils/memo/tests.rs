//! Tests for the memo module.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;

struct Fibonacci;

impl Recurrence<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn combine(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

#[test]
fn test_fibonacci() {
    let mut table = MemoTable::with_recurrence(VecBackend::new(), Fibonacci);
    assert_eq!(table.get(&0).unwrap(), 0);
    assert_eq!(table.get(&1).unwrap(), 1);
    assert_eq!(table.get(&20).unwrap(), 6765);
    assert_eq!(table.get(&90).unwrap(), 2_880_067_194_370_816_120);
}

#[test]
fn test_diamond_computes_shared_dependency_once() {
    // A(0) depends on B(1) and C(2), both depend on D(3)
    struct Diamond {
        count: Rc<Cell<u32>>,
    }

    impl Recurrence<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn combine(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 10,
            }
        }
    }

    let count = Rc::new(Cell::new(0));
    let mut table = MemoTable::with_recurrence(
        VecBackend::with_capacity(4),
        Diamond {
            count: Rc::clone(&count),
        },
    );

    assert_eq!(table.get(&0).unwrap(), 50);
    assert_eq!(count.get(), 4);

    // Everything is cached now
    assert_eq!(table.get(&0).unwrap(), 50);
    assert_eq!(table.get(&3).unwrap(), 10);
    assert_eq!(count.get(), 4);
    assert_eq!(table.peek(&2), Some(&30));
}

#[test]
fn test_deep_chain_does_not_overflow() {
    const DEPTH: usize = 200_000;
    let mut table = MemoTable::new(
        VecBackend::with_capacity(DEPTH + 1),
        |n: &usize| if *n == 0 { vec![] } else { vec![n - 1] },
        |n: &usize, deps: Vec<u64>| deps.first().map_or(0, |d| d + *n as u64),
    );

    let expected = (DEPTH as u64) * (DEPTH as u64 + 1) / 2;
    assert_eq!(table.get(&DEPTH).unwrap(), expected);
}

#[test]
fn test_self_dependency_is_a_cycle() {
    let mut table = MemoTable::new(
        VecBackend::new(),
        |n: &usize| vec![*n],
        |_: &usize, deps: Vec<u8>| deps[0],
    );
    assert_eq!(table.get(&7), Err(MemoError::Cycle(7)));
}

#[test]
fn test_cycle_keeps_finished_values() {
    // 0 -> 1 -> 2 -> 1, and 0 -> 5 which is a base case
    let mut table = MemoTable::new(
        HashMapBackend::new(),
        |n: &u32| match n {
            0 => vec![5, 1],
            1 => vec![2],
            2 => vec![1],
            _ => vec![],
        },
        |n: &u32, deps: Vec<u32>| deps.iter().sum::<u32>() + n,
    );

    assert_eq!(table.get(&0), Err(MemoError::Cycle(1)));
    assert_eq!(table.peek(&5), Some(&5));
    assert_eq!(table.peek(&1), None);
    assert_eq!(table.get(&5), Ok(5));
}

#[test]
fn test_string_keys() {
    // Words built by dropping one character; value is the number of
    // distinct deletion orders that reach the empty string
    let mut table = MemoTable::new(
        HashMapBackend::new(),
        |word: &String| {
            (0..word.len())
                .map(|i| {
                    let mut shorter = word.clone();
                    shorter.remove(i);
                    shorter
                })
                .collect()
        },
        |word: &String, deps: Vec<u64>| if word.is_empty() { 1 } else { deps.iter().sum() },
    );

    assert_eq!(table.get(&String::new()).unwrap(), 1);
    assert_eq!(table.get(&"ab".to_string()).unwrap(), 2);
    assert_eq!(table.get(&"abcd".to_string()).unwrap(), 24);
    assert_eq!(table.peek(&"bd".to_string()), Some(&2));
}

#[test]
fn test_tables_are_independent() {
    let build = |offset: u64| {
        MemoTable::new(
            VecBackend::new(),
            |n: &usize| if *n == 0 { vec![] } else { vec![n - 1] },
            move |n: &usize, deps: Vec<u64>| deps.first().map_or(offset, |d| d + *n as u64),
        )
    };

    let mut first = build(0);
    let mut second = build(100);
    assert_eq!(first.get(&4).unwrap(), 10);
    assert_eq!(second.get(&4).unwrap(), 110);
}

fn collatz_steps(mut n: u64) -> u64 {
    let mut steps = 0;
    while n != 1 {
        n = if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
        steps += 1;
    }
    steps
}

proptest! {
    #[test]
    fn collatz_matches_direct_count(starts in prop::collection::vec(1u64..10_000, 1..20)) {
        let mut table = MemoTable::new(
            HashMapBackend::new(),
            |n: &u64| match n {
                1 => vec![],
                n if n % 2 == 0 => vec![n / 2],
                n => vec![3 * n + 1],
            },
            |_: &u64, deps: Vec<u64>| deps.first().map_or(0, |d| d + 1),
        );

        let mut seen = HashMap::new();
        for n in starts {
            let value = table.get(&n).unwrap();
            prop_assert_eq!(value, collatz_steps(n));
            seen.insert(n, value);
        }
        for (n, value) in seen {
            prop_assert_eq!(table.peek(&n), Some(&value));
        }
    }
}
