//! Numeric cost types accepted by the search engine.

use std::fmt::Debug;
use std::ops::Add;

/// A totally ordered accumulated cost with an additive identity.
///
/// Costs handed to the engine must be non-negative; signed types are
/// accepted for convenience but a negative step voids the optimality
/// guarantee.
pub trait Cost: Copy + Ord + Debug + Add<Output = Self> {
    const ZERO: Self;
}

macro_rules! impl_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
