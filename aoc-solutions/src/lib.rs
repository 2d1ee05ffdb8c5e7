//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year. Each one derives `AutoRegisterSolver`
//! so the CLI finds it through the plugin registry without a central list.
//!
//! The [`utils`] module holds the reusable pieces: a best-first
//! [`search`](utils::search) engine with a pluggable cost and heuristic,
//! iterative [`memo`](utils::memo) tables and a small [`grid`](utils::grid)
//! type.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
