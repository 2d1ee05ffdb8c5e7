//! Generic best-first search (A* / Dijkstra)
//!
//! Finds a minimum-cost path through any state space described by a goal
//! predicate, a successor function and an optional heuristic. Every call
//! owns its frontier and cost record; nothing is shared between calls, so
//! independent searches may run on different threads.
//!
//! # Entry points
//!
//! - [`search`]: closures for goal test, successors and heuristic
//! - [`dijkstra`]: the same with a zero heuristic
//! - [`best_first`]: a [`SearchProblem`] implementation, which can also
//!   observe every settled state through [`SearchProblem::on_settle`]
//! - [`reachable_costs`]: minimum cost of every reachable state
//!
//! # Preconditions
//!
//! Step costs must be non-negative and the heuristic must never
//! overestimate the remaining cost. Neither is checked at runtime;
//! violating them yields a path that may not be optimal. Successor sets
//! must be finite.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::search::{NoPathFound, dijkstra};
//!
//! let edges = [(0, 1, 4u32), (0, 2, 1), (2, 1, 2), (1, 3, 5)];
//! let successors = |&n: &u8| {
//!     edges
//!         .iter()
//!         .filter(move |&&(from, _, _)| from == n)
//!         .map(|&(_, to, cost)| (to, cost))
//! };
//!
//! let solution = dijkstra(0u8, |&n| n == 3, successors).unwrap();
//! assert_eq!(solution.cost, 8);
//! assert_eq!(solution.path, vec![0, 2, 1, 3]);
//!
//! let unreachable = dijkstra(3u8, |&n| n == 0, successors);
//! assert!(matches!(unreachable, Err(NoPathFound { .. })));
//! ```

mod cost;
mod engine;
mod frontier;
mod problem;
mod record;

pub use cost::Cost;
pub use engine::{
    NoPathFound, SearchStats, Solution, best_first, dijkstra, reachable_costs, search,
};
pub use problem::{ClosureProblem, SearchProblem};
