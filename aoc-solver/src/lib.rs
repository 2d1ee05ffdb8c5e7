//! Advent of Code Solver Library
//!
//! A small framework for hosting puzzle solutions across years and days.
//! Every solver parses its input once into shared data and answers one or
//! more parts from it.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into `SharedData`
//! - [`PartSolver<N>`] answers part `N`
//! - [`Solver`] dispatches a runtime part number to the right `PartSolver`
//!   (derive it with `#[derive(AocSolver)]`)
//! - [`SolverRegistry`] maps year/day to solver factories; plugins submitted
//!   with `#[derive(AutoRegisterSolver)]` are picked up by
//!   [`RegistryBuilder::register_all_plugins`]
//! - [`DynSolver`] is the object-safe interface the registry hands out
//!
//! # Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Calories;
//!
//! impl AocParser for Calories {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Vec<u32>, ParseError> {
//!         input
//!             .split("\n\n")
//!             .map(|elf| {
//!                 elf.lines()
//!                     .map(|l| l.parse::<u32>().map_err(|_| ParseError::InvalidFormat(l.into())))
//!                     .sum::<Result<u32, ParseError>>()
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Calories {
//!     fn solve(elves: &mut Vec<u32>) -> Result<String, SolveError> {
//!         elves.sort_unstable_by(|a, b| b.cmp(a));
//!         Ok(elves[0].to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Calories {
//!     fn solve(elves: &mut Vec<u32>) -> Result<String, SolveError> {
//!         elves.sort_unstable_by(|a, b| b.cmp(a));
//!         Ok(elves.iter().take(3).sum::<u32>().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Calories>(2022, 1, &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2022, 1, "1000\n2000\n\n4000\n\n5000\n6000").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "11000");
//! assert_eq!(solver.solve(2).unwrap().answer, "18000");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// The derive macros expand to paths under this crate
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
