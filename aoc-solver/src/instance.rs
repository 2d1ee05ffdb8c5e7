//! Parsed solver instances behind a type-erased interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer for one part together with when it was computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub answer: String,
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
}

impl SolveResult {
    /// Wall-clock time spent solving
    pub fn duration(&self) -> TimeDelta {
        self.finished - self.started
    }
}

/// A solver that has parsed its input once and can answer any of its parts.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_started: DateTime<Utc>,
    parse_finished: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` with `S`, recording how long parsing took.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_started = Utc::now();
        let shared = S::parse(input)?;
        let parse_finished = Utc::now();

        Ok(Self {
            year,
            day,
            shared,
            parse_started,
            parse_finished,
        })
    }
}

/// Object-safe view over any [`SolverInstance`].
///
/// The registry hands these out so callers can drive solvers for different
/// days without knowing their concrete types.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) -> Result<(), aoc_solver::SolveError> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Part {}: {} ({})", part, result.answer, result.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve one part, timing the call
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts the underlying solver implements
    fn parts(&self) -> u8;

    fn parse_started(&self) -> DateTime<Utc>;

    fn parse_finished(&self) -> DateTime<Utc>;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_finished() - self.parse_started()
    }
}

impl<S: Solver> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let started = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let finished = Utc::now();

        Ok(SolveResult {
            answer,
            started,
            finished,
        })
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_started(&self) -> DateTime<Utc> {
        self.parse_started
    }

    fn parse_finished(&self) -> DateTime<Utc> {
        self.parse_finished
    }
}
