//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data shared by every part of a solver.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Sonar;
///
/// impl AocParser for Sonar {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(format!("bad depth {l:?}"))))
///             .collect()
///     }
/// }
///
/// assert_eq!(Sonar::parse("199\n200\n208").unwrap(), vec![199, 200, 208]);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results the parts want to share.
    ///
    /// The lifetime lets solvers borrow from the raw input when no
    /// transformation is needed.
    type SharedData<'a>;

    /// Parse the raw input.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implementing one `PartSolver<N>` per part lets `#[derive(AocSolver)]`
/// build the runtime dispatch in [`Solver::solve_part`].
pub trait PartSolver<const N: u8>: AocParser {
    /// Compute the answer for this part.
    ///
    /// Mutable access allows a part to cache work for the parts after it.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete solver: parsing plus runtime part dispatch.
///
/// Usually derived:
///
/// ```
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Sonar;
///
/// impl AocParser for Sonar {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Sonar {
///     fn solve(depths: &mut Vec<u32>) -> Result<String, SolveError> {
///         Ok(depths.windows(2).filter(|w| w[1] > w[0]).count().to_string())
///     }
/// }
///
/// impl PartSolver<2> for Sonar {
///     fn solve(depths: &mut Vec<u32>) -> Result<String, SolveError> {
///         Ok(depths.windows(4).filter(|w| w[3] > w[0]).count().to_string())
///     }
/// }
///
/// let mut depths = Sonar::parse("199\n200\n208\n210\n200").unwrap();
/// assert_eq!(Sonar::solve_part(&mut depths, 1).unwrap(), "3");
/// assert_eq!(Sonar::solve_part(&mut depths, 2).unwrap(), "1");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve `part` against the shared data.
    ///
    /// Returns `SolveError::PartNotImplemented` for part numbers the solver
    /// does not know.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point used by solver instances.
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`] but rejects parts outside `1..=PARTS`
    /// with `SolveError::PartOutOfRange` before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
