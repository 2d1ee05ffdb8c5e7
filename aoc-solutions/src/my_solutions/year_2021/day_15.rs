use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::grid::{Grid, manhattan};
use crate::utils::search::search;

/// Chiton: lowest total risk across a cavern of risk levels
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 15, tags = ["search", "grid"])]
pub struct Solver;

const TILES: usize = 5;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let cavern = Grid::parse_with(input, |b| matches!(b, b'1'..=b'9').then(|| b - b'0'))?;
        Ok(cavern)
    }
}

impl PartSolver<1> for Solver {
    fn solve(cavern: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_total_risk(cavern).map(|risk| risk.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(cavern: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_total_risk(&tiled(cavern, TILES)).map(|risk| risk.to_string())
    }
}

/// Risk of the cheapest route from the top-left to the bottom-right corner.
/// Entering a cell costs its risk level; the starting cell is free.
fn lowest_total_risk(cavern: &Grid<u8>) -> Result<u32, SolveError> {
    let goal = cavern.bottom_right();
    let solution = search(
        (0, 0),
        |&position| position == goal,
        |&position| {
            cavern
                .orthogonal_neighbors(position)
                .map(move |next| (next, u32::from(cavern[next])))
        },
        |&position| manhattan(position, goal) as u32,
    )
    .map_err(|e| SolveError::Unsolvable(e.to_string()))?;

    debug!(
        rows = cavern.rows(),
        cols = cavern.cols(),
        expanded = solution.stats.expanded,
        "cavern crossed"
    );
    Ok(solution.cost)
}

/// Full map: the cavern repeated `factor` times in both directions, every
/// tile step raising the risk by one and wrapping 9 back to 1.
fn tiled(cavern: &Grid<u8>, factor: usize) -> Grid<u8> {
    let (rows, cols) = cavern.dimensions();
    Grid::from_fn(rows * factor, cols * factor, |(r, c)| {
        let base = usize::from(cavern[(r % rows, c % cols)]);
        let bump = r / rows + c / cols;
        ((base + bump - 1) % 9 + 1) as u8
    })
}
