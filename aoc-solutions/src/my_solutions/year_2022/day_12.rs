use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Point, manhattan};
use crate::utils::search::{NoPathFound, dijkstra, search};

/// Hill Climbing Algorithm: fewest steps up a heightmap
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 12, tags = ["search", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct Heightmap {
    /// Elevation per square, `a` = 0 through `z` = 25
    elevation: Grid<u8>,
    start: Point,
    summit: Point,
}

impl Heightmap {
    /// A step may climb at most one level and drop any number
    fn can_step(&self, from: Point, to: Point) -> bool {
        self.elevation[to] <= self.elevation[from] + 1
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Heightmap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let squares = Grid::parse_with(input, |b| {
            matches!(b, b'a'..=b'z' | b'S' | b'E').then_some(b)
        })?;

        let start = squares
            .find(|&b| b == b'S')
            .ok_or_else(|| ParseError::MissingData("no start square 'S'".into()))?;
        let summit = squares
            .find(|&b| b == b'E')
            .ok_or_else(|| ParseError::MissingData("no best signal square 'E'".into()))?;

        let (rows, cols) = squares.dimensions();
        let elevation = Grid::from_fn(rows, cols, |point| match squares[point] {
            b'S' => 0,
            b'E' => b'z' - b'a',
            b => b - b'a',
        });

        Ok(Heightmap {
            elevation,
            start,
            summit,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(map: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let summit = map.summit;
        let hill: &Heightmap = map;
        let solution = search(
            hill.start,
            |&p| p == summit,
            |&p| {
                hill.elevation
                    .orthogonal_neighbors(p)
                    .filter(move |&next| hill.can_step(p, next))
                    .map(|next| (next, 1u32))
            },
            |&p| manhattan(p, summit) as u32,
        )
        .map_err(unreachable_summit)?;
        Ok(solution.cost.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Walk downhill from the summit until any lowest square is reached,
    /// which finds the best starting square in a single search.
    fn solve(map: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let hill: &Heightmap = map;
        let solution = dijkstra(
            hill.summit,
            |&p| hill.elevation[p] == 0,
            |&p| {
                hill.elevation
                    .orthogonal_neighbors(p)
                    .filter(move |&prev| hill.can_step(prev, p))
                    .map(|prev| (prev, 1u32))
            },
        )
        .map_err(unreachable_summit)?;
        Ok(solution.cost.to_string())
    }
}

fn unreachable_summit(err: NoPathFound) -> SolveError {
    SolveError::Unsolvable(format!("summit unreachable: {err}"))
}
