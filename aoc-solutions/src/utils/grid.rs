//! Rectangular character grids

use std::ops::Index;

use aoc_solver::ParseError;
use thiserror::Error;

/// `(row, column)`, origin at the top-left
pub type Point = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid is empty")]
    Empty,
    #[error("line {line}: expected {expected} cells, found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {column}: unexpected {found:?}")]
    InvalidCell {
        line: usize,
        column: usize,
        found: char,
    },
}

impl From<GridError> for ParseError {
    fn from(err: GridError) -> Self {
        ParseError::InvalidFormat(err.to_string())
    }
}

/// Row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Grid<T> {
    /// Parse one row per line, mapping each byte with `cell`.
    ///
    /// Trailing whitespace after the last row is ignored. Lines and columns
    /// in errors are 1-based.
    pub fn parse_with<F>(input: &str, mut cell: F) -> Result<Self, GridError>
    where
        F: FnMut(u8) -> Option<T>,
    {
        let mut cells = Vec::new();
        let mut cols = 0;
        let mut rows = 0;

        for (row, line) in input.trim_end().lines().enumerate() {
            let bytes = line.as_bytes();
            if row == 0 {
                cols = bytes.len();
            } else if bytes.len() != cols {
                return Err(GridError::Ragged {
                    line: row + 1,
                    expected: cols,
                    found: bytes.len(),
                });
            }
            for (col, &byte) in bytes.iter().enumerate() {
                cells.push(cell(byte).ok_or(GridError::InvalidCell {
                    line: row + 1,
                    column: col + 1,
                    found: char::from(byte),
                })?);
            }
            rows += 1;
        }

        if cells.is_empty() {
            return Err(GridError::Empty);
        }
        Ok(Self { cells, rows, cols })
    }

    /// Build a `rows` x `cols` grid from a function of the position
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(Point) -> T,
    {
        let cells = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .map(&mut f)
            .collect();
        Self { cells, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn bottom_right(&self) -> Point {
        (self.rows - 1, self.cols - 1)
    }

    pub fn contains(&self, (r, c): Point) -> bool {
        r < self.rows && c < self.cols
    }

    pub fn get(&self, point: Point) -> Option<&T> {
        self.contains(point)
            .then(|| &self.cells[point.0 * self.cols + point.1])
    }

    /// In-bounds neighbours of `point`: right, down, left, up
    pub fn orthogonal_neighbors(&self, point: Point) -> impl Iterator<Item = Point> + use<T> {
        orthogonal_neighbors(point, self.dimensions())
    }

    /// First position in row-major order whose cell matches
    pub fn find<P>(&self, mut predicate: P) -> Option<Point>
    where
        P: FnMut(&T) -> bool,
    {
        let index = self.cells.iter().position(|cell| predicate(cell))?;
        Some((index / self.cols, index % self.cols))
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, (r, c): Point) -> &T {
        assert!(r < self.rows && c < self.cols, "({r}, {c}) out of bounds");
        &self.cells[r * self.cols + c]
    }
}

/// Neighbours of `point` inside a `(rows, cols)` rectangle
pub fn orthogonal_neighbors(
    (r, c): Point,
    (rows, cols): (usize, usize),
) -> impl Iterator<Item = Point> {
    [(0isize, 1isize), (1, 0), (0, -1), (-1, 0)]
        .into_iter()
        .filter_map(move |(dr, dc)| {
            let nr = r.checked_add_signed(dr)?;
            let nc = c.checked_add_signed(dc)?;
            (nr < rows && nc < cols).then_some((nr, nc))
        })
}

/// Taxicab distance, admissible for 4-neighbour moves costing at least 1
pub fn manhattan((ar, ac): Point, (br, bc): Point) -> usize {
    ar.abs_diff(br) + ac.abs_diff(bc)
}
