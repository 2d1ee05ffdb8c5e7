use std::collections::HashMap;

use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::trace;

/// Passage Pathing: count routes through a cave system
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 12, tags = ["graph"])]
pub struct Solver;

/// Caves are numbered so a visited set fits in one `u64`
const MAX_CAVES: usize = 64;

#[derive(Debug)]
pub struct CaveSystem {
    links: Vec<Vec<usize>>,
    big: Vec<bool>,
    start: usize,
    end: usize,
}

/// One partial path waiting to be extended
#[derive(Debug, Clone, Copy)]
struct Frame {
    cave: usize,
    visited: u64,
    /// A small cave has already been entered twice
    revisited: bool,
}

impl CaveSystem {
    /// Number of distinct paths from `start` to `end`.
    ///
    /// Big caves may be visited any number of times, small caves once. With
    /// `allow_revisit`, a single small cave other than `start` may be visited
    /// twice along each path.
    fn count_paths(&self, allow_revisit: bool) -> u64 {
        let mut stack = vec![Frame {
            cave: self.start,
            visited: 1 << self.start,
            revisited: !allow_revisit,
        }];
        let mut paths = 0;

        while let Some(frame) = stack.pop() {
            if frame.cave == self.end {
                paths += 1;
                continue;
            }
            for &next in &self.links[frame.cave] {
                let bit = 1u64 << next;
                if next == self.start {
                    continue;
                }
                if self.big[next] || frame.visited & bit == 0 {
                    stack.push(Frame {
                        cave: next,
                        visited: frame.visited | bit,
                        ..frame
                    });
                } else if !frame.revisited {
                    stack.push(Frame {
                        cave: next,
                        revisited: true,
                        ..frame
                    });
                }
            }
        }

        trace!(allow_revisit, paths, "caves explored");
        paths
    }
}

fn intern<'a>(
    ids: &mut HashMap<&'a str, usize>,
    big: &mut Vec<bool>,
    name: &'a str,
) -> anyhow::Result<usize> {
    if let Some(&id) = ids.get(name) {
        return Ok(id);
    }
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        bail!("invalid cave name {name:?}");
    }
    if ids.len() == MAX_CAVES {
        bail!("more than {MAX_CAVES} caves");
    }
    let id = ids.len();
    ids.insert(name, id);
    big.push(name.chars().all(|c| c.is_ascii_uppercase()));
    Ok(id)
}

impl AocParser for Solver {
    type SharedData<'a> = CaveSystem;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut ids = HashMap::new();
        let mut big = Vec::new();
        let mut edges = Vec::new();

        for (line_idx, line) in input.trim().lines().enumerate() {
            let edge = (|| -> anyhow::Result<(usize, usize)> {
                let (a, b) = line
                    .trim()
                    .split_once('-')
                    .ok_or_else(|| anyhow!("expected `cave-cave`"))?;
                let a = intern(&mut ids, &mut big, a).context("left cave")?;
                let b = intern(&mut ids, &mut big, b).context("right cave")?;
                if big[a] && big[b] {
                    bail!("two big caves linked together allow endless paths");
                }
                Ok((a, b))
            })()
            .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e)))?;
            edges.push(edge);
        }

        let start = *ids
            .get("start")
            .ok_or_else(|| ParseError::MissingData("no `start` cave".into()))?;
        let end = *ids
            .get("end")
            .ok_or_else(|| ParseError::MissingData("no `end` cave".into()))?;

        let mut links = vec![Vec::new(); ids.len()];
        for (a, b) in edges {
            links[a].push(b);
            links[b].push(a);
        }

        Ok(CaveSystem {
            links,
            big,
            start,
            end,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(caves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(caves.count_paths(false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(caves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(caves.count_paths(true).to_string())
    }
}
