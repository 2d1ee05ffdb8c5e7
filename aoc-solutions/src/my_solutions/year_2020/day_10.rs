use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::memo::{MemoTable, VecBackend};

/// Adapter Array: chain joltage adapters from the outlet to the device
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 10, tags = ["memo"])]
pub struct Solver;

/// Largest joltage step a single adapter accepts
const MAX_STEP: u32 = 3;

/// Outlet (0), every adapter in ascending order, then the device
/// rated [`MAX_STEP`] above the highest adapter.
#[derive(Debug)]
pub struct Chain {
    joltages: Vec<u32>,
}

impl Chain {
    fn steps(&self) -> impl Iterator<Item = u32> + '_ {
        self.joltages.windows(2).map(|pair| pair[1] - pair[0])
    }

    /// Distinct subsets of adapters that still connect outlet to device.
    fn arrangements(&self) -> Result<u64, SolveError> {
        let joltages = &self.joltages;
        let device = joltages.len() - 1;

        let mut ways = MemoTable::new(
            VecBackend::with_capacity(joltages.len()),
            |&i: &usize| {
                (i + 1..=device.min(i + MAX_STEP as usize))
                    .filter(|&j| joltages[j] - joltages[i] <= MAX_STEP)
                    .collect()
            },
            |&i: &usize, onward: Vec<u64>| {
                if i == device { 1 } else { onward.iter().sum() }
            },
        );
        ways.get(&0)
            .map_err(|e| SolveError::Unsolvable(e.to_string()))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Chain;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut adapters = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                let line = line.trim();
                match line.parse::<u32>() {
                    Ok(0) => Err(ParseError::InvalidFormat(format!(
                        "(line {}) adapter rated 0 jolts",
                        line_idx + 1
                    ))),
                    Ok(joltage) => Ok(joltage),
                    Err(e) => Err(ParseError::InvalidFormat(format!(
                        "(line {}) {line:?}: {e}",
                        line_idx + 1
                    ))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        adapters.sort_unstable();
        adapters.dedup();
        let highest = *adapters
            .last()
            .ok_or_else(|| ParseError::MissingData("no adapters".into()))?;

        let mut joltages = Vec::with_capacity(adapters.len() + 2);
        joltages.push(0);
        joltages.extend(adapters);
        joltages.push(highest + MAX_STEP);
        Ok(Chain { joltages })
    }
}

impl PartSolver<1> for Solver {
    fn solve(chain: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut counts = [0u64; MAX_STEP as usize + 1];
        for step in chain.steps() {
            let slot = counts.get_mut(step as usize).ok_or_else(|| {
                SolveError::Unsolvable(format!("gap of {step} jolts cannot be bridged"))
            })?;
            *slot += 1;
        }
        debug!(?counts, "joltage differences");
        Ok((counts[1] * counts[3]).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(chain: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(chain.arrangements()?.to_string())
    }
}
