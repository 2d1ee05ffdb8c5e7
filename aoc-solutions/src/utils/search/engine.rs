//! Best-first search driver shared by every entry point.

use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;
use tracing::debug;

use super::cost::Cost;
use super::frontier::Frontier;
use super::problem::{ClosureProblem, SearchProblem};
use super::record::CostRecord;

/// Work done by a single search invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose successors were generated
    pub expanded: usize,
    /// Entries pushed onto the frontier, the start included
    pub pushed: usize,
    /// Outdated entries discarded at pop time
    pub stale: usize,
}

/// A minimum-cost route to a goal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S, C> {
    pub cost: C,
    /// `[start, ..., goal]`, never empty
    pub path: Vec<S>,
    pub stats: SearchStats,
}

/// The frontier ran dry without reaching a goal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no path to a goal state after expanding {} states", .stats.expanded)]
pub struct NoPathFound {
    pub stats: SearchStats,
}

struct Exploration<S, C> {
    record: CostRecord<S, C>,
    goal: Option<usize>,
    stats: SearchStats,
}

fn explore<P: SearchProblem>(problem: &P, start: P::State) -> Exploration<P::State, P::Cost> {
    let mut record = CostRecord::new();
    let mut frontier = Frontier::new();
    let mut stats = SearchStats::default();

    let estimate = problem.heuristic(&start);
    let root = record.insert(start, P::Cost::ZERO, None);
    frontier.push(root, P::Cost::ZERO, estimate);
    stats.pushed += 1;

    while let Some((node, cost)) = frontier.pop() {
        if cost > record.cost(node) {
            stats.stale += 1;
            continue;
        }

        let state = record.state(node).clone();
        problem.on_settle(&state, cost);
        if problem.is_goal(&state) {
            return Exploration {
                record,
                goal: Some(node),
                stats,
            };
        }

        stats.expanded += 1;
        for (next, step) in problem.successors(&state) {
            let tentative = cost + step;
            let id = match record.lookup(&next) {
                Some(id) if tentative >= record.cost(id) => continue,
                Some(id) => {
                    record.improve(id, tentative, node);
                    id
                }
                None => record.insert(next, tentative, Some(node)),
            };
            let estimate = tentative + problem.heuristic(record.state(id));
            frontier.push(id, tentative, estimate);
            stats.pushed += 1;
        }
    }

    Exploration {
        record,
        goal: None,
        stats,
    }
}

/// Run a [`SearchProblem`] from `start` until a goal state is settled.
///
/// Returns the first goal popped from the frontier, which is a minimum-cost
/// goal whenever the heuristic never overestimates. Among equal estimates
/// the state discovered first is expanded first, so repeated calls return
/// the same path.
pub fn best_first<P: SearchProblem>(
    problem: &P,
    start: P::State,
) -> Result<Solution<P::State, P::Cost>, NoPathFound> {
    let Exploration {
        record,
        goal,
        stats,
    } = explore(problem, start);

    match goal {
        Some(id) => {
            let cost = record.cost(id);
            debug!(
                ?cost,
                expanded = stats.expanded,
                pushed = stats.pushed,
                stale = stats.stale,
                "search reached goal"
            );
            Ok(Solution {
                cost,
                path: record.path(id),
                stats,
            })
        }
        None => {
            debug!(
                expanded = stats.expanded,
                pushed = stats.pushed,
                stale = stats.stale,
                "search exhausted frontier"
            );
            Err(NoPathFound { stats })
        }
    }
}

/// Minimum-cost path from `start` to any state accepted by `is_goal`.
///
/// `successors` yields each neighbour with the non-negative cost of the
/// move; `heuristic` must not overestimate the remaining cost.
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::search::search;
///
/// // Walk a number line with steps of +1 (cost 1) and +5 (cost 3)
/// let solution = search(
///     0i32,
///     |&n| n == 12,
///     |&n| [(n + 1, 1u32), (n + 5, 3)],
///     |&n| ((12 - n).max(0) as u32 * 3) / 5,
/// )
/// .unwrap();
///
/// assert_eq!(solution.cost, 8);
/// assert_eq!(solution.path.first(), Some(&0));
/// assert_eq!(solution.path.last(), Some(&12));
/// ```
pub fn search<S, C, I, G, F, H>(
    start: S,
    is_goal: G,
    successors: F,
    heuristic: H,
) -> Result<Solution<S, C>, NoPathFound>
where
    S: Clone + Eq + Hash,
    C: Cost,
    I: IntoIterator<Item = (S, C)>,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    H: Fn(&S) -> C,
{
    best_first(&ClosureProblem::new(is_goal, successors, heuristic), start)
}

/// [`search`] with the zero heuristic
pub fn dijkstra<S, C, I, G, F>(
    start: S,
    is_goal: G,
    successors: F,
) -> Result<Solution<S, C>, NoPathFound>
where
    S: Clone + Eq + Hash,
    C: Cost,
    I: IntoIterator<Item = (S, C)>,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
{
    search(start, is_goal, successors, |_: &S| C::ZERO)
}

/// Minimum cost of every state reachable from `start`, `start` included
/// at zero.
pub fn reachable_costs<S, C, I, F>(start: S, successors: F) -> HashMap<S, C>
where
    S: Clone + Eq + Hash,
    C: Cost,
    I: IntoIterator<Item = (S, C)>,
    F: Fn(&S) -> I,
{
    let problem = ClosureProblem::new(|_: &S| false, successors, |_: &S| C::ZERO);
    let Exploration { record, stats, .. } = explore(&problem, start);
    debug!(
        expanded = stats.expanded,
        pushed = stats.pushed,
        stale = stats.stale,
        "reachability search finished"
    );
    record.into_costs()
}
