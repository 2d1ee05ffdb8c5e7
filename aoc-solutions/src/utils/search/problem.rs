//! Trait-based search problem definition.

use std::hash::Hash;
use std::marker::PhantomData;

use super::cost::Cost;

/// A weighted state space explored by [`best_first`](super::best_first).
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::search::{SearchProblem, best_first};
///
/// /// Reach `target` from 1 by doubling (cost 1) or incrementing (cost 2)
/// struct Doubling {
///     target: u32,
/// }
///
/// impl SearchProblem for Doubling {
///     type State = u32;
///     type Cost = u32;
///
///     fn is_goal(&self, n: &u32) -> bool {
///         *n == self.target
///     }
///
///     fn successors(&self, n: &u32) -> impl IntoIterator<Item = (u32, u32)> {
///         [(n * 2, 1), (n + 1, 2)]
///             .into_iter()
///             .filter(move |&(m, _)| m <= self.target)
///     }
/// }
///
/// let solution = best_first(&Doubling { target: 10 }, 1).unwrap();
/// assert_eq!(solution.cost, 5);
/// assert_eq!(solution.path, vec![1, 2, 4, 5, 10]);
/// ```
pub trait SearchProblem {
    /// Vertex of the state space, identified by value
    type State: Clone + Eq + Hash;
    type Cost: Cost;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Neighbours of `state` with the non-negative cost of each move.
    ///
    /// Must be finite for every state.
    fn successors(&self, state: &Self::State)
    -> impl IntoIterator<Item = (Self::State, Self::Cost)>;

    /// Lower bound on the remaining cost to the nearest goal.
    ///
    /// The default of zero turns the search into plain Dijkstra. An
    /// overestimating heuristic still terminates but may return a
    /// suboptimal cost.
    fn heuristic(&self, _state: &Self::State) -> Self::Cost {
        Self::Cost::ZERO
    }

    /// Called once every time a state is popped with its current best cost,
    /// before the goal test.
    fn on_settle(&self, _state: &Self::State, _cost: Self::Cost) {}
}

/// Adapts closures to the [`SearchProblem`] trait.
pub struct ClosureProblem<S, C, I, G, F, H> {
    is_goal: G,
    successors: F,
    heuristic: H,
    _phantom: PhantomData<fn(&S) -> (C, I)>,
}

impl<S, C, I, G, F, H> ClosureProblem<S, C, I, G, F, H>
where
    S: Clone + Eq + Hash,
    C: Cost,
    I: IntoIterator<Item = (S, C)>,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    H: Fn(&S) -> C,
{
    pub fn new(is_goal: G, successors: F, heuristic: H) -> Self {
        Self {
            is_goal,
            successors,
            heuristic,
            _phantom: PhantomData,
        }
    }
}

impl<S, C, I, G, F, H> SearchProblem for ClosureProblem<S, C, I, G, F, H>
where
    S: Clone + Eq + Hash,
    C: Cost,
    I: IntoIterator<Item = (S, C)>,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    H: Fn(&S) -> C,
{
    type State = S;
    type Cost = C;

    fn is_goal(&self, state: &S) -> bool {
        (self.is_goal)(state)
    }

    fn successors(&self, state: &S) -> impl IntoIterator<Item = (S, C)> {
        (self.successors)(state)
    }

    fn heuristic(&self, state: &S) -> C {
        (self.heuristic)(state)
    }
}
