//! Best known cost and predecessor of every discovered state.

use std::collections::HashMap;
use std::hash::Hash;

use super::cost::Cost;

#[derive(Debug)]
struct Node<S, C> {
    state: S,
    cost: C,
    parent: Option<usize>,
}

/// Arena of discovered states for one search invocation.
///
/// Nodes are addressed by index so the frontier and predecessor links stay
/// plain integers.
#[derive(Debug)]
pub(crate) struct CostRecord<S, C> {
    nodes: Vec<Node<S, C>>,
    index: HashMap<S, usize>,
}

impl<S, C> CostRecord<S, C>
where
    S: Clone + Eq + Hash,
    C: Cost,
{
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(crate) fn lookup(&self, state: &S) -> Option<usize> {
        self.index.get(state).copied()
    }

    /// Record a state seen for the first time
    pub(crate) fn insert(&mut self, state: S, cost: C, parent: Option<usize>) -> usize {
        let id = self.nodes.len();
        self.index.insert(state.clone(), id);
        self.nodes.push(Node {
            state,
            cost,
            parent,
        });
        id
    }

    /// Lower the cost of a known node and reroute it through `parent`
    pub(crate) fn improve(&mut self, id: usize, cost: C, parent: usize) {
        let node = &mut self.nodes[id];
        debug_assert!(cost < node.cost);
        node.cost = cost;
        node.parent = Some(parent);
    }

    pub(crate) fn cost(&self, id: usize) -> C {
        self.nodes[id].cost
    }

    pub(crate) fn state(&self, id: usize) -> &S {
        &self.nodes[id].state
    }

    /// States from the root to `id`, following predecessor links
    pub(crate) fn path(&self, id: usize) -> Vec<S> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            path.push(self.nodes[node].state.clone());
            current = self.nodes[node].parent;
        }
        path.reverse();
        path
    }

    pub(crate) fn into_costs(self) -> HashMap<S, C> {
        self.nodes
            .into_iter()
            .map(|node| (node.state, node.cost))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_follows_latest_parent() {
        let mut record = CostRecord::new();
        let a = record.insert('a', 0u32, None);
        let b = record.insert('b', 5, Some(a));
        let c = record.insert('c', 1, Some(a));
        let d = record.insert('d', 9, Some(b));
        assert_eq!(record.path(d), vec!['a', 'b', 'd']);

        record.improve(d, 3, c);
        assert_eq!(record.path(d), vec!['a', 'c', 'd']);
        assert_eq!(record.cost(d), 3);
        assert_eq!(record.lookup(&'d'), Some(d));
        assert_eq!(record.lookup(&'z'), None);
    }

    #[test]
    fn test_into_costs() {
        let mut record = CostRecord::new();
        let root = record.insert((0, 0), 0u8, None);
        record.insert((0, 1), 4, Some(root));

        let costs = record.into_costs();
        assert_eq!(costs.len(), 2);
        assert_eq!(costs[&(0, 1)], 4);
    }
}
