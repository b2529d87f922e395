//! Single-source search results.

use crate::graph::NodeIndex;

/// Costs and predecessors from one source node.
///
/// Shared by the weighted and unweighted searches: cost is minutes for
/// Dijkstra and hop count for BFS.
pub(super) struct SearchTree {
    source: NodeIndex,
    cost: Vec<Option<u32>>,
    prev: Vec<Option<NodeIndex>>,
}

impl SearchTree {
    pub(super) fn new(node_count: usize, source: NodeIndex) -> Self {
        let mut cost = vec![None; node_count];
        cost[source.index()] = Some(0);
        Self {
            source,
            cost,
            prev: vec![None; node_count],
        }
    }

    pub(super) fn cost_to(&self, node: NodeIndex) -> Option<u32> {
        self.cost.get(node.index()).copied().flatten()
    }

    pub(super) fn reached(&self, node: NodeIndex) -> bool {
        self.cost_to(node).is_some()
    }

    /// True if `cost` beats the best known cost to `node`.
    pub(super) fn improves(&self, node: NodeIndex, cost: u32) -> bool {
        self.cost_to(node).is_none_or(|known| cost < known)
    }

    pub(super) fn record(&mut self, node: NodeIndex, cost: u32, via: NodeIndex) {
        self.cost[node.index()] = Some(cost);
        self.prev[node.index()] = Some(via);
    }

    /// Nodes from the source to `target`, inclusive.
    pub(super) fn path_to(&self, target: NodeIndex) -> Option<Vec<NodeIndex>> {
        if !self.reached(target) {
            return None;
        }

        let mut nodes = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.prev[current.index()]?;
            nodes.push(current);
        }
        nodes.reverse();
        Some(nodes)
    }
}
