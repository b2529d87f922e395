//! Fewest-stops search.

use std::collections::{HashSet, VecDeque};

use crate::graph::{Graph, NodeIndex};

use super::tree::SearchTree;

/// Breadth-first search counting hops, ignoring travel times.
///
/// Neighbours are expanded in ascending node index (graph insertion)
/// order and each node keeps the first predecessor that reached it.
/// Stops once every node in `targets` has been reached.
pub(super) fn fewest_hops(graph: &Graph, source: NodeIndex, targets: &[NodeIndex]) -> SearchTree {
    let mut tree = SearchTree::new(graph.node_count(), source);
    let mut remaining: HashSet<NodeIndex> = targets.iter().copied().collect();
    let mut queue = VecDeque::from([source]);

    remaining.remove(&source);
    if remaining.is_empty() {
        return tree;
    }

    while let Some(node) = queue.pop_front() {
        let hops = tree.cost_to(node).unwrap_or_default() + 1;

        let mut neighbors: Vec<NodeIndex> = graph.neighbors(node).map(|(n, _)| n).collect();
        neighbors.sort();

        for next in neighbors {
            if tree.reached(next) {
                continue;
            }
            tree.record(next, hops, node);

            remaining.remove(&next);
            if remaining.is_empty() {
                return tree;
            }
            queue.push_back(next);
        }
    }

    tree
}
