//! Minimum-travel-time search.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::graph::{Graph, NodeIndex};

use super::tree::SearchTree;

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: u32,
    node: NodeIndex,
}

// Min-heap by cost, then by node index so equal costs pop in a fixed order
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm over edge travel times.
///
/// Stops once every node in `targets` is settled. Costs are only
/// improved on a strict decrease, so among equal-cost routes the first
/// one discovered is kept. Costs saturate at `u32::MAX`.
pub(super) fn shortest_times(
    graph: &Graph,
    source: NodeIndex,
    targets: &[NodeIndex],
) -> SearchTree {
    let mut tree = SearchTree::new(graph.node_count(), source);
    let mut settled = vec![false; graph.node_count()];
    let mut remaining: HashSet<NodeIndex> = targets.iter().copied().collect();
    let mut heap = BinaryHeap::new();

    heap.push(State {
        cost: 0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;

        remaining.remove(&node);
        if remaining.is_empty() {
            break;
        }

        for (next, edge) in graph.neighbors(node) {
            if settled[next.index()] {
                continue;
            }
            let next_cost = cost.saturating_add(edge.minutes);
            if tree.improves(next, next_cost) {
                tree.record(next, next_cost, node);
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineCode, NodeKey, StationCode};
    use crate::graph::{BuildConfig, GraphBuilder, WeightPolicy, WeightTable};

    fn key(name: &str, line: &str) -> NodeKey {
        NodeKey::new(name, LineCode::parse(line).unwrap())
    }

    #[test]
    fn prefers_cheaper_longer_route() {
        // EW: A - B - C with 1 + 1, NS: A - C with 10
        let code = |name: &str, line: &str, seq| {
            StationCode::new(name, LineCode::parse(line).unwrap(), seq, 1.3, 103.8).unwrap()
        };
        let table = WeightTable::new(1).with(key("A", "NS"), key("C", "NS"), 10);
        let graph = GraphBuilder::new(BuildConfig::new(WeightPolicy::Table(table), 5))
            .build(&[
                code("A", "EW", 1),
                code("B", "EW", 2),
                code("C", "EW", 3),
                code("A", "NS", 1),
                code("C", "NS", 2),
            ])
            .unwrap();

        let a = graph.index_of(&key("A", "NS")).unwrap();
        let c = graph.index_of(&key("C", "NS")).unwrap();
        let tree = shortest_times(&graph, a, &[c]);

        // A(NS) → A(EW) 5, → B 1, → C(EW) 1, → C(NS) 5 = 12 > 10
        assert_eq!(tree.cost_to(c), Some(10));
        assert_eq!(tree.path_to(c), Some(vec![a, c]));

        let c_ew = graph.index_of(&key("C", "EW")).unwrap();
        let tree = shortest_times(&graph, a, &[c_ew]);
        assert_eq!(tree.cost_to(c_ew), Some(7));
    }

    #[test]
    fn huge_weights_saturate() {
        let code = |name: &str, seq| {
            StationCode::new(name, LineCode::parse("EW").unwrap(), seq, 1.3, 103.8).unwrap()
        };
        let table = WeightTable::new(u32::MAX / 2 + 1);
        let graph = GraphBuilder::new(BuildConfig::new(WeightPolicy::Table(table), 5))
            .build(&[code("A", 1), code("B", 2), code("C", 3)])
            .unwrap();
        let a = graph.index_of(&key("A", "EW")).unwrap();
        let b = graph.index_of(&key("B", "EW")).unwrap();
        let c = graph.index_of(&key("C", "EW")).unwrap();

        let tree = shortest_times(&graph, a, &[c]);
        assert_eq!(tree.cost_to(c), Some(u32::MAX));
        assert_eq!(tree.path_to(c), Some(vec![a, b, c]));
    }

    #[test]
    fn unreachable_target() {
        let code = |name: &str, line: &str, seq| {
            StationCode::new(name, LineCode::parse(line).unwrap(), seq, 1.3, 103.8).unwrap()
        };
        let graph = GraphBuilder::default()
            .build(&[code("A", "EW", 1), code("B", "NS", 1)])
            .unwrap();
        let a = graph.index_of(&key("A", "EW")).unwrap();
        let b = graph.index_of(&key("B", "NS")).unwrap();

        let tree = shortest_times(&graph, a, &[b]);
        assert!(tree.cost_to(b).is_none());
        assert!(tree.path_to(b).is_none());
    }
}
