//! Paths and itineraries.

use crate::graph::{EdgeKind, Graph, Node, NodeIndex};

use super::error::PlanError;

/// An ordered, non-empty, connected sequence of nodes.
///
/// # Invariants
///
/// - At least one node
/// - Consecutive nodes are joined by an edge of the graph the path was
///   built against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<NodeIndex>,
}

impl Path {
    /// Constructs a path, checking it against the graph.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `nodes` is empty
    /// - a node index is not in the graph
    /// - two consecutive nodes are not adjacent
    pub fn new(graph: &Graph, nodes: Vec<NodeIndex>) -> Result<Self, PlanError> {
        if nodes.is_empty() {
            return Err(PlanError::EmptyPath);
        }
        for idx in &nodes {
            lookup(graph, *idx)?;
        }
        for pair in nodes.windows(2) {
            minutes_between(graph, pair[0], pair[1])?;
        }
        Ok(Self { nodes })
    }

    /// Wrap nodes produced by a search over `graph`.
    pub(super) fn from_search(nodes: Vec<NodeIndex>) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes }
    }

    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    /// First node of the path.
    pub fn origin(&self) -> NodeIndex {
        self.nodes[0]
    }

    /// Last node of the path.
    pub fn destination(&self) -> NodeIndex {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Number of nodes, counting both ends.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; paths are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// One hop of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'g> {
    pub from: &'g Node,
    pub to: &'g Node,
    pub minutes: u32,
    pub kind: EdgeKind,
}

/// A path annotated with per-segment and total travel time.
///
/// The empty itinerary (no path) has no stops, no segments and a total
/// of zero; renderers treat it as nothing to draw.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Itinerary<'g> {
    pub total_minutes: u32,
    pub stops: Vec<&'g Node>,
    pub segments: Vec<Segment<'g>>,
}

impl<'g> Itinerary<'g> {
    /// The itinerary of an absent path.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of line changes along the way.
    pub fn interchanges(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| s.kind == EdgeKind::Interchange)
            .count()
    }

    /// Annotate a path with travel times from `graph`.
    pub(super) fn from_path(graph: &'g Graph, path: &Path) -> Result<Self, PlanError> {
        let stops = path
            .nodes
            .iter()
            .map(|idx| lookup(graph, *idx))
            .collect::<Result<Vec<_>, _>>()?;

        let mut segments = Vec::with_capacity(path.hops());
        let mut total_minutes: u32 = 0;

        for pair in path.nodes.windows(2) {
            let (minutes, kind) = minutes_between(graph, pair[0], pair[1])?;
            segments.push(Segment {
                from: lookup(graph, pair[0])?,
                to: lookup(graph, pair[1])?,
                minutes,
                kind,
            });
            total_minutes = total_minutes.saturating_add(minutes);
        }

        Ok(Self {
            total_minutes,
            stops,
            segments,
        })
    }
}

fn lookup(graph: &Graph, idx: NodeIndex) -> Result<&Node, PlanError> {
    graph.node(idx).ok_or(PlanError::UnknownNode(idx.index()))
}

fn minutes_between(
    graph: &Graph,
    a: NodeIndex,
    b: NodeIndex,
) -> Result<(u32, EdgeKind), PlanError> {
    match graph.edge_between(a, b) {
        Some(edge) => Ok((edge.minutes, edge.kind)),
        None => Err(PlanError::NotAdjacent {
            from: lookup(graph, a)?.key().clone(),
            to: lookup(graph, b)?.key().clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineCode, NodeKey, StationCode};
    use crate::graph::{BuildConfig, GraphBuilder, WeightPolicy};

    fn graph() -> Graph {
        let code = |name: &str, line: &str, seq| {
            StationCode::new(name, LineCode::parse(line).unwrap(), seq, 1.3, 103.8).unwrap()
        };
        GraphBuilder::new(BuildConfig::new(WeightPolicy::Fixed(3), 5))
            .build(&[
                code("A", "EW", 1),
                code("B", "EW", 2),
                code("C", "EW", 3),
                code("B", "NS", 7),
            ])
            .unwrap()
    }

    fn idx(graph: &Graph, name: &str, line: &str) -> NodeIndex {
        graph
            .index_of(&NodeKey::new(name, LineCode::parse(line).unwrap()))
            .unwrap()
    }

    #[test]
    fn valid_path() {
        let graph = graph();
        let nodes = vec![
            idx(&graph, "A", "EW"),
            idx(&graph, "B", "EW"),
            idx(&graph, "B", "NS"),
        ];
        let path = Path::new(&graph, nodes.clone()).unwrap();

        assert_eq!(path.nodes(), nodes.as_slice());
        assert_eq!(path.hops(), 2);
        assert_eq!(path.len(), 3);
        assert_eq!(path.origin(), nodes[0]);
        assert_eq!(path.destination(), nodes[2]);
    }

    #[test]
    fn reject_empty_path() {
        assert_eq!(Path::new(&graph(), vec![]), Err(PlanError::EmptyPath));
    }

    #[test]
    fn reject_non_adjacent_nodes() {
        let graph = graph();
        let nodes = vec![idx(&graph, "A", "EW"), idx(&graph, "C", "EW")];
        let err = Path::new(&graph, nodes).unwrap_err();
        assert!(matches!(err, PlanError::NotAdjacent { .. }));
    }

    #[test]
    fn reject_foreign_node() {
        let graph = graph();
        let err = Path::new(&graph, vec![NodeIndex::new(99)]).unwrap_err();
        assert_eq!(err, PlanError::UnknownNode(99));
    }

    #[test]
    fn itinerary_sums_segments() {
        let graph = graph();
        let path = Path::new(
            &graph,
            vec![
                idx(&graph, "A", "EW"),
                idx(&graph, "B", "EW"),
                idx(&graph, "B", "NS"),
            ],
        )
        .unwrap();
        let itinerary = Itinerary::from_path(&graph, &path).unwrap();

        assert_eq!(itinerary.total_minutes, 8);
        assert_eq!(itinerary.stops.len(), 3);
        assert_eq!(itinerary.segments.len(), 2);
        assert_eq!(itinerary.segments[0].kind, EdgeKind::SameLine);
        assert_eq!(itinerary.segments[1].kind, EdgeKind::Interchange);
        assert_eq!(itinerary.segments[1].from.display_name(), "B");
        assert_eq!(itinerary.interchanges(), 1);
    }

    #[test]
    fn single_node_itinerary() {
        let graph = graph();
        let path = Path::new(&graph, vec![idx(&graph, "A", "EW")]).unwrap();
        let itinerary = Itinerary::from_path(&graph, &path).unwrap();

        assert_eq!(itinerary.total_minutes, 0);
        assert_eq!(itinerary.stops.len(), 1);
        assert!(itinerary.segments.is_empty());
        assert!(!itinerary.is_empty());
    }

    #[test]
    fn empty_itinerary() {
        let itinerary = Itinerary::empty();
        assert_eq!(itinerary.total_minutes, 0);
        assert!(itinerary.segments.is_empty());
        assert!(itinerary.is_empty());
    }
}
