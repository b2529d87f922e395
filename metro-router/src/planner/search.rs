//! Route search between sets of candidate nodes.
//!
//! A station name usually resolves to several nodes (one per line), so
//! both queries compare every start × end pair and keep the best.

use std::fmt;

use tracing::{debug, warn};

use crate::graph::{Graph, NodeIndex};
use crate::names::NameResolver;

use super::bfs::fewest_hops;
use super::dijkstra::shortest_times;
use super::error::PlanError;
use super::path::{Itinerary, Path};

/// What a route search minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Total travel minutes
    Fastest,
    /// Number of edges traversed
    FewestStops,
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Objective::Fastest => f.write_str("fastest"),
            Objective::FewestStops => f.write_str("fewest stops"),
        }
    }
}

/// Both routes between two named stations.
#[derive(Debug, Clone)]
pub struct RoutePlan<'g> {
    /// Nodes the origin name resolved to.
    pub origin: Vec<NodeIndex>,

    /// Nodes the destination name resolved to.
    pub destination: Vec<NodeIndex>,

    /// Minimum-time path, if any route exists.
    pub fastest: Option<Path>,

    /// Minimum-hop path, if any route exists.
    pub fewest_stops: Option<Path>,

    pub fastest_itinerary: Itinerary<'g>,
    pub fewest_stops_itinerary: Itinerary<'g>,
}

impl RoutePlan<'_> {
    /// True when both searches chose the same node sequence.
    pub fn routes_identical(&self) -> bool {
        self.fastest == self.fewest_stops
    }
}

/// Route planner over a built graph.
///
/// Candidate pairs are visited in ascending node identity order (start
/// node, then end node) and a pair only replaces the current best on a
/// strictly lower cost, so ties go to the earliest pair in that order.
/// One single-source search per start node serves every end node.
#[derive(Debug, Clone, Copy)]
pub struct RoutePlanner<'g> {
    graph: &'g Graph,
}

impl<'g> RoutePlanner<'g> {
    /// Create a new planner.
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Minimum total travel time path from any start to any end node.
    ///
    /// Returns `None` if either set is empty or no pair is connected.
    /// Indices that are not nodes of this graph are skipped with a
    /// warning, so a set holding only such indices also gives `None`.
    /// Use [`Path::new`] to have a node sequence checked strictly.
    pub fn fastest_path(&self, starts: &[NodeIndex], ends: &[NodeIndex]) -> Option<Path> {
        self.best_path(starts, ends, Objective::Fastest)
    }

    /// Minimum hop count path from any start to any end node.
    ///
    /// Returns `None` if either set is empty or no pair is connected.
    /// Unknown indices are skipped as in [`RoutePlanner::fastest_path`].
    pub fn fewest_stops_path(&self, starts: &[NodeIndex], ends: &[NodeIndex]) -> Option<Path> {
        self.best_path(starts, ends, Objective::FewestStops)
    }

    /// Best path for the given objective.
    pub fn best_path(
        &self,
        starts: &[NodeIndex],
        ends: &[NodeIndex],
        objective: Objective,
    ) -> Option<Path> {
        let starts = self.candidates(starts);
        let ends = self.candidates(ends);
        if starts.is_empty() || ends.is_empty() {
            return None;
        }

        let mut best: Option<(u32, Vec<NodeIndex>)> = None;

        for &start in &starts {
            let tree = match objective {
                Objective::Fastest => shortest_times(self.graph, start, &ends),
                Objective::FewestStops => fewest_hops(self.graph, start, &ends),
            };

            for &end in &ends {
                let Some(cost) = tree.cost_to(end) else {
                    continue;
                };
                if best.as_ref().is_none_or(|(known, _)| cost < *known)
                    && let Some(nodes) = tree.path_to(end)
                {
                    best = Some((cost, nodes));
                }
            }
        }

        debug!(
            %objective,
            starts = starts.len(),
            ends = ends.len(),
            cost = best.as_ref().map(|(cost, _)| *cost),
            "Route search complete"
        );

        best.map(|(_, nodes)| Path::from_search(nodes))
    }

    /// Annotate a path with travel times.
    ///
    /// `None` yields the empty itinerary. A path that does not fit this
    /// graph is an error.
    pub fn itinerary(&self, path: Option<&Path>) -> Result<Itinerary<'g>, PlanError> {
        match path {
            Some(path) => Itinerary::from_path(self.graph, path),
            None => Ok(Itinerary::empty()),
        }
    }

    /// Resolve two station names and compute both routes between them.
    ///
    /// The resolver must be built over the same graph as this planner.
    ///
    /// # Errors
    ///
    /// [`PlanError::UnresolvedStation`] if either name matches no node,
    /// carrying the resolver's suggestions.
    pub fn plan(
        &self,
        resolver: &NameResolver<'_>,
        from: &str,
        to: &str,
    ) -> Result<RoutePlan<'g>, PlanError> {
        let origin = resolve(resolver, from)?;
        let destination = resolve(resolver, to)?;

        let fastest = self.fastest_path(&origin, &destination);
        let fewest_stops = self.fewest_stops_path(&origin, &destination);
        let fastest_itinerary = self.itinerary(fastest.as_ref())?;
        let fewest_stops_itinerary = self.itinerary(fewest_stops.as_ref())?;

        Ok(RoutePlan {
            origin,
            destination,
            fastest,
            fewest_stops,
            fastest_itinerary,
            fewest_stops_itinerary,
        })
    }

    /// Known nodes, deduplicated and sorted by identity. Unknown indices
    /// are dropped.
    fn candidates(&self, nodes: &[NodeIndex]) -> Vec<NodeIndex> {
        let mut known: Vec<_> = nodes
            .iter()
            .filter_map(|idx| match self.graph.node(*idx) {
                Some(node) => Some((node.key(), *idx)),
                None => {
                    warn!(index = idx.index(), "Ignoring node outside the graph");
                    None
                }
            })
            .collect();
        known.sort();
        known.dedup();
        known.into_iter().map(|(_, idx)| idx).collect()
    }
}

fn resolve(resolver: &NameResolver<'_>, query: &str) -> Result<Vec<NodeIndex>, PlanError> {
    let nodes = resolver.resolve_exact(query);
    if nodes.is_empty() {
        return Err(PlanError::UnresolvedStation {
            query: query.trim().to_string(),
            suggestions: resolver.suggest_default(query),
        });
    }
    Ok(nodes)
}
