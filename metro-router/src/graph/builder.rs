//! Graph construction from station records.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::catalog::{RawStationRow, StationCatalog};
use crate::domain::{LineCode, StationCode};

use super::config::BuildConfig;
use super::error::BuildError;
use super::{Edge, EdgeKind, Graph, Node, NodeIndex};

/// Builds a [`Graph`] from station records.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: BuildConfig,
}

impl GraphBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Normalize raw rows through the catalog, then build.
    ///
    /// Fails on the first malformed station code.
    pub fn build_from_rows(&self, rows: &[RawStationRow]) -> Result<Graph, BuildError> {
        let catalog = StationCatalog::from_rows(rows)?;
        self.build(catalog.codes())
    }

    /// Build the routing graph.
    ///
    /// 1. One node per `(display_name, line)`; a repeated identity fails
    ///    with [`BuildError::DuplicateNode`].
    /// 2. Per line, in ascending line-code order, nodes sorted by
    ///    `(sequence, name)` are chained with same-line edges whose
    ///    travel times come from the weight policy.
    /// 3. Nodes sharing a display name (compared case-insensitively) are
    ///    joined pairwise by interchange edges. Names that differ only in
    ///    case on the same line are not an interchange and stay joined by
    ///    their same-line edge alone.
    pub fn build(&self, codes: &[StationCode]) -> Result<Graph, BuildError> {
        self.config.validate()?;

        let mut graph = Graph::default();
        let mut lines: BTreeMap<LineCode, Vec<NodeIndex>> = BTreeMap::new();
        let mut names: BTreeMap<String, Vec<NodeIndex>> = BTreeMap::new();

        for code in codes {
            let key = code.key();
            if graph.index_of(&key).is_some() {
                return Err(BuildError::DuplicateNode(key));
            }

            let idx = graph.add_node(Node::from_code(code));
            lines.entry(code.line().clone()).or_default().push(idx);
            names
                .entry(code.display_name().to_uppercase())
                .or_default()
                .push(idx);
        }

        let same_line = self.link_lines(&mut graph, lines);
        let interchanges = self.link_interchanges(&mut graph, names);

        debug!(
            nodes = graph.node_count(),
            same_line, interchanges, "Graph built"
        );

        Ok(graph)
    }

    fn link_lines(&self, graph: &mut Graph, lines: BTreeMap<LineCode, Vec<NodeIndex>>) -> usize {
        let mut sampler = self.config.weights.sampler();
        let mut added = 0;

        for (line, mut members) in lines {
            members.sort_by(|a, b| {
                let (a, b) = (&graph.inner[*a], &graph.inner[*b]);
                a.sequence
                    .cmp(&b.sequence)
                    .then_with(|| a.key.name().cmp(b.key.name()))
            });

            for pair in members.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let (a_node, b_node) = (&graph.inner[a], &graph.inner[b]);

                if a_node.sequence == b_node.sequence {
                    warn!(
                        line = %line,
                        sequence = a_node.sequence,
                        first = %a_node.key,
                        second = %b_node.key,
                        "Stations share a sequence number"
                    );
                }

                let minutes = sampler.next(&a_node.key, &b_node.key);
                graph.add_edge(
                    a,
                    b,
                    Edge {
                        minutes,
                        kind: EdgeKind::SameLine,
                    },
                );
                added += 1;
            }
        }

        added
    }

    fn link_interchanges(
        &self,
        graph: &mut Graph,
        names: BTreeMap<String, Vec<NodeIndex>>,
    ) -> usize {
        let mut added = 0;

        for mut members in names.into_values() {
            if members.len() < 2 {
                continue;
            }
            members.sort_by(|a, b| graph.inner[*a].key.cmp(&graph.inner[*b].key));

            for (i, a) in members.iter().enumerate() {
                for b in &members[i + 1..] {
                    let (a_node, b_node) = (&graph.inner[*a], &graph.inner[*b]);
                    if a_node.key.line() == b_node.key.line() {
                        warn!(
                            first = %a_node.key,
                            second = %b_node.key,
                            "Names differ only in case on one line"
                        );
                        continue;
                    }
                    graph.add_edge(
                        *a,
                        *b,
                        Edge {
                            minutes: self.config.interchange_minutes,
                            kind: EdgeKind::Interchange,
                        },
                    );
                    added += 1;
                }
            }
        }

        added
    }
}
