//! Station name lookup.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::trace;

use crate::domain::NodeKey;
use crate::graph::{Graph, NodeIndex};

use super::config::ResolverConfig;

/// Maps free-text station names to graph nodes.
///
/// Holds the sorted set of unique display names; lookups never modify the
/// graph and the resolver can be shared between readers.
#[derive(Debug, Clone)]
pub struct NameResolver<'g> {
    graph: &'g Graph,
    config: ResolverConfig,
    names: Vec<String>,
}

impl<'g> NameResolver<'g> {
    /// Create a resolver over a built graph.
    pub fn new(graph: &'g Graph, config: ResolverConfig) -> Self {
        let names: BTreeSet<&str> = graph.nodes().map(|(_, n)| n.display_name()).collect();
        Self {
            graph,
            config,
            names: names.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// All unique display names, sorted.
    pub fn station_names(&self) -> &[String] {
        &self.names
    }

    /// Every node whose display name equals `query`, ignoring case and
    /// surrounding whitespace.
    ///
    /// Results are ordered by node identity. An unknown name yields an
    /// empty vector.
    pub fn resolve_exact(&self, query: &str) -> Vec<NodeIndex> {
        let wanted = normalize_query(query);
        if wanted.is_empty() {
            return Vec::new();
        }

        let mut found: Vec<(&NodeKey, NodeIndex)> = self
            .graph
            .nodes()
            .filter(|(_, node)| node.display_name().to_uppercase() == wanted)
            .map(|(idx, node)| (node.key(), idx))
            .collect();
        found.sort();

        trace!(query, matches = found.len(), "Resolved station name");
        found.into_iter().map(|(_, idx)| idx).collect()
    }

    /// Up to `max_results` display names approximately matching `query`.
    ///
    /// Candidates are scored case-insensitively with the configured
    /// metric, filtered by the cutoff and ranked by descending score;
    /// equal scores keep alphabetical order. Names keep their original
    /// casing.
    pub fn suggest(&self, query: &str, max_results: usize) -> Vec<String> {
        let wanted = query.trim().to_lowercase();

        let mut scored: Vec<(f64, &String)> = self
            .names
            .iter()
            .map(|name| (self.config.metric.score(&name.to_lowercase(), &wanted), name))
            .filter(|(score, _)| *score >= self.config.cutoff)
            .collect();

        // Stable sort: ties stay in alphabetical order
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        scored
            .into_iter()
            .take(max_results)
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Suggestions using the configured default count.
    pub fn suggest_default(&self, query: &str) -> Vec<String> {
        self.suggest(query, self.config.max_suggestions)
    }
}

/// Canonical form used for exact matching.
fn normalize_query(query: &str) -> String {
    query.trim().to_uppercase()
}
