//! Routing graph.
//!
//! One node per station-on-a-line, joined by same-line edges between
//! sequence-adjacent stations and by interchange edges between every pair
//! of nodes sharing a display name. The graph is immutable once built and
//! can be shared freely between readers.

mod builder;
mod config;
mod error;

use std::collections::HashMap;
use std::fmt;

use petgraph::graph::{EdgeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::domain::{LineCode, NodeKey, StationCode};

pub use builder::GraphBuilder;
pub use config::{
    BuildConfig, DEFAULT_INTERCHANGE_MINUTES, DEFAULT_MAX_MINUTES, DEFAULT_MIN_MINUTES,
    WeightPolicy, WeightTable,
};
pub use error::BuildError;
pub use petgraph::graph::NodeIndex;

/// A station's presence on one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    key: NodeKey,
    sequence: u32,
    latitude: f64,
    longitude: f64,
}

impl Node {
    fn from_code(code: &StationCode) -> Self {
        Self {
            key: code.key(),
            sequence: code.sequence(),
            latitude: code.latitude(),
            longitude: code.longitude(),
        }
    }

    pub fn key(&self) -> &NodeKey {
        &self.key
    }

    pub fn display_name(&self) -> &str {
        self.key.name()
    }

    pub fn line(&self) -> &LineCode {
        self.key.line()
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.key, f)
    }
}

/// What an edge models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Travel between sequence-adjacent stations on one line
    SameLine,
    /// Transfer between lines at the same station
    Interchange,
}

/// An undirected connection with a travel time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub minutes: u32,
    pub kind: EdgeKind,
}

/// The routing graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: UnGraph<Node, Edge>,
    by_key: HashMap<NodeKey, NodeIndex>,
}

impl Graph {
    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of edges of both kinds.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Number of edges of one kind.
    pub fn edge_count_of(&self, kind: EdgeKind) -> usize {
        self.inner
            .edge_weights()
            .filter(|edge| edge.kind == kind)
            .count()
    }

    /// Look up a node by index.
    ///
    /// Returns `None` for indices that do not belong to this graph.
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.inner.node_weight(index)
    }

    /// Look up a node index by identity.
    pub fn index_of(&self, key: &NodeKey) -> Option<NodeIndex> {
        self.by_key.get(key).copied()
    }

    /// All nodes with their indices, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &Node)> + '_ {
        self.inner
            .node_indices()
            .map(move |idx| (idx, &self.inner[idx]))
    }

    /// All edges as `(a, b, edge)`, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, &Edge)> + '_ {
        self.inner
            .edge_references()
            .map(|e| (e.source(), e.target(), e.weight()))
    }

    /// The edge joining two nodes, if any.
    pub fn edge_between(&self, a: NodeIndex, b: NodeIndex) -> Option<&Edge> {
        self.inner
            .find_edge(a, b)
            .and_then(|idx| self.inner.edge_weight(idx))
    }

    /// Neighbours of a node with the connecting edge.
    pub fn neighbors(&self, index: NodeIndex) -> impl Iterator<Item = (NodeIndex, &Edge)> + '_ {
        self.inner
            .edges(index)
            .map(move |e| (other_end(e.source(), e.target(), index), e.weight()))
    }

    fn add_node(&mut self, node: Node) -> NodeIndex {
        let key = node.key.clone();
        let idx = self.inner.add_node(node);
        self.by_key.insert(key, idx);
        idx
    }

    fn add_edge(&mut self, a: NodeIndex, b: NodeIndex, edge: Edge) -> EdgeIndex {
        self.inner.add_edge(a, b, edge)
    }
}

fn other_end(source: NodeIndex, target: NodeIndex, from: NodeIndex) -> NodeIndex {
    if source == from { target } else { source }
}
