//! Route planning error types.
//!
//! "No route exists" is never an error: planner searches return `None`.
//! These errors signal structurally invalid input.

use crate::domain::NodeKey;

/// Errors from route planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// A path must contain at least one node
    #[error("path must contain at least one node")]
    EmptyPath,

    /// A node index does not belong to the graph
    #[error("node index {0} is not in the graph")]
    UnknownNode(usize),

    /// Consecutive path nodes are not joined by an edge
    #[error("{from} and {to} are not adjacent")]
    NotAdjacent { from: NodeKey, to: NodeKey },

    /// A station name matched no node
    #[error("station {query:?} not found")]
    UnresolvedStation {
        query: String,
        suggestions: Vec<String>,
    },
}
