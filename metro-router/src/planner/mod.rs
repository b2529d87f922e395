//! Route planning.
//!
//! Answers two queries between sets of nodes: the path with the lowest
//! total travel time (Dijkstra over edge minutes) and the path with the
//! fewest stops (breadth-first over hops). Either query may find no
//! route; that is an ordinary `None`, not an error.

mod bfs;
mod dijkstra;
mod error;
mod path;
mod search;
mod tree;


pub use error::PlanError;
pub use path::{Itinerary, Path, Segment};
pub use search::{Objective, RoutePlan, RoutePlanner};
