//! Domain types for the metro router.
//!
//! This module contains the validated value types shared by the catalog,
//! graph, resolver and planner. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod line;
mod station;

pub use error::DomainError;
pub use line::{InvalidLineCode, LineCode};
pub use station::{NodeKey, StationCode};
