//! Station name resolution.
//!
//! Exact, case-insensitive lookup of the nodes behind a display name, and
//! approximate suggestions to help a caller recover from a typo. Routing
//! never consults suggestions.

mod config;
mod resolver;
mod similarity;

pub use config::ResolverConfig;
pub use resolver::NameResolver;
pub use similarity::{SimilarityMetric, sequence_ratio};
