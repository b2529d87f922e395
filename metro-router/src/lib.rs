//! Metro network routing engine.
//!
//! Builds a connectivity graph from station records (one node per
//! station per line, same-line edges in sequence order, interchange edges
//! between same-named nodes) and answers "fastest" and "fewest stops"
//! queries between user-named stations, with suggestions for misspelt
//! names.

pub mod catalog;
pub mod domain;
pub mod dto;
pub mod graph;
pub mod names;
pub mod planner;
