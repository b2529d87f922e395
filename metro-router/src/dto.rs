//! Data transfer objects for rendering routes.
//!
//! A map renderer only needs ordered stops with coordinates and labels;
//! these types carry exactly that, decoupled from the graph's lifetimes.

use serde::Serialize;

use crate::graph::{EdgeKind, Node};
use crate::planner::{Itinerary, RoutePlan, Segment};

/// A stop along a route.
#[derive(Debug, Serialize)]
pub struct StopResult {
    /// Display label, e.g. "Bugis (EW)"
    pub label: String,

    /// Station display name
    pub name: String,

    /// Line code
    pub line: String,

    pub latitude: f64,
    pub longitude: f64,
}

/// One hop along a route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub from: String,
    pub to: String,
    pub minutes: u32,

    /// Whether this hop is a ride or a change of line
    pub interchange: bool,
}

/// A rendered itinerary.
///
/// An empty itinerary (no route) has no stops; renderers draw nothing.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    pub total_minutes: u32,
    pub stops: Vec<StopResult>,
    pub segments: Vec<SegmentResult>,
}

/// Both routes for a query.
#[derive(Debug, Serialize)]
pub struct PlanResult {
    pub origin: String,
    pub destination: String,
    pub fastest: ItineraryResult,
    pub fewest_stops: ItineraryResult,
    pub routes_identical: bool,
}

impl From<&Node> for StopResult {
    fn from(node: &Node) -> Self {
        Self {
            label: node.to_string(),
            name: node.display_name().to_string(),
            line: node.line().to_string(),
            latitude: node.latitude(),
            longitude: node.longitude(),
        }
    }
}

impl From<&Segment<'_>> for SegmentResult {
    fn from(segment: &Segment<'_>) -> Self {
        Self {
            from: segment.from.to_string(),
            to: segment.to.to_string(),
            minutes: segment.minutes,
            interchange: segment.kind == EdgeKind::Interchange,
        }
    }
}

impl From<&Itinerary<'_>> for ItineraryResult {
    fn from(itinerary: &Itinerary<'_>) -> Self {
        Self {
            total_minutes: itinerary.total_minutes,
            stops: itinerary.stops.iter().map(|n| StopResult::from(*n)).collect(),
            segments: itinerary.segments.iter().map(SegmentResult::from).collect(),
        }
    }
}

impl PlanResult {
    /// Build from a plan and the names the user asked for.
    pub fn new(origin: &str, destination: &str, plan: &RoutePlan<'_>) -> Self {
        Self {
            origin: origin.trim().to_string(),
            destination: destination.trim().to_string(),
            fastest: ItineraryResult::from(&plan.fastest_itinerary),
            fewest_stops: ItineraryResult::from(&plan.fewest_stops_itinerary),
            routes_identical: plan.routes_identical(),
        }
    }
}
