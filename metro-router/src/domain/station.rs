//! Station records and node identity.

use std::fmt;

use super::{DomainError, LineCode};

/// One line served by a physical station.
///
/// Interchange stations appear once per line they serve, so several
/// `StationCode` values may share a display name. The pair
/// `(display_name, line)` is expected to be unique across a network.
///
/// Fields are validated at construction: the name is non-empty, the
/// sequence number is positive and both coordinates are finite.
#[derive(Debug, Clone, PartialEq)]
pub struct StationCode {
    display_name: String,
    line: LineCode,
    sequence: u32,
    latitude: f64,
    longitude: f64,
}

impl StationCode {
    /// Creates a new station code.
    ///
    /// Surrounding whitespace is trimmed from the display name.
    pub fn new(
        display_name: &str,
        line: LineCode,
        sequence: u32,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, DomainError> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        if sequence == 0 {
            return Err(DomainError::ZeroSequence(display_name.to_string()));
        }
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DomainError::NonFiniteCoordinate(display_name.to_string()));
        }

        Ok(Self {
            display_name: display_name.to_string(),
            line,
            sequence,
            latitude,
            longitude,
        })
    }

    /// Returns the station's display name (e.g. "Bugis").
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the line this record belongs to.
    pub fn line(&self) -> &LineCode {
        &self.line
    }

    /// Returns the ordinal position on the line.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the node identity this record maps to.
    pub fn key(&self) -> NodeKey {
        NodeKey::new(self.display_name.clone(), self.line.clone())
    }
}

/// Identity of a graph node: a station's presence on one line.
///
/// Ordered by display name, then line code. The planner iterates
/// candidate nodes in this order, so it is part of the observable
/// tie-break behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    name: String,
    line: LineCode,
}

impl NodeKey {
    pub fn new(name: impl Into<String>, line: LineCode) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line(&self) -> &LineCode {
        &self.line
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.line)
    }
}
