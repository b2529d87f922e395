//! Domain error types.
//!
//! These errors represent validation failures when constructing station
//! records. They are distinct from catalog (input) and graph errors.

/// Domain-level errors for station record validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Station name is empty after trimming
    #[error("station name must not be empty")]
    EmptyName,

    /// Sequence numbers start at 1
    #[error("station {0} has sequence number 0")]
    ZeroSequence(String),

    /// Latitude or longitude is NaN or infinite
    #[error("station {0} has a non-finite coordinate")]
    NonFiniteCoordinate(String),
}
