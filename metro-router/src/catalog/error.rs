//! Catalog error types.

use crate::domain::DomainError;

/// Errors that can occur while normalizing raw station rows.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A station code could not be split into line letters and digits
    #[error("malformed station code {code:?}: {reason}")]
    MalformedCode { code: String, reason: &'static str },

    /// A row produced an invalid station record
    #[error("invalid station {name:?}: {source}")]
    InvalidStation {
        name: String,
        #[source]
        source: DomainError,
    },

    /// Failed to read or deserialize the station table
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::MalformedCode {
            code: "STC".into(),
            reason: "no sequence digits",
        };
        assert_eq!(
            err.to_string(),
            "malformed station code \"STC\": no sequence digits"
        );

        let err = CatalogError::InvalidStation {
            name: "Bugis".into(),
            source: DomainError::ZeroSequence("Bugis".into()),
        };
        assert_eq!(
            err.to_string(),
            "invalid station \"Bugis\": station Bugis has sequence number 0"
        );
    }
}
