//! Graph construction error types.

use crate::catalog::CatalogError;
use crate::domain::NodeKey;

/// Errors that abort graph construction.
///
/// Any of these means the input data or configuration is unusable; no
/// graph is produced and no queries can be served.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Raw input could not be normalized into station records
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Two records share the same (name, line) identity
    #[error("duplicate node: {0}")]
    DuplicateNode(NodeKey),

    /// Sampled travel time range is empty
    #[error("invalid weight range: min {min} > max {max}")]
    InvalidWeightRange { min: u32, max: u32 },

    /// A configured travel time is zero
    #[error("{0} must be at least one minute")]
    ZeroMinutes(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineCode;

    #[test]
    fn error_display() {
        let key = NodeKey::new("Bugis", LineCode::parse("EW").unwrap());
        let err = BuildError::DuplicateNode(key);
        assert_eq!(err.to_string(), "duplicate node: Bugis (EW)");

        let err = BuildError::InvalidWeightRange { min: 9, max: 2 };
        assert_eq!(err.to_string(), "invalid weight range: min 9 > max 2");

        let err = BuildError::ZeroMinutes("interchange cost");
        assert_eq!(err.to_string(), "interchange cost must be at least one minute");

        let err = BuildError::from(CatalogError::MalformedCode {
            code: "STC".into(),
            reason: "no sequence digits",
        });
        assert_eq!(
            err.to_string(),
            "malformed station code \"STC\": no sequence digits"
        );
    }
}
