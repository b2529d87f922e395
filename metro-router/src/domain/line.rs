//! Line code types.

use std::fmt;

/// Longest line code accepted (e.g. "STC" for a light-rail loop).
const MAX_LINE_CODE_LEN: usize = 4;

/// Error returned when parsing an invalid line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line code: {reason}")]
pub struct InvalidLineCode {
    reason: &'static str,
}

/// A valid line code such as `EW`, `NS` or `DT`.
///
/// Line codes are 1 to 4 uppercase ASCII letters. This type guarantees
/// that any `LineCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use metro_router::domain::LineCode;
///
/// let ew = LineCode::parse("EW").unwrap();
/// assert_eq!(ew.as_str(), "EW");
///
/// // Lowercase is rejected
/// assert!(LineCode::parse("ew").is_err());
///
/// // Empty and overlong codes are rejected
/// assert!(LineCode::parse("").is_err());
/// assert!(LineCode::parse("ABCDE").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineCode(String);

impl LineCode {
    /// Parse a line code from a string.
    ///
    /// The input must be 1 to 4 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidLineCode> {
        if s.is_empty() {
            return Err(InvalidLineCode {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_LINE_CODE_LEN {
            return Err(InvalidLineCode {
                reason: "must be at most 4 characters",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(InvalidLineCode {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(LineCode(s.to_string()))
    }

    /// Returns the line code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.0)
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(LineCode::parse("EW").is_ok());
        assert!(LineCode::parse("NS").is_ok());
        assert!(LineCode::parse("C").is_ok());
        assert!(LineCode::parse("STC").is_ok());
        assert!(LineCode::parse("ABCD").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(LineCode::parse("ew").is_err());
        assert!(LineCode::parse("Ew").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(LineCode::parse("").is_err());
        assert!(LineCode::parse("ABCDE").is_err());
    }

    #[test]
    fn reject_digits_and_punctuation() {
        assert!(LineCode::parse("E1").is_err());
        assert!(LineCode::parse("E-W").is_err());
        assert!(LineCode::parse("E W").is_err());
    }

    #[test]
    fn display_and_debug() {
        let line = LineCode::parse("DT").unwrap();
        assert_eq!(format!("{}", line), "DT");
        assert_eq!(format!("{:?}", line), "LineCode(DT)");
    }

    #[test]
    fn ordering_is_alphabetical() {
        let cc = LineCode::parse("CC").unwrap();
        let ew = LineCode::parse("EW").unwrap();
        assert!(cc < ew);
    }
}
