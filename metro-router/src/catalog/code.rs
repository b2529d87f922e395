//! Station code and name normalization.

use crate::domain::LineCode;

use super::error::CatalogError;

/// Station-type suffixes stripped from raw names.
const NAME_SUFFIXES: [&str; 2] = [" MRT STATION", " LRT STATION"];

/// Separator between codes in a multi-line station field ("EW12/CC13").
pub const CODE_SEPARATOR: char = '/';

/// Strip the station-type suffix and surrounding whitespace from a raw name.
///
/// # Examples
///
/// ```
/// use metro_router::catalog::normalize_name;
///
/// assert_eq!(normalize_name("BUGIS MRT STATION"), "BUGIS");
/// assert_eq!(normalize_name("  Bugis "), "Bugis");
/// ```
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let upper = trimmed.to_ascii_uppercase();

    for suffix in NAME_SUFFIXES {
        if upper.ends_with(suffix) {
            // ASCII uppercasing keeps byte offsets stable
            return trimmed[..trimmed.len() - suffix.len()].trim().to_string();
        }
    }

    trimmed.to_string()
}

/// Split a single station code into its line and sequence number.
///
/// All uppercase letters form the line code and all digits form the
/// sequence number; other characters are ignored.
///
/// # Examples
///
/// ```
/// use metro_router::catalog::parse_code;
///
/// let (line, seq) = parse_code("EW12").unwrap();
/// assert_eq!(line.as_str(), "EW");
/// assert_eq!(seq, 12);
///
/// assert!(parse_code("STC").is_err());
/// ```
pub fn parse_code(code: &str) -> Result<(LineCode, u32), CatalogError> {
    let malformed = |reason| CatalogError::MalformedCode {
        code: code.to_string(),
        reason,
    };

    let letters: String = code.chars().filter(|c| c.is_ascii_uppercase()).collect();
    let digits: String = code.chars().filter(|c| c.is_ascii_digit()).collect();

    if letters.is_empty() {
        return Err(malformed("no line letters"));
    }
    if digits.is_empty() {
        return Err(malformed("no sequence digits"));
    }

    let line = LineCode::parse(&letters).map_err(|_| malformed("line code too long"))?;
    let sequence: u32 = digits
        .parse()
        .map_err(|_| malformed("sequence number out of range"))?;
    if sequence == 0 {
        return Err(malformed("sequence number must be positive"));
    }

    Ok((line, sequence))
}

/// Split a multi-code field into its individual, trimmed codes.
pub fn split_codes(field: &str) -> impl Iterator<Item = &str> {
    field
        .split(CODE_SEPARATOR)
        .map(str::trim)
        .filter(|c| !c.is_empty())
}
