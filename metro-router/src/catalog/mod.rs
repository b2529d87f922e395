//! Station catalog: raw station rows → typed station records.
//!
//! The catalog strips station-type suffixes from names, splits
//! multi-line code fields ("EW12/CC13") and decomposes each code into a
//! line and a sequence number. The result feeds the graph builder.

mod code;
mod error;
mod table;

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::StationCode;

pub use code::{CODE_SEPARATOR, normalize_name, parse_code, split_codes};
pub use error::CatalogError;
pub use table::{RawStationRow, read_rows, read_rows_from};

/// A normalized set of station records.
#[derive(Debug, Clone, Default)]
pub struct StationCatalog {
    codes: Vec<StationCode>,
    skipped: usize,
}

impl StationCatalog {
    /// Normalize rows, failing on the first malformed code or invalid row.
    pub fn from_rows(rows: &[RawStationRow]) -> Result<Self, CatalogError> {
        let mut codes = Vec::new();
        for row in rows {
            codes.extend(normalize_row(row)?);
        }

        debug!(rows = rows.len(), codes = codes.len(), "Catalog normalized");
        Ok(Self { codes, skipped: 0 })
    }

    /// Normalize rows, skipping codes that cannot be decomposed.
    ///
    /// Station tables include entries such as light-rail loop codes with no
    /// sequence digits; these are logged and counted rather than rejected.
    pub fn from_rows_lenient(rows: &[RawStationRow]) -> Self {
        let mut codes = Vec::new();
        let mut skipped = 0;

        for row in rows {
            let name = normalize_name(&row.name);
            for code in split_codes(&row.codes) {
                match normalize_code(&name, code, row) {
                    Ok(station) => codes.push(station),
                    Err(e) => {
                        warn!(station = %name, code, error = %e, "Skipping station code");
                        skipped += 1;
                    }
                }
            }
        }

        debug!(
            rows = rows.len(),
            codes = codes.len(),
            skipped,
            "Catalog normalized (lenient)"
        );
        Self { codes, skipped }
    }

    /// Load and normalize a station table CSV file.
    pub fn load_csv(path: impl AsRef<Path>, lenient: bool) -> Result<Self, CatalogError> {
        let rows = read_rows(path)?;
        if lenient {
            Ok(Self::from_rows_lenient(&rows))
        } else {
            Self::from_rows(&rows)
        }
    }

    /// The normalized station records, in input order.
    pub fn codes(&self) -> &[StationCode] {
        &self.codes
    }

    /// Consume the catalog, returning its records.
    pub fn into_codes(self) -> Vec<StationCode> {
        self.codes
    }

    /// Number of codes skipped by lenient normalization.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Normalize one row into one record per station code.
fn normalize_row(row: &RawStationRow) -> Result<Vec<StationCode>, CatalogError> {
    let name = normalize_name(&row.name);
    let mut codes = Vec::new();
    let mut any = false;

    for code in split_codes(&row.codes) {
        any = true;
        codes.push(normalize_code(&name, code, row)?);
    }

    if !any {
        return Err(CatalogError::MalformedCode {
            code: row.codes.clone(),
            reason: "no station codes",
        });
    }

    Ok(codes)
}

fn normalize_code(
    name: &str,
    code: &str,
    row: &RawStationRow,
) -> Result<StationCode, CatalogError> {
    let (line, sequence) = parse_code(code)?;
    StationCode::new(name, line, sequence, row.latitude, row.longitude).map_err(|source| {
        CatalogError::InvalidStation {
            name: name.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RawStationRow> {
        vec![
            RawStationRow::new("BUGIS MRT STATION", "EW12/DT14", 1.3004, 103.8556),
            RawStationRow::new("CITY HALL MRT STATION", "NS25/EW13", 1.2931, 103.8520),
        ]
    }

    #[test]
    fn from_rows_splits_multi_codes() {
        let catalog = StationCatalog::from_rows(&rows()).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.skipped(), 0);

        let first = &catalog.codes()[0];
        assert_eq!(first.display_name(), "BUGIS");
        assert_eq!(first.line().as_str(), "EW");
        assert_eq!(first.sequence(), 12);

        let second = &catalog.codes()[1];
        assert_eq!(second.display_name(), "BUGIS");
        assert_eq!(second.line().as_str(), "DT");
        assert_eq!(second.sequence(), 14);
        assert_eq!(second.latitude(), first.latitude());
    }

    #[test]
    fn from_rows_rejects_malformed_code() {
        let mut input = rows();
        input.push(RawStationRow::new("SENGKANG LRT STATION", "STC", 1.39, 103.89));

        let err = StationCatalog::from_rows(&input).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedCode { .. }));
    }

    #[test]
    fn from_rows_rejects_empty_code_field() {
        let input = vec![RawStationRow::new("BUGIS", " / ", 1.3, 103.8)];
        let err = StationCatalog::from_rows(&input).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MalformedCode {
                reason: "no station codes",
                ..
            }
        ));
    }

    #[test]
    fn from_rows_rejects_empty_name() {
        let input = vec![RawStationRow::new("   ", "EW1", 1.3, 103.8)];
        let err = StationCatalog::from_rows(&input).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidStation { .. }));
    }

    #[test]
    fn lenient_skips_malformed_codes() {
        let mut input = rows();
        input.push(RawStationRow::new("SENGKANG", "NE16/STC", 1.39, 103.89));

        let catalog = StationCatalog::from_rows_lenient(&input);
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.skipped(), 1);
        assert_eq!(catalog.codes()[4].line().as_str(), "NE");
    }

    #[test]
    fn load_csv_strict_and_lenient() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stations.csv");
        std::fs::write(
            &path,
            "STN_NAME,STN_NO,Latitude,Longitude\n\
             BUGIS MRT STATION,EW12/DT14,1.3004,103.8556\n\
             SENGKANG LRT STATION,STC,1.3916,103.8954\n",
        )
        .unwrap();

        assert!(StationCatalog::load_csv(&path, false).is_err());

        let catalog = StationCatalog::load_csv(&path, true).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.skipped(), 1);
    }
}
