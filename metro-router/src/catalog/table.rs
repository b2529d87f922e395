//! Station table loading.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::error::CatalogError;

/// One row of the raw station table.
///
/// Column names follow the published MRT station table. Extra columns
/// (object IDs, projected coordinates, colours) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawStationRow {
    /// Station name, possibly with a " MRT STATION" suffix
    #[serde(rename = "STN_NAME")]
    pub name: String,

    /// One or more station codes separated by '/' (e.g. "EW12/DT14")
    #[serde(rename = "STN_NO")]
    pub codes: String,

    #[serde(rename = "Latitude")]
    pub latitude: f64,

    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl RawStationRow {
    /// Create a row from its parts.
    pub fn new(name: &str, codes: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            codes: codes.to_string(),
            latitude,
            longitude,
        }
    }
}

/// Read every row of a station table CSV file.
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<RawStationRow>, CatalogError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path.as_ref())?;
    collect_rows(reader)
}

/// Read every row of a station table from any reader.
pub fn read_rows_from<R: Read>(input: R) -> Result<Vec<RawStationRow>, CatalogError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(input);
    collect_rows(reader)
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<RawStationRow>, CatalogError> {
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: RawStationRow = record?;
        rows.push(row);
    }
    Ok(rows)
}
