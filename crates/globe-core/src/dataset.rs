//! Country dataset loading.
//!
//! The input is a JSON array in the restcountries layout. Only
//! `name.common`, `population` and `latlng` are read; every other field is
//! ignored. Entries missing one of those are reported as
//! [`DataValidationError`] and skipped so a bad row never reaches the
//! geometry math.

use crate::error::{DataValidationError, Result};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq)]
pub struct CountryRecord {
    pub name: String,
    pub population: u64,
    /// (latitude, longitude) in degrees.
    pub latlng: (f64, f64),
}

impl CountryRecord {
    pub fn new(name: impl Into<String>, population: u64, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            population,
            latlng: (lat, lng),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawName {
    common: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCountry {
    name: Option<RawName>,
    population: Option<u64>,
    latlng: Option<Vec<f64>>,
}

/// Result of loading a dataset: the usable records and the rejected rows.
#[derive(Debug, Default)]
pub struct Dataset {
    pub records: Vec<CountryRecord>,
    pub rejected: Vec<DataValidationError>,
}

impl RawCountry {
    fn validate(self, index: usize) -> std::result::Result<CountryRecord, DataValidationError> {
        let name = self
            .name
            .and_then(|n| n.common)
            .ok_or(DataValidationError::MissingName { index })?;
        let population = self
            .population
            .ok_or_else(|| DataValidationError::MissingPopulation {
                index,
                name: name.clone(),
            })?;
        let latlng = self
            .latlng
            .ok_or_else(|| DataValidationError::MissingCoordinates {
                index,
                name: name.clone(),
            })?;
        let (lat, lng) = match latlng.as_slice() {
            [lat, lng] => (*lat, *lng),
            other => {
                return Err(DataValidationError::MalformedCoordinates {
                    index,
                    name,
                    len: other.len(),
                })
            }
        };
        if !lat.is_finite() || !lng.is_finite() {
            return Err(DataValidationError::NonFiniteCoordinates { index, name });
        }
        Ok(CountryRecord {
            name,
            population,
            latlng: (lat, lng),
        })
    }
}

/// Parse a dataset document. Fails only when the document itself is not an
/// array of objects; individual bad rows land in [`Dataset::rejected`].
pub fn parse_countries(json: &[u8]) -> Result<Dataset> {
    let raw: Vec<serde_json::Value> = serde_json::from_slice(json)?;
    let mut out = Dataset::default();
    for (index, value) in raw.into_iter().enumerate() {
        let row = serde_json::from_value::<RawCountry>(value)
            .map_err(|e| DataValidationError::Malformed {
                index,
                reason: e.to_string(),
            })
            .and_then(|r| r.validate(index));
        match row {
            Ok(record) => out.records.push(record),
            Err(e) => {
                log::warn!("[dataset] skipping {}", e);
                out.rejected.push(e);
            }
        }
    }
    log::info!(
        "[dataset] {} records loaded, {} skipped",
        out.records.len(),
        out.rejected.len()
    );
    Ok(out)
}

/// Landmarks used by the fixed-marker variant. Populations are zero so every
/// box renders at the minimum size.
pub fn fixed_landmarks() -> Vec<CountryRecord> {
    vec![
        CountryRecord::new("Mexico City", 0, 19.4326, -99.1332),
        CountryRecord::new("London", 0, 51.5072, -0.1276),
        CountryRecord::new("Nairobi", 0, -1.2921, 36.8219),
        CountryRecord::new("Mumbai", 0, 19.0760, 72.8777),
        CountryRecord::new("Tokyo", 0, 35.6762, 139.6503),
        CountryRecord::new("Sydney", 0, -33.8688, 151.2093),
        CountryRecord::new("São Paulo", 0, -23.5558, -46.6396),
    ]
}
