//! Location domain: addresses and geocoding.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::serde_util::lenient_datetime;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Address record nested in a location response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geom {
    #[serde(default)]
    pub property1: Option<String>,
    #[serde(default)]
    pub property2: Option<String>,
}

/// A facility or station location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime::option::deserialize")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub response_status: Option<String>,
    #[serde(default)]
    pub total_records: Option<i64>,
    #[serde(default)]
    pub record: Option<Record>,

    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    /// Defaults to `"au"` when absent; an explicit `null` stays `None`.
    #[serde(default = "default_country")]
    pub country: Option<String>,
    #[serde(default = "default_geocode_approved")]
    pub geocode_approved: Option<bool>,
    #[serde(default, deserialize_with = "lenient_datetime::option::deserialize")]
    pub geocode_processed_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub geocode_by: Option<String>,
    #[serde(default)]
    pub geom: Option<Geom>,
    /// Opaque boundary geometry.
    #[serde(default)]
    pub boundary: Option<serde_json::Value>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl Location {
    /// `(lat, lng)` when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.lat?, self.lng?))
    }
}

fn default_country() -> Option<String> {
    Some("au".to_string())
}

fn default_geocode_approved() -> Option<bool> {
    Some(false)
}
