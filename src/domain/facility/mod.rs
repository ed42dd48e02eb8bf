//! Facility domain: generating and load units.
//!
//! Facilities decode with their nested network, fuel technology and status
//! records, and serialize with those collapsed to codes.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::network::{Fueltech, NetworkRecord};
use crate::shared::serde_util::{code_only, lenient_datetime};
use crate::shared::Coded;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Operating status of a facility (e.g. `operating`, `retired`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityStatus {
    pub code: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl Coded for FacilityStatus {
    fn code(&self) -> &str {
        &self.code
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: i64,
    #[serde(serialize_with = "code_only::serialize")]
    pub network: NetworkRecord,
    #[serde(default, serialize_with = "code_only::option::serialize")]
    pub fueltech: Option<Fueltech>,
    #[serde(default, serialize_with = "code_only::option::serialize")]
    pub status: Option<FacilityStatus>,
    #[serde(default)]
    pub station_id: Option<i64>,
    #[serde(default)]
    pub code: Option<String>,
    pub dispatch_type: String,
    #[serde(default)]
    pub capacity_registered: Option<f64>,
    #[serde(default, deserialize_with = "lenient_datetime::option::deserialize")]
    pub registered: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "lenient_datetime::option::deserialize")]
    pub deregistered: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub network_region: Option<String>,
    #[serde(default)]
    pub unit_id: Option<i64>,
    #[serde(default)]
    pub unit_number: Option<i64>,
    #[serde(default)]
    pub unit_alias: Option<String>,
    #[serde(default)]
    pub unit_capacity: Option<f64>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime::option::deserialize")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub approved: Option<bool>,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime::option::deserialize")]
    pub approved_at: Option<DateTime<FixedOffset>>,
}

impl Facility {
    pub fn fueltech_code(&self) -> Option<&str> {
        self.fueltech.as_ref().map(|f| f.code())
    }

    pub fn status_code(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.code())
    }

    /// Whether the facility has a deregistration date.
    pub fn is_deregistered(&self) -> bool {
        self.deregistered.is_some()
    }
}
