//! Station domain: stations and their facilities.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::domain::facility::Facility;
use crate::shared::serde_util::lenient_datetime;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize, Serializer};

/// A power station. Serializes its facilities as a list of ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    pub location_id: i64,
    #[serde(serialize_with = "serialize_facility_ids")]
    pub facilities: Vec<Facility>,
    #[serde(default = "default_approved")]
    pub approved: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub wikipedia_link: Option<String>,
    #[serde(default)]
    pub wikidata_id: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime::option::deserialize")]
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl Station {
    pub fn facility_ids(&self) -> Vec<i64> {
        self.facilities.iter().map(|f| f.id).collect()
    }

    /// Registered capacity summed over facilities that report one.
    pub fn capacity_registered(&self) -> f64 {
        self.facilities
            .iter()
            .filter_map(|f| f.capacity_registered)
            .sum()
    }
}

fn default_approved() -> Option<bool> {
    Some(false)
}

fn serialize_facility_ids<S>(facilities: &[Facility], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(facilities.iter().map(|f| f.id))
}
