//! Wire types for stats dataset responses (REST).

use super::{IntervalDescriptor, PeriodDescriptor};
use crate::domain::network::NetworkRef;
use crate::shared::serde_util::lenient_datetime;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Raw `{start, last, interval, data}` bundle. `interval` is still a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(deserialize_with = "lenient_datetime::deserialize")]
    pub start: DateTime<FixedOffset>,
    #[serde(deserialize_with = "lenient_datetime::deserialize")]
    pub last: DateTime<FixedOffset>,
    pub interval: String,
    pub data: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeriesResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub series_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub network: Option<NetworkRef>,
    pub data_type: String,
    pub units: String,
    #[serde(default)]
    pub fuel_tech: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub interval: Option<IntervalDescriptor>,
    #[serde(default)]
    pub period: Option<PeriodDescriptor>,
    pub history: HistoryResponse,
    #[serde(default)]
    pub forecast: Option<HistoryResponse>,
    #[serde(default)]
    pub x_capacity_at_present: Option<f64>,
}

/// Top-level stats response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetResponse {
    #[serde(default, rename = "type")]
    pub dataset_type: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime::option::deserialize")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub feature_flags: Option<Vec<String>>,
    #[serde(default)]
    pub messages: Option<Vec<String>>,
    pub data: Vec<DataSeriesResponse>,
}
