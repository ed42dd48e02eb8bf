//! Stats domain: datasets of time series, filtering, materialization.
//!
//! A [`Dataset`] owns a list of [`DataSeries`] behind `Arc`s. Filters never
//! mutate: each returns a new dataset with the same metadata and a narrower
//! list of the same series.
//!
//! ```rust,ignore
//! let ds = client.stats().power_by_fueltech("NEM", "NSW1")?;
//! let power = ds.filter_by_type(StatType::Power).filter_by_region("NSW1");
//! for series in power.iter() {
//!     for (ts, value) in series.history.values()? {
//!         println!("{ts} {value:?}");
//!     }
//! }
//! ```

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod history;
pub mod wire;

pub use history::{
    materialize, materialize_with, HistorySeries, MaterializeError, MaterializeOptions,
};

use crate::domain::network::NetworkRef;
use crate::error::{SdkError, ShapeError};
use crate::shared::serde_util::json_type_name;
use crate::shared::Coded;
use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// ─── StatType ────────────────────────────────────────────────────────────────

/// Known values of a series' `data_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatType {
    Power,
    Energy,
    Price,
    MarketValue,
    Emissions,
    EmissionFactor,
    Demand,
    Temperature,
    TemperatureMean,
    TemperatureMin,
    TemperatureMax,
}

impl StatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Energy => "energy",
            Self::Price => "price",
            Self::MarketValue => "market_value",
            Self::Emissions => "emissions",
            Self::EmissionFactor => "emission_factor",
            Self::Demand => "demand",
            Self::Temperature => "temperature",
            Self::TemperatureMean => "temperature_mean",
            Self::TemperatureMin => "temperature_min",
            Self::TemperatureMax => "temperature_max",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "power" => Some(Self::Power),
            "energy" => Some(Self::Energy),
            "price" => Some(Self::Price),
            "market_value" => Some(Self::MarketValue),
            "emissions" => Some(Self::Emissions),
            "emission_factor" => Some(Self::EmissionFactor),
            "demand" => Some(Self::Demand),
            "temperature" => Some(Self::Temperature),
            "temperature_mean" => Some(Self::TemperatureMean),
            "temperature_min" => Some(Self::TemperatureMin),
            "temperature_max" => Some(Self::TemperatureMax),
            _ => None,
        }
    }
}

impl AsRef<str> for StatType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Interval / period descriptors ───────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    #[serde(default)]
    pub interval: Option<i64>,
    #[serde(default)]
    pub interval_human: Option<String>,
    #[serde(default)]
    pub interval_sql: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriod {
    #[serde(default)]
    pub period: Option<i64>,
    #[serde(default)]
    pub period_human: Option<String>,
    #[serde(default)]
    pub period_sql: Option<String>,
}

/// Series-level interval: a bare token or a detailed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntervalDescriptor {
    Human(String),
    Detailed(TimeInterval),
}

/// Series-level period: a bare token or a detailed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PeriodDescriptor {
    Human(String),
    Detailed(TimePeriod),
}

// ─── DataSeries ──────────────────────────────────────────────────────────────

/// One named time series in a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub series_type: Option<String>,
    pub code: Option<String>,
    pub network: Option<NetworkRef>,
    pub data_type: String,
    pub units: String,
    pub fuel_tech: Option<String>,
    pub region: Option<String>,
    pub interval: Option<IntervalDescriptor>,
    pub period: Option<PeriodDescriptor>,
    pub history: HistorySeries,
    pub forecast: Option<HistorySeries>,
    pub x_capacity_at_present: Option<f64>,
}

impl DataSeries {
    pub fn stat_type(&self) -> Option<StatType> {
        StatType::from_str(&self.data_type)
    }

    pub fn network_code(&self) -> Option<&str> {
        self.network.as_ref().map(|n| n.code())
    }

    /// Calendar year of `history.start`, in the series' own offset.
    ///
    /// Suitable as the extractor for [`Dataset::filter_by_year`].
    pub fn history_start_year(&self) -> Option<i32> {
        Some(self.history.start.year())
    }

    /// Name used in errors and logs: id, then code, then `<unnamed>`.
    pub fn display_id(&self) -> &str {
        self.id
            .as_deref()
            .or(self.code.as_deref())
            .unwrap_or("<unnamed>")
    }
}

// ─── Dataset ─────────────────────────────────────────────────────────────────

/// Response-level metadata shared by every series in a dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetMeta {
    #[serde(rename = "type")]
    pub dataset_type: Option<String>,
    pub version: Option<String>,
    pub network: Option<String>,
    pub code: Option<String>,
    pub region: Option<String>,
    /// Truncated to whole seconds.
    pub created_at: Option<DateTime<FixedOffset>>,
    pub feature_flags: Option<Vec<String>>,
    pub messages: Option<Vec<String>>,
}

/// A collection of series sharing response metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    #[serde(flatten)]
    meta: Arc<DatasetMeta>,
    data: Vec<Arc<DataSeries>>,
}

impl Dataset {
    pub fn new(meta: DatasetMeta, data: Vec<DataSeries>) -> Self {
        Self {
            meta: Arc::new(meta),
            data: data.into_iter().map(Arc::new).collect(),
        }
    }

    /// Decode a JSON response body. The body must be an object.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ShapeError> {
        if !value.is_object() {
            return Err(ShapeError::UnexpectedType {
                context: "dataset",
                expected: "object",
                found: json_type_name(&value),
            });
        }
        let response: wire::DatasetResponse =
            serde_json::from_value(value).map_err(|source| ShapeError::Decode {
                context: "dataset",
                source,
            })?;
        response.try_into()
    }

    /// Same metadata, different series list. Series are shared, not copied.
    pub fn with_series(&self, data: Vec<Arc<DataSeries>>) -> Self {
        Self {
            meta: Arc::clone(&self.meta),
            data,
        }
    }

    pub fn meta(&self) -> &DatasetMeta {
        &self.meta
    }

    pub fn series(&self) -> &[Arc<DataSeries>] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataSeries> {
        self.data.iter().map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// First series with the given id.
    pub fn get_by_id(&self, id: &str) -> Option<&DataSeries> {
        self.iter().find(|s| s.id.as_deref() == Some(id))
    }

    // ── Filters ──────────────────────────────────────────────────────────

    /// Keep series matching `predicate`, preserving order.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&DataSeries) -> bool,
    {
        let data: Vec<_> = self
            .data
            .iter()
            .filter(|s| predicate(s))
            .cloned()
            .collect();
        tracing::trace!(before = self.data.len(), after = data.len(), "dataset filter");
        self.with_series(data)
    }

    pub fn filter_by_type(&self, kind: impl AsRef<str>) -> Self {
        let kind = kind.as_ref();
        self.filter(|s| s.data_type == kind)
    }

    /// Keep series on network `code`.
    ///
    /// Every series must carry a network reference; the first one that does
    /// not fails the call with [`SdkError::MissingField`].
    pub fn filter_by_network(&self, code: &str) -> Result<Self, SdkError> {
        let mut data = Vec::new();
        for series in &self.data {
            let network = series
                .network
                .as_ref()
                .ok_or_else(|| SdkError::MissingField {
                    field: "network",
                    series: series.display_id().to_string(),
                })?;
            if network.code() == code {
                data.push(Arc::clone(series));
            }
        }
        Ok(self.with_series(data))
    }

    /// Exact, case-sensitive match on `region`.
    pub fn filter_by_region(&self, code: &str) -> Self {
        self.filter(|s| s.region.as_deref() == Some(code))
    }

    /// Keep series whose year, as given by `year_of`, equals `year`.
    /// Series for which `year_of` returns `None` are dropped.
    pub fn filter_by_year<F>(&self, year: i32, year_of: F) -> Self
    where
        F: Fn(&DataSeries) -> Option<i32>,
    {
        self.filter(|s| year_of(s) == Some(year))
    }

    pub fn filter_by_years<F>(&self, years: &[i32], year_of: F) -> Self
    where
        F: Fn(&DataSeries) -> Option<i32>,
    {
        self.filter(|s| year_of(s).is_some_and(|y| years.contains(&y)))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;

    pub(crate) fn history(
        start_year: i32,
        interval: &str,
        data: Vec<Option<f64>>,
    ) -> HistorySeries {
        let start = NaiveDate::from_ymd_opt(start_year, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .fixed_offset();
        HistorySeries {
            start,
            last: start,
            interval: interval.parse().unwrap(),
            data,
        }
    }

    pub(crate) fn series(id: &str, data_type: &str) -> DataSeries {
        DataSeries {
            id: Some(id.to_string()),
            series_type: Some(data_type.to_string()),
            code: None,
            network: Some(NetworkRef::from("NEM")),
            data_type: data_type.to_string(),
            units: "MW".to_string(),
            fuel_tech: None,
            region: Some("NSW1".to_string()),
            interval: None,
            period: None,
            history: history(2020, "30m", vec![Some(1.0), Some(2.0)]),
            forecast: None,
            x_capacity_at_present: None,
        }
    }

    fn two_series() -> Dataset {
        Dataset::new(
            DatasetMeta {
                version: Some("v3".to_string()),
                ..Default::default()
            },
            vec![series("A", "power"), series("B", "price")],
        )
    }

    fn ids(ds: &Dataset) -> Vec<&str> {
        ds.iter().map(|s| s.id.as_deref().unwrap()).collect()
    }

    #[test]
    fn test_filter_by_type_power() {
        let ds = two_series();
        let power = ds.filter_by_type("power");
        assert_eq!(ids(&power), vec!["A"]);
        assert_eq!(power.meta(), ds.meta());
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn test_filter_by_type_accepts_stat_type() {
        let ds = two_series();
        assert_eq!(ids(&ds.filter_by_type(StatType::Price)), vec!["B"]);
        assert!(ds.filter_by_type(StatType::Emissions).is_empty());
    }

    #[test]
    fn test_filter_by_type_idempotent() {
        let ds = two_series();
        let once = ds.filter_by_type("power");
        let twice = once.filter_by_type("power");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_shares_series() {
        let ds = two_series();
        let power = ds.filter_by_type("power");
        assert!(Arc::ptr_eq(&ds.series()[0], &power.series()[0]));
    }

    #[test]
    fn test_filter_by_network() {
        let mut wem = series("C", "power");
        wem.network = Some(NetworkRef::from("WEM"));
        let ds = Dataset::new(DatasetMeta::default(), vec![series("A", "power"), wem]);
        assert_eq!(ids(&ds.filter_by_network("WEM").unwrap()), vec!["C"]);
        assert!(ds.filter_by_network("nem").unwrap().is_empty());
    }

    #[test]
    fn test_filter_by_network_missing_reference_fails() {
        let mut orphan = series("C", "power");
        orphan.network = None;
        let ds = Dataset::new(DatasetMeta::default(), vec![series("A", "power"), orphan]);
        let err = ds.filter_by_network("NEM").unwrap_err();
        match err {
            SdkError::MissingField { field, series } => {
                assert_eq!(field, "network");
                assert_eq!(series, "C");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_filter_by_region_exact() {
        let mut vic = series("V", "power");
        vic.region = Some("VIC1".to_string());
        let mut none = series("N", "power");
        none.region = None;
        let ds = Dataset::new(DatasetMeta::default(), vec![series("A", "power"), vic, none]);
        assert_eq!(ids(&ds.filter_by_region("VIC1")), vec!["V"]);
        assert!(ds.filter_by_region("vic1").is_empty());
        assert!(ds.filter_by_region(" VIC1").is_empty());
    }

    #[test]
    fn test_filter_by_year_with_extractor() {
        let mut old = series("old", "energy");
        old.history = history(2019, "1d", vec![Some(1.0)]);
        let ds = Dataset::new(DatasetMeta::default(), vec![series("A", "power"), old]);

        let y2019 = ds.filter_by_year(2019, DataSeries::history_start_year);
        assert_eq!(ids(&y2019), vec!["old"]);

        let both = ds.filter_by_years(&[2019, 2020], DataSeries::history_start_year);
        assert_eq!(ids(&both), vec!["A", "old"]);

        let none = ds.filter_by_year(2020, |_| None);
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_by_years_empty() {
        let ds = two_series();
        assert!(ds
            .filter_by_years(&[], DataSeries::history_start_year)
            .is_empty());
    }

    #[test]
    fn test_filters_chain_and_preserve_order() {
        let mut b = series("B", "power");
        b.region = Some("QLD1".to_string());
        let ds = Dataset::new(
            DatasetMeta::default(),
            vec![series("C", "power"), b, series("A", "power"), series("D", "price")],
        );
        let chained = ds
            .filter_by_type("power")
            .filter_by_region("NSW1")
            .filter_by_network("NEM")
            .unwrap();
        assert_eq!(ids(&chained), vec!["C", "A"]);
    }

    #[test]
    fn test_get_by_id() {
        let ds = Dataset::new(
            DatasetMeta::default(),
            vec![series("A", "power"), series("A", "price")],
        );
        assert_eq!(ds.get_by_id("A").unwrap().data_type, "power");
        assert!(ds.get_by_id("Z").is_none());
    }

    #[test]
    fn test_display_id_fallbacks() {
        let mut s = series("A", "power");
        s.id = None;
        assert_eq!(s.display_id(), "<unnamed>");
        s.code = Some("nsw1.power".to_string());
        assert_eq!(s.display_id(), "nsw1.power");
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Dataset::from_json(serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::UnexpectedType {
                found: "array",
                ..
            }
        ));
    }

    #[test]
    fn test_dataset_serializes_flat_metadata() {
        let out = serde_json::to_value(two_series()).unwrap();
        assert_eq!(out["version"], "v3");
        assert_eq!(out["data"].as_array().unwrap().len(), 2);
        assert_eq!(out["data"][0]["history"]["interval"], "30m");
    }
}
