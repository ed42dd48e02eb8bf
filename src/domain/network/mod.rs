//! Network domain: networks, regions, fuel technologies.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::{Coded, Interval, IntervalParseError};
use serde::{Deserialize, Serialize};

/// A region within a network (e.g. `NSW1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRegion {
    pub code: String,
    /// Network region timezone.
    #[serde(default)]
    pub timezone: Option<String>,
}

/// An electricity network (e.g. `NEM`, `WEM`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub code: String,
    pub country: String,
    pub label: String,
    #[serde(default)]
    pub regions: Option<Vec<NetworkRegion>>,
    /// Network timezone.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Size of network interval in minutes.
    pub interval_size: u32,
}

impl Network {
    /// The dispatch interval as an [`Interval`].
    pub fn interval(&self) -> Result<Interval, IntervalParseError> {
        Interval::minutes(self.interval_size)
    }

    pub fn region(&self, code: &str) -> Option<&NetworkRegion> {
        self.regions.as_ref()?.iter().find(|r| r.code == code)
    }
}

/// A fuel technology (e.g. `black_coal`, `solar_utility`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fueltech {
    pub code: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub renewable: Option<bool>,
}

impl Coded for Fueltech {
    fn code(&self) -> &str {
        &self.code
    }
}

/// A bare network reference as nested in facility records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRecord {
    pub code: String,
}

impl Coded for NetworkRecord {
    fn code(&self) -> &str {
        &self.code
    }
}

/// Network reference on a data series: either a bare code or a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NetworkRef {
    Code(String),
    Record(NetworkRecord),
}

impl Coded for NetworkRef {
    fn code(&self) -> &str {
        match self {
            NetworkRef::Code(code) => code,
            NetworkRef::Record(record) => &record.code,
        }
    }
}

impl From<&str> for NetworkRef {
    fn from(code: &str) -> Self {
        NetworkRef::Code(code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_network_decode() {
        let network: Network = serde_json::from_value(json!({
            "code": "NEM",
            "country": "au",
            "label": "NEM",
            "regions": [{"code": "NSW1", "timezone": "Australia/Sydney"}, {"code": "QLD1"}],
            "timezone": "Australia/Brisbane",
            "interval_size": 5
        }))
        .unwrap();
        assert_eq!(network.interval().unwrap().to_string(), "5m");
        assert_eq!(
            network.region("NSW1").unwrap().timezone.as_deref(),
            Some("Australia/Sydney")
        );
        assert!(network.region("nsw1").is_none());
    }

    #[test]
    fn test_network_requires_interval_size() {
        let result = serde_json::from_value::<Network>(json!({
            "code": "WEM",
            "country": "au",
            "label": "WEM"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_network_ref_accepts_code_or_record() {
        let bare: NetworkRef = serde_json::from_value(json!("NEM")).unwrap();
        let record: NetworkRef = serde_json::from_value(json!({"code": "WEM"})).unwrap();
        assert_eq!(bare.code(), "NEM");
        assert_eq!(record.code(), "WEM");
    }
}
