//! Low-level HTTP client: `OpennemHttp`.
//!
//! One method per API endpoint. Returns wire types or raw JSON (conversion to
//! domain types happens in the sub-clients). Internal to the SDK: the
//! high-level client wraps this.

use crate::domain::facility::Facility;
use crate::domain::location::Location;
use crate::domain::network::{Fueltech, Network, NetworkRegion};
use crate::domain::station::wire::StationsResponse;
use crate::domain::station::Station;
use crate::error::{HttpError, SdkError, ShapeError};
use crate::http::transport::Transport;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Low-level HTTP client for the OpenNEM REST API.
#[derive(Clone)]
pub struct OpennemHttp {
    base_url: Url,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for OpennemHttp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpennemHttp")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl OpennemHttp {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Result<Self, HttpError> {
        let parsed =
            Url::parse(base_url).map_err(|e| HttpError::InvalidUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(HttpError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: parsed,
            transport,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint URL: the base URL with its path replaced by `segments`.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> String {
        let path = segments
            .iter()
            .map(|s| urlencoding::encode(s))
            .collect::<Vec<_>>()
            .join("/");
        let mut url = self.base_url.clone();
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);
        url.to_string()
    }

    // ── Networks ─────────────────────────────────────────────────────────

    pub fn get_networks(&self) -> Result<Vec<Network>, SdkError> {
        self.get("networks", &self.endpoint(&["networks"]), &[])
    }

    pub fn get_network_regions(&self, network_code: &str) -> Result<Vec<NetworkRegion>, SdkError> {
        self.get(
            "network regions",
            &self.endpoint(&["networks", "regions"]),
            &[("network_code", network_code.to_string())],
        )
    }

    pub fn get_fueltechs(&self) -> Result<Vec<Fueltech>, SdkError> {
        self.get("fueltechs", &self.endpoint(&["fueltechs"]), &[])
    }

    // ── Facilities ───────────────────────────────────────────────────────

    pub fn get_facilities(&self) -> Result<Vec<Facility>, SdkError> {
        self.get("facilities", &self.endpoint(&["facility"]), &[])
    }

    pub fn get_facility(&self, code: &str) -> Result<Facility, SdkError> {
        self.get("facility", &self.endpoint(&["facility", code]), &[])
    }

    // ── Locations ────────────────────────────────────────────────────────

    pub fn get_locations(&self) -> Result<Vec<Location>, SdkError> {
        self.get("locations", &self.endpoint(&["locations"]), &[])
    }

    pub fn get_location(&self, id: i64) -> Result<Location, SdkError> {
        let id = id.to_string();
        self.get("location", &self.endpoint(&["location", &id]), &[])
    }

    // ── Stations ─────────────────────────────────────────────────────────

    pub fn get_stations(&self) -> Result<StationsResponse, SdkError> {
        self.get("stations", &self.endpoint(&["station"]), &[])
    }

    pub fn get_station(
        &self,
        network: &str,
        code: &str,
        only_generators: bool,
    ) -> Result<Station, SdkError> {
        self.get(
            "station",
            &self.endpoint(&["station", network, code]),
            &[("only_generators", only_generators.to_string())],
        )
    }

    // ── Stats ────────────────────────────────────────────────────────────

    pub fn get_power_by_fueltech(&self, network: &str, region: &str) -> Result<Value, SdkError> {
        let url = self.endpoint(&["stats", "power", "network", "fueltech", network, region]);
        self.get_json(&url, &[])
    }

    pub fn get_emission_factors(&self, network: &str) -> Result<Value, SdkError> {
        let url = self.endpoint(&["stats", "emissionfactor", "network", network]);
        self.get_json(&url, &[])
    }

    pub fn get_price(&self, network: &str) -> Result<Value, SdkError> {
        let url = self.endpoint(&["stats", "price", network]);
        self.get_json(&url, &[])
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    fn get<T: DeserializeOwned>(
        &self,
        context: &'static str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, SdkError> {
        let value = self.get_json(url, query)?;
        serde_json::from_value(value).map_err(|source| ShapeError::Decode { context, source }.into())
    }

    fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, SdkError> {
        let resp = self.transport.get(url, query)?;
        tracing::debug!("GET [{}] {}", resp.status, resp.url);

        if !resp.is_success() {
            return Err(HttpError::Status {
                status: resp.status,
                url: resp.url,
            }
            .into());
        }

        serde_json::from_str(&resp.body).map_err(|source| {
            ShapeError::Decode {
                context: "response body",
                source,
            }
            .into()
        })
    }
}
