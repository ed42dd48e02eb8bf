//! High-level client: `OpennemClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::domain::facility::client::Facilities;
use crate::domain::location::client::Locations;
use crate::domain::network::client::Networks;
use crate::domain::station::client::Stations;
use crate::domain::stats::client::Stats;
use crate::environment::Environment;
use crate::error::SdkError;
use crate::http::{OpennemHttp, ReqwestTransport, Transport};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::facility::client::Facilities as FacilitiesClient;
pub use crate::domain::location::client::Locations as LocationsClient;
pub use crate::domain::network::client::Networks as NetworksClient;
pub use crate::domain::station::client::Stations as StationsClient;
pub use crate::domain::stats::client::Stats as StatsClient;

/// Request timeout used when the builder is not given one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The primary entry point for the OpenNEM SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.networks()`, `client.stats()`, etc. Every call is one blocking GET.
#[derive(Debug, Clone)]
pub struct OpennemClient {
    pub(crate) http: OpennemHttp,
}

impl OpennemClient {
    pub fn builder() -> OpennemClientBuilder {
        OpennemClientBuilder::default()
    }

    /// Base URL the endpoint paths are resolved against.
    pub fn base_url(&self) -> &str {
        self.http.base_url().as_str()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn networks(&self) -> Networks<'_> {
        Networks { client: self }
    }

    pub fn facilities(&self) -> Facilities<'_> {
        Facilities { client: self }
    }

    pub fn locations(&self) -> Locations<'_> {
        Locations { client: self }
    }

    pub fn stations(&self) -> Stations<'_> {
        Stations { client: self }
    }

    pub fn stats(&self) -> Stats<'_> {
        Stats { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct OpennemClientBuilder {
    environment: Environment,
    base_url: Option<String>,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for OpennemClientBuilder {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            transport: None,
        }
    }
}

impl OpennemClientBuilder {
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Overrides the environment's base URL.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Timeout for the default transport. Ignored with a custom transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn transport(self, transport: impl Transport + 'static) -> Self {
        self.shared_transport(Arc::new(transport))
    }

    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<OpennemClient, SdkError> {
        let base_url = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.api_url());

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.timeout)?),
        };

        tracing::debug!(environment = %self.environment, base_url, "building OpenNEM client");

        Ok(OpennemClient {
            http: OpennemHttp::new(base_url, transport)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;

    #[test]
    fn test_default_environment_is_production() {
        let client = OpennemClient::builder().build().unwrap();
        assert_eq!(client.base_url(), "https://api.opennem.org.au/");
    }

    #[test]
    fn test_environment_selects_base_url() {
        let client = OpennemClient::builder()
            .environment(Environment::Staging)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.staging.opennem.org.au/");
    }

    #[test]
    fn test_base_url_overrides_environment() {
        let client = OpennemClient::builder()
            .environment(Environment::Staging)
            .base_url("http://127.0.0.1:9000")
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn test_invalid_base_url_fails_build() {
        let err = OpennemClient::builder().base_url("::nope").build().unwrap_err();
        assert!(matches!(err, SdkError::Http(HttpError::InvalidUrl(_))));
    }
}
