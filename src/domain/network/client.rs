//! Networks sub-client: networks, regions, fueltechs.

use crate::client::OpennemClient;
use crate::domain::network::{Fueltech, Network, NetworkRegion};
use crate::error::SdkError;

/// Sub-client for network reference data.
pub struct Networks<'a> {
    pub(crate) client: &'a OpennemClient,
}

impl<'a> Networks<'a> {
    pub fn list(&self) -> Result<Vec<Network>, SdkError> {
        self.client.http.get_networks()
    }

    /// Regions of one network, e.g. `NEM` → `NSW1`, `QLD1`, ...
    pub fn regions(&self, network_code: &str) -> Result<Vec<NetworkRegion>, SdkError> {
        self.client.http.get_network_regions(network_code)
    }

    pub fn fueltechs(&self) -> Result<Vec<Fueltech>, SdkError> {
        self.client.http.get_fueltechs()
    }
}
