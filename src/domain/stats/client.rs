//! Stats sub-client: fetch datasets.

use crate::client::OpennemClient;
use crate::domain::stats::Dataset;
use crate::error::SdkError;

/// Sub-client for stats datasets.
pub struct Stats<'a> {
    pub(crate) client: &'a OpennemClient,
}

impl<'a> Stats<'a> {
    /// Recent power generation per fueltech for one network region.
    pub fn power_by_fueltech(&self, network: &str, region: &str) -> Result<Dataset, SdkError> {
        let body = self.client.http.get_power_by_fueltech(network, region)?;
        Ok(Dataset::from_json(body)?)
    }

    /// Recent emission factors for a network. The code is trimmed and
    /// upper-cased before use.
    pub fn emission_factors(&self, network: &str) -> Result<Dataset, SdkError> {
        let body = self
            .client
            .http
            .get_emission_factors(&normalize_network(network))?;
        Ok(Dataset::from_json(body)?)
    }

    /// Recent prices for a network. The code is trimmed and upper-cased
    /// before use.
    pub fn price(&self, network: &str) -> Result<Dataset, SdkError> {
        let body = self.client.http.get_price(&normalize_network(network))?;
        Ok(Dataset::from_json(body)?)
    }
}

fn normalize_network(code: &str) -> String {
    code.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_network() {
        assert_eq!(normalize_network(" nem "), "NEM");
        assert_eq!(normalize_network("wem\n"), "WEM");
        assert_eq!(normalize_network("NEM"), "NEM");
    }
}
