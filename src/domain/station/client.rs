//! Stations sub-client.

use crate::client::OpennemClient;
use crate::domain::station::Station;
use crate::error::SdkError;

/// Sub-client for stations and their facilities.
pub struct Stations<'a> {
    pub(crate) client: &'a OpennemClient,
}

impl<'a> Stations<'a> {
    /// All stations. The response envelope is unwrapped.
    pub fn list(&self) -> Result<Vec<Station>, SdkError> {
        Ok(self.client.http.get_stations()?.data)
    }

    /// One station by network and station code.
    ///
    /// With `only_generators` set, the server leaves out loads and other
    /// non-generating units.
    pub fn get(
        &self,
        network: &str,
        code: &str,
        only_generators: bool,
    ) -> Result<Station, SdkError> {
        self.client.http.get_station(network, code, only_generators)
    }
}
