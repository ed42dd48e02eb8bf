//! Facilities sub-client.

use crate::client::OpennemClient;
use crate::domain::facility::Facility;
use crate::error::SdkError;

pub struct Facilities<'a> {
    pub(crate) client: &'a OpennemClient,
}

impl<'a> Facilities<'a> {
    pub fn list(&self) -> Result<Vec<Facility>, SdkError> {
        self.client.http.get_facilities()
    }

    /// Get a facility by its unit code, e.g. `TESLA_GERALDTON_G1`.
    pub fn get(&self, code: &str) -> Result<Facility, SdkError> {
        self.client.http.get_facility(code)
    }
}
