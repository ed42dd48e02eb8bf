//! Locations sub-client.

use crate::client::OpennemClient;
use crate::domain::location::Location;
use crate::error::SdkError;

pub struct Locations<'a> {
    pub(crate) client: &'a OpennemClient,
}

impl<'a> Locations<'a> {
    pub fn list(&self) -> Result<Vec<Location>, SdkError> {
        self.client.http.get_locations()
    }

    pub fn get(&self, id: i64) -> Result<Location, SdkError> {
        self.client.http.get_location(id)
    }
}
