//! Wire types for station responses (REST).

use super::Station;
use serde::{Deserialize, Serialize};

/// The station list endpoint wraps its records in `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationsResponse {
    pub data: Vec<Station>,
}
