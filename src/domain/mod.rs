//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types as the API returns them
//! - `wire.rs`: Raw serde structs where a response differs from the domain type
//! - `convert.rs`: `TryFrom` conversions with validation
//! - `client.rs`: Sub-client with HTTP methods

pub mod facility;
pub mod location;
pub mod network;
pub mod station;
pub mod stats;
