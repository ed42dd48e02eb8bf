//! # OpenNEM SDK
//!
//! A Rust client for the OpenNEM Australian energy-market API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Intervals, domain models, dataset filtering and timestamp
//!    materialization (no I/O)
//! 2. **HTTP API**: `OpennemHttp` over a pluggable blocking `Transport`
//! 3. **High-Level Client**: `OpennemClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use opennem::prelude::*;
//!
//! let client = OpennemClient::builder()
//!     .environment(Environment::Production)
//!     .build()?;
//!
//! let dataset = client.stats().power_by_fueltech("NEM", "NSW1")?;
//! for series in dataset.filter_by_type(StatType::Power).iter() {
//!     let points = series.history.values()?;
//!     println!("{}: {} points", series.display_id(), points.len());
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared types: intervals and serde helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// API environments and base URLs.
pub mod environment;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client and transport seam.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `OpennemClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Coded, Interval, IntervalKind, IntervalParseError, IntervalUnit};

    // Domain types: reference data
    pub use crate::domain::facility::{Facility, FacilityStatus};
    pub use crate::domain::location::{Geom, Location};
    pub use crate::domain::network::{Fueltech, Network, NetworkRecord, NetworkRef, NetworkRegion};
    pub use crate::domain::station::Station;

    // Domain types: stats
    pub use crate::domain::stats::{
        materialize, materialize_with, DataSeries, Dataset, DatasetMeta, HistorySeries,
        IntervalDescriptor, MaterializeError, MaterializeOptions, PeriodDescriptor, StatType,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError, ShapeError};

    // Environment
    pub use crate::environment::Environment;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        FacilitiesClient, LocationsClient, NetworksClient, OpennemClient, OpennemClientBuilder,
        StationsClient, StatsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{RawResponse, Transport};
}
