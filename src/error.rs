//! Unified SDK error types.

use crate::domain::stats::history::MaterializeError;
use crate::shared::IntervalParseError;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("Interval error: {0}")]
    Interval(#[from] IntervalParseError),

    #[error("Materialize error: {0}")]
    Materialize(#[from] MaterializeError),

    #[error("Missing field `{field}` on series {series}")]
    MissingField { field: &'static str, series: String },
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Any non-2xx response. No retry, no partial result.
    #[error("Error from API: {status} ({url})")]
    Status { status: u16, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failure reported by a custom [`Transport`](crate::http::Transport).
    #[error("Transport error: {0}")]
    Transport(String),
}

impl HttpError {
    /// The HTTP status for [`HttpError::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A decoded response does not have the expected shape.
#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("{context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{context}: expected {expected}, got {found}")]
    UnexpectedType {
        context: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("series {series}: {source}")]
    InvalidInterval {
        series: String,
        #[source]
        source: IntervalParseError,
    },
}
