//! API environments and their base URLs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Production REST API base URL.
pub const PRODUCTION_API_URL: &str = "https://api.opennem.org.au";

/// Staging REST API base URL.
pub const STAGING_API_URL: &str = "https://api.staging.opennem.org.au";

/// A locally running API.
pub const LOCAL_API_URL: &str = "http://localhost:8000";

/// Which deployment of the API a client talks to.
///
/// Passed explicitly to the client builder; nothing is read from the process
/// environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Staging,
    Local,
}

impl Environment {
    pub fn api_url(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_API_URL,
            Self::Staging => STAGING_API_URL,
            Self::Local => LOCAL_API_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Staging => "staging",
            Self::Local => "local",
        }
    }

    /// Accepts the usual short names (`prod`, `dev`, ...), case-insensitive.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "staging" | "stage" => Some(Self::Staging),
            "local" | "development" | "dev" => Some(Self::Local),
            _ => None,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_production() {
        assert_eq!(Environment::default(), Environment::Production);
        assert_eq!(Environment::default().api_url(), PRODUCTION_API_URL);
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(Environment::from_str("PROD"), Some(Environment::Production));
        assert_eq!(Environment::from_str(" staging "), Some(Environment::Staging));
        assert_eq!(Environment::from_str("dev"), Some(Environment::Local));
        assert_eq!(Environment::from_str("qa"), None);
    }
}
