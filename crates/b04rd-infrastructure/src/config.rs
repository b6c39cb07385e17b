//! Client configuration.
//!
//! Read from environment variables with sensible defaults, so the same
//! binary works against a local backend and a deployed one.

use std::env;
use std::time::Duration;

/// Default backend base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Default base URL of the external character API.
pub const DEFAULT_CHARACTER_API_URL: &str = "https://rickandmortyapi.com/api";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the backend and character API clients.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL, no trailing slash
    pub base_url: String,
    /// Character API base URL, no trailing slash
    pub character_api_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            character_api_url: DEFAULT_CHARACTER_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the environment.
    ///
    /// Recognized variables:
    /// - `B04RD_API_URL` - backend base URL
    /// - `B04RD_CHARACTER_API_URL` - character API base URL
    /// - `B04RD_API_TIMEOUT_SECS` - per-request timeout in seconds
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let timeout = env::var("B04RD_API_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            base_url: env::var("B04RD_API_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            character_api_url: env::var("B04RD_CHARACTER_API_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.character_api_url),
            timeout,
        }
    }

    /// Overrides the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
