//! Application configuration loaded from environment variables.
//!
//! The backend base URL is the only required setting; everything else has
//! a sensible default for local development.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the training backend API, with a trailing slash.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub http_timeout_secs: u64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api/".to_string(),
            http_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file if one is present in the working directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("TRAINER_API_BASE_URL")
            .map_err(|_| ConfigError::Missing("TRAINER_API_BASE_URL"))?;

        Ok(Self {
            api_base_url: normalize_base_url(api_base_url),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
        })
    }
}

/// Ensure the base URL ends with a single trailing slash so relative
/// endpoint paths join cleanly.
fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url.push('/');
    url
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
