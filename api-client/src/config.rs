//! Client configuration from environment variables.
//!
//! Natively the values come from the process environment; browser builds bake
//! them in at compile time through [`ClientConfig::from_build_env`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

pub const API_URL_VAR: &str = "HUELLITAS_API_URL";
pub const MAPBOX_TOKEN_VAR: &str = "HUELLITAS_MAPBOX_TOKEN";
pub const REQUEST_TIMEOUT_VAR: &str = "HUELLITAS_REQUEST_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("API base URL must use http or https, got `{0}`")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend root without trailing slash, e.g. `https://api.example.org/api`.
    pub api_base_url: String,
    /// Public Mapbox token; geocoding is disabled when absent.
    pub mapbox_token: Option<String>,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            mapbox_token: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Build a config for `base_url`, validating it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the URL does not parse or is not http(s).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self { api_base_url: normalize_base_url(base_url)?, ..Self::default() })
    }

    /// Read configuration from the process environment.
    ///
    /// Optional:
    /// - `HUELLITAS_API_URL`: default `http://localhost:4000/api`
    /// - `HUELLITAS_MAPBOX_TOKEN`: geocoding disabled when absent or blank
    /// - `HUELLITAS_REQUEST_TIMEOUT_SECS`: default 15
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the base URL is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(API_URL_VAR).ok().as_deref(),
            std::env::var(MAPBOX_TOKEN_VAR).ok().as_deref(),
            std::env::var(REQUEST_TIMEOUT_VAR).ok().as_deref(),
        )
    }

    /// Read configuration captured by the compiler (browser builds).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the baked-in base URL is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("HUELLITAS_API_URL"),
            option_env!("HUELLITAS_MAPBOX_TOKEN"),
            option_env!("HUELLITAS_REQUEST_TIMEOUT_SECS"),
        )
    }

    fn from_values(
        base_url: Option<&str>,
        mapbox_token: Option<&str>,
        timeout_secs: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = normalize_base_url(base_url.unwrap_or(DEFAULT_API_BASE_URL))?;
        let mapbox_token = mapbox_token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_owned);
        let secs = timeout_secs
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        Ok(Self { api_base_url, mapbox_token, request_timeout: Duration::from_secs(secs) })
    }

    #[must_use]
    pub fn with_mapbox_token(mut self, token: impl Into<String>) -> Self {
        self.mapbox_token = Some(token.into());
        self
    }

    /// Replace the base URL, validating it.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::new`].
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.api_base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let parsed = url::Url::parse(trimmed)
        .map_err(|e| ConfigError::InvalidBaseUrl { url: trimmed.to_owned(), reason: e.to_string() })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_owned()));
    }
    Ok(trimmed.trim_end_matches('/').to_owned())
}
