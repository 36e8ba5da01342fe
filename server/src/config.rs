//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: overrides the Leptos `site-addr` and binds on all interfaces
//! - `SITE_DIR`: overrides the Leptos `site-root` (where `pkg/` lives)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const PORT_VAR: &str = "PORT";
pub const SITE_DIR_VAR: &str = "SITE_DIR";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {PORT_VAR} value: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: Option<u16>,
    pub site_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = read(PORT_VAR)
            .map(|raw| raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw)))
            .transpose()?;
        let site_dir = read(SITE_DIR_VAR).map(PathBuf::from);

        Ok(Self { port, site_dir })
    }
}
