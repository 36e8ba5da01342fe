//! Huellitas web host.
//!
//! Server-renders the Leptos app from the `client` crate and serves the
//! hydration bundle under `/pkg`. All data comes from the external REST
//! backend, which the browser calls directly.

mod config;
mod routes;

use std::net::SocketAddr;

use leptos::prelude::get_configuration;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(site_dir) = &config.site_dir {
        leptos_options.site_root = site_dir.to_string_lossy().as_ref().into();
    }
    let addr = config
        .port
        .map_or(leptos_options.site_addr, |port| SocketAddr::from(([0, 0, 0, 0], port)));

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "huellitas listening");
    axum::serve(listener, app).await?;
    Ok(())
}
