//! Browser implementations of the `api-client` seams.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, aborted through an
//! `AbortController` once the configured timeout elapses, and persistence in
//! `localStorage`.
//! Server-side (SSR): a stand-in transport that answers every call with
//! [`ApiError::Unavailable`] and an in-memory store, since the backend is only
//! ever contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! A malformed build-time configuration is logged and replaced by defaults so
//! hydration still completes; request failures surface as typed `ApiError`s.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use api_client::storage::KeyValueStore;
use api_client::transport::Transport;
use api_client::{ApiClient, ClientConfig, SessionController};
#[cfg(any(test, not(feature = "hydrate")))]
use api_client::{
    ApiError,
    transport::{HttpRequest, HttpResponse},
};

#[cfg(feature = "hydrate")]
pub use browser::GlooTransport;

/// Configuration baked in at build time, falling back to defaults.
pub fn client_config() -> ClientConfig {
    ClientConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::warn!("invalid client configuration, using defaults: {e}");
        ClientConfig::default()
    })
}

/// Build the session controller for this environment.
pub fn build_session(config: &ClientConfig) -> Arc<SessionController> {
    SessionController::new(ApiClient::new(config, default_transport(), default_store()))
}

#[cfg(feature = "hydrate")]
fn default_transport() -> Arc<dyn Transport> {
    Arc::new(GlooTransport)
}

#[cfg(not(feature = "hydrate"))]
fn default_transport() -> Arc<dyn Transport> {
    Arc::new(ServerTransport)
}

#[cfg(feature = "hydrate")]
fn default_store() -> Arc<dyn KeyValueStore> {
    Arc::new(crate::util::storage::LocalStore)
}

#[cfg(not(feature = "hydrate"))]
fn default_store() -> Arc<dyn KeyValueStore> {
    Arc::new(api_client::storage::MemoryStore::new())
}

/// Transport used while rendering on the server.
#[cfg(any(test, not(feature = "hydrate")))]
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerTransport;

#[cfg(any(test, not(feature = "hydrate")))]
#[async_trait::async_trait(?Send)]
impl Transport for ServerTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use api_client::ApiError;
    use api_client::transport::{Body, FormValue, HttpRequest, HttpResponse, Method, Transport};
    use futures::future::{Either, select};
    use gloo_net::http::RequestBuilder;

    /// `fetch`-backed transport.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct GlooTransport;

    fn method(method: Method) -> gloo_net::http::Method {
        match method {
            Method::Get => gloo_net::http::Method::GET,
            Method::Post => gloo_net::http::Method::POST,
            Method::Put => gloo_net::http::Method::PUT,
            Method::Patch => gloo_net::http::Method::PATCH,
            Method::Delete => gloo_net::http::Method::DELETE,
        }
    }

    fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
        ApiError::Encode(format!("{value:?}"))
    }

    fn form_data(fields: Vec<(String, FormValue)>) -> Result<web_sys::FormData, ApiError> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        for (name, value) in fields {
            match value {
                FormValue::Text(text) => form.append_with_str(&name, &text).map_err(js_error)?,
                FormValue::File { file_name, content_type, bytes } => {
                    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
                    let options = web_sys::BlobPropertyBag::new();
                    options.set_type(&content_type);
                    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
                        .map_err(js_error)?;
                    form.append_with_blob_and_filename(&name, &blob, &file_name)
                        .map_err(js_error)?;
                }
            }
        }
        Ok(form)
    }

    #[async_trait::async_trait(?Send)]
    impl Transport for GlooTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let HttpRequest { method: verb, url, headers, body, timeout } = request;
            let controller = web_sys::AbortController::new().ok();
            let signal = controller.as_ref().map(web_sys::AbortController::signal);

            let mut builder = RequestBuilder::new(&url)
                .method(method(verb))
                .abort_signal(signal.as_ref());
            for (name, value) in &headers {
                builder = builder.header(name, value);
            }
            let prepared = match body {
                Body::Empty => builder.build(),
                Body::Json(json) => builder.header("Content-Type", "application/json").body(json),
                // The browser sets the multipart boundary header itself.
                Body::Multipart(fields) => builder.body(form_data(fields)?),
            }
            .map_err(|e| ApiError::Encode(e.to_string()))?;

            let exchange = async move {
                let response = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
                let status = response.status();
                let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
                Ok::<_, ApiError>(HttpResponse { status, body })
            };
            let deadline = gloo_timers::future::sleep(timeout);
            futures::pin_mut!(exchange);
            futures::pin_mut!(deadline);

            match select(exchange, deadline).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => {
                    if let Some(controller) = controller {
                        controller.abort();
                    }
                    log::warn!("request to {url} timed out after {}s", timeout.as_secs());
                    Err(ApiError::Timeout(timeout))
                }
            }
        }
    }
}
