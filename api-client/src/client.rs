//! Core request pipeline shared by every resource module.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resource methods (`resources::*`) describe an endpoint as path segments plus
//! an optional body; [`ApiClient`] turns that into an [`HttpRequest`], attaches
//! the bearer token, runs it through the transport and maps the status.
//!
//! ERROR HANDLING
//! ==============
//! A 401 on a request that carried a token means that session is dead: if the
//! token is still the stored one, persisted auth state is cleared and every
//! registered unauthorized hook fires (the browser navigates to `/login`, the
//! session controller drops to anonymous).
//! A 401 on an anonymous request (bad credentials on login) is an ordinary
//! status error carrying the backend message.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::storage::{KeyValueStore, SessionStore};
use crate::transport::{Body, FormValue, HttpRequest, Method, Transport};

/// Callback fired after a 401 has cleared the persisted session.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Handle to the REST backend. Cheap to clone; clones share hooks and storage.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    store: SessionStore,
    base_url: String,
    timeout: Duration,
    hooks: Arc<Mutex<Vec<UnauthorizedHook>>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: &ClientConfig, transport: Arc<dyn Transport>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            transport,
            store: SessionStore::new(store),
            base_url: config.api_base_url.clone(),
            timeout: config.request_timeout,
            hooks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn session_store(&self) -> &SessionStore {
        &self.store
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Register a callback for session-killing 401 responses.
    pub fn on_unauthorized(&self, hook: UnauthorizedHook) {
        if let Ok(mut hooks) = self.hooks.lock() {
            hooks.push(hook);
        }
    }

    /// Absolute URL for `segments` below the base URL, each segment
    /// percent-encoded, plus `query` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the base URL cannot carry a path.
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<String, ApiError> {
        let mut url = url::Url::parse(&self.base_url).map_err(|e| ApiError::Encode(e.to_string()))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ApiError::Encode(format!("base URL cannot have a path: {}", self.base_url)))?;
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url.into())
    }

    // =========================================================================
    // VERBS
    // =========================================================================

    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        self.get_with_query(segments, &[]).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments, query)?;
        let body = self.execute(Method::Get, url, Body::Empty).await?;
        decode(&body)
    }

    pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        payload: &B,
    ) -> Result<T, ApiError> {
        let json = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        let url = self.endpoint(segments, &[])?;
        let body = self.execute(method, url, Body::Json(json)).await?;
        decode(&body)
    }

    pub(crate) async fn send_empty<T: DeserializeOwned>(&self, method: Method, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.endpoint(segments, &[])?;
        let body = self.execute(method, url, Body::Empty).await?;
        decode(&body)
    }

    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        fields: Vec<(String, FormValue)>,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments, &[])?;
        let body = self.execute(method, url, Body::Multipart(fields)).await?;
        decode(&body)
    }

    async fn execute(&self, method: Method, url: String, body: Body) -> Result<String, ApiError> {
        let token = self.store.token();
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if let Some(token) = &token {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        let request = HttpRequest { method, url, headers, body, timeout: self.timeout };
        tracing::debug!(method = method.as_str(), url = %request.url, "api request");

        let response = self.transport.send(request).await.inspect_err(|e| {
            tracing::warn!(method = method.as_str(), error = %e, "api request failed");
        })?;

        if response.status == 401 {
            if let Some(sent) = token {
                // A newer login may have replaced the token while this request
                // was in flight; only the rejected token's session is cleared.
                if self.store.token().as_deref() == Some(sent.as_str()) {
                    self.expire_session();
                }
                return Err(ApiError::Unauthorized);
            }
        }
        if !response.is_success() {
            let err = ApiError::from_status(response.status, &response.body);
            tracing::debug!(status = response.status, error = %err, "api error status");
            return Err(err);
        }
        Ok(response.body)
    }

    fn expire_session(&self) {
        tracing::info!("session rejected by backend; clearing persisted auth");
        self.store.clear();
        let hooks = self.hooks.lock().map(|hooks| hooks.clone()).unwrap_or_default();
        for hook in hooks {
            hook();
        }
    }
}

/// Decode a JSON body; an empty body decodes as JSON `null` so endpoints
/// answering `204 No Content` map to `()`.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}
