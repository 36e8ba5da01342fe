//! HTTP transport seam.
//!
//! ARCHITECTURE
//! ============
//! [`ApiClient`](crate::ApiClient) builds transport-neutral [`HttpRequest`]s and
//! interprets [`HttpResponse`]s; a [`Transport`] only moves bytes. Futures are
//! `?Send` so the browser transport (which holds JS values across awaits) can
//! implement the same trait as the native one.
//!
//! Every request carries its timeout; transports must enforce it and report
//! expiry as [`ApiError::Timeout`].

use std::time::Duration;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// One multipart field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File { file_name: String, content_type: String, bytes: Vec<u8> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    Empty,
    /// Serialized JSON text.
    Json(String),
    Multipart(Vec<(String, FormValue)>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Body,
    pub timeout: Duration,
}

impl HttpRequest {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Perform one request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Timeout`] when `request.timeout` elapses and
    /// [`ApiError::Network`] for connection-level failures. HTTP error
    /// statuses are not errors at this layer.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

// =============================================================================
// NATIVE (reqwest)
// =============================================================================

#[cfg(feature = "native")]
pub use native::ReqwestTransport;

#[cfg(feature = "native")]
mod native {
    use super::{Body, FormValue, HttpRequest, HttpResponse, Method, Transport};
    use crate::error::ApiError;

    const CONNECT_TIMEOUT_SECS: u64 = 10;

    #[derive(Clone, Debug)]
    pub struct ReqwestTransport {
        http: reqwest::Client,
    }

    impl ReqwestTransport {
        /// Build a transport with a shared connection pool.
        ///
        /// # Errors
        ///
        /// Returns [`ApiError::Network`] if the TLS backend cannot initialize.
        pub fn new() -> Result<Self, ApiError> {
            let http = reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(CONNECT_TIMEOUT_SECS))
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(Self { http })
        }
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }

    fn multipart(fields: Vec<(String, FormValue)>) -> Result<reqwest::multipart::Form, ApiError> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in fields {
            form = match value {
                FormValue::Text(text) => form.text(name, text),
                FormValue::File { file_name, content_type, bytes } => {
                    let part = reqwest::multipart::Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(&content_type)
                        .map_err(|e| ApiError::Encode(e.to_string()))?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }

    #[async_trait::async_trait(?Send)]
    impl Transport for ReqwestTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let timeout = request.timeout;
            let mut builder = self
                .http
                .request(method(request.method), &request.url)
                .timeout(timeout);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            builder = match request.body {
                Body::Empty => builder,
                Body::Json(json) => builder.header("Content-Type", "application/json").body(json),
                Body::Multipart(fields) => builder.multipart(multipart(fields)?),
            };

            let response = builder.send().await.map_err(|e| {
                if e.is_timeout() { ApiError::Timeout(timeout) } else { ApiError::Network(e.to_string()) }
            })?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| {
                if e.is_timeout() { ApiError::Timeout(timeout) } else { ApiError::Network(e.to_string()) }
            })?;
            Ok(HttpResponse { status, body })
        }
    }
}
