//! Mapbox geocoding pass-through.
//!
//! The browser talks to Mapbox directly with the public token; nothing is
//! proxied through the Huellitas backend, and no bearer token is ever sent.

#[cfg(test)]
#[path = "geocoding_test.rs"]
mod geocoding_test;

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::transport::{Body, HttpRequest, Method, Transport};
use crate::types::GeoPoint;

pub const MAPBOX_API_URL: &str = "https://api.mapbox.com";
const GEOCODING_PATH: [&str; 3] = ["geocoding", "v5", "mapbox.places"];
const STATIC_STYLE: &str = "mapbox/streets-v12";
const RESULT_LIMIT: u32 = 5;
const MARKER_COLOR: &str = "e4572e";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GeocodeError {
    #[error("el mapa no está configurado (falta el token de Mapbox)")]
    MissingToken,
    #[error("ingresa una dirección para buscar")]
    EmptyQuery,
    #[error("no se encontró la dirección")]
    NotFound,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A geocoded place.
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub name: String,
    pub point: GeoPoint,
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    place_name: String,
    /// `[lng, lat]`.
    center: [f64; 2],
}

impl From<Feature> for Place {
    fn from(feature: Feature) -> Self {
        let [lng, lat] = feature.center;
        Self { name: feature.place_name, point: GeoPoint { lat, lng } }
    }
}

#[derive(Clone)]
pub struct Geocoder {
    transport: Arc<dyn Transport>,
    token: Option<String>,
    api_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for Geocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Geocoder")
            .field("api_url", &self.api_url)
            .field("configured", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

impl Geocoder {
    pub fn new(config: &ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            token: config.mapbox_token.clone(),
            api_url: MAPBOX_API_URL.to_owned(),
            timeout: config.request_timeout,
        }
    }

    /// Point the geocoder at another Mapbox-compatible host.
    #[must_use]
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        api_url.trim_end_matches('/').clone_into(&mut self.api_url);
        self
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    /// Forward-geocode a free-text address, best match first.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::MissingToken`] without a token,
    /// [`GeocodeError::EmptyQuery`] for blank input, or the wrapped API error.
    pub async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }
        let url = self.geocoding_url(&format!("{query}.json"))?;
        self.fetch(url).await
    }

    /// Best single match for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::NotFound`] when Mapbox has no match, otherwise
    /// as [`Geocoder::search`].
    pub async fn locate(&self, query: &str) -> Result<Place, GeocodeError> {
        self.search(query).await?.into_iter().next().ok_or(GeocodeError::NotFound)
    }

    /// Reverse-geocode a point into its nearest address.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::NotFound`] when nothing is near the point.
    pub async fn reverse(&self, point: GeoPoint) -> Result<Place, GeocodeError> {
        let url = self.geocoding_url(&format!("{},{}.json", point.lng, point.lat))?;
        self.fetch(url).await?.into_iter().next().ok_or(GeocodeError::NotFound)
    }

    /// Static map image centered on `center` with a pin per marker.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::MissingToken`] without a token.
    pub fn static_map_url(
        &self,
        center: GeoPoint,
        markers: &[GeoPoint],
        zoom: u8,
        size: (u32, u32),
    ) -> Result<String, GeocodeError> {
        let token = self.token.as_deref().ok_or(GeocodeError::MissingToken)?;
        let overlay = markers
            .iter()
            .map(|m| format!("pin-s+{MARKER_COLOR}({},{})", m.lng, m.lat))
            .collect::<Vec<_>>()
            .join(",");
        let position = format!("{},{},{zoom}", center.lng, center.lat);
        let dimensions = format!("{}x{}", size.0, size.1);
        let raw = if overlay.is_empty() {
            format!("{}/styles/v1/{STATIC_STYLE}/static/{position}/{dimensions}", self.api_url)
        } else {
            format!("{}/styles/v1/{STATIC_STYLE}/static/{overlay}/{position}/{dimensions}", self.api_url)
        };
        let mut url = url::Url::parse(&raw).map_err(|e| ApiError::Encode(e.to_string()))?;
        url.query_pairs_mut().append_pair("access_token", token);
        Ok(url.into())
    }

    fn geocoding_url(&self, last_segment: &str) -> Result<String, GeocodeError> {
        let token = self.token.as_deref().ok_or(GeocodeError::MissingToken)?;
        let mut url = url::Url::parse(&self.api_url).map_err(|e| ApiError::Encode(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Encode(format!("invalid Mapbox URL: {}", self.api_url)))?
            .pop_if_empty()
            .extend(GEOCODING_PATH)
            .push(last_segment);
        url.query_pairs_mut()
            .append_pair("access_token", token)
            .append_pair("limit", &RESULT_LIMIT.to_string())
            .append_pair("language", "es");
        Ok(url.into())
    }

    async fn fetch(&self, url: String) -> Result<Vec<Place>, GeocodeError> {
        let request = HttpRequest {
            method: Method::Get,
            url,
            headers: vec![("Accept".to_owned(), "application/json".to_owned())],
            body: Body::Empty,
            timeout: self.timeout,
        };
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            tracing::warn!(status = response.status, "geocoding request rejected");
            return Err(ApiError::from_status(response.status, &response.body).into());
        }
        let collection: FeatureCollection =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(collection.features.into_iter().map(Place::from).collect())
    }
}

impl crate::client::ApiClient {
    /// Geocoder sharing this client's transport and timeout.
    #[must_use]
    pub fn geocoder(&self, mapbox_token: Option<String>) -> Geocoder {
        Geocoder {
            transport: Arc::clone(self.transport()),
            token: mapbox_token,
            api_url: MAPBOX_API_URL.to_owned(),
            timeout: self.timeout(),
        }
    }
}
