//! `/mascotas-perdidas/*` endpoints.

#[cfg(test)]
#[path = "lost_pets_test.rs"]
mod lost_pets_test;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Method;
use crate::types::{GeoPoint, LostPetReport, NewLostPetReport};

pub const DEFAULT_RADIUS_KM: f64 = 10.0;

impl ApiClient {
    /// `GET /mascotas-perdidas?lat=&lng=&radio=`: open reports within
    /// `radius_km` of `center`.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn lost_pets_near(&self, center: GeoPoint, radius_km: f64) -> Result<Vec<LostPetReport>, ApiError> {
        let query = [
            ("lat", center.lat.to_string()),
            ("lng", center.lng.to_string()),
            ("radio", radius_km.to_string()),
        ];
        self.get_with_query(&["mascotas-perdidas"], &query).await
    }

    /// `POST /mascotas-perdidas`. The location must already be geocoded.
    ///
    /// # Errors
    ///
    /// Returns the backend's validation error or a transport error.
    pub async fn report_lost_pet(&self, report: &NewLostPetReport) -> Result<LostPetReport, ApiError> {
        self.send_json(Method::Post, &["mascotas-perdidas"], report).await
    }

    /// `PUT /mascotas-perdidas/:id/encontrada`.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn mark_lost_pet_found(&self, id: &str) -> Result<LostPetReport, ApiError> {
        self.send_empty(Method::Put, &["mascotas-perdidas", id, "encontrada"]).await
    }
}
