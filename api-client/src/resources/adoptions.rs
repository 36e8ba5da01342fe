//! `/solicitudes/*` endpoints. Status transitions are decided server-side; the
//! client only asks for them and reflects what comes back.

#[cfg(test)]
#[path = "adoptions_test.rs"]
mod adoptions_test;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Method;
use crate::types::{AdoptionApplication, AdoptionRequest, RequestStatus};

impl ApiClient {
    /// `GET /solicitudes`: requests filed by the signed-in applicant.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn my_adoption_requests(&self) -> Result<Vec<AdoptionRequest>, ApiError> {
        self.get(&["solicitudes"]).await
    }

    /// `GET /solicitudes/recibidas`: requests for pets owned by the shelter.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn received_adoption_requests(&self) -> Result<Vec<AdoptionRequest>, ApiError> {
        self.get(&["solicitudes", "recibidas"]).await
    }

    /// `GET /solicitudes/:id`.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn get_adoption_request(&self, id: &str) -> Result<AdoptionRequest, ApiError> {
        self.get(&["solicitudes", id]).await
    }

    /// `POST /solicitudes`.
    ///
    /// # Errors
    ///
    /// Returns the backend's validation error (duplicate request, pet no longer
    /// available) or a transport error.
    pub async fn create_adoption_request(
        &self,
        application: &AdoptionApplication,
    ) -> Result<AdoptionRequest, ApiError> {
        self.send_json(Method::Post, &["solicitudes"], application).await
    }

    /// `PUT /solicitudes/:id/estado`.
    ///
    /// # Errors
    ///
    /// Returns the backend's status error when the transition is not allowed.
    pub async fn set_adoption_status(&self, id: &str, status: RequestStatus) -> Result<AdoptionRequest, ApiError> {
        let body = serde_json::json!({ "estado": status });
        self.send_json(Method::Put, &["solicitudes", id, "estado"], &body).await
    }

    /// `DELETE /solicitudes/:id`: the applicant withdraws an open request.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn cancel_adoption_request(&self, id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self.send_empty(Method::Delete, &["solicitudes", id]).await?;
        Ok(())
    }
}
