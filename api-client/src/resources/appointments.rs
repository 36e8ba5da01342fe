//! `/citas/*` endpoints.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Method;
use crate::types::{Appointment, AppointmentStatus, NewAppointment};

impl ApiClient {
    /// `GET /citas`.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get(&["citas"]).await
    }

    /// `POST /citas`.
    ///
    /// # Errors
    ///
    /// Returns the backend's validation error (slot taken) or a transport error.
    pub async fn create_appointment(&self, appointment: &NewAppointment) -> Result<Appointment, ApiError> {
        self.send_json(Method::Post, &["citas"], appointment).await
    }

    /// `PUT /citas/:id/estado`.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn set_appointment_status(&self, id: &str, status: AppointmentStatus) -> Result<Appointment, ApiError> {
        let body = serde_json::json!({ "estado": status });
        self.send_json(Method::Put, &["citas", id, "estado"], &body).await
    }
}
