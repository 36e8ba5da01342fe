//! `/favoritos/*` endpoints.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Method;
use crate::types::Pet;

impl ApiClient {
    /// `GET /favoritos`.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn favorites(&self) -> Result<Vec<Pet>, ApiError> {
        self.get(&["favoritos"]).await
    }

    /// `POST /favoritos/:petId`.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn add_favorite(&self, pet_id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self.send_empty(Method::Post, &["favoritos", pet_id]).await?;
        Ok(())
    }

    /// `DELETE /favoritos/:petId`.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn remove_favorite(&self, pet_id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self.send_empty(Method::Delete, &["favoritos", pet_id]).await?;
        Ok(())
    }
}
