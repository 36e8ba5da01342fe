//! `/admin/*` endpoints backing the role dashboards.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{DashboardStats, User};

impl ApiClient {
    /// `GET /admin/estadisticas`. Shelters get figures scoped to their pets.
    ///
    /// # Errors
    ///
    /// Returns a status error (403 for plain users) or a transport error.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get(&["admin", "estadisticas"]).await
    }

    /// `GET /admin/usuarios`.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get(&["admin", "usuarios"]).await
    }
}
