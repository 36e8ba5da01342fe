//! `/auth/*` endpoints. Login and registration persist the returned token and
//! user before handing the response back.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Method;
use crate::types::{
    AuthResponse, Credentials, PasswordChange, PasswordReset, ProfileEnvelope, ProfileUpdate, Registration,
    TokenResponse, User, UserType,
};

impl ApiClient {
    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the backend's status error (bad credentials) or a transport error.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.send_json(Method::Post, &["auth", "login"], credentials).await?;
        self.session_store().save(&response.token, &response.user);
        Ok(response)
    }

    /// `POST /auth/register`, creating a default `usuario` account.
    ///
    /// # Errors
    ///
    /// Returns the backend's validation error or a transport error.
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.send_json(Method::Post, &["auth", "register"], registration).await?;
        self.session_store().save(&response.token, &response.user);
        Ok(response)
    }

    /// `POST /auth/register/:userType` for role-specific sign-up.
    ///
    /// # Errors
    ///
    /// Returns the backend's validation error or a transport error.
    pub async fn register_by_type(
        &self,
        user_type: UserType,
        registration: &Registration,
    ) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .send_json(Method::Post, &["auth", "register", user_type.as_str()], registration)
            .await?;
        self.session_store().save(&response.token, &response.user);
        Ok(response)
    }

    /// `GET /auth/profile`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when the token is rejected.
    pub async fn profile(&self) -> Result<User, ApiError> {
        let envelope: ProfileEnvelope = self.get(&["auth", "profile"]).await?;
        Ok(envelope.into())
    }

    /// `PUT /auth/profile`. Persisting the returned user is left to
    /// [`crate::SessionController::update_profile`].
    ///
    /// # Errors
    ///
    /// Returns the backend's validation error or a transport error.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let envelope: ProfileEnvelope = self.send_json(Method::Put, &["auth", "profile"], update).await?;
        Ok(User::from(envelope))
    }

    /// `PUT /auth/change-password`.
    ///
    /// # Errors
    ///
    /// Returns the backend's status error (wrong current password) or a transport error.
    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        let _: serde_json::Value = self.send_json(Method::Put, &["auth", "change-password"], change).await?;
        Ok(())
    }

    /// `POST /auth/forgot-password`, asking the backend to email a reset link.
    ///
    /// # Errors
    ///
    /// Returns the backend's status error or a transport error.
    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "email": email });
        let _: serde_json::Value = self.send_json(Method::Post, &["auth", "forgot-password"], &body).await?;
        Ok(())
    }

    /// `POST /auth/reset-password`.
    ///
    /// # Errors
    ///
    /// Returns the backend's status error (expired token) or a transport error.
    pub async fn reset_password(&self, reset: &PasswordReset) -> Result<(), ApiError> {
        let _: serde_json::Value = self.send_json(Method::Post, &["auth", "reset-password"], reset).await?;
        Ok(())
    }

    /// `POST /auth/refresh`, returning the rotated token without storing it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when the current token is rejected.
    pub async fn refresh_token(&self) -> Result<String, ApiError> {
        let response: TokenResponse = self.send_empty(Method::Post, &["auth", "refresh"]).await?;
        Ok(response.token)
    }
}
