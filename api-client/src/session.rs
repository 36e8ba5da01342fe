//! Authentication session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionController`] exists per app (browser tab or CLI process). It is
//! the only owner of the in-memory user; views observe it through
//! [`SessionController::subscribe`] and never read storage directly.
//!
//! ```text
//! Uninitialized -> Checking -> Authenticated(user)
//!                          \-> Anonymous
//! Authenticated --sign_out / 401--> Anonymous
//! ```
//!
//! CONCURRENCY
//! ===========
//! Every transition bumps a generation counter. Async work captures the
//! generation it started under and drops its result if the counter moved, so a
//! sign-out or re-login during a background revalidation, profile save, or
//! token rotation is never overwritten by the stale response. Storage writes
//! for those calls happen here, behind the same check, never in the resource
//! methods.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{AuthResponse, Credentials, ProfileUpdate, Registration, User, UserType};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Checking,
    Authenticated(User),
    Anonymous,
}

impl SessionState {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Still deciding whether a session exists.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Uninitialized | Self::Checking)
    }
}

/// What a background revalidation did to the session.
#[derive(Clone, Debug, PartialEq)]
pub enum RevalidationOutcome {
    /// Fresh profile applied to memory and storage.
    Refreshed(User),
    /// Backend rejected the token that was checked.
    Expired,
    /// Transient failure; the optimistic session was left intact.
    Kept(ApiError),
    /// The session changed while the request was in flight; result ignored.
    Superseded,
}

pub struct SessionController {
    api: ApiClient,
    state: watch::Sender<SessionState>,
    generation: AtomicU64,
    /// Generation that was live when the backend last rejected the token.
    expired_from: AtomicU64,
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("state", &*self.state.borrow())
            .field("generation", &self.generation())
            .finish_non_exhaustive()
    }
}

impl SessionController {
    /// Wrap `api` and subscribe to its 401 notifications.
    pub fn new(api: ApiClient) -> Arc<Self> {
        let (state, _) = watch::channel(SessionState::Uninitialized);
        let controller = Arc::new(Self {
            api,
            state,
            generation: AtomicU64::new(0),
            expired_from: AtomicU64::new(u64::MAX),
        });
        let weak = Arc::downgrade(&controller);
        controller.api.on_unauthorized(Arc::new(move || {
            if let Some(controller) = weak.upgrade() {
                controller.expire();
            }
        }));
        controller
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user().cloned()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn advance(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation() == generation
    }

    fn set(&self, next: SessionState) {
        tracing::debug!(?next, "session transition");
        self.state.send_replace(next);
    }

    /// Restore the persisted session.
    ///
    /// With a cached user the session is trusted immediately and the returned
    /// [`Revalidation`] must be spawned (or awaited) to confirm it. With only a
    /// token the profile is fetched before this returns.
    pub async fn initialize(self: &Arc<Self>) -> Option<Revalidation> {
        let generation = self.advance();
        self.set(SessionState::Checking);
        let store = self.api.session_store();

        match (store.token(), store.user()) {
            (Some(_), Some(user)) => {
                tracing::debug!(email = %user.email, "restoring cached session optimistically");
                self.set(SessionState::Authenticated(user));
                Some(Revalidation { controller: Arc::clone(self), generation })
            }
            (Some(_), None) => {
                let result = self.api.profile().await;
                if !self.is_current(generation) {
                    return None;
                }
                match result {
                    Ok(user) => {
                        store.save_user(&user);
                        self.set(SessionState::Authenticated(user));
                    }
                    Err(e) => {
                        tracing::info!(error = %e, "stored token could not be verified");
                        store.clear();
                        self.set(SessionState::Anonymous);
                    }
                }
                None
            }
            (None, cached) => {
                if cached.is_some() {
                    store.clear();
                }
                self.set(SessionState::Anonymous);
                None
            }
        }
    }

    /// Sign in and return the raw response; navigation is the caller's call.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged; the session is not touched on failure.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let response = self.api.login(credentials).await?;
        self.establish(response.user.clone());
        Ok(response)
    }

    /// Register a default account and sign in with it.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged.
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        let response = self.api.register(registration).await?;
        self.establish(response.user.clone());
        Ok(response)
    }

    /// Register a role-specific account and sign in with it.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged.
    pub async fn register_by_type(
        &self,
        user_type: UserType,
        registration: &Registration,
    ) -> Result<AuthResponse, ApiError> {
        let response = self.api.register_by_type(user_type, registration).await?;
        self.establish(response.user.clone());
        Ok(response)
    }

    /// Forget the session locally. There is no server-side invalidation.
    pub fn sign_out(&self) {
        self.api.session_store().clear();
        self.advance();
        self.set(SessionState::Anonymous);
    }

    /// Backend rejected the token; storage was already cleared by the client.
    pub fn expire(&self) {
        let ended = self.advance() - 1;
        self.expired_from.store(ended, Ordering::SeqCst);
        self.set(SessionState::Anonymous);
    }

    /// Save profile changes, then cache and publish the updated user.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let generation = self.generation();
        let user = self.api.update_profile(update).await?;
        self.apply_user(generation, &user);
        Ok(user)
    }

    /// Fetch the profile now and publish it.
    ///
    /// # Errors
    ///
    /// Returns the API error; a 401 has already moved the session to anonymous.
    pub async fn refresh_user(&self) -> Result<User, ApiError> {
        let generation = self.generation();
        let user = self.api.profile().await?;
        self.apply_user(generation, &user);
        Ok(user)
    }

    /// Best-effort token rotation. The new token is stored only if the session
    /// that asked for it is still the live one.
    ///
    /// # Errors
    ///
    /// Returns the API error; a 401 has already moved the session to anonymous.
    pub async fn refresh_token(&self) -> Result<(), ApiError> {
        let generation = self.generation();
        let token = self.api.refresh_token().await?;
        if self.is_current(generation) {
            self.api.session_store().save_token(&token);
        } else {
            tracing::debug!("discarding rotated token for superseded session");
        }
        Ok(())
    }

    fn apply_user(&self, generation: u64, user: &User) {
        if !self.is_current(generation) {
            tracing::debug!("discarding profile for superseded session");
            return;
        }
        self.api.session_store().save_user(user);
        self.set(SessionState::Authenticated(user.clone()));
    }

    fn establish(&self, user: User) {
        self.advance();
        self.set(SessionState::Authenticated(user));
    }
}

/// Deferred profile check for an optimistically restored session.
#[must_use = "a revalidation does nothing until it is run"]
pub struct Revalidation {
    controller: Arc<SessionController>,
    generation: u64,
}

impl std::fmt::Debug for Revalidation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Revalidation").field("generation", &self.generation).finish()
    }
}

impl Revalidation {
    pub async fn run(self) -> RevalidationOutcome {
        let controller = self.controller;
        let result = controller.api.profile().await;

        if matches!(result, Err(ApiError::Unauthorized))
            && controller.expired_from.load(Ordering::SeqCst) == self.generation
        {
            tracing::info!("cached session rejected during revalidation");
            return RevalidationOutcome::Expired;
        }
        if !controller.is_current(self.generation) {
            tracing::debug!("discarding revalidation result for superseded session");
            return RevalidationOutcome::Superseded;
        }
        match result {
            Ok(user) => {
                controller.api.session_store().save_user(&user);
                controller.set(SessionState::Authenticated(user.clone()));
                RevalidationOutcome::Refreshed(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "profile revalidation failed; keeping cached session");
                RevalidationOutcome::Kept(e)
            }
        }
    }
}
