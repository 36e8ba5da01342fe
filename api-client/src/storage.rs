//! Persisted auth state (token + cached user).
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser backs [`KeyValueStore`] with `localStorage`, the CLI with a JSON
//! file, tests and SSR with [`MemoryStore`]. Only [`SessionStore`] knows the
//! key names; nothing else reads them directly.
//!
//! TRADE-OFFS
//! ==========
//! Writes are best-effort and last-write-wins. There is no cross-tab
//! notification, so a sign-out in one tab is only noticed by another tab on
//! its next 401.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::types::User;

pub const TOKEN_KEY: &str = "huellitas:token";
pub const USER_KEY: &str = "huellitas:user";

/// String key/value persistence.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store for tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Typed view over the token and user keys.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("has_token", &self.token().is_some())
            .finish()
    }
}

impl SessionStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    /// Stored bearer token, ignoring blank values.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.get(TOKEN_KEY).filter(|token| !token.trim().is_empty())
    }

    /// Cached user. Unparseable JSON is treated as absent.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        let raw = self.inner.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable cached user");
                None
            }
        }
    }

    pub fn save(&self, token: &str, user: &User) {
        self.inner.set(TOKEN_KEY, token);
        self.save_user(user);
    }

    pub fn save_token(&self, token: &str) {
        self.inner.set(TOKEN_KEY, token);
    }

    pub fn save_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => self.inner.set(USER_KEY, &raw),
            Err(e) => tracing::warn!(error = %e, "failed to serialize user for cache"),
        }
    }

    pub fn clear(&self) {
        self.inner.remove(TOKEN_KEY);
        self.inner.remove(USER_KEY);
    }
}
