//! Shared application state.
//!
//! DESIGN
//! ======
//! The session is the only mutable state in the process: a single optional
//! user. `SessionStore` wraps it in `Arc<RwLock<..>>` and is handed to every
//! consumer explicitly (navigator, HTTP handlers) instead of living in a
//! global. `AppState` bundles the store with the navigator for Axum's `State`
//! extractor.

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AppConfig;
use crate::router::Navigator;
use crate::router::table::RouteTable;

// =============================================================================
// SESSION
// =============================================================================

/// The authenticated user: whatever JSON value the login action was given.
/// Accepted as-is; no validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(pub Value);

impl User {
    #[cfg(test)]
    pub(crate) fn new(id: u64) -> Self {
        Self(serde_json::json!({ "id": id }))
    }

    /// `id` field when the user is an object.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// `name` field when the user is an object holding a string there.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// `null`, `false`, `0` and `""` count as no user, like the store's
    /// `!state.user` check.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl From<Value> for User {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// In-memory authentication record. A truthy `user` means authenticated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Session {
    pub user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_truthy)
    }
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// Handle to the process-wide session. Cloning shares the same session.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
}

impl SessionStore {
    /// Create a store with no user.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current user.
    pub fn set_user(&self, user: User) {
        let mut session = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        session.user = Some(user);
    }

    /// Drop the current user, if any.
    pub fn clear_user(&self) {
        let mut session = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        session.user = None;
    }

    /// Copy of the session as it is right now.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.snapshot().user
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub navigator: Arc<Navigator>,
}

impl AppState {
    /// Build state around an existing session with the default route table.
    #[must_use]
    pub fn new(config: AppConfig, session: SessionStore) -> Self {
        Self::with_table(config, session, RouteTable::default())
    }

    /// Build state around an existing session; the navigator reads the same store.
    #[must_use]
    pub fn with_table(config: AppConfig, session: SessionStore, table: RouteTable) -> Self {
        let navigator = Navigator::new(session.clone(), table, config.unmatched);
        Self { session, navigator: Arc::new(navigator) }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
