//! Session actions: login and logout.
//!
//! Thin wrappers over the store mutations. They are the only callers that
//! change the session outside tests, so every auth transition is logged here.

use tracing::info;

use crate::state::{SessionStore, User};

/// Mark `user` as the authenticated user.
pub fn login(store: &SessionStore, user: User) {
    info!(user_id = ?user.id(), "session login");
    store.set_user(user);
}

/// Drop the authenticated user. Logging out while signed out is a no-op.
pub fn logout(store: &SessionStore) {
    match store.user() {
        Some(user) => info!(user_id = ?user.id(), "session logout"),
        None => info!("session logout without user"),
    }
    store.clear_user();
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
