//! Client-style router: route table + guard + redirect following.
//!
//! ARCHITECTURE
//! ============
//! A `Navigator` owns the route table and a handle to the session store it
//! was constructed with. Each `navigate` call resolves the path, runs the
//! guard against a fresh session snapshot, and re-enters navigation when the
//! guard (or the unmatched fallback) redirects, the same way a browser router
//! restarts the transition on `next('/login')`.
//!
//! ERROR HANDLING
//! ==============
//! The guard cannot fail. The only failure is a redirect cycle, which needs
//! a misconfigured table (e.g. a login route that itself requires auth).

pub mod guard;
pub mod table;

use tracing::{debug, error};

use crate::state::SessionStore;

use self::guard::Decision;
use self::table::{Access, LOGIN_PATH, Resolution, RouteEntry, RouteTable, UnmatchedPolicy, View};

/// Redirect hops followed before a navigation is declared a loop.
pub const MAX_REDIRECTS: usize = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("redirect loop navigating to {path} ({hops} hops)")]
    RedirectLoop { path: String, hops: usize },
}

/// Where a navigation attempt finally landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Path originally asked for.
    pub requested: String,
    /// Entry that will be rendered.
    pub resolved: RouteEntry,
    /// Set when at least one redirect happened.
    pub redirected_from: Option<String>,
}

impl Navigation {
    #[must_use]
    pub fn was_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }
}

pub struct Navigator {
    session: SessionStore,
    table: RouteTable,
    unmatched: UnmatchedPolicy,
}

impl Navigator {
    #[must_use]
    pub fn new(session: SessionStore, table: RouteTable, unmatched: UnmatchedPolicy) -> Self {
        Self { session, table, unmatched }
    }

    /// Run one navigation attempt to completion.
    ///
    /// # Errors
    ///
    /// Returns `RedirectLoop` if redirects do not settle within `MAX_REDIRECTS` hops.
    pub fn navigate(&self, path: &str) -> Result<Navigation, NavigationError> {
        let mut current = path.to_owned();

        for hop in 0..=MAX_REDIRECTS {
            match self.step(&current) {
                Step::Land(resolved) => {
                    let redirected_from = (hop > 0).then(|| path.to_owned());
                    return Ok(Navigation { requested: path.to_owned(), resolved, redirected_from });
                }
                Step::Redirect(to) => {
                    debug!(from = %current, %to, "navigation redirected");
                    current = to.to_owned();
                }
            }
        }

        error!(path, hops = MAX_REDIRECTS, "navigation redirect loop");
        Err(NavigationError::RedirectLoop { path: path.to_owned(), hops: MAX_REDIRECTS })
    }

    fn step(&self, path: &str) -> Step {
        let entry = match self.table.resolve(path) {
            Resolution::Matched(entry) => entry,
            Resolution::Unmatched => {
                return match self.unmatched {
                    UnmatchedPolicy::Login => Step::Redirect(LOGIN_PATH),
                    UnmatchedPolicy::NotFound => Step::Land(RouteEntry::new(path, View::NotFound, Access::Public)),
                };
            }
        };

        let decision = guard::evaluate(entry, &self.session.snapshot());
        debug!(path, access = ?entry.access, ?decision, "guard evaluated");
        match decision {
            Decision::Proceed => Step::Land(entry.clone()),
            Decision::Redirect { to } => Step::Redirect(to),
        }
    }
}

enum Step {
    Land(RouteEntry),
    Redirect(&'static str),
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
