//! Navigation guard.
//!
//! Runs before every transition to a matched route. Pure and synchronous:
//! the only inputs are the target entry's access tag and the current session.

use crate::state::Session;

use super::table::{Access, LOGIN_PATH, RouteEntry};

/// Result of guarding a single transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Redirect { to: &'static str },
}

/// Redirect to `/login` iff the route requires auth and no user is present.
#[must_use]
pub fn evaluate(target: &RouteEntry, session: &Session) -> Decision {
    match target.access {
        Access::RequiresAuth if !session.is_authenticated() => Decision::Redirect { to: LOGIN_PATH },
        Access::RequiresAuth | Access::Public => Decision::Proceed,
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
