//! Route table — ordered path-to-view entries with per-route access tags.
//!
//! DESIGN
//! ======
//! Matching is exact on a normalized path: query and fragment stripped,
//! percent-escapes decoded, one trailing slash ignored, ASCII case folded.
//! First match in table order wins. Anything that matches no entry falls through to the unmatched
//! policy, which the navigator applies without consulting the guard.

use std::borrow::Cow;

use serde::Serialize;

/// Path every unauthenticated or unmatched navigation is sent to.
pub const LOGIN_PATH: &str = "/login";

// =============================================================================
// TYPES
// =============================================================================

/// Access requirement attached to a route entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    /// Reachable with or without a user.
    #[default]
    Public,
    /// Reachable only while a user is present in the session.
    RequiresAuth,
}

/// Page rendered for a resolved route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Login,
    Home,
    About,
    Contact,
    /// Only produced under `UnmatchedPolicy::NotFound`.
    NotFound,
}

/// What to do with a path that matches no entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnmatchedPolicy {
    /// Redirect to `/login` regardless of the session.
    #[default]
    Login,
    /// Render the not-found view.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub path: String,
    pub view: View,
    pub access: Access,
}

impl RouteEntry {
    #[must_use]
    pub fn new(path: impl Into<String>, view: View, access: Access) -> Self {
        Self { path: path.into(), view, access }
    }

    #[must_use]
    pub fn public(path: impl Into<String>, view: View) -> Self {
        Self::new(path, view, Access::Public)
    }

    #[must_use]
    pub fn protected(path: impl Into<String>, view: View) -> Self {
        Self::new(path, view, Access::RequiresAuth)
    }
}

/// Outcome of matching a path against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Matched(&'a RouteEntry),
    Unmatched,
}

// =============================================================================
// TABLE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    #[must_use]
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Find the first entry whose path matches `path`.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        let wanted = normalize_path(path);
        self.entries
            .iter()
            .find(|entry| normalize_path(&entry.path) == wanted)
            .map_or(Resolution::Unmatched, Resolution::Matched)
    }
}

impl Default for RouteTable {
    /// `/login` is public; `/`, `/about` and `/contact` require a user.
    fn default() -> Self {
        Self::new(vec![
            RouteEntry::public(LOGIN_PATH, View::Login),
            RouteEntry::protected("/", View::Home),
            RouteEntry::protected("/about", View::About),
            RouteEntry::protected("/contact", View::Contact),
        ])
    }
}

/// Canonical form used for matching.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let raw = &path[..end];
    let decoded = urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw));
    let trimmed = decoded.trim();

    let mut out = String::with_capacity(trimmed.len() + 1);
    if !trimmed.starts_with('/') {
        out.push('/');
    }
    out.push_str(trimmed);
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out.make_ascii_lowercase();
    out
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
