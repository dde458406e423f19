//! HTML views for the routed pages.
//!
//! Views are only rendered after the navigator has landed on them, so none
//! of them check the session themselves.

use serde_json::Value;

use crate::router::table::View;
use crate::state::Session;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}nav a{margin-right:1rem}";

const LOGIN_SCRIPT: &str = r"
document.getElementById('login').addEventListener('submit', async (ev) => {
  ev.preventDefault();
  const id = Number(document.getElementById('user-id').value);
  const name = document.getElementById('user-name').value || undefined;
  const res = await fetch('/api/session', {
    method: 'POST',
    headers: { 'content-type': 'application/json' },
    body: JSON.stringify({ id, name }),
  });
  if (res.ok) window.location.href = '/';
});
";

const LOGOUT_SCRIPT: &str = r"
document.getElementById('logout').addEventListener('click', async () => {
  await fetch('/api/session', { method: 'DELETE' });
  window.location.href = '/login';
});
";

#[must_use]
pub fn title(view: View) -> &'static str {
    match view {
        View::Login => "Login",
        View::Home => "Home",
        View::About => "About",
        View::Contact => "Contact",
        View::NotFound => "Not Found",
    }
}

/// Render a full HTML document for `view`.
#[must_use]
pub fn render(view: View, session: &Session) -> String {
    let body = match view {
        View::Login => login_body(),
        View::Home => page_body(view, &greeting(session)),
        View::About => page_body(view, "About this application."),
        View::Contact => page_body(view, "Get in touch."),
        View::NotFound => page_body(view, "Nothing lives at this address."),
    };
    document(title(view), &body)
}

fn greeting(session: &Session) -> String {
    let Some(user) = session.user.as_ref() else {
        return "Welcome.".to_owned();
    };
    if let Some(name) = user.name() {
        return format!("Welcome, {}.", escape(name));
    }
    match user.id() {
        Some(Value::String(id)) => format!("Welcome, user {}.", escape(id)),
        Some(id) => format!("Welcome, user {}.", escape(&id.to_string())),
        None => "Welcome.".to_owned(),
    }
}

fn login_body() -> String {
    format!(
        r#"<h1>Login</h1>
<form id="login">
  <input id="user-id" type="number" min="0" placeholder="User id" required>
  <input id="user-name" type="text" placeholder="Name (optional)">
  <button type="submit">Sign in</button>
</form>
<script>{LOGIN_SCRIPT}</script>"#
    )
}

fn page_body(view: View, text: &str) -> String {
    format!(
        r#"<nav><a href="/">Home</a><a href="/about">About</a><a href="/contact">Contact</a><button id="logout">Log out</button></nav>
<h1>{title}</h1>
<p>{text}</p>
<script>{LOGOUT_SCRIPT}</script>"#,
        title = title(view),
    )
}

fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title}</title><style>{STYLE}</style></head>
<body>
{body}
</body>
</html>"#
    )
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "views_test.rs"]
mod tests;
