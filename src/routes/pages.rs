//! Page navigation: the guarded fallback for every non-API path.

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::router::NavigationError;
use crate::router::table::View;
use crate::state::AppState;
use crate::views;

pub(crate) fn navigation_error_to_status(err: &NavigationError) -> StatusCode {
    match err {
        NavigationError::RedirectLoop { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET <any page path>` — run the navigator, render or redirect.
pub async fn navigate(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let navigation = match state.navigator.navigate(uri.path()) {
        Ok(navigation) => navigation,
        Err(e) => {
            tracing::error!(error = %e, path = uri.path(), "navigation failed");
            return navigation_error_to_status(&e).into_response();
        }
    };

    if navigation.was_redirected() {
        tracing::debug!(requested = %navigation.requested, to = %navigation.resolved.path, "page redirect");
        return Redirect::temporary(&navigation.resolved.path).into_response();
    }

    let html = Html(views::render(navigation.resolved.view, &state.session.snapshot()));
    if navigation.resolved.view == View::NotFound {
        return (StatusCode::NOT_FOUND, html).into_response();
    }
    html.into_response()
}
