//! Session routes: inspect, log in, log out.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::services::session as session_svc;
use crate::state::{AppState, User};

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: Option<User>,
    pub authenticated: bool,
}

/// `GET /api/session` — current user, if any.
pub async fn current(State(state): State<AppState>) -> Json<SessionResponse> {
    let authenticated = state.session.is_authenticated();
    Json(SessionResponse { user: state.session.user(), authenticated })
}

/// `POST /api/session` — set the session user to any JSON value.
pub async fn login(State(state): State<AppState>, Json(user): Json<User>) -> StatusCode {
    session_svc::login(&state.session, user);
    StatusCode::NO_CONTENT
}

/// `DELETE /api/session` — clear the session user.
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    session_svc::logout(&state.session);
    StatusCode::NO_CONTENT
}
