//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! API endpoints live under `/api` and are never guarded. Every other GET is
//! a page navigation: the fallback handler hands the path to the navigator
//! and either renders the landed view or answers with a redirect.

pub mod backend;
pub mod pages;
pub mod session;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/session",
            get(session::current)
                .post(session::login)
                .delete(session::logout),
        )
        .route("/api/{service}", get(backend::greet))
        .layer(cors)
}

/// Full application router: API routes, health check, guarded pages.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api_routes())
        .route("/healthz", get(healthz))
        .fallback(pages::navigate)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
