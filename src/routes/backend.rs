//! Backend greeting routes.

use axum::extract::Path;
use axum::http::StatusCode;

use crate::services::backend::BackendService;

/// `GET /api/{service}` — plain-text greeting from one backend service.
pub async fn greet(Path(service): Path<String>) -> Result<&'static str, StatusCode> {
    BackendService::from_slug(&service)
        .map(BackendService::greeting)
        .ok_or(StatusCode::NOT_FOUND)
}
