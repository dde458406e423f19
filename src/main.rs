mod config;
mod router;
mod routes;
mod services;
mod state;
mod views;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    // One session per process; the navigator and handlers share this handle.
    let session = state::SessionStore::new();
    let state = state::AppState::new(config, session);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .expect("failed to bind");

    tracing::info!(bind = %config.bind, unmatched = ?config.unmatched, "authgate listening");
    axum::serve(listener, app).await.expect("server failed");
}
