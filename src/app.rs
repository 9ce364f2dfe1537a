use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{meeting, shared::AppState, token};

/// Build the application router
///
/// - `POST /get_token` - access token for a room
/// - `POST /create_meeting` - register a meeting and return its code
/// - `GET /health` - liveness probe
/// - `GET /` and `/static/*` - browser client served from `static_dir`
pub fn create_app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/get_token", post(token::get_token))
        .route("/create_meeting", post(meeting::create_meeting))
        .route("/health", get(|| async { "OK" }))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
