//! folio-web
//!
//! Single-page upload form that turns a review CSV into a PDF download.
//! The binary in `main.rs` wires configuration and logging; the router lives
//! here so integration tests can drive it without a socket.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let max_upload_bytes = state.max_upload_bytes;

    Router::new()
        .route("/", get(routes::form::index))
        .route("/convert", post(routes::convert::convert))
        .route("/health", get(routes::health::health_check))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(axum_mw::from_fn(middleware::access_log::access_log))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
