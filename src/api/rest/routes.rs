//! # REST Routes
//!
//! Router assembly for the REST API.

use crate::api::rest::handlers::{AppState, health, list_top_products};
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Creates the REST router.
///
/// # Routes
///
/// - `GET /categories/{category}/products`
/// - `GET /health`
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/categories/{category}/products", get(list_top_products))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
