//! Router configuration for the HTTP API.
//!
//! This module sets up the routes and middleware (CORS, tracing) and
//! creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::cors;
use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/api/message",
            get(handlers::list_messages).post(handlers::create_message),
        )
        .layer(TraceLayer::new_for_http())
        // Outermost: the access policy applies before routing
        .layer(cors::cors_layer())
        .with_state(state)
}
