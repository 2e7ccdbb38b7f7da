//! Route definitions for the dashboard server

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Creates the main application router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        // Layout and callback wiring consumed by the page
        .route("/_dash-layout", get(handlers::get_layout))
        .route("/_dash-dependencies", get(handlers::get_dependencies))
        .route("/_dash-update-component", post(handlers::update_component))
        // Direct figure query
        .route("/figure", get(handlers::get_figure))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
