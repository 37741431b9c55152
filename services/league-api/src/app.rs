//! Route table.
//!
//! Each route stands in for one of the host platform's lifecycle hooks:
//! the preview endpoint, the sharing-metadata head hook, and the admin list
//! filter and bulk-edit actions.

use axum::{
    extract::Extension,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Head-to-head preview image
        .route("/head-to-head", get(handlers::head_to_head_handler))
        // Sharing metadata
        .route("/events/:id/meta", get(handlers::event_meta_handler))
        // Admin API
        .route("/api/events", get(handlers::events_handler))
        .route(
            "/api/events/:id/officials",
            get(handlers::get_officials_handler).put(handlers::put_officials_handler),
        )
        .route(
            "/api/officials/directory",
            get(handlers::officials_directory_handler),
        )
        // Health check
        .route("/health", get(handlers::health_handler))
        // Metrics
        .route("/metrics", get(handlers::metrics_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
