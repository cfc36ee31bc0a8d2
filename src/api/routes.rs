use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Images
        .route(
            "/images",
            post(handlers::upload_image).layer(DefaultBodyLimit::disable()),
        )
        .route("/image/:id", get(handlers::get_image))
        // Links
        .route("/link", get(handlers::list_links).post(handlers::create_link))
        .route(
            "/link/:id",
            get(handlers::get_link).delete(handlers::delete_link),
        )
        // Descriptions
        .route("/description", post(handlers::create_description))
        .route(
            "/description/:id",
            get(handlers::get_description).delete(handlers::delete_description),
        )
        // Image bytes
        .route("/static/images/:name", get(handlers::serve_image))
        // Internal
        .route("/_internal/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
