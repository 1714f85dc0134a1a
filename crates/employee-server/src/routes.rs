//! Route definitions for the preview server

use crate::config::ServerConfig;
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Liveness probe body
pub const HEALTH_BODY: &str = "OK";

/// Build the application router
///
/// `/health` answers directly. Every other path is looked up in the static
/// directory; misses fall back to `index.html` so the client-side router can
/// resolve the URL.
pub fn build_router(config: &ServerConfig) -> Router {
    let spa = ServeDir::new(&config.static_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(spa)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
}

/// Basic health check endpoint for monitoring systems
async fn health_check() -> &'static str {
    HEALTH_BODY
}
