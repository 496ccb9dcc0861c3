pub mod routes;

use crate::state::AppState;
use std::sync::Arc;

/// HTTP surface: one endpoint per instrument plus read-only helpers, with the
/// static front-end served as fallback.
pub fn router(state: Arc<AppState>) -> axum::Router {
    let static_dir = state.config.static_dir.clone();

    axum::Router::new()
        .route("/api/health", axum::routing::get(routes::get_health))
        .route("/api/defaults", axum::routing::get(routes::get_defaults))
        .route("/api/counters", axum::routing::get(routes::get_counters))
        .route("/api/options", axum::routing::post(routes::post_option))
        .route("/api/futures", axum::routing::post(routes::post_future))
        .route("/api/swaps", axum::routing::post(routes::post_swap))
        .fallback_service(
            tower_http::services::ServeDir::new(&static_dir)
                .fallback(tower_http::services::ServeFile::new(static_dir.join("index.html"))),
        )
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .with_state(state)
}
