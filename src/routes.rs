use crate::handlers::{self, AppState};
use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Largest accepted request body. Form payloads are a few kilobytes.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Session and reference endpoints under `/api/v1`.
///
/// Returned without rate limiting so callers can add their own layers.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/v1/sessions", post(handlers::create_session))
        .route("/api/v1/sessions/:id", get(handlers::get_session))
        .route("/api/v1/sessions/:id/fields", patch(handlers::update_fields))
        .route("/api/v1/sessions/:id/reset", post(handlers::reset_session))
        .route("/api/v1/sessions/:id/prefill", post(handlers::prefill_session))
        .route("/api/v1/sessions/:id/score", post(handlers::score_session))
        .route(
            "/api/v1/reference/features",
            get(handlers::reference_features),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}

/// Final application: health check, the given API routes, tracing and CORS.
pub fn build_app(state: Arc<AppState>, api: Router<Arc<AppState>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Application with unlimited API routes.
pub fn app(state: Arc<AppState>) -> Router {
    build_app(state, api_routes())
}
