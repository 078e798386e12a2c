pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Evaluation API
        .route("/api/v1/evaluations/review", post(handlers::handle_review))
        .route("/api/v1/evaluations/match", post(handlers::handle_match))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
