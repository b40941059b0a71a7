//! v1 API route table.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, ApiState};

/// Build the v1 API router.
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // Answers
        .route("/ask", post(handlers::ask))
        .route("/lookup", post(handlers::lookup))
        .route("/context", post(handlers::context))
        // Retrieval
        .route("/retrieve", get(handlers::retrieve))
        .route("/search", post(handlers::search))
        // Corpus
        .route("/documents", post(handlers::add_document))
        .route("/documents/:id", get(handlers::get_document))
        .route("/documents/:id/summary", get(handlers::document_summary))
        .route("/stats", get(handlers::stats))
        // Reference data
        .route("/regulations", get(handlers::regulations))
        .route("/trends", get(handlers::trends))
        // Config
        .route("/config/validate", post(handlers::validate_config))
        .with_state(state)
}
