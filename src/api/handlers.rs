//! API handlers - thin JSON wrappers over `RagEngine`.
//!
//! All handlers return `Response` via [`ApiResponse::ok`] or [`ApiErrorResponse`].
//! Engine calls are in-memory and never block on I/O, so they run inline.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Response;
use serde::{Deserialize, Serialize};

use super::envelope::{ApiErrorResponse, ApiResponse};
use crate::composer::{classify_intent, Intent};
use crate::config::{ConfigError, EngineConfig};
use crate::context::KnowledgeResponder;
use crate::engine::RagEngine;
use crate::error::EngineError;
use crate::types::{NewDocument, SearchFilters};

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub engine: Arc<RagEngine>,
}

impl ApiState {
    pub fn new(engine: Arc<RagEngine>) -> Self {
        Self { engine }
    }
}

// ============================================================================
// Request / response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: SearchFilters,
}

#[derive(Debug, Deserialize)]
pub struct RetrieveParams {
    #[serde(default)]
    pub query: String,
    pub top_k: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OptionalQuery {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub query: String,
    pub intent: Intent,
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub query: String,
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub responder: &'static str,
    pub documents: usize,
}

fn require_query(query: &str) -> Result<&str, Response> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(ApiErrorResponse::bad_request("query must not be empty"))
    } else {
        Ok(query)
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/health
pub async fn health(State(state): State<ApiState>) -> Response {
    let engine = &state.engine;
    ApiResponse::ok(HealthResponse {
        status: if engine.is_healthy() { "healthy" } else { "degraded" },
        responder: engine.responder_name(),
        documents: engine.stats().total_documents,
    })
}

/// POST /api/v1/ask
pub async fn ask(State(state): State<ApiState>, axum::Json(req): axum::Json<QueryRequest>) -> Response {
    let query = match require_query(&req.query) {
        Ok(q) => q,
        Err(resp) => return resp,
    };
    ApiResponse::ok(AskResponse {
        query: query.to_string(),
        intent: classify_intent(query),
        response: state.engine.compose(query),
    })
}

/// POST /api/v1/lookup
pub async fn lookup(State(state): State<ApiState>, axum::Json(req): axum::Json<QueryRequest>) -> Response {
    let query = match require_query(&req.query) {
        Ok(q) => q,
        Err(resp) => return resp,
    };
    ApiResponse::ok(LookupResponse {
        query: query.to_string(),
        response: state.engine.query_knowledge(query),
    })
}

/// POST /api/v1/context
pub async fn context(State(state): State<ApiState>, axum::Json(req): axum::Json<QueryRequest>) -> Response {
    let query = match require_query(&req.query) {
        Ok(q) => q,
        Err(resp) => return resp,
    };
    ApiResponse::ok(serde_json::json!({ "context": state.engine.build_context(query) }))
}

/// GET /api/v1/retrieve?query=...&top_k=...
pub async fn retrieve(State(state): State<ApiState>, Query(params): Query<RetrieveParams>) -> Response {
    let query = match require_query(&params.query) {
        Ok(q) => q,
        Err(resp) => return resp,
    };
    let top_k = params
        .top_k
        .unwrap_or(state.engine.config().retrieval.default_top_k);
    ApiResponse::ok(state.engine.retrieve_scored(query, top_k))
}

/// POST /api/v1/search
pub async fn search(State(state): State<ApiState>, axum::Json(req): axum::Json<SearchRequest>) -> Response {
    let query = match require_query(&req.query) {
        Ok(q) => q,
        Err(resp) => return resp,
    };
    ApiResponse::ok(state.engine.semantic_search(query, &req.filters))
}

/// POST /api/v1/documents
pub async fn add_document(
    State(state): State<ApiState>,
    axum::Json(doc): axum::Json<NewDocument>,
) -> Response {
    match state.engine.add_document(doc) {
        Ok(id) => ApiResponse::created(serde_json::json!({ "id": id })),
        Err(e) if e.is_malformed_document() => ApiErrorResponse::unprocessable(e.to_string()),
        Err(e) => ApiErrorResponse::bad_request(e.to_string()),
    }
}

/// GET /api/v1/documents/:id
pub async fn get_document(State(state): State<ApiState>, Path(id): Path<String>) -> Response {
    match state.engine.get_document(&id) {
        Some(doc) => ApiResponse::ok(doc),
        None => ApiErrorResponse::not_found(EngineError::DocumentNotFound(id).to_string()),
    }
}

/// GET /api/v1/documents/:id/summary
pub async fn document_summary(State(state): State<ApiState>, Path(id): Path<String>) -> Response {
    match state.engine.document_summary(&id) {
        Ok(summary) => ApiResponse::ok(summary),
        Err(e) => ApiErrorResponse::not_found(e.to_string()),
    }
}

/// GET /api/v1/stats
pub async fn stats(State(state): State<ApiState>) -> Response {
    ApiResponse::ok(state.engine.stats())
}

/// GET /api/v1/regulations?query=...
pub async fn regulations(State(state): State<ApiState>, Query(params): Query<OptionalQuery>) -> Response {
    ApiResponse::ok(state.engine.search_regulations(&params.query))
}

/// GET /api/v1/trends?query=...
pub async fn trends(State(state): State<ApiState>, Query(params): Query<OptionalQuery>) -> Response {
    ApiResponse::ok(state.engine.trend_analysis(&params.query))
}

/// POST /api/v1/config/validate
pub async fn validate_config(axum::Json(config): axum::Json<EngineConfig>) -> Response {
    match config.validate() {
        Ok(()) => ApiResponse::ok(serde_json::json!({
            "valid": true,
            "message": "Configuration is valid"
        })),
        Err(ConfigError::Validation(errors)) => ApiResponse::ok(serde_json::json!({
            "valid": false,
            "errors": errors
        })),
        Err(e) => ApiErrorResponse::bad_request(format!("Validation error: {e}")),
    }
}
