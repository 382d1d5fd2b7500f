//! API routes for the RAG server

pub mod compare;
pub mod populate;
pub mod query;

use axum::{
    routing::{get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/populate", post(populate::populate))
        .route("/query", post(query::query_rag))
        .route("/compare", post(compare::compare))
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "pdf-rag",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "PDF question-answering with incremental indexing and similarity search",
        "endpoints": {
            "POST /api/populate": "Index PDFs from the data directory (body: { reset: bool })",
            "POST /api/query": "Ask a question (body: { query_text, top_k? })",
            "POST /api/compare": "Compare two queries by their best matches",
            "GET /api/info": "This endpoint catalog"
        }
    }))
}
