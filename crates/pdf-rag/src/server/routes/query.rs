//! Query endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{QueryRequest, QueryResponse};

/// POST /api/query - answer a question from the indexed fragments.
///
/// An empty search result maps to a 404 `not_found` payload via
/// `Error::NoRelevantContent`; the handler never fabricates an answer.
pub async fn query_rag(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>> {
    let response = state.engine().answer(&request).await?;
    Ok(Json(response))
}
