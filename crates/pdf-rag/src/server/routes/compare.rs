//! Compare endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{CompareRequest, CompareResponse};

/// POST /api/compare - similarity between the best matches of two queries.
/// Either query matching nothing yields a 404 not-found response.
pub async fn compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>> {
    let response = state.engine().compare(&request).await?;
    Ok(Json(response))
}
