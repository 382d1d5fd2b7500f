//! Populate endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::indexing::run_index_pipeline;
use crate::server::state::AppState;
use crate::types::{PopulateRequest, PopulateResponse};

/// POST /api/populate - run the indexing pipeline over the data directory.
///
/// With `reset: true` the whole store is cleared first. The pipeline runs
/// sequentially within this request; a second concurrent populate is an
/// accepted race resolved by the store's put-by-key semantics.
pub async fn populate(
    State(state): State<AppState>,
    Json(request): Json<PopulateRequest>,
) -> Result<Json<PopulateResponse>> {
    let response = run_index_pipeline(
        state.config(),
        state.store().as_ref(),
        state.embedder().as_ref(),
        request.reset,
    )
    .await?;
    Ok(Json(response))
}
