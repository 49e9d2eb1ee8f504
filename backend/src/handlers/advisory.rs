//! HTTP handler for the advisory endpoint

use axum::{extract::State, Json};
use shared::{AdvisoryReport, AdvisoryRequest};

use crate::error::AppResult;
use crate::AppState;

/// Produce a gardening recommendation for one location/date pair
pub async fn ai_recommendation(
    State(state): State<AppState>,
    Json(request): Json<AdvisoryRequest>,
) -> AppResult<Json<AdvisoryReport>> {
    let report = state.advisory.handle(request).await?;
    Ok(Json(report))
}
