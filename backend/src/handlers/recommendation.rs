//! HTTP handlers for crop recommendations

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::SoilProfile;
use crate::services::recommendation::RecommendationResponse;
use crate::AppState;

/// Recommend the best crops for a soil profile
pub async fn recommend_crops(
    State(state): State<AppState>,
    Json(profile): Json<SoilProfile>,
) -> AppResult<Json<RecommendationResponse>> {
    let response = state.recommendation.recommend(profile)?;
    Ok(Json(response))
}
