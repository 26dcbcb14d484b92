//! HTTP handlers for profitability estimates

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::handlers::crops::resolve_crop;
use crate::models::{ProfitabilityInput, ProfitabilityReport};
use crate::services::profitability::ProfitabilityDefaults;
use crate::AppState;

/// Estimate profitability of a scenario
pub async fn estimate_profitability(
    State(state): State<AppState>,
    Json(input): Json<ProfitabilityInput>,
) -> AppResult<Json<ProfitabilityReport>> {
    let report = state.profitability.estimate(&input)?;
    Ok(Json(report))
}

/// Default scenario for a crop, priced from its current quote
pub async fn get_profitability_defaults(
    State(state): State<AppState>,
    Path(crop): Path<String>,
) -> AppResult<Json<ProfitabilityDefaults>> {
    let profile = resolve_crop(&crop)?;
    let quote = state.market.current_quote(&profile).await;
    Ok(Json(state.profitability.defaults_for(&profile, quote)))
}
