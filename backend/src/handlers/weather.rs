//! HTTP handlers for weather monitoring

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::models::WeatherInsight;
use crate::AppState;

/// Query parameters for current weather
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub location: String,
}

/// Current weather with crop-care advisories
pub async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherInsight>> {
    let insight = state.weather.current_insight(&query.location).await?;
    Ok(Json(insight))
}
