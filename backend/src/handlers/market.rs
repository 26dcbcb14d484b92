//! HTTP handlers for market prices, price history and forecasts

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use shared::{validate_history_months, DEFAULT_HISTORY_MONTHS};

use crate::error::{AppError, AppResult};
use crate::handlers::crops::resolve_crop;
use crate::models::MarketQuote;
use crate::services::market::{MarketService, PriceOutlook};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub months: Option<usize>,
    pub format: Option<String>, // "json" or "csv"
}

/// Current market quote, live or simulated
pub async fn get_quote(
    State(state): State<AppState>,
    Path(crop): Path<String>,
) -> AppResult<Json<MarketQuote>> {
    let profile = resolve_crop(&crop)?;
    let quote = state.market.current_quote(&profile).await;
    Ok(Json(quote))
}

/// Generated monthly price history
pub async fn get_price_history(
    State(state): State<AppState>,
    Path(crop): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Response> {
    let profile = resolve_crop(&crop)?;
    let months = query.months.unwrap_or(DEFAULT_HISTORY_MONTHS);
    validate_history_months(months).map_err(|e| AppError::invalid("months", e))?;

    let history = state.market.history(&profile.name, months);

    if query.format.as_deref() == Some("csv") {
        let csv = MarketService::export_to_csv(&history)?;
        let disposition = format!(
            "attachment; filename=\"{}_prices.csv\"",
            profile.name.to_lowercase().replace(' ', "_")
        );
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(history).into_response())
    }
}

/// Six-month price forecast
pub async fn get_price_forecast(
    State(state): State<AppState>,
    Path(crop): Path<String>,
) -> AppResult<Json<PriceOutlook>> {
    let profile = resolve_crop(&crop)?;
    Ok(Json(state.market.outlook(&profile.name)))
}
