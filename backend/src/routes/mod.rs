//! Route definitions for the agricultural advisory server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/crops", crop_routes())
        .route("/recommendations", post(handlers::recommend_crops))
        .nest("/market", market_routes())
        .nest("/profitability", profitability_routes())
        .route("/weather", get(handlers::get_current_weather))
        .nest("/agribot", agribot_routes())
}

/// Crop catalog routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_crops))
        .route("/:crop", get(handlers::get_crop))
}

/// Market price routes
fn market_routes() -> Router<AppState> {
    Router::new()
        .route("/:crop/quote", get(handlers::get_quote))
        .route("/:crop/history", get(handlers::get_price_history))
        .route("/:crop/forecast", get(handlers::get_price_forecast))
}

/// Profitability routes
fn profitability_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::estimate_profitability))
        .route("/defaults/:crop", get(handlers::get_profitability_defaults))
}

/// Agribot routes
fn agribot_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", post(handlers::send_message))
        .route("/suggestions", get(handlers::get_suggestions))
}
