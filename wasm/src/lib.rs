//! WebAssembly module for the agricultural advisory platform
//!
//! Provides client-side computation for:
//! - Synthetic price history and forecasts
//! - Profitability estimates and marketing channel prices
//! - Seasonal price trends
//! - Form validation

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::pricing::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("agri-advisor module loaded"));
}

/// Price series for 1 to 120 months
fn bounded_series(crop_name: &str, months: usize) -> Result<Vec<i64>, &'static str> {
    validate_history_months(months)?;
    Ok(generate(crop_name, months))
}

/// Channel prices for a final price that converts to a bounded Decimal
fn channel_price_list(final_price: f64) -> Result<Vec<f64>, &'static str> {
    let price =
        Decimal::try_from(final_price).map_err(|_| "Final price must be a finite number")?;
    validate_final_price(price)?;
    Ok(channel_quotes(price)
        .iter()
        .map(|q| q.expected_price.to_f64().unwrap_or(0.0))
        .collect())
}

/// Monthly prices for a crop, starting January 2022
#[wasm_bindgen]
pub fn generate_prices(crop_name: &str, months: usize) -> Result<Vec<f64>, JsValue> {
    let series = bounded_series(crop_name, months).map_err(JsValue::from_str)?;
    Ok(series.into_iter().map(|p| p as f64).collect())
}

/// Labelled price history as JSON
#[wasm_bindgen]
pub fn price_history_json(crop_name: &str, months: usize) -> Result<String, JsValue> {
    let series = bounded_series(crop_name, months).map_err(JsValue::from_str)?;
    serde_json::to_string(&label_series(&series)).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Six-month forecast from the default history, as JSON
#[wasm_bindgen]
pub fn price_forecast_json(crop_name: &str) -> Result<String, JsValue> {
    let history = generate(crop_name, DEFAULT_HISTORY_MONTHS);
    let forecast = forecast_for_crop(crop_name, &history);
    serde_json::to_string(&forecast).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Profitability report for a JSON scenario
#[wasm_bindgen]
pub fn calculate_profitability(input_json: &str) -> Result<String, JsValue> {
    let input: ProfitabilityInput = serde_json::from_str(input_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid scenario JSON: {}", e)))?;
    validate_profitability_input(&input)
        .map_err(|(field, message)| JsValue::from_str(&format!("{}: {}", field, message)))?;

    let report = compute_profitability(&input);
    serde_json::to_string(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Expected price per channel (local, wholesale, direct, export)
#[wasm_bindgen]
pub fn marketing_channel_prices(final_price: f64) -> Result<Vec<f64>, JsValue> {
    channel_price_list(final_price).map_err(JsValue::from_str)
}

/// Seasonal price direction ("up", "down" or "stable")
#[wasm_bindgen]
pub fn simulated_price_trend(peak_month: u32, current_month: u32) -> String {
    seasonal_trend(peak_month, current_month).to_string()
}

/// Whether a chat prompt can be sent
#[wasm_bindgen]
pub fn is_valid_prompt(prompt: &str) -> bool {
    validate_prompt(prompt).is_ok()
}
